//! # nullbool-core
//!
//! A tri-state boolean bridging three domains that disagree on "no value":
//! relational NULL, JSON `false`/`null`, and free-text forms like `"1"` or `"True"`.
//!
//! [`NullBool`] pairs a `bool` with a validity flag. Its defining rule is that a
//! valid `false` and a null are indistinguishable once written: both encode as
//! `false`. The flag is treated as unset unless it is explicitly true.
//!
//! ## Quick start
//!
//! ```rust
//! use nullbool_core::NullBool;
//!
//! // Text forms, three distinct contracts
//! assert_eq!(NullBool::from_str_lenient("TRUE"), NullBool::new(true, true));
//! assert_eq!(NullBool::from_str_strict("True", true), NullBool::null());
//! assert_eq!(NullBool::from_str_existence("x", true), NullBool::new(true, true));
//!
//! // Unknown propagates through the algebra
//! let t = NullBool::from_bool(true);
//! assert_eq!(t & NullBool::null(), NullBool::null());
//! assert_eq!(t ^ NullBool::from_bool(false), t);
//!
//! // false and null write the same
//! let decoded: NullBool = serde_json::from_str("null").unwrap();
//! assert_eq!(serde_json::to_string(&decoded).unwrap(), "false");
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the `NullBool` record, constructors and accessors
//! - [`parse`] — strict, lenient and existence string constructors
//! - [`codec`] — serde/JSON and text encode/decode
//! - [`ops`] — AND, OR, XOR, NOT with null propagation
//! - [`error`] — decode error types

pub mod codec;
pub mod error;
pub mod ops;
pub mod parse;
pub mod value;

pub use error::NullBoolError;
pub use value::NullBool;
