//! Error types for `NullBool` decoding.

use thiserror::Error;

/// Errors that can occur while decoding a `NullBool` from structured or text input.
///
/// Construction, accessors and the boolean algebra never fail: absence is carried
/// in-band by the validity flag.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NullBoolError {
    /// Structured input held a node that is neither a bool, the
    /// `{"Bool": .., "Valid": ..}` shape, nor null. Carries the node's kind.
    #[error("cannot decode {kind} into NullBool")]
    TypeMismatch { kind: String },

    /// Text input was not one of `""`, `"null"`, `"true"` or `"false"`.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience alias used throughout nullbool-core.
pub type Result<T> = std::result::Result<T, NullBoolError>;
