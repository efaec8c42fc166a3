//! String constructors.
//!
//! Three separate entry points, each with its own caller contract and truth table:
//!
//! | input            | `from_str_strict(s, true)` | `from_str_lenient(s)` | `from_str_existence(s, true)` |
//! |------------------|----------------------------|-----------------------|-------------------------------|
//! | `""`             | null                       | valid `false`         | valid `false`                 |
//! | `"1"`, `"true"`  | valid `true`               | valid `true`          | valid `true`                  |
//! | `"True"`         | null                       | valid `true`          | valid `true`                  |
//! | `"0"`, `"false"` | valid `false`              | valid `false`         | valid `true`                  |
//! | `"yes"`          | null                       | null                  | valid `true`                  |
//!
//! The strict form is case-sensitive while the lenient form accepts the
//! lower, title and upper case spellings. Both are kept as-is since callers
//! depend on either.

use crate::value::NullBool;

impl NullBool {
    /// Parse `s` only when `requested_valid` is set, matching `"1"`/`"true"` and
    /// `"0"`/`"false"` exactly. Empty, unrecognized, or ungated input is null.
    pub fn from_str_strict(s: &str, requested_valid: bool) -> Self {
        if !requested_valid {
            return Self::null();
        }
        match s {
            "1" | "true" => Self::new(true, true),
            "0" | "false" => Self::new(false, true),
            _ => Self::null(),
        }
    }

    /// Lenient parse: the empty string is a valid `false`, `true`/`false` match in
    /// lower, title or upper case, and anything else is null.
    pub fn from_str_lenient(s: &str) -> Self {
        match s {
            "" => Self::new(false, true),
            "1" | "true" | "True" | "TRUE" => Self::new(true, true),
            "0" | "false" | "False" | "FALSE" => Self::new(false, true),
            _ => Self::null(),
        }
    }

    /// Existence check: valid `true` iff `s` is non-empty and `flag` is set.
    /// Never null.
    pub fn from_str_existence(s: &str, flag: bool) -> Self {
        Self::new(!s.is_empty() && flag, true)
    }
}
