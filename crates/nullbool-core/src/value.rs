//! The `NullBool` record and its constructors and accessors.
//!
//! A `NullBool` is an ordinary `bool` paired with a validity flag, the same pair
//! a nullable boolean database column reads into. Two rules hold everywhere:
//!
//! - When `valid` is false, `value` carries no meaning and reads as `false`.
//! - A valid `false` and a null are written out identically. The type models a
//!   flag that is "unset unless explicitly true".

/// A nullable boolean: a `value` plus a `valid` (non-null) flag.
///
/// `Default` is the null value `(false, false)`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NullBool {
    pub(crate) value: bool,
    pub(crate) valid: bool,
}

impl NullBool {
    /// Build a `NullBool` directly from both fields.
    pub const fn new(value: bool, valid: bool) -> Self {
        Self { value, valid }
    }

    /// The null value, `(false, false)`.
    pub const fn null() -> Self {
        Self::new(false, false)
    }

    /// Wrap a definite boolean. The result is always valid.
    pub const fn from_bool(value: bool) -> Self {
        Self::new(value, true)
    }

    /// Null when `value` is `None`, otherwise a valid wrapper around it.
    pub const fn from_option(value: Option<bool>) -> Self {
        match value {
            Some(b) => Self::new(b, true),
            None => Self::null(),
        }
    }

    /// Same as [`NullBool::from_option`] for a borrowed, possibly absent bool.
    pub fn from_ref(value: Option<&bool>) -> Self {
        Self::from_option(value.copied())
    }

    /// Rebuild from a raw `(value, valid)` pair as stored in a nullable column.
    ///
    /// This is the column read hook; [`NullBool::into_parts`] is the write hook.
    /// A driver that reads `Option<bool>` can use `From<Option<bool>>` instead.
    pub const fn from_parts(parts: (bool, bool)) -> Self {
        Self::new(parts.0, parts.1)
    }

    /// The raw `(value, valid)` pair, without applying the null rule.
    ///
    /// Column write hook, the counterpart of [`NullBool::from_parts`].
    pub const fn into_parts(self) -> (bool, bool) {
        (self.value, self.valid)
    }

    /// Whether the value is present (non-null).
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// The effective truth value: `true` only when valid and true.
    pub const fn get(&self) -> bool {
        self.valid && self.value
    }

    /// Set the value and mark it non-null.
    pub fn set_valid(&mut self, value: bool) {
        self.value = value;
        self.valid = true;
    }

    /// A reference to the value, or `None` when null.
    pub fn value_ref(&self) -> Option<&bool> {
        if self.valid {
            Some(&self.value)
        } else {
            None
        }
    }

    /// The value when valid, `None` when null.
    pub const fn to_option(self) -> Option<bool> {
        if self.valid {
            Some(self.value)
        } else {
            None
        }
    }

    /// True for null and for a valid `false`.
    ///
    /// Usable as `skip_serializing_if = "NullBool::is_zero"` on struct fields.
    pub const fn is_zero(&self) -> bool {
        !self.valid || !self.value
    }

    /// Copy both fields from the candidate only when `valid` is set.
    ///
    /// Merges a possibly absent external value without clobbering the receiver.
    pub fn overwrite_if_valid(&mut self, value: bool, valid: bool) {
        if valid {
            self.value = value;
            self.valid = valid;
        }
    }
}

impl From<bool> for NullBool {
    fn from(value: bool) -> Self {
        Self::from_bool(value)
    }
}

impl From<Option<bool>> for NullBool {
    fn from(value: Option<bool>) -> Self {
        Self::from_option(value)
    }
}

impl From<NullBool> for Option<bool> {
    fn from(value: NullBool) -> Self {
        value.to_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_null() {
        assert_eq!(NullBool::default(), NullBool::null());
        assert_eq!(NullBool::default().into_parts(), (false, false));
    }

    #[test]
    fn get_hides_stale_value_when_null() {
        // A meaningless stored `true` must never leak through the accessors.
        let b = NullBool::new(true, false);
        assert!(!b.get());
        assert_eq!(b.value_ref(), None);
        assert_eq!(b.to_option(), None);
        assert!(b.is_zero());
    }
}
