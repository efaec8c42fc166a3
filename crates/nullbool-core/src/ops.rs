//! Three-valued boolean algebra over `NullBool`.
//!
//! Every binary operator is valid only when both operands are. Otherwise the
//! result is null `(false, false)`: unknown propagates. `NOT` flips a valid value
//! and leaves a null untouched.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::value::NullBool;

impl NullBool {
    /// Apply `f` to both values when both operands are valid, else null.
    #[inline]
    fn combine(self, other: Self, f: impl FnOnce(bool, bool) -> bool) -> Self {
        if self.valid && other.valid {
            Self::new(f(self.value, other.value), true)
        } else {
            Self::null()
        }
    }

    /// `a && b`, null if either side is null.
    pub fn and(self, other: Self) -> Self {
        self.combine(other, |a, b| a && b)
    }

    /// `a || b`, null if either side is null.
    pub fn or(self, other: Self) -> Self {
        self.combine(other, |a, b| a || b)
    }

    /// Exclusive or, null if either side is null.
    pub fn xor(self, other: Self) -> Self {
        self.combine(other, |a, b| (a || b) && !(a && b))
    }

    /// Flip the value in place if valid. A null stays exactly as it is.
    pub fn negate(&mut self) {
        if self.valid {
            self.value = !self.value;
        }
    }
}

impl BitAnd for NullBool {
    type Output = NullBool;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl BitOr for NullBool {
    type Output = NullBool;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl BitXor for NullBool {
    type Output = NullBool;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.xor(rhs)
    }
}

impl Not for NullBool {
    type Output = NullBool;

    fn not(mut self) -> Self::Output {
        self.negate();
        self
    }
}

impl BitAndAssign for NullBool {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.and(rhs);
    }
}

impl BitOrAssign for NullBool {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.or(rhs);
    }
}

impl BitXorAssign for NullBool {
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = self.xor(rhs);
    }
}
