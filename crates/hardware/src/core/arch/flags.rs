//! Flag Register.
//!
//! Holds the condition bits written by `CMP` and read by the conditional jumps.

use crate::common::constants::{
    FLAG_EQUAL, FLAG_EQUAL_BIT, FLAG_GREATER, FLAG_GREATER_BIT, FLAG_LESS,
};

/// The flag register.
///
/// `CMP` writes exactly one of [`Flags::EQUAL`], [`Flags::GREATER`], or [`Flags::LESS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags(pub u8);

impl Flags {
    /// Operands compared equal.
    pub const EQUAL: Self = Self(FLAG_EQUAL);
    /// First operand was greater.
    pub const GREATER: Self = Self(FLAG_GREATER);
    /// First operand was less.
    pub const LESS: Self = Self(FLAG_LESS);

    /// Raw register value.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// The equal bit (bit 0).
    #[inline]
    pub const fn equal(self) -> bool {
        self.0 & FLAG_EQUAL_BIT != 0
    }

    /// The greater bit (bit 1).
    #[inline]
    pub const fn greater(self) -> bool {
        self.0 & FLAG_GREATER_BIT != 0
    }

    /// Neither equal nor greater.
    #[inline]
    pub const fn less(self) -> bool {
        !self.equal() && !self.greater()
    }
}
