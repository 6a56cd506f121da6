//! ALU logical and comparison operations.
//!
//! Implements bitwise AND, OR, XOR, complement, and the `CMP` comparison.
//! `CMP` is the only operation that produces flags rather than a register value.

use crate::core::arch::flags::Flags;

/// `a & b`
#[inline]
pub const fn and(a: u8, b: u8) -> u8 {
    a & b
}

/// `a | b`
#[inline]
pub const fn or(a: u8, b: u8) -> u8 {
    a | b
}

/// `a ^ b`
#[inline]
pub const fn xor(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Bitwise complement of `a`.
#[inline]
pub const fn not(a: u8) -> u8 {
    !a
}

/// Compares `a` with `b` (unsigned).
///
/// # Returns
///
/// [`Flags::EQUAL`], [`Flags::GREATER`], or [`Flags::LESS`].
#[inline]
pub const fn cmp(a: u8, b: u8) -> Flags {
    if a == b {
        Flags::EQUAL
    } else if a > b {
        Flags::GREATER
    } else {
        Flags::LESS
    }
}
