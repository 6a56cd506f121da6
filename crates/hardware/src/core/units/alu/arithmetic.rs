//! ALU arithmetic operations.
//!
//! Implements 8-bit addition, subtraction, multiplication, division, remainder,
//! increment, and decrement. Results wrap modulo 256. Division and remainder share
//! a single zero-divisor guard.

use crate::common::ExecError;

/// `a + b`, wrapping.
#[inline]
pub const fn add(a: u8, b: u8) -> u8 {
    a.wrapping_add(b)
}

/// `a - b`, wrapping.
#[inline]
pub const fn sub(a: u8, b: u8) -> u8 {
    a.wrapping_sub(b)
}

/// `a * b`, keeping the low 8 bits.
#[inline]
pub const fn mul(a: u8, b: u8) -> u8 {
    a.wrapping_mul(b)
}

/// Unsigned `a / b`.
///
/// # Errors
///
/// [`ExecError::DivisionByZero`] when `b == 0`.
#[inline]
pub const fn div(a: u8, b: u8) -> Result<u8, ExecError> {
    match a.checked_div(b) {
        Some(q) => Ok(q),
        None => Err(ExecError::DivisionByZero),
    }
}

/// Unsigned `a % b`.
///
/// # Errors
///
/// [`ExecError::DivisionByZero`] when `b == 0`.
#[inline]
pub const fn rem(a: u8, b: u8) -> Result<u8, ExecError> {
    match a.checked_rem(b) {
        Some(r) => Ok(r),
        None => Err(ExecError::DivisionByZero),
    }
}

/// `a + 1`, wrapping.
#[inline]
pub const fn inc(a: u8) -> u8 {
    a.wrapping_add(1)
}

/// `a - 1`, wrapping.
#[inline]
pub const fn dec(a: u8) -> u8 {
    a.wrapping_sub(1)
}
