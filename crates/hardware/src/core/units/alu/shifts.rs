//! ALU shift operations.
//!
//! Implements logical shift left and shift right on 8-bit values. The shift amount
//! is taken from a register and is not masked: shifting by 8 or more clears the value.

/// Register width in bits.
const WIDTH: u8 = 8;

/// `a << b`; zero when `b >= 8`.
#[inline]
pub const fn shl(a: u8, b: u8) -> u8 {
    if b >= WIDTH { 0 } else { a << b }
}

/// `a >> b` (logical); zero when `b >= 8`.
#[inline]
pub const fn shr(a: u8, b: u8) -> u8 {
    if b >= WIDTH { 0 } else { a >> b }
}
