//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 8-bit ALU used by the dispatcher. It handles arithmetic,
//! bitwise logic, shifts, and the `CMP` comparison that drives the flag register.
//! All arithmetic wraps modulo 256.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Div, Mod, Inc, Dec
//! - [`logic`]:      And, Or, Xor, Not, Cmp
//! - [`shifts`]:     Shl, Shr

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Bitwise logical and comparison operations.
pub mod logic;

/// Shift operations.
pub mod shifts;

use crate::common::ExecError;
use crate::core::arch::flags::Flags;

/// Closed set of ALU operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a * b`
    Mul,
    /// `a / b`
    Div,
    /// `a % b`
    Mod,
    /// `a + 1`
    Inc,
    /// `a - 1`
    Dec,
    /// `a & b`
    And,
    /// `a | b`
    Or,
    /// `a ^ b`
    Xor,
    /// `!a`
    Not,
    /// `a << b`
    Shl,
    /// `a >> b`
    Shr,
    /// Compare `a` with `b`, producing flags.
    Cmp,
}

/// What an ALU operation produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOutput {
    /// A value for the destination register.
    Value(u8),
    /// A new flag register (from `CMP`).
    Flags(Flags),
}

/// Arithmetic Logic Unit for 8-bit register operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// Unary operations (`Not`, `Inc`, `Dec`) ignore `b`.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand (value of the destination register)
    /// * `b`  - Second operand (value of the source register, or the shift amount)
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::DivisionByZero`] for `Div` and `Mod` when `b == 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::core::units::alu::{Alu, AluOp, AluOutput};
    ///
    /// assert_eq!(Alu::execute(AluOp::Mul, 9, 5), Ok(AluOutput::Value(45)));
    /// assert_eq!(Alu::execute(AluOp::Add, 0xFF, 2), Ok(AluOutput::Value(1)));
    /// assert_eq!(Alu::execute(AluOp::Not, 0b1010_0000, 0), Ok(AluOutput::Value(0b0101_1111)));
    /// assert!(Alu::execute(AluOp::Div, 7, 0).is_err());
    /// ```
    pub fn execute(op: AluOp, a: u8, b: u8) -> Result<AluOutput, ExecError> {
        let value = match op {
            AluOp::Add => arithmetic::add(a, b),
            AluOp::Sub => arithmetic::sub(a, b),
            AluOp::Mul => arithmetic::mul(a, b),
            AluOp::Div => arithmetic::div(a, b)?,
            AluOp::Mod => arithmetic::rem(a, b)?,
            AluOp::Inc => arithmetic::inc(a),
            AluOp::Dec => arithmetic::dec(a),
            AluOp::And => logic::and(a, b),
            AluOp::Or => logic::or(a, b),
            AluOp::Xor => logic::xor(a, b),
            AluOp::Not => logic::not(a),
            AluOp::Shl => shifts::shl(a, b),
            AluOp::Shr => shifts::shr(a, b),
            AluOp::Cmp => return Ok(AluOutput::Flags(logic::cmp(a, b))),
        };
        Ok(AluOutput::Value(value))
    }
}
