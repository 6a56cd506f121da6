//! Functional units.
//!
//! The LS-8 has a single execution unit: the 8-bit [`alu::Alu`].

/// Arithmetic Logic Unit.
pub mod alu;
