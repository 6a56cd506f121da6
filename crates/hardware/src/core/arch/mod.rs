//! Architectural state.
//!
//! This module holds the programmer-visible state of the LS-8 other than memory and PC:
//! the general-purpose register file and the flag register.

/// Flag register written by `CMP`.
pub mod flags;

/// General-purpose register file (`R0`-`R7`).
pub mod gpr;
