//! CPU core.
//!
//! This module contains the processor: architectural state (registers and flags), the
//! execution unit (ALU), and the CPU that drives the fetch-decode-execute loop.

/// Architectural state (general-purpose registers, flag register).
pub mod arch;

/// CPU state and the execution loop.
pub mod cpu;

/// Functional units (ALU).
pub mod units;

pub use cpu::{Cpu, RunState, StepOutcome};
