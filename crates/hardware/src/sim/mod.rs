//! Simulation driver and program loading.
//!
//! Provides the program loader and the [`Simulator`] that runs a loaded program to
//! completion.

/// Program source parsing and file loading.
pub mod loader;

/// Run loop and limits.
pub mod simulator;

pub use simulator::{ExitReason, Simulator};
