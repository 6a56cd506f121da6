//! Common utilities and types used throughout the LS-8 interpreter.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the interpreter. It includes:
//! 1. **Constants:** Machine-wide sizes, encoding masks, and flag patterns.
//! 2. **Error Handling:** Memory, execution, load, and configuration error types.

/// Common constants used throughout the interpreter.
pub mod constants;

/// Error types for memory, execution, loading, and configuration.
pub mod error;

pub use constants::{MEMORY_SIZE, NUM_REGISTERS, REG_SP, STACK_TOP};
pub use error::{ConfigError, ExecError, LoadError, MemoryError};
