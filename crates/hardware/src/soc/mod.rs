//! Machine peripherals.
//!
//! This module groups everything the CPU talks to outside its own registers:
//! 1. **Memory:** The 256-byte address space.
//! 2. **Console:** The [`Console`] trait and its implementations.

/// Console implementations.
pub mod devices;

/// Main memory.
pub mod memory;

/// Console trait.
pub mod traits;

pub use memory::Memory;
pub use traits::Console;
