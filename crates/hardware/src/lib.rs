//! LS-8 interpreter library.
//!
//! This crate implements an interpreter for the LS-8, an 8-bit teaching instruction set
//! with 256 bytes of memory, eight registers, and a flag register:
//! 1. **Core:** Register file, flags, ALU, and the fetch-decode-execute loop.
//! 2. **ISA:** Opcode table, `AABCDDDD` bit-field decoding, and a disassembler.
//! 3. **SoC:** Bounds-checked memory and the console behind `PRN`.
//! 4. **Simulation:** Program loader, run loop, configuration, and statistics.
//!
//! # Example
//!
//! ```
//! use ls8_core::config::Config;
//! use ls8_core::sim::{ExitReason, Simulator};
//! use ls8_core::sim::loader::parse_program;
//! use ls8_core::soc::devices::CaptureConsole;
//!
//! let source = "
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ";
//!
//! let console = CaptureConsole::new();
//! let mut sim = Simulator::with_console(&Config::default(), Box::new(console.clone()));
//! sim.load_program(&parse_program(source)).unwrap();
//! assert_eq!(sim.run().unwrap(), ExitReason::Halted);
//! assert_eq!(console.text(), "8\n");
//! ```

/// Common types and constants (sizes, encoding masks, errors).
pub mod common;
/// Interpreter configuration (defaults, policies, JSON loading).
pub mod config;
/// CPU core (registers, flags, ALU, execution loop).
pub mod core;
/// Instruction set (opcodes, decode, disassembly).
pub mod isa;
/// Program loader and simulator driver.
pub mod sim;
/// Memory and console.
pub mod soc;
/// Execution statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory, flags, and stats.
pub use crate::core::Cpu;
/// Top-level run driver.
pub use crate::sim::Simulator;
