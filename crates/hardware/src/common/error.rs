//! Error definitions.
//!
//! This module defines every failure the interpreter can report. It provides:
//! 1. **Memory Errors:** Out-of-range accesses and oversize program images.
//! 2. **Execution Errors:** Fatal conditions raised by the fetch-decode-execute loop.
//! 3. **Load Errors:** Problems reading a program source from disk.
//! 4. **Configuration Errors:** Malformed or unreadable JSON configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of a bounds-checked memory access.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// The address lies outside `[0, MEMORY_SIZE)`.
    #[error("memory address {addr:#04x} out of range")]
    OutOfRange {
        /// The offending address.
        addr: usize,
    },

    /// A program image does not fit in memory.
    #[error("program of {len} bytes exceeds memory size of {capacity} bytes")]
    ProgramTooLarge {
        /// Length of the image in bytes.
        len: usize,
        /// Memory capacity in bytes.
        capacity: usize,
    },
}

/// Error raised while executing an instruction.
///
/// Every variant except [`ExecError::DivisionByZero`] is fatal: the run stops and the
/// machine state is left as it was at the point of failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExecError {
    /// The byte at `pc` is not an opcode of the instruction set.
    #[error("unknown instruction {opcode:#010b} at address {pc:#04x}")]
    UnknownOpcode {
        /// The raw opcode byte.
        opcode: u8,
        /// Address the opcode was fetched from.
        pc: usize,
    },

    /// An operand byte names a register outside `R0`-`R7`.
    #[error("invalid register index {index} at address {pc:#04x}")]
    InvalidRegister {
        /// The operand byte.
        index: u8,
        /// Address of the instruction.
        pc: usize,
    },

    /// A memory access failed.
    #[error(transparent)]
    Memory(#[from] MemoryError),

    /// `DIV` or `MOD` with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// A push would move the stack pointer below address zero.
    #[error("stack overflow at address {pc:#04x} (sp={sp:#04x})")]
    StackOverflow {
        /// Stack pointer before the push.
        sp: u8,
        /// Address of the instruction.
        pc: usize,
    },

    /// A pop would move the stack pointer past the top of memory.
    #[error("stack underflow at address {pc:#04x}")]
    StackUnderflow {
        /// Address of the instruction.
        pc: usize,
    },

    /// The console rejected a `PRN`.
    #[error("console output failed: {0}")]
    Console(String),

    /// A push would overwrite the loaded program.
    #[error("stack collided with program memory at {addr:#04x} (instruction at {pc:#04x})")]
    StackCollision {
        /// Address the push would have written.
        addr: u8,
        /// Address of the instruction.
        pc: usize,
    },
}

/// Error raised while reading a program source.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file does not exist.
    #[error("Couldn't find file {}", path.display())]
    NotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// The program file exists but could not be read.
    #[error("could not read {}: {source}", path.display())]
    Io {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The parsed program does not fit in memory.
    #[error(transparent)]
    TooLarge(#[from] MemoryError),
}

/// Error raised while reading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config {}: {source}", path.display())]
    Io {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration is not valid JSON for [`crate::Config`].
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
