//! LS-8 General-Purpose Register File.
//!
//! This module implements the register file of the LS-8. It performs the following:
//! 1. **Storage:** Maintains 8 unsigned 8-bit registers (`R0`-`R7`).
//! 2. **Stack Pointer:** Exposes `R7` as the stack pointer.
//! 3. **Debugging:** Provides utilities for dumping the complete register state.

use std::fmt;
use std::io::{self, Write};

use crate::common::{NUM_REGISTERS, REG_SP};

/// General-Purpose Register file.
///
/// Indexed access is checked: an index outside `0..8` yields `None` rather than
/// panicking, so the dispatcher can report the faulting instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gpr {
    regs: [u8; NUM_REGISTERS],
}

impl Gpr {
    /// Creates a register file with all registers zero and the stack pointer at `sp`.
    pub fn new(sp: u8) -> Self {
        let mut regs = [0; NUM_REGISTERS];
        regs[REG_SP] = sp;
        Self { regs }
    }

    /// Reads register `idx`, or `None` if the index is out of range.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<u8> {
        self.regs.get(idx).copied()
    }

    /// Mutable access to register `idx`, or `None` if the index is out of range.
    #[inline]
    pub fn get_mut(&mut self, idx: usize) -> Option<&mut u8> {
        self.regs.get_mut(idx)
    }

    /// Current stack pointer (`R7`).
    #[inline]
    pub const fn sp(&self) -> u8 {
        self.regs[REG_SP]
    }

    /// Sets the stack pointer (`R7`).
    #[inline]
    pub const fn set_sp(&mut self, sp: u8) {
        self.regs[REG_SP] = sp;
    }

    /// All registers, `R0` first.
    pub const fn as_array(&self) -> &[u8; NUM_REGISTERS] {
        &self.regs
    }

    /// Writes the contents of all registers to `out`.
    ///
    /// # Errors
    ///
    /// Propagates the writer's I/O error.
    pub fn dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")
    }
}

impl fmt::Display for Gpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chunk) in self.regs.chunks(4).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, val) in chunk.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "R{}={:#04x}", i * 4 + j, val)?;
            }
        }
        Ok(())
    }
}
