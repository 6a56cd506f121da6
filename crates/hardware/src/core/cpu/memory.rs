//! Register Operand and Stack Access.
//!
//! This module implements the checked accessors the dispatcher uses. It provides:
//! 1. **Register Operands:** Reads and writes by operand byte, rejecting indices above `R7`.
//! 2. **Stack:** Push and pop through `R7`, with overflow, underflow, and collision checks.

use super::Cpu;
use crate::common::ExecError;

impl Cpu {
    /// Reads the register named by operand byte `idx`.
    ///
    /// # Errors
    ///
    /// [`ExecError::InvalidRegister`] if `idx > 7`.
    #[inline]
    pub fn reg(&self, idx: u8) -> Result<u8, ExecError> {
        self.regs.get(idx as usize).ok_or(ExecError::InvalidRegister {
            index: idx,
            pc: self.inst_pc,
        })
    }

    /// Writes the register named by operand byte `idx`.
    ///
    /// # Errors
    ///
    /// [`ExecError::InvalidRegister`] if `idx > 7`.
    #[inline]
    pub fn set_reg(&mut self, idx: u8, val: u8) -> Result<(), ExecError> {
        let pc = self.inst_pc;
        let slot = self
            .regs
            .get_mut(idx as usize)
            .ok_or(ExecError::InvalidRegister { index: idx, pc })?;
        *slot = val;
        Ok(())
    }

    /// Decrements `SP` and stores `val` at the new top of stack.
    ///
    /// Nothing is modified when the push fails.
    ///
    /// # Errors
    ///
    /// * [`ExecError::StackOverflow`] if `SP` is already 0.
    /// * [`ExecError::StackCollision`] if the stack guard is on and the new top lies
    ///   inside the loaded program.
    pub fn push(&mut self, val: u8) -> Result<(), ExecError> {
        let pc = self.inst_pc;
        let sp = self.regs.sp();
        let top = sp
            .checked_sub(1)
            .ok_or(ExecError::StackOverflow { sp, pc })?;
        if self.stack_guard && (top as usize) < self.program_end {
            return Err(ExecError::StackCollision { addr: top, pc });
        }
        self.ram.write(top as usize, val)?;
        self.regs.set_sp(top);
        self.stats.record_stack_depth(self.initial_sp, top);
        Ok(())
    }

    /// Loads the value at the top of stack and increments `SP`.
    ///
    /// # Errors
    ///
    /// [`ExecError::StackUnderflow`] if `SP` is `0xFF`, where the increment would
    /// leave the address space.
    pub fn pop(&mut self) -> Result<u8, ExecError> {
        let sp = self.regs.sp();
        let next = sp
            .checked_add(1)
            .ok_or(ExecError::StackUnderflow { pc: self.inst_pc })?;
        let val = self.ram.read(sp as usize)?;
        self.regs.set_sp(next);
        Ok(val)
    }
}
