//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle of the CPU. It performs the following:
//! 1. **Fetch:** Reads the opcode at PC and exactly as many operand bytes as it declares.
//! 2. **Decode:** Classifies the opcode and derives its length and sets-PC bit.
//! 3. **Advance:** Moves PC past the instruction unless the handler owns PC.
//! 4. **Dispatch:** Runs the handler for the opcode via one exhaustive match.
//!
//! A failed cycle leaves PC on the faulting instruction.

use tracing::{debug, trace, warn};

use super::{Cpu, RunState, StepOutcome};
use crate::common::constants::BRANCH_FALLTHROUGH;
use crate::common::{ExecError, MemoryError};
use crate::config::DivByZeroPolicy;
use crate::core::units::alu::{Alu, AluOp, AluOutput};
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble;
use crate::isa::instruction::Opcode;

impl Cpu {
    /// Executes one instruction.
    ///
    /// Once halted, further calls do nothing and return [`StepOutcome::Halted`].
    ///
    /// # Errors
    ///
    /// Any [`ExecError`] except a division by zero under [`DivByZeroPolicy::Skip`]. On
    /// error PC is restored to the faulting instruction; an unknown opcode modifies
    /// nothing at all.
    pub fn step(&mut self) -> Result<StepOutcome, ExecError> {
        if self.state == RunState::Halted {
            return Ok(StepOutcome::Halted);
        }

        let pc = self.pc;
        let byte = self.ram.read(pc)?;
        let decoded = decode(byte, pc)?;

        let mut operands = [0u8; 2];
        for (i, slot) in operands.iter_mut().enumerate().take(decoded.operand_count) {
            *slot = self.ram.read(pc + 1 + i)?;
        }

        if self.trace {
            eprintln!("{}", self.trace_line());
        }
        trace!(
            pc,
            inst = %disassemble(&[byte, operands[0], operands[1]]),
            "execute"
        );

        self.stats.cycles += 1;
        self.inst_pc = pc;
        if !decoded.sets_pc {
            self.pc = pc + decoded.len;
        }

        if let Err(e) = self.dispatch(decoded.opcode, operands) {
            self.pc = pc;
            return Err(e);
        }
        self.stats.record(decoded.opcode.class());

        Ok(match self.state {
            RunState::Running => StepOutcome::Continue,
            RunState::Halted => StepOutcome::Halted,
        })
    }

    /// Runs the handler for `opcode`. Auto-advance has already happened for opcodes
    /// without the sets-PC bit.
    fn dispatch(&mut self, opcode: Opcode, [a, b]: [u8; 2]) -> Result<(), ExecError> {
        match opcode {
            Opcode::Nop => {}
            Opcode::Hlt => {
                self.state = RunState::Halted;
                debug!(pc = self.inst_pc, "halted");
            }

            Opcode::Ldi => self.set_reg(a, b)?,
            Opcode::Ld => {
                let addr = self.reg(b)?;
                let val = self.ram.read(addr as usize)?;
                self.set_reg(a, val)?;
            }
            Opcode::St => {
                let addr = self.reg(a)?;
                let val = self.reg(b)?;
                self.ram.write(addr as usize, val)?;
            }

            Opcode::Prn => {
                let val = self.reg(a)?;
                self.console
                    .print_number(val)
                    .map_err(|e| ExecError::Console(e.to_string()))?;
            }

            Opcode::Push => {
                let val = self.reg(a)?;
                self.push(val)?;
            }
            Opcode::Pop => {
                // Reject a bad register before SP moves.
                self.reg(a).map(drop)?;
                let val = self.pop()?;
                self.set_reg(a, val)?;
            }

            Opcode::Call => {
                let target = self.reg(a)?;
                let ret = self.inst_pc + BRANCH_FALLTHROUGH;
                let ret = u8::try_from(ret).map_err(|_| MemoryError::OutOfRange { addr: ret })?;
                self.push(ret)?;
                self.pc = target as usize;
            }
            Opcode::Ret => self.pc = self.pop()? as usize,

            Opcode::Jmp => self.pc = self.reg(a)? as usize,
            Opcode::Jeq => self.branch(self.flags.equal(), a)?,
            Opcode::Jne => self.branch(!self.flags.equal(), a)?,
            Opcode::Jgt => self.branch(self.flags.greater(), a)?,
            Opcode::Jlt => self.branch(self.flags.less(), a)?,
            Opcode::Jle => self.branch(!self.flags.greater(), a)?,
            Opcode::Jge => self.branch(self.flags.equal() || self.flags.greater(), a)?,

            Opcode::Add => self.alu(AluOp::Add, a, Some(b))?,
            Opcode::Sub => self.alu(AluOp::Sub, a, Some(b))?,
            Opcode::Mul => self.alu(AluOp::Mul, a, Some(b))?,
            Opcode::Div => self.alu(AluOp::Div, a, Some(b))?,
            Opcode::Mod => self.alu(AluOp::Mod, a, Some(b))?,
            Opcode::Cmp => self.alu(AluOp::Cmp, a, Some(b))?,
            Opcode::And => self.alu(AluOp::And, a, Some(b))?,
            Opcode::Or => self.alu(AluOp::Or, a, Some(b))?,
            Opcode::Xor => self.alu(AluOp::Xor, a, Some(b))?,
            Opcode::Shl => self.alu(AluOp::Shl, a, Some(b))?,
            Opcode::Shr => self.alu(AluOp::Shr, a, Some(b))?,
            Opcode::Not => self.alu(AluOp::Not, a, None)?,
            Opcode::Inc => self.alu(AluOp::Inc, a, None)?,
            Opcode::Dec => self.alu(AluOp::Dec, a, None)?,
        }
        Ok(())
    }

    /// Conditional jump to the address in register `target`; otherwise falls through
    /// past the two-byte instruction.
    fn branch(&mut self, taken: bool, target: u8) -> Result<(), ExecError> {
        let dest = self.reg(target)?;
        self.stats.record_branch(taken);
        self.pc = if taken {
            dest as usize
        } else {
            self.inst_pc + BRANCH_FALLTHROUGH
        };
        Ok(())
    }

    /// Runs `op` on `reg[ra]` and `reg[rb]` (or `reg[ra]` alone for unary ops) and
    /// writes the result back to `reg[ra]`, or to the flag register for `CMP`.
    fn alu(&mut self, op: AluOp, ra: u8, rb: Option<u8>) -> Result<(), ExecError> {
        let x = self.reg(ra)?;
        let y = match rb {
            Some(rb) => self.reg(rb)?,
            None => 0,
        };
        match Alu::execute(op, x, y) {
            Ok(AluOutput::Value(v)) => self.set_reg(ra, v)?,
            Ok(AluOutput::Flags(f)) => self.flags = f,
            Err(ExecError::DivisionByZero) if self.div_by_zero == DivByZeroPolicy::Skip => {
                self.stats.div_by_zero += 1;
                warn!(
                    pc = self.inst_pc,
                    "{op:?} by zero; R{ra} left unchanged"
                );
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }
}
