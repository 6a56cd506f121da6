//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire machine state. It coordinates the following:
//! 1. **State Management:** Maintains registers, flags, program counter, and run state.
//! 2. **Memory:** Owns the 256-byte address space and the loaded program's extent.
//! 3. **Output:** Owns the console that `PRN` prints to.
//! 4. **Policy:** Carries the stack guard and division-by-zero settings from [`Config`].

/// Fetch-decode-execute loop and instruction dispatch.
pub mod execution;

/// Register operand access, stack push/pop, and data memory helpers.
pub mod memory;

use std::fmt;
use std::io::{self, Write};

use crate::common::MemoryError;
use crate::config::{Config, DivByZeroPolicy};
use crate::core::arch::flags::Flags;
use crate::core::arch::gpr::Gpr;
use crate::soc::devices::WriterConsole;
use crate::soc::{Console, Memory};
use crate::stats::SimStats;

/// Whether the CPU is still fetching instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// Fetching and executing.
    #[default]
    Running,
    /// Stopped by `HLT`.
    Halted,
}

/// Result of a single fetch-decode-execute cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// An instruction executed and the CPU is still running.
    Continue,
    /// The CPU is halted (by this instruction or an earlier one).
    Halted,
}

/// Main CPU structure containing all machine state.
pub struct Cpu {
    /// General-purpose registers; `R7` is the stack pointer.
    pub regs: Gpr,
    /// Flag register.
    pub flags: Flags,
    /// Program counter.
    pub pc: usize,
    /// Main memory.
    pub ram: Memory,
    /// Running or halted.
    pub state: RunState,
    /// Print a trace line to stderr before each instruction.
    pub trace: bool,
    /// Execution statistics.
    pub stats: SimStats,
    /// Stack pointer at reset, used for stack depth statistics.
    pub initial_sp: u8,
    /// Reject pushes into `0..program_end`.
    pub stack_guard: bool,
    /// What to do on `DIV`/`MOD` by zero.
    pub div_by_zero: DivByZeroPolicy,
    /// One past the last byte of the loaded program.
    pub program_end: usize,

    /// Address of the instruction currently executing (for diagnostics).
    inst_pc: usize,
    console: Box<dyn Console>,
}

impl Cpu {
    /// Creates a CPU printing to standard output.
    ///
    /// # Arguments
    ///
    /// * `config` - The machine configuration.
    pub fn new(config: &Config) -> Self {
        Self::with_console(config, Box::new(WriterConsole::stdout()))
    }

    /// Creates a CPU printing to `console`.
    ///
    /// Memory is zeroed, all registers are zero except `R7` (the configured initial
    /// stack pointer), the flags are clear, and PC is the configured start address.
    pub fn with_console(config: &Config, console: Box<dyn Console>) -> Self {
        let sp = config.machine.initial_sp;
        Self {
            regs: Gpr::new(sp),
            flags: Flags::default(),
            pc: config.general.start_pc,
            ram: Memory::new(),
            state: RunState::Running,
            trace: config.general.trace_instructions || cfg!(feature = "always-trace"),
            stats: SimStats::default(),
            initial_sp: sp,
            stack_guard: config.machine.stack_guard,
            div_by_zero: config.machine.div_by_zero,
            program_end: 0,
            inst_pc: config.general.start_pc,
            console,
        }
    }

    /// Copies a program image to address 0 and records its extent for the stack guard.
    ///
    /// # Errors
    ///
    /// [`MemoryError::ProgramTooLarge`] if the image does not fit.
    pub fn load_program(&mut self, image: &[u8]) -> Result<(), MemoryError> {
        self.ram.load(image)?;
        self.program_end = image.len();
        Ok(())
    }

    /// Whether `HLT` has executed.
    pub fn is_halted(&self) -> bool {
        self.state == RunState::Halted
    }

    /// Flushes the console.
    ///
    /// # Errors
    ///
    /// Propagates the console's I/O error.
    pub fn flush_console(&mut self) -> io::Result<()> {
        self.console.flush()
    }

    /// One-line machine state in the classic LS-8 trace format:
    /// `TRACE: PC | M[PC] M[PC+1] M[PC+2] | R0 .. R7`, all two-digit hex.
    pub fn trace_line(&self) -> String {
        let peek = |offset: usize| self.ram.read(self.pc + offset).unwrap_or(0);
        let mut line = format!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
            self.pc,
            peek(0),
            peek(1),
            peek(2)
        );
        for r in self.regs.as_array() {
            line.push_str(&format!(" {r:02X}"));
        }
        line
    }

    /// Writes the current CPU state (PC, flags, and registers) to `out`.
    ///
    /// # Errors
    ///
    /// Propagates the writer's I/O error.
    pub fn dump_state<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "PC = {:#04x}  FL = {:#010b}", self.pc, self.flags.bits())?;
        self.regs.dump(out)
    }
}

impl fmt::Debug for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cpu")
            .field("regs", &self.regs)
            .field("flags", &self.flags)
            .field("pc", &self.pc)
            .field("state", &self.state)
            .field("program_end", &self.program_end)
            .finish_non_exhaustive()
    }
}
