//! Simulator: owns the CPU and drives it to completion.
//!
//! The CPU is exclusively owned here and advanced one cycle at a time; the run ends on
//! `HLT`, on a fatal error, or when the configured cycle budget is spent.

use std::path::Path;

use tracing::{debug, info};

use crate::common::{ExecError, LoadError};
use crate::config::Config;
use crate::core::{Cpu, StepOutcome};
use crate::sim::loader;
use crate::soc::Console;

/// Why a run stopped without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The program executed `HLT`.
    Halted,
    /// The cycle budget ran out first.
    CycleLimit(u64),
}

/// Top-level simulator: CPU plus run limits.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, memory, stats, console).
    pub cpu: Cpu,
    max_cycles: Option<u64>,
}

impl Simulator {
    /// Creates a simulator printing to standard output.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
            max_cycles: config.general.max_cycles,
        }
    }

    /// Creates a simulator printing to `console`.
    pub fn with_console(config: &Config, console: Box<dyn Console>) -> Self {
        Self {
            cpu: Cpu::with_console(config, console),
            max_cycles: config.general.max_cycles,
        }
    }

    /// Loads a program image at address 0.
    ///
    /// # Errors
    ///
    /// [`LoadError::TooLarge`] if the image does not fit in memory.
    pub fn load_program(&mut self, image: &[u8]) -> Result<(), LoadError> {
        self.cpu.load_program(image)?;
        Ok(())
    }

    /// Reads, parses, and loads a program file.
    ///
    /// # Returns
    ///
    /// The number of bytes loaded.
    ///
    /// # Errors
    ///
    /// See [`loader::load_program_file`].
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let image = loader::load_program_file(path)?;
        self.load_program(&image)?;
        Ok(image.len())
    }

    /// Advances the simulator by one instruction.
    ///
    /// # Errors
    ///
    /// Propagates the CPU's [`ExecError`].
    pub fn tick(&mut self) -> Result<StepOutcome, ExecError> {
        self.cpu.step()
    }

    /// Runs until `HLT`, an error, or the cycle budget.
    ///
    /// The host-time clock in the stats starts here, so it excludes loading. The console
    /// is flushed before returning, on success and on error alike.
    ///
    /// # Errors
    ///
    /// The first fatal [`ExecError`].
    pub fn run(&mut self) -> Result<ExitReason, ExecError> {
        self.cpu.stats.start_clock();
        let result = self.run_loop();
        if let Err(e) = self.cpu.flush_console() {
            debug!(error = %e, "console flush failed");
        }
        result
    }

    fn run_loop(&mut self) -> Result<ExitReason, ExecError> {
        loop {
            if let Some(limit) = self.max_cycles
                && self.cpu.stats.cycles >= limit
            {
                info!(limit, pc = self.cpu.pc, "cycle limit reached");
                return Ok(ExitReason::CycleLimit(limit));
            }
            if self.tick()? == StepOutcome::Halted {
                return Ok(ExitReason::Halted);
            }
        }
    }
}
