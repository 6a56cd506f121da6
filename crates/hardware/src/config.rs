//! Configuration system for the LS-8 interpreter.
//!
//! This module defines all configuration structures and enums used to parameterize
//! the machine. It provides:
//! 1. **Defaults:** Baseline machine constants (start PC, stack top, guard policy).
//! 2. **Structures:** Hierarchical config for general run settings and machine behaviour.
//! 3. **Enums:** Division-by-zero policy.
//!
//! Configuration is supplied as JSON (`--config` on the CLI) or use `Config::default()`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants for the interpreter.
mod defaults {
    /// Address of the first instruction fetched.
    pub const START_PC: usize = 0;

    /// Initial stack pointer (`R7`).
    pub const INITIAL_SP: u8 = crate::common::STACK_TOP;

    /// Reject pushes that would overwrite the loaded program.
    pub const STACK_GUARD: bool = true;
}

/// What the dispatcher does when `DIV` or `MOD` sees a zero divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum DivByZeroPolicy {
    /// Report the error, leave the destination register unchanged, and continue.
    #[default]
    Skip,
    /// Stop execution with [`ExecError::DivisionByZero`](crate::common::ExecError::DivisionByZero).
    Fatal,
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use ls8_core::config::{Config, DivByZeroPolicy};
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_cycles": 1000 },
///     "machine": { "div_by_zero": "Fatal" }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_cycles, Some(1000));
/// assert_eq!(config.machine.initial_sp, 0xF4);
/// assert_eq!(config.machine.div_by_zero, DivByZeroPolicy::Fatal);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General run settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Machine behaviour
    #[serde(default)]
    pub machine: MachineConfig,
}

impl Config {
    /// Parses a configuration from a JSON string; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not a valid configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General run settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Print a trace line to stderr before every instruction
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: usize,

    /// Stop after this many cycles if the program has not halted (unbounded if unset)
    #[serde(default)]
    pub max_cycles: Option<u64>,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    const fn default_start_pc() -> usize {
        defaults::START_PC
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: defaults::START_PC,
            max_cycles: None,
        }
    }
}

/// Machine behaviour settings.
#[derive(Debug, Clone, Deserialize)]
pub struct MachineConfig {
    /// Initial stack pointer (`R7`)
    #[serde(default = "MachineConfig::default_initial_sp")]
    pub initial_sp: u8,

    /// Treat a push into the loaded program region as a fatal error
    #[serde(default = "MachineConfig::default_stack_guard")]
    pub stack_guard: bool,

    /// Division-by-zero handling for `DIV` and `MOD`
    #[serde(default)]
    pub div_by_zero: DivByZeroPolicy,
}

impl MachineConfig {
    /// Returns the default initial stack pointer.
    const fn default_initial_sp() -> u8 {
        defaults::INITIAL_SP
    }

    /// Returns the default stack guard setting.
    const fn default_stack_guard() -> bool {
        defaults::STACK_GUARD
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            initial_sp: defaults::INITIAL_SP,
            stack_guard: defaults::STACK_GUARD,
            div_by_zero: DivByZeroPolicy::default(),
        }
    }
}
