//! LS-8 interpreter CLI.
//!
//! This binary loads an LS-8 program source and runs it. It performs:
//! 1. **Run:** Parse the program, load it at address 0, and execute until `HLT`.
//! 2. **Disassemble:** Print a listing of the program instead of running it.
//! 3. **Diagnostics:** Optional per-instruction trace, statistics, and log output on stderr.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ls8_core::common::{ExecError, LoadError};
use ls8_core::config::Config;
use ls8_core::isa::disasm;
use ls8_core::sim::loader;
use ls8_core::sim::{ExitReason, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 8-bit virtual machine",
    long_about = "Run an LS-8 program: one binary byte per line, `#` starts a comment.\n\nExamples:\n  ls8 programs/print8.ls8\n  ls8 --trace programs/mult.ls8\n  ls8 --disassemble programs/call.ls8\n\nSet RUST_LOG (e.g. RUST_LOG=debug) for diagnostic logging on stderr."
)]
struct Cli {
    /// Program source to run.
    file: PathBuf,

    /// Print a trace line to stderr before each instruction.
    #[arg(short, long)]
    trace: bool,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many instructions.
    #[arg(long)]
    max_cycles: Option<u64>,

    /// Print execution statistics to stderr when the run ends.
    #[arg(short, long)]
    stats: bool,

    /// Print a disassembly listing instead of running.
    #[arg(short, long)]
    disassemble: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            process::exit(usage_exit_code(&e));
        }
    };
    init_logging();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            process::exit(1);
        }),
        None => Config::default(),
    };
    config.general.trace_instructions |= cli.trace;
    if cli.max_cycles.is_some() {
        config.general.max_cycles = cli.max_cycles;
    }

    if cli.disassemble {
        cmd_disassemble(&cli.file);
    } else {
        let code = cmd_run(&cli.file, &config, cli.stats, &mut io::stderr().lock());
        process::exit(code);
    }
}

/// `--help` and `--version` exit 0; real usage errors exit 1.
fn usage_exit_code(e: &clap::Error) -> i32 {
    i32::from(e.use_stderr())
}

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG`, defaulting to `warn`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Loads the program and runs it to completion, returning the process exit code.
///
/// Diagnostics go to `err`; stdout carries only program output. A missing file reports
/// `Couldn't find file <path>`. Any load or execution failure gives code 1, and a fatal
/// execution error is followed by a machine-state dump.
fn cmd_run<W: Write>(path: &Path, config: &Config, show_stats: bool, err: &mut W) -> i32 {
    let mut sim = Simulator::new(config);
    match sim.load_file(path) {
        Ok(len) => debug!(bytes = len, "loaded {}", path.display()),
        Err(e) => {
            let _ = writeln!(err, "{}", load_failure(&e));
            return 1;
        }
    }

    let result = sim.run();
    if show_stats {
        sim.cpu.stats.print();
    }
    let (code, message) = run_outcome(&result);
    if let Some(message) = message {
        let _ = writeln!(err, "{message}");
    }
    if result.is_err() {
        let _ = sim.cpu.dump_state(err);
    }
    code
}

fn load_failure(e: &LoadError) -> String {
    match e {
        LoadError::NotFound { .. } => e.to_string(),
        _ => format!("Error: {e}"),
    }
}

/// Exit code and optional stderr line for how a run ended.
fn run_outcome(result: &Result<ExitReason, ExecError>) -> (i32, Option<String>) {
    match result {
        Ok(ExitReason::Halted) => (0, None),
        Ok(ExitReason::CycleLimit(limit)) => {
            (0, Some(format!("Stopped after {limit} cycles without halting")))
        }
        Err(e) => (1, Some(format!("Fatal: {e}"))),
    }
}

/// Prints an address-annotated listing of the program.
fn cmd_disassemble(path: &Path) {
    let image = loader::load_program_file(path).unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });
    for (addr, text) in disasm::listing(&image) {
        println!("{addr:02X}: {text}");
    }
}
