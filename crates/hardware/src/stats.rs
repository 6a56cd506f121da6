//! Execution statistics collection and reporting.
//!
//! This module tracks what a run did. It provides:
//! 1. **Cycles:** Total cycles and retired instructions.
//! 2. **Instruction mix:** Counts by class (ALU, load/store, stack, branch, call, I/O, system).
//! 3. **Control flow:** Taken and not-taken conditional branches.
//! 4. **Stack:** Maximum stack depth reached below the initial stack pointer.
//! 5. **Faults:** Division-by-zero events that were skipped.

use std::time::Instant;

use crate::isa::instruction::InstructionClass;

/// Run statistics.
#[derive(Debug, Clone)]
pub struct SimStats {
    start_time: Instant,
    /// Fetch-decode-execute cycles started.
    pub cycles: u64,
    /// Instructions that completed.
    pub instructions_retired: u64,

    /// ALU instructions retired.
    pub inst_alu: u64,
    /// `LDI`, `LD`, and `ST` retired.
    pub inst_load_store: u64,
    /// `PUSH` and `POP` retired.
    pub inst_stack: u64,
    /// Jumps retired.
    pub inst_branch: u64,
    /// `CALL` and `RET` retired.
    pub inst_call_return: u64,
    /// `PRN` retired.
    pub inst_io: u64,
    /// `NOP` and `HLT` retired.
    pub inst_system: u64,

    /// Conditional jumps that jumped.
    pub branches_taken: u64,
    /// Conditional jumps that fell through.
    pub branches_not_taken: u64,

    /// `DIV`/`MOD` by zero skipped under the `Skip` policy.
    pub div_by_zero: u64,

    /// Deepest stack reached, in bytes below the initial stack pointer.
    pub max_stack_depth: u8,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_load_store: 0,
            inst_stack: 0,
            inst_branch: 0,
            inst_call_return: 0,
            inst_io: 0,
            inst_system: 0,
            branches_taken: 0,
            branches_not_taken: 0,
            div_by_zero: 0,
            max_stack_depth: 0,
        }
    }
}

impl SimStats {
    /// Counts one retired instruction of `class`.
    pub const fn record(&mut self, class: InstructionClass) {
        self.instructions_retired += 1;
        let counter = match class {
            InstructionClass::Alu => &mut self.inst_alu,
            InstructionClass::LoadStore => &mut self.inst_load_store,
            InstructionClass::Stack => &mut self.inst_stack,
            InstructionClass::Branch => &mut self.inst_branch,
            InstructionClass::CallReturn => &mut self.inst_call_return,
            InstructionClass::Io => &mut self.inst_io,
            InstructionClass::System => &mut self.inst_system,
        };
        *counter += 1;
    }

    /// Counts the outcome of a conditional jump.
    pub const fn record_branch(&mut self, taken: bool) {
        if taken {
            self.branches_taken += 1;
        } else {
            self.branches_not_taken += 1;
        }
    }

    /// Restarts the host-time clock.
    pub fn start_clock(&mut self) {
        self.start_time = Instant::now();
    }

    /// When the host-time clock last started.
    pub const fn started_at(&self) -> Instant {
        self.start_time
    }

    /// Tracks the stack depth after a push.
    pub fn record_stack_depth(&mut self, initial_sp: u8, sp: u8) {
        let depth = initial_sp.saturating_sub(sp);
        self.max_stack_depth = self.max_stack_depth.max(depth);
    }

    /// Prints a report to stderr, keeping stdout for program output.
    pub fn print(&self) {
        let elapsed = self.start_time.elapsed();
        let secs = elapsed.as_secs_f64();
        let pct = |n: u64| {
            if self.instructions_retired == 0 {
                0.0
            } else {
                n as f64 * 100.0 / self.instructions_retired as f64
            }
        };

        eprintln!("\n==========================================================");
        eprintln!("LS-8 EXECUTION STATISTICS");
        eprintln!("==========================================================");
        eprintln!("  cycles                   {:>10}", self.cycles);
        eprintln!("  instructions retired     {:>10}", self.instructions_retired);
        eprintln!("  host time                {:>10.6} s", secs);
        eprintln!("----------------------------------------------------------");
        eprintln!("INSTRUCTION MIX");
        for (name, n) in [
            ("alu", self.inst_alu),
            ("load/store", self.inst_load_store),
            ("stack", self.inst_stack),
            ("branch", self.inst_branch),
            ("call/return", self.inst_call_return),
            ("i/o", self.inst_io),
            ("system", self.inst_system),
        ] {
            eprintln!("  {name:<24} {n:>10} ({:>5.1}%)", pct(n));
        }
        eprintln!("----------------------------------------------------------");
        eprintln!("  branches taken           {:>10}", self.branches_taken);
        eprintln!("  branches not taken       {:>10}", self.branches_not_taken);
        eprintln!("  max stack depth          {:>10}", self.max_stack_depth);
        eprintln!("  division by zero skipped {:>10}", self.div_by_zero);
        eprintln!("==========================================================");
    }
}
