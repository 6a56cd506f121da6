//! # Statistics Verification
//!
//! Counters after real runs, plus the bookkeeping helpers on their own.

use crate::common::builder::program::ProgramBuilder;
use crate::common::harness::TestContext;
use ls8_core::isa::instruction::{InstructionClass, Opcode};
use ls8_core::stats::SimStats;
use std::time::Instant;

#[test]
fn test_default_is_zeroed() {
    let stats = SimStats::default();
    assert_eq!(stats.cycles, 0);
    assert_eq!(stats.instructions_retired, 0);
    assert_eq!(stats.max_stack_depth, 0);
}

#[test]
fn test_record_counts_by_class() {
    let mut stats = SimStats::default();
    stats.record(InstructionClass::Alu);
    stats.record(InstructionClass::Alu);
    stats.record(InstructionClass::Io);
    stats.record(InstructionClass::System);
    assert_eq!(stats.instructions_retired, 4);
    assert_eq!(stats.inst_alu, 2);
    assert_eq!(stats.inst_io, 1);
    assert_eq!(stats.inst_system, 1);
    assert_eq!(stats.inst_branch, 0);
}

#[test]
fn test_stack_depth_keeps_maximum() {
    let mut stats = SimStats::default();
    stats.record_stack_depth(0xF4, 0xF2);
    stats.record_stack_depth(0xF4, 0xF3);
    assert_eq!(stats.max_stack_depth, 2);
    // SP above its reset value does not count as depth.
    stats.record_stack_depth(0xF4, 0xF8);
    assert_eq!(stats.max_stack_depth, 2);
}

#[test]
fn test_mix_after_run() {
    // 0: LDI R1,12 | 3: CALL R1 | 5: LDI R0,2 | 8: PRN R0 | 10: HLT | 11: NOP | 12: PUSH R0 | 14: POP R0 | 16: RET
    let program = ProgramBuilder::new()
        .ldi(1, 12)
        .call(1)
        .ldi(0, 2)
        .prn(0)
        .hlt()
        .nop()
        .push(0)
        .pop(0)
        .ret()
        .build();
    let mut ctx = TestContext::new().load(&program);
    ctx.run_to_halt();

    let stats = &ctx.cpu().stats;
    assert_eq!(stats.cycles, 8);
    assert_eq!(stats.instructions_retired, 8);
    assert_eq!(stats.inst_load_store, 2);
    assert_eq!(stats.inst_call_return, 2);
    assert_eq!(stats.inst_stack, 2);
    assert_eq!(stats.inst_io, 1);
    assert_eq!(stats.inst_system, 1);
    assert_eq!(stats.inst_alu, 0);
    assert_eq!(stats.max_stack_depth, 2);
}

#[test]
fn test_failed_instruction_is_not_retired() {
    let program = ProgramBuilder::new().op1(Opcode::Prn, 9).build();
    let mut ctx = TestContext::new().load(&program);
    assert!(ctx.run().is_err());
    assert_eq!(ctx.cpu().stats.cycles, 1);
    assert_eq!(ctx.cpu().stats.instructions_retired, 0);
}

#[test]
fn test_print_does_not_panic() {
    let mut ctx = TestContext::new().load(&[0, 1]);
    ctx.run_to_halt();
    ctx.cpu().stats.print();
}

#[test]
fn test_host_clock_starts_with_the_run() {
    let program = ProgramBuilder::new().nop().hlt().build();
    let mut ctx = TestContext::new().load(&program);
    let loaded = Instant::now();
    ctx.run_to_halt();
    assert!(ctx.cpu().stats.started_at() >= loaded);
}
