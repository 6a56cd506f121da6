//! # Control Flow Tests
//!
//! Jumps, conditional branches after `CMP`, and nested `CALL`/`RET`.

use proptest::prelude::*;
use rstest::rstest;

use crate::common::builder::program::ProgramBuilder;
use crate::common::harness::TestContext;
use ls8_core::common::{ExecError, MemoryError, STACK_TOP};
use ls8_core::isa::instruction::Opcode;

// ─── Branch layout ───────────────────────────────────────────────────────────
// 0:  LDI R0, a
// 3:  LDI R1, b
// 6:  LDI R2, TARGET
// 9:  CMP R0, R1
// 12: Jcc R2
// 14: fall-through

const BRANCH_AT: usize = 12;
const TARGET: u8 = 0x40;

/// Runs `CMP a, b; Jcc` and returns the PC after the jump.
fn pc_after_branch(op: Opcode, a: u8, b: u8) -> usize {
    let program = ProgramBuilder::new()
        .ldi(0, a)
        .ldi(1, b)
        .ldi(2, TARGET)
        .cmp(0, 1)
        .op1(op, 2)
        .build();
    let mut ctx = TestContext::new().load(&program);
    ctx.step_n(5);
    ctx.cpu().pc
}

fn assert_branch(op: Opcode, a: u8, b: u8, taken: bool) {
    let expected = if taken {
        TARGET as usize
    } else {
        BRANCH_AT + 2
    };
    assert_eq!(
        pc_after_branch(op, a, b),
        expected,
        "{} with {a}, {b}",
        op.mnemonic()
    );
}

#[rstest]
#[case(Opcode::Jeq, 5, 5, true)]
#[case(Opcode::Jeq, 5, 6, false)]
#[case(Opcode::Jne, 5, 6, true)]
#[case(Opcode::Jne, 5, 5, false)]
#[case(Opcode::Jgt, 9, 5, true)]
#[case(Opcode::Jgt, 5, 5, false)]
#[case(Opcode::Jlt, 5, 9, true)]
#[case(Opcode::Jlt, 9, 5, false)]
#[case(Opcode::Jle, 5, 5, true)]
#[case(Opcode::Jle, 5, 9, true)]
#[case(Opcode::Jle, 9, 5, false)]
#[case(Opcode::Jge, 5, 5, true)]
#[case(Opcode::Jge, 9, 5, true)]
#[case(Opcode::Jge, 5, 9, false)]
fn conditional_jumps(#[case] op: Opcode, #[case] a: u8, #[case] b: u8, #[case] taken: bool) {
    assert_branch(op, a, b, taken);
}

#[test]
fn branch_outcomes_are_counted() {
    let program = ProgramBuilder::new()
        .ldi(0, 1)
        .ldi(1, 2)
        .ldi(2, TARGET)
        .cmp(0, 1)
        .op1(Opcode::Jeq, 2)
        .op1(Opcode::Jne, 2)
        .build();
    let mut ctx = TestContext::new().load(&program);
    ctx.step_n(6);
    assert_eq!(ctx.cpu().pc, TARGET as usize);
    assert_eq!(ctx.cpu().stats.branches_not_taken, 1);
    assert_eq!(ctx.cpu().stats.branches_taken, 1);
}

#[test]
fn jmp_is_unconditional() {
    let program = ProgramBuilder::new()
        .ldi(0, 6)
        .jmp(0)
        .byte(0xFF)
        .prn(0)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load(&program);
    ctx.run_to_halt();
    assert_eq!(ctx.output(), vec![6]);
}

#[test]
fn call_pushes_return_address_and_ret_resumes_there() {
    // 0: LDI R1, 8 | 3: CALL R1 | 5: PRN R0 | 7: HLT | 8: LDI R0, 99 | 11: RET
    let program = ProgramBuilder::new()
        .ldi(1, 8)
        .call(1)
        .prn(0)
        .hlt()
        .ldi(0, 99)
        .ret()
        .build();
    let mut ctx = TestContext::new().load(&program);

    ctx.step_n(2);
    assert_eq!(ctx.cpu().pc, 8);
    assert_eq!(ctx.sp(), STACK_TOP - 1);
    assert_eq!(ctx.cpu().ram.read(usize::from(STACK_TOP - 1)), Ok(5));

    ctx.run_to_halt();
    assert_eq!(ctx.output(), vec![99]);
    assert_eq!(ctx.sp(), STACK_TOP);
}

#[test]
fn call_from_top_of_memory_cannot_encode_return_address() {
    let mut ctx = TestContext::new();
    ctx.cpu_mut().ram.write(254, Opcode::Call.byte()).unwrap();
    ctx.cpu_mut().ram.write(255, 0).unwrap();
    ctx.cpu_mut().pc = 254;
    ctx.set_reg(0, 0x10);

    let err = ctx.step().unwrap_err();
    assert_eq!(err, ExecError::Memory(MemoryError::OutOfRange { addr: 256 }));
    assert_eq!(ctx.cpu().pc, 254);
    assert_eq!(ctx.sp(), STACK_TOP);
}

/// Builds a chain of `depth` nested calls.
///
/// ```text
/// 0:        LDI R0, f1 ; CALL R0 ; HLT
/// 6+6(i-1): LDI R0, f(i+1) ; CALL R0 ; RET   (i < depth)
/// 6+6(d-1): RET
/// ```
fn nested_calls(depth: u8) -> Vec<u8> {
    let entry = |i: u8| 6 + 6 * (i - 1);
    let mut builder = ProgramBuilder::new().ldi(0, entry(1)).call(0).hlt();
    for i in 1..depth {
        builder = builder.ldi(0, entry(i + 1)).call(0).ret();
    }
    builder.ret().build()
}

proptest! {
    #[test]
    fn nested_calls_return_to_call_site_plus_two(depth in 1u8..=20) {
        let mut ctx = TestContext::new().load(&nested_calls(depth));
        let mut expected_returns = Vec::new();

        while !ctx.cpu().is_halted() {
            let pc = ctx.cpu().pc;
            let sp = ctx.sp();
            let opcode = ctx.cpu().ram.read(pc).unwrap();
            let _ = ctx.step().unwrap();

            if opcode == Opcode::Call.byte() {
                prop_assert_eq!(ctx.sp(), sp - 1);
                prop_assert_eq!(ctx.cpu().ram.read(usize::from(sp - 1)).unwrap() as usize, pc + 2);
                expected_returns.push(pc + 2);
            } else if opcode == Opcode::Ret.byte() {
                prop_assert_eq!(ctx.sp(), sp + 1);
                prop_assert_eq!(Some(ctx.cpu().pc), expected_returns.pop());
            }
        }

        prop_assert!(expected_returns.is_empty());
        prop_assert_eq!(ctx.sp(), STACK_TOP);
        prop_assert_eq!(ctx.cpu().pc, 6);
        prop_assert_eq!(ctx.cpu().stats.max_stack_depth, depth);
    }

    #[test]
    fn jeq_and_jne_agree_with_equality(a: u8, b: u8) {
        let fall_through = BRANCH_AT + 2;
        let jeq = pc_after_branch(Opcode::Jeq, a, b);
        let jne = pc_after_branch(Opcode::Jne, a, b);
        if a == b {
            prop_assert_eq!(jeq, TARGET as usize);
            prop_assert_eq!(jne, fall_through);
        } else {
            prop_assert_eq!(jeq, fall_through);
            prop_assert_eq!(jne, TARGET as usize);
        }
    }
}
