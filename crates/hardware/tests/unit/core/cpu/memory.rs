//! # Stack Tests
//!
//! PUSH/POP discipline through `R7` and the stack policy at the edges of memory and
//! of the loaded program.

use proptest::prelude::*;

use crate::common::builder::program::{ProgramBuilder, SP};
use crate::common::harness::TestContext;
use ls8_core::common::{ExecError, STACK_TOP};
use ls8_core::config::Config;

fn config_with_sp(sp: u8, guard: bool) -> Config {
    let mut config = Config::default();
    config.machine.initial_sp = sp;
    config.machine.stack_guard = guard;
    config
}

#[test]
fn test_push_writes_below_sp() {
    let program = ProgramBuilder::new().ldi(0, 0xAB).push(0).hlt().build();
    let mut ctx = TestContext::new().load(&program);
    ctx.run_to_halt();
    assert_eq!(ctx.sp(), STACK_TOP - 1);
    assert_eq!(ctx.cpu().ram.read(usize::from(STACK_TOP - 1)), Ok(0xAB));
}

#[test]
fn test_stack_is_last_in_first_out() {
    let program = ProgramBuilder::new()
        .ldi(0, 1)
        .ldi(1, 2)
        .ldi(2, 3)
        .push(0)
        .push(1)
        .push(2)
        .pop(3)
        .pop(4)
        .pop(5)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load(&program);
    ctx.run_to_halt();
    assert_eq!([ctx.reg(3), ctx.reg(4), ctx.reg(5)], [3, 2, 1]);
    assert_eq!(ctx.sp(), STACK_TOP);
}

#[test]
fn test_push_sp_stores_value_before_decrement() {
    let program = ProgramBuilder::new().push(SP).pop(0).hlt().build();
    let mut ctx = TestContext::new().load(&program);
    ctx.run_to_halt();
    assert_eq!(ctx.reg(0), STACK_TOP);
    assert_eq!(ctx.sp(), STACK_TOP);
}

#[test]
fn test_pop_into_sp_takes_popped_value() {
    let program = ProgramBuilder::new().ldi(0, 0x40).push(0).pop(SP).hlt().build();
    let mut ctx = TestContext::new().load(&program);
    ctx.run_to_halt();
    assert_eq!(ctx.sp(), 0x40);
}

#[test]
fn test_push_at_zero_overflows() {
    let program = ProgramBuilder::new().push(0).hlt().build();
    let mut ctx = TestContext::with_config(&config_with_sp(0, false)).load(&program);
    assert_eq!(ctx.run(), Err(ExecError::StackOverflow { sp: 0, pc: 0 }));
    assert_eq!(ctx.sp(), 0);
    assert_eq!(ctx.cpu().ram.read(0), Ok(program[0]));
}

#[test]
fn test_pop_at_top_of_memory_underflows() {
    let program = ProgramBuilder::new().pop(0).hlt().build();
    let mut ctx = TestContext::with_config(&config_with_sp(0xFF, true)).load(&program);
    assert_eq!(ctx.run(), Err(ExecError::StackUnderflow { pc: 0 }));
    assert_eq!(ctx.sp(), 0xFF);
    assert_eq!(ctx.reg(0), 0);
}

#[test]
fn test_stack_guard_rejects_push_into_program() {
    let program = ProgramBuilder::new().ldi(0, 0xEE).push(0).hlt().build();
    let mut ctx = TestContext::with_config(&config_with_sp(4, true)).load(&program);
    assert_eq!(
        ctx.run(),
        Err(ExecError::StackCollision { addr: 3, pc: 3 })
    );
    assert_eq!(ctx.sp(), 4);
    assert_eq!(ctx.cpu().ram.read(3), Ok(program[3]));
}

#[test]
fn test_without_guard_push_overwrites_program() {
    let program = ProgramBuilder::new()
        .ldi(0, 0x01)
        .push(0)
        .nop()
        .nop()
        .build();
    // The push lands on the first NOP (address 5) and turns it into HLT.
    let mut ctx = TestContext::with_config(&config_with_sp(6, false)).load(&program);
    ctx.run_to_halt();
    assert_eq!(ctx.cpu().ram.read(5), Ok(0x01));
    assert_eq!(ctx.cpu().pc, 6);
}

proptest! {
    #[test]
    fn push_pop_moves_value_and_restores_sp(v in any::<u8>(), r1 in 0u8..7, r2 in 0u8..7) {
        prop_assume!(r1 != r2);
        let program = ProgramBuilder::new().ldi(r1, v).push(r1).pop(r2).hlt().build();
        let mut ctx = TestContext::new().load(&program);
        ctx.run_to_halt();
        prop_assert_eq!(ctx.reg(r2), v);
        prop_assert_eq!(ctx.reg(r1), v);
        prop_assert_eq!(ctx.sp(), STACK_TOP);
    }
}
