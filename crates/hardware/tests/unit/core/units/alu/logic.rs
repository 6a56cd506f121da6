//! ALU Logic and Compare Tests

use proptest::prelude::*;
use rstest::rstest;

use ls8_core::core::arch::flags::Flags;
use ls8_core::core::units::alu::{Alu, AluOp, AluOutput};

fn value(op: AluOp, a: u8, b: u8) -> u8 {
    match Alu::execute(op, a, b) {
        Ok(AluOutput::Value(v)) => v,
        other => panic!("{op:?}({a}, {b}) produced {other:?}"),
    }
}

fn flags(a: u8, b: u8) -> Flags {
    match Alu::execute(AluOp::Cmp, a, b) {
        Ok(AluOutput::Flags(f)) => f,
        other => panic!("CMP({a}, {b}) produced {other:?}"),
    }
}

#[rstest]
#[case(AluOp::And, 0b1100_1010, 0b1010_0110, 0b1000_0010)]
#[case(AluOp::Or, 0b1100_1010, 0b1010_0110, 0b1110_1110)]
#[case(AluOp::Xor, 0b1100_1010, 0b1010_0110, 0b0110_1100)]
#[case(AluOp::And, 0xFF, 0, 0)]
#[case(AluOp::Or, 0, 0, 0)]
#[case(AluOp::Xor, 0x5A, 0x5A, 0)]
fn bitwise_binary(#[case] op: AluOp, #[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    assert_eq!(value(op, a, b), expected);
}

/// NOT is the bitwise complement. Early handout code approximated it with a
/// subtraction, which disagrees with these vectors.
#[rstest]
#[case(0x00, 0xFF)]
#[case(0xFF, 0x00)]
#[case(0b1010_0000, 0b0101_1111)]
#[case(1, 0xFE)]
fn not_is_bitwise_complement(#[case] a: u8, #[case] expected: u8) {
    assert_eq!(value(AluOp::Not, a, 0), expected);
}

#[rstest]
#[case(5, 5, Flags::EQUAL)]
#[case(0, 0, Flags::EQUAL)]
#[case(9, 5, Flags::GREATER)]
#[case(0xFF, 0, Flags::GREATER)]
#[case(5, 9, Flags::LESS)]
#[case(0, 0xFF, Flags::LESS)]
fn cmp_sets_exactly_one_pattern(#[case] a: u8, #[case] b: u8, #[case] expected: Flags) {
    assert_eq!(flags(a, b), expected);
}

#[test]
fn flag_patterns_have_fixed_encodings() {
    assert_eq!(Flags::EQUAL.bits(), 0b0000_0001);
    assert_eq!(Flags::GREATER.bits(), 0b1000_0010);
    assert_eq!(Flags::LESS.bits(), 0);
}

proptest! {
    #[test]
    fn cmp_agrees_with_integer_ordering(a: u8, b: u8) {
        let f = flags(a, b);
        prop_assert_eq!(f.equal(), a == b);
        prop_assert_eq!(f.greater(), a > b);
        prop_assert_eq!(f.less(), a < b);
    }

    #[test]
    fn double_not_is_identity(a: u8) {
        prop_assert_eq!(value(AluOp::Not, value(AluOp::Not, a, 0), 0), a);
    }
}
