use pretty_assertions::assert_eq;
use rstest::rstest;

use ls8_core::isa::disasm::{disassemble, listing};
use ls8_core::isa::instruction::{InstructionBits, Opcode};

#[rstest]
#[case(&[0b1000_0010, 0, 8], "LDI R0, 8")]
#[case(&[0b0100_0111, 3], "PRN R3")]
#[case(&[0b1010_0010, 0, 1], "MUL R0, R1")]
#[case(&[0b0000_0001], "HLT")]
#[case(&[0b0001_0001], "RET")]
#[case(&[0b0101_0000, 2], "CALL R2")]
#[case(&[0b1000_0011, 1, 2], "LD R1, R2")]
#[case(&[0b1111_1111], ".byte 0b11111111")]
#[case(&[0b1000_0010, 4], "LDI R4, ?")]
#[case(&[], "")]
fn renders_instruction(#[case] bytes: &[u8], #[case] expected: &str) {
    assert_eq!(disassemble(bytes), expected);
}

#[test]
fn every_opcode_renders_its_mnemonic_and_operands() {
    for op in Opcode::ALL {
        let text = disassemble(&[op.byte(), 1, 2]);
        assert!(text.starts_with(op.mnemonic()), "{text}");
        assert_eq!(
            text.matches('R').count() - op.mnemonic().matches('R').count(),
            match (op, op.byte().operand_count()) {
                (Opcode::Ldi, _) => 1,
                (_, n) => n,
            },
            "{text}"
        );
    }
}

#[test]
fn listing_walks_by_instruction_length() {
    let image = [0b1000_0010, 0, 8, 0b0100_0111, 0, 0xFF, 0b0000_0001];
    let expected = vec![
        (0, "LDI R0, 8".to_string()),
        (3, "PRN R0".to_string()),
        (5, ".byte 0b11111111".to_string()),
        (6, "HLT".to_string()),
    ];
    assert_eq!(listing(&image), expected);
}

#[test]
fn listing_truncates_final_instruction() {
    let image = [0b0000_0000, 0b1010_0000, 1];
    let expected = vec![(0, "NOP".to_string()), (1, "ADD R1, ?".to_string())];
    assert_eq!(listing(&image), expected);
}
