//! Instruction Disassembler for LS-8.
//!
//! Converts opcode and operand bytes into a human-readable mnemonic string for
//! instruction tracing, program listings (`ls8 --disassemble`), and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use ls8_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(&[0b1000_0010, 0, 8]), "LDI R0, 8");
//! assert_eq!(disassemble(&[0b0100_0111, 0]), "PRN R0");
//! ```

use crate::isa::instruction::{InstructionBits, Opcode};

/// Formats a register operand.
#[inline]
fn reg(idx: u8) -> String {
    format!("R{idx}")
}

/// Disassembles the instruction starting at `bytes[0]`.
///
/// Operands missing from the end of `bytes` are rendered as `?`. Bytes that are not
/// opcodes are rendered as a data directive, e.g. `.byte 0b11111111`.
///
/// # Arguments
///
/// * `bytes` - The opcode followed by (up to) two operand bytes.
pub fn disassemble(bytes: &[u8]) -> String {
    let Some(&byte) = bytes.first() else {
        return String::new();
    };
    let Some(opcode) = Opcode::from_byte(byte) else {
        return format!(".byte {byte:#010b}");
    };

    let operands: Vec<Option<u8>> = (1..=byte.operand_count())
        .map(|i| bytes.get(i).copied())
        .collect();
    let show = |slot: usize, render: fn(u8) -> String| {
        operands
            .get(slot)
            .copied()
            .flatten()
            .map_or_else(|| "?".to_string(), render)
    };

    match byte.operand_count() {
        0 => opcode.mnemonic().to_string(),
        1 => format!("{} {}", opcode.mnemonic(), show(0, reg)),
        _ if opcode == Opcode::Ldi => format!(
            "{} {}, {}",
            opcode.mnemonic(),
            show(0, reg),
            show(1, |v| v.to_string())
        ),
        _ => format!("{} {}, {}", opcode.mnemonic(), show(0, reg), show(1, reg)),
    }
}

/// Produces a listing of a program image as `(address, text)` pairs.
///
/// Walks the image instruction by instruction using each opcode's encoded length;
/// unknown bytes advance by one.
pub fn listing(image: &[u8]) -> Vec<(usize, String)> {
    let mut out = Vec::new();
    let mut addr = 0;
    while addr < image.len() {
        let byte = image[addr];
        let len = if Opcode::from_byte(byte).is_some() {
            byte.instruction_len()
        } else {
            1
        };
        let end = (addr + len).min(image.len());
        out.push((addr, disassemble(&image[addr..end])));
        addr += len;
    }
    out
}
