//! LS-8 Instruction Decoder.
//!
//! Classifies an opcode byte into a [`Decoded`] record. The operand count and the
//! sets-PC flag come straight from the bit fields of the byte, not from a per-opcode
//! table, so the dispatcher's PC advance always equals `operand_count + 1`.

use crate::common::ExecError;
use crate::isa::instruction::{Decoded, InstructionBits, Opcode};

/// Decodes the opcode byte fetched from `pc`.
///
/// # Arguments
///
/// * `byte` - The raw opcode byte.
/// * `pc`   - Address the byte was fetched from (reported on failure).
///
/// # Errors
///
/// Returns [`ExecError::UnknownOpcode`] if `byte` is not part of the instruction set.
///
/// # Examples
///
/// ```
/// use ls8_core::isa::decode::decode;
/// use ls8_core::isa::instruction::Opcode;
///
/// let d = decode(0b1000_0010, 0).unwrap();
/// assert_eq!(d.opcode, Opcode::Ldi);
/// assert_eq!(d.len, 3);
/// assert!(!d.sets_pc);
///
/// assert!(decode(0xFF, 4).is_err());
/// ```
pub fn decode(byte: u8, pc: usize) -> Result<Decoded, ExecError> {
    let opcode = Opcode::from_byte(byte).ok_or(ExecError::UnknownOpcode { opcode: byte, pc })?;
    Ok(Decoded {
        opcode,
        operand_count: byte.operand_count(),
        len: byte.instruction_len(),
        sets_pc: byte.sets_pc(),
        is_alu: byte.is_alu(),
    })
}
