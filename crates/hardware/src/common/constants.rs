//! Global Machine Constants.
//!
//! This module defines machine-wide constants used across the interpreter. It includes:
//! 1. **Memory Constants:** Address space size.
//! 2. **Register Constants:** Register count and the stack pointer convention.
//! 3. **Encoding Constants:** Opcode bit-field shifts and masks.
//! 4. **Flag Constants:** Bit patterns written by `CMP`.

/// Number of addressable memory cells (8-bit address space).
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers (`R0`-`R7`).
pub const NUM_REGISTERS: usize = 8;

/// Register index reserved for the stack pointer.
pub const REG_SP: usize = 7;

/// Initial stack pointer value; the stack grows downward from here.
pub const STACK_TOP: u8 = 0xF4;

/// Shift of the operand-count field (bits 6-7, `AA` in `AABCDDDD`).
pub const OPERAND_COUNT_SHIFT: u8 = 6;

/// Mask of the operand-count field after shifting.
pub const OPERAND_COUNT_MASK: u8 = 0b11;

/// Shift of the ALU-class bit (bit 5, `B` in `AABCDDDD`).
pub const ALU_BIT_SHIFT: u8 = 5;

/// Shift of the sets-PC bit (bit 4, `C` in `AABCDDDD`).
pub const SETS_PC_SHIFT: u8 = 4;

/// Mask of the instruction identifier (bits 0-3, `DDDD` in `AABCDDDD`).
pub const INSTRUCTION_ID_MASK: u8 = 0b1111;

/// Flag pattern written by `CMP` when both operands are equal.
pub const FLAG_EQUAL: u8 = 0b0000_0001;

/// Flag pattern written by `CMP` when the first operand is greater.
pub const FLAG_GREATER: u8 = 0b1000_0010;

/// Flag pattern written by `CMP` when the first operand is less.
pub const FLAG_LESS: u8 = 0b0000_0000;

/// Bit tested by `JEQ`/`JNE`.
pub const FLAG_EQUAL_BIT: u8 = 0b0000_0001;

/// Bit tested by `JGT`/`JLE`.
pub const FLAG_GREATER_BIT: u8 = 0b0000_0010;

/// Bytes a not-taken conditional jump advances past (opcode + register).
pub const BRANCH_FALLTHROUGH: usize = 2;
