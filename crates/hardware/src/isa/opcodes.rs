//! LS-8 Opcodes.
//!
//! Every opcode is laid out as `AABCDDDD`:
//! `AA` operand count, `B` ALU operation, `C` sets PC, `DDDD` instruction identifier.

/// No operation.
pub const NOP: u8 = 0b0000_0000;
/// Halt the machine.
pub const HLT: u8 = 0b0000_0001;
/// Return from subroutine.
pub const RET: u8 = 0b0001_0001;

/// Push a register onto the stack.
pub const PUSH: u8 = 0b0100_0101;
/// Pop the top of the stack into a register.
pub const POP: u8 = 0b0100_0110;
/// Print a register as a decimal number.
pub const PRN: u8 = 0b0100_0111;

/// Call the subroutine whose address is in a register.
pub const CALL: u8 = 0b0101_0000;
/// Jump to the address in a register.
pub const JMP: u8 = 0b0101_0100;
/// Jump if the equal flag is set.
pub const JEQ: u8 = 0b0101_0101;
/// Jump if the equal flag is clear.
pub const JNE: u8 = 0b0101_0110;
/// Jump if the greater flag is set.
pub const JGT: u8 = 0b0101_0111;
/// Jump if neither the equal nor the greater flag is set.
pub const JLT: u8 = 0b0101_1000;
/// Jump if the greater flag is clear.
pub const JLE: u8 = 0b0101_1001;
/// Jump if the equal or the greater flag is set.
pub const JGE: u8 = 0b0101_1010;

/// Increment a register.
pub const INC: u8 = 0b0110_0101;
/// Decrement a register.
pub const DEC: u8 = 0b0110_0110;
/// Bitwise complement of a register.
pub const NOT: u8 = 0b0110_1001;

/// Load an immediate into a register.
pub const LDI: u8 = 0b1000_0010;
/// Load a register from the address held in another register.
pub const LD: u8 = 0b1000_0011;
/// Store a register at the address held in another register.
pub const ST: u8 = 0b1000_0100;

/// Add.
pub const ADD: u8 = 0b1010_0000;
/// Subtract.
pub const SUB: u8 = 0b1010_0001;
/// Multiply.
pub const MUL: u8 = 0b1010_0010;
/// Divide.
pub const DIV: u8 = 0b1010_0011;
/// Remainder.
pub const MOD: u8 = 0b1010_0100;
/// Compare and set flags.
pub const CMP: u8 = 0b1010_0111;
/// Bitwise AND.
pub const AND: u8 = 0b1010_1000;
/// Bitwise OR.
pub const OR: u8 = 0b1010_1010;
/// Bitwise XOR.
pub const XOR: u8 = 0b1010_1011;
/// Shift left.
pub const SHL: u8 = 0b1010_1100;
/// Shift right.
pub const SHR: u8 = 0b1010_1101;
