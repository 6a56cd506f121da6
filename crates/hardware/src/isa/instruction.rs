//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions for the LS-8 `AABCDDDD` opcode layout, the closed
//! [`Opcode`] enumeration, and the [`Decoded`] summary produced by the decoder.

use crate::common::constants::{
    ALU_BIT_SHIFT, INSTRUCTION_ID_MASK, OPERAND_COUNT_MASK, OPERAND_COUNT_SHIFT, SETS_PC_SHIFT,
};
use crate::core::units::alu::AluOp;
use crate::isa::opcodes;

/// Trait for extracting instruction fields from an opcode byte.
///
/// These fields are properties of the encoding alone: they are defined for every byte,
/// including bytes that are not valid opcodes.
pub trait InstructionBits {
    /// Number of operand bytes following the opcode (bits 6-7).
    fn operand_count(&self) -> usize;

    /// Total instruction length in bytes, opcode included.
    fn instruction_len(&self) -> usize;

    /// Whether the instruction is executed by the ALU (bit 5).
    fn is_alu(&self) -> bool;

    /// Whether the handler sets PC itself rather than relying on auto-advance (bit 4).
    fn sets_pc(&self) -> bool;

    /// Instruction identifier (bits 0-3).
    fn instruction_id(&self) -> u8;
}

impl InstructionBits for u8 {
    #[inline(always)]
    fn operand_count(&self) -> usize {
        ((self >> OPERAND_COUNT_SHIFT) & OPERAND_COUNT_MASK) as usize
    }

    #[inline(always)]
    fn instruction_len(&self) -> usize {
        self.operand_count() + 1
    }

    #[inline(always)]
    fn is_alu(&self) -> bool {
        (self >> ALU_BIT_SHIFT) & 1 == 1
    }

    #[inline(always)]
    fn sets_pc(&self) -> bool {
        (self >> SETS_PC_SHIFT) & 1 == 1
    }

    #[inline(always)]
    fn instruction_id(&self) -> u8 {
        self & INSTRUCTION_ID_MASK
    }
}

/// Coarse instruction categories, used for the instruction mix statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionClass {
    /// Arithmetic, logic, and comparison.
    Alu,
    /// Register loads and stores (`LDI`, `LD`, `ST`).
    LoadStore,
    /// `PUSH` and `POP`.
    Stack,
    /// Unconditional and conditional jumps.
    Branch,
    /// `CALL` and `RET`.
    CallReturn,
    /// Console output.
    Io,
    /// `NOP` and `HLT`.
    System,
}

/// Every instruction the interpreter executes. The discriminant is the opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Opcode {
    Nop = opcodes::NOP,
    Hlt = opcodes::HLT,
    Ret = opcodes::RET,
    Push = opcodes::PUSH,
    Pop = opcodes::POP,
    Prn = opcodes::PRN,
    Call = opcodes::CALL,
    Jmp = opcodes::JMP,
    Jeq = opcodes::JEQ,
    Jne = opcodes::JNE,
    Jgt = opcodes::JGT,
    Jlt = opcodes::JLT,
    Jle = opcodes::JLE,
    Jge = opcodes::JGE,
    Inc = opcodes::INC,
    Dec = opcodes::DEC,
    Not = opcodes::NOT,
    Ldi = opcodes::LDI,
    Ld = opcodes::LD,
    St = opcodes::ST,
    Add = opcodes::ADD,
    Sub = opcodes::SUB,
    Mul = opcodes::MUL,
    Div = opcodes::DIV,
    Mod = opcodes::MOD,
    Cmp = opcodes::CMP,
    And = opcodes::AND,
    Or = opcodes::OR,
    Xor = opcodes::XOR,
    Shl = opcodes::SHL,
    Shr = opcodes::SHR,
}

impl Opcode {
    /// All opcodes, in encoding order.
    pub const ALL: [Self; 31] = [
        Self::Nop,
        Self::Hlt,
        Self::Ret,
        Self::Push,
        Self::Pop,
        Self::Prn,
        Self::Call,
        Self::Jmp,
        Self::Jeq,
        Self::Jne,
        Self::Jgt,
        Self::Jlt,
        Self::Jle,
        Self::Jge,
        Self::Inc,
        Self::Dec,
        Self::Not,
        Self::Ldi,
        Self::Ld,
        Self::St,
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Mod,
        Self::Cmp,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Shl,
        Self::Shr,
    ];

    /// Maps a raw byte to its opcode, or `None` if the byte is not an instruction.
    pub const fn from_byte(byte: u8) -> Option<Self> {
        Some(match byte {
            opcodes::NOP => Self::Nop,
            opcodes::HLT => Self::Hlt,
            opcodes::RET => Self::Ret,
            opcodes::PUSH => Self::Push,
            opcodes::POP => Self::Pop,
            opcodes::PRN => Self::Prn,
            opcodes::CALL => Self::Call,
            opcodes::JMP => Self::Jmp,
            opcodes::JEQ => Self::Jeq,
            opcodes::JNE => Self::Jne,
            opcodes::JGT => Self::Jgt,
            opcodes::JLT => Self::Jlt,
            opcodes::JLE => Self::Jle,
            opcodes::JGE => Self::Jge,
            opcodes::INC => Self::Inc,
            opcodes::DEC => Self::Dec,
            opcodes::NOT => Self::Not,
            opcodes::LDI => Self::Ldi,
            opcodes::LD => Self::Ld,
            opcodes::ST => Self::St,
            opcodes::ADD => Self::Add,
            opcodes::SUB => Self::Sub,
            opcodes::MUL => Self::Mul,
            opcodes::DIV => Self::Div,
            opcodes::MOD => Self::Mod,
            opcodes::CMP => Self::Cmp,
            opcodes::AND => Self::And,
            opcodes::OR => Self::Or,
            opcodes::XOR => Self::Xor,
            opcodes::SHL => Self::Shl,
            opcodes::SHR => Self::Shr,
            _ => return None,
        })
    }

    /// The opcode byte.
    #[inline(always)]
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Assembly mnemonic, upper case.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Nop => "NOP",
            Self::Hlt => "HLT",
            Self::Ret => "RET",
            Self::Push => "PUSH",
            Self::Pop => "POP",
            Self::Prn => "PRN",
            Self::Call => "CALL",
            Self::Jmp => "JMP",
            Self::Jeq => "JEQ",
            Self::Jne => "JNE",
            Self::Jgt => "JGT",
            Self::Jlt => "JLT",
            Self::Jle => "JLE",
            Self::Jge => "JGE",
            Self::Inc => "INC",
            Self::Dec => "DEC",
            Self::Not => "NOT",
            Self::Ldi => "LDI",
            Self::Ld => "LD",
            Self::St => "ST",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Mod => "MOD",
            Self::Cmp => "CMP",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Shl => "SHL",
            Self::Shr => "SHR",
        }
    }

    /// The ALU operation this opcode delegates to, if any.
    pub const fn alu_op(self) -> Option<AluOp> {
        Some(match self {
            Self::Add => AluOp::Add,
            Self::Sub => AluOp::Sub,
            Self::Mul => AluOp::Mul,
            Self::Div => AluOp::Div,
            Self::Mod => AluOp::Mod,
            Self::Cmp => AluOp::Cmp,
            Self::And => AluOp::And,
            Self::Or => AluOp::Or,
            Self::Xor => AluOp::Xor,
            Self::Shl => AluOp::Shl,
            Self::Shr => AluOp::Shr,
            Self::Not => AluOp::Not,
            Self::Inc => AluOp::Inc,
            Self::Dec => AluOp::Dec,
            _ => return None,
        })
    }

    /// Category used for statistics.
    pub const fn class(self) -> InstructionClass {
        match self {
            Self::Nop | Self::Hlt => InstructionClass::System,
            Self::Ldi | Self::Ld | Self::St => InstructionClass::LoadStore,
            Self::Push | Self::Pop => InstructionClass::Stack,
            Self::Call | Self::Ret => InstructionClass::CallReturn,
            Self::Jmp | Self::Jeq | Self::Jne | Self::Jgt | Self::Jlt | Self::Jle | Self::Jge => {
                InstructionClass::Branch
            }
            Self::Prn => InstructionClass::Io,
            Self::Add
            | Self::Sub
            | Self::Mul
            | Self::Div
            | Self::Mod
            | Self::Cmp
            | Self::And
            | Self::Or
            | Self::Xor
            | Self::Shl
            | Self::Shr
            | Self::Not
            | Self::Inc
            | Self::Dec => InstructionClass::Alu,
        }
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_byte(byte).ok_or(byte)
    }
}

/// Decoded opcode: the instruction plus the encoding fields the dispatcher needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// The instruction.
    pub opcode: Opcode,
    /// Operand bytes following the opcode.
    pub operand_count: usize,
    /// Total length in bytes.
    pub len: usize,
    /// The handler owns PC; no auto-advance.
    pub sets_pc: bool,
    /// Executed by the ALU.
    pub is_alu: bool,
}
