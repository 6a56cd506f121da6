//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode table, the `AABCDDDD` bit-field accessors, the decoder, and the
//! disassembler for the LS-8 instruction set.

/// Instruction decoding logic.
pub mod decode;

/// Instruction disassembler for tracing and program listings.
pub mod disasm;

/// Opcode enumeration, encoding bit fields, and decoded instruction record.
pub mod instruction;

/// Opcode byte constants.
pub mod opcodes;
