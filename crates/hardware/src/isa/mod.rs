//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode tables, field extraction, decoding and disassembly for
//! the supported MIPS32 integer subset.
//!
//! # Layers
//!
//! * `instruction`: raw bit-field extraction (`InstructionBits`, `Decoded`).
//! * `mips32`: opcode, function and REGIMM encoding constants.
//! * `decode`: field extraction plus classification into an `Op`.
//! * `op`: the supported operation set and its assembly layout.
//! * `disasm`: assembler text for trace output and listings.

/// O32 register names.
pub mod abi;

/// Instruction decoding and classification.
pub mod decode;

/// Instruction disassembler for debug tracing and program listings.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// MIPS32 encoding tables.
pub mod mips32;

/// Supported operations.
pub mod op;

pub use decode::{classify, decode};
pub use instruction::Decoded;
pub use op::Op;
