//! MIPS32 Integer Instruction Subset.
//!
//! Encoding tables for the instructions the pipeline implements.
//!
//! # Structure
//!
//! - `opcodes`: Primary opcodes (bits 31-26).
//! - `funct`: SPECIAL function codes (bits 5-0, opcode 0).
//! - `regimm`: REGIMM selectors carried in the `rt` field (opcode 1).

/// SPECIAL (R-type) function codes.
pub mod funct;

/// Primary opcodes.
pub mod opcodes;

/// REGIMM branch selectors.
pub mod regimm;
