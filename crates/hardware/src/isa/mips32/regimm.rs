//! MIPS32 REGIMM Selectors.
//!
//! With primary opcode `OP_REGIMM`, the `rt` field (bits 20-16) selects the branch.

/// Branch on Less Than Zero.
pub const BLTZ: u32 = 0x00;
/// Branch on Greater Than or Equal to Zero.
pub const BGEZ: u32 = 0x01;
