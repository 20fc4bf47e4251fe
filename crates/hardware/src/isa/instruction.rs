//! Instruction encoding and field extraction utilities.
//!
//! Provides bit extraction for the three MIPS32 instruction formats:
//!
//! ```text
//! R-type: opcode(6) | rs(5) | rt(5) | rd(5) | shamt(5) | funct(6)
//! I-type: opcode(6) | rs(5) | rt(5) | immediate(16)
//! J-type: opcode(6) | target(26)
//! ```

/// Bit mask for 6-bit fields (opcode, funct).
pub const FIELD6_MASK: u32 = 0x3F;
/// Bit mask for 5-bit fields (register indices, shift amount).
pub const FIELD5_MASK: u32 = 0x1F;
/// Bit mask for the 16-bit immediate.
pub const IMM_MASK: u32 = 0xFFFF;
/// Bit mask for the 26-bit jump target.
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Primary opcode (bits 31-26).
    fn opcode(&self) -> u32;

    /// First source register (bits 25-21).
    fn rs(&self) -> usize;

    /// Second source / immediate-form destination register (bits 20-16).
    fn rt(&self) -> usize;

    /// R-type destination register (bits 15-11).
    fn rd(&self) -> usize;

    /// Shift amount (bits 10-6).
    fn shamt(&self) -> u32;

    /// SPECIAL function code (bits 5-0).
    fn funct(&self) -> u32;

    /// Raw 16-bit immediate (bits 15-0), zero-extended.
    fn imm16(&self) -> u32;

    /// 16-bit immediate sign-extended to 32 bits.
    fn simm(&self) -> u32;

    /// 26-bit jump target field (bits 25-0).
    fn target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> 26) & FIELD6_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> 21) & FIELD5_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> 16) & FIELD5_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 11) & FIELD5_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> 6) & FIELD5_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FIELD6_MASK
    }

    #[inline(always)]
    fn imm16(&self) -> u32 {
        self & IMM_MASK
    }

    /// Sign-extends by reinterpreting the low half as `i16`.
    #[inline(always)]
    fn simm(&self) -> u32 {
        i32::from(*self as u16 as i16) as u32
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }
}

/// Decoded instruction structure containing all extracted fields.
///
/// Every field is extracted regardless of format; consumers pick the ones
/// their instruction form defines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Primary opcode.
    pub opcode: u32,
    /// First source register index.
    pub rs: usize,
    /// Second source register index.
    pub rt: usize,
    /// R-type destination register index.
    pub rd: usize,
    /// Shift amount.
    pub shamt: u32,
    /// SPECIAL function code.
    pub funct: u32,
    /// Sign-extended immediate.
    pub imm: u32,
    /// Zero-extended immediate.
    pub zimm: u32,
    /// 26-bit jump target field.
    pub target: u32,
}
