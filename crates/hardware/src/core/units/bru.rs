//! Branch Resolution Unit (BRU).
//!
//! Evaluates branch predicates and computes control-transfer targets. Branches
//! and jumps resolve in the Execute stage; the pipeline has no delay slots and
//! no predictor, so every taken transfer costs one squashed fetch.

use crate::common::constants::WORD_BYTES;
use crate::core::pipeline::signals::BranchCond;

/// Bit mask selecting the 256 MiB region kept by direct jumps.
const JUMP_REGION_MASK: u32 = 0xF000_0000;

/// Branch word offsets are scaled to bytes by this shift.
const OFFSET_SHIFT: u32 = 2;

/// Branch resolution unit.
#[derive(Debug)]
pub struct Bru;

impl Bru {
    /// Evaluates `cond` on the source operands.
    pub const fn taken(cond: BranchCond, rs: u32, rt: u32) -> bool {
        let s = rs as i32;
        match cond {
            BranchCond::Never => false,
            BranchCond::Eq => rs == rt,
            BranchCond::Ne => rs != rt,
            BranchCond::Lez => s <= 0,
            BranchCond::Gtz => s > 0,
            BranchCond::Ltz => s < 0,
            BranchCond::Gez => s >= 0,
        }
    }

    /// Branch target: `pc + 4 + (sext(imm) << 2)`.
    pub const fn branch_target(pc: u32, simm: u32) -> u32 {
        pc.wrapping_add(WORD_BYTES)
            .wrapping_add(simm << OFFSET_SHIFT)
    }

    /// Direct jump target: upper four bits of `pc + 4` joined with `target << 2`.
    pub const fn jump_target(pc: u32, target: u32) -> u32 {
        (pc.wrapping_add(WORD_BYTES) & JUMP_REGION_MASK) | (target << OFFSET_SHIFT)
    }
}
