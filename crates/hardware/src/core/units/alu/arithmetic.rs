//! ALU arithmetic operations.
//!
//! Signed and unsigned add/subtract share one bit pattern: results wrap modulo
//! 2^32 and overflow is never trapped.

use crate::core::pipeline::signals::AluOp;

/// Bit position of the upper halfword.
const UPPER_SHIFT: u32 = 16;

/// Executes an arithmetic operation. Returns `0` for non-arithmetic opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        AluOp::Lui => b << UPPER_SHIFT,
        _ => 0,
    }
}
