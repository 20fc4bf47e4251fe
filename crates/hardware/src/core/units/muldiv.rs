//! Multiply/Divide Unit.
//!
//! Computes the HI/LO pair for `MULT`, `MULTU`, `DIV` and `DIVU`:
//! 1. **Multiply:** full 64-bit product, `HI` = high word, `LO` = low word.
//! 2. **Divide:** `LO` = quotient, `HI` = remainder (sign follows the dividend).
//! 3. **Divide by zero:** no result; HI/LO keep their previous values.

use crate::core::pipeline::signals::HiLoOp;

/// Bits in a machine word.
const WORD_BITS: u32 = 32;

/// Multiply/divide unit.
#[derive(Debug)]
pub struct MulDiv;

impl MulDiv {
    /// Computes `(hi, lo)` for a multiply or divide, or `None` when HI/LO must not change.
    ///
    /// Returns `None` for division by zero and for non-arithmetic `HiLoOp`s.
    ///
    /// # Examples
    ///
    /// ```
    /// use mupipe_core::core::units::muldiv::MulDiv;
    /// use mupipe_core::core::pipeline::signals::HiLoOp;
    ///
    /// assert_eq!(MulDiv::execute(HiLoOp::Mult, 0x1_0000, 0x1_0000), Some((1, 0)));
    /// assert_eq!(MulDiv::execute(HiLoOp::Div, -7_i32 as u32, 2), Some((-1_i32 as u32, -3_i32 as u32)));
    /// assert_eq!(MulDiv::execute(HiLoOp::Divu, 7, 0), None);
    /// ```
    pub const fn execute(op: HiLoOp, a: u32, b: u32) -> Option<(u32, u32)> {
        match op {
            HiLoOp::Mult => {
                let p = (a as i32 as i64).wrapping_mul(b as i32 as i64) as u64;
                Some(split(p))
            }
            HiLoOp::Multu => Some(split((a as u64) * (b as u64))),
            HiLoOp::Div => {
                if b == 0 {
                    return None;
                }
                let (x, y) = (a as i32, b as i32);
                Some((x.wrapping_rem(y) as u32, x.wrapping_div(y) as u32))
            }
            HiLoOp::Divu => {
                if b == 0 {
                    return None;
                }
                Some((a % b, a / b))
            }
            _ => None,
        }
    }
}

const fn split(p: u64) -> (u32, u32) {
    ((p >> WORD_BITS) as u32, p as u32)
}
