//! Combinational execute datapath.
//!
//! Given an instruction's control signals, fields and resolved source operands,
//! computes everything the Execute stage produces: the ALU/link/HI-LO-move
//! result, the new HI/LO pair, and the control-transfer target. The pipeline's
//! Execute stage and the sequential reference model both call [`evaluate`], so
//! the two can only differ in *when* operands are read, never in *what* an
//! instruction computes.

use crate::common::constants::WORD_BYTES;
use crate::core::pipeline::signals::{ControlSignals, HiLoOp, JumpKind, OpASrc, OpBSrc};
use crate::core::units::alu::Alu;
use crate::core::units::bru::Bru;
use crate::core::units::muldiv::MulDiv;
use crate::isa::Decoded;

/// Source operand values after register read and forwarding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Operands {
    /// Value of `rs`.
    pub rs: u32,
    /// Value of `rt`.
    pub rt: u32,
    /// Current HI.
    pub hi: u32,
    /// Current LO.
    pub lo: u32,
}

/// Result of executing one instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExecOutcome {
    /// Register result, or the effective address for loads and stores.
    pub value: u32,
    /// Data to store (the `rt` value).
    pub store_data: u32,
    /// New `(hi, lo)`, if the instruction writes them.
    pub hilo: Option<(u32, u32)>,
    /// Next PC, if control transfers.
    pub redirect: Option<u32>,
}

/// Executes one instruction's datapath.
pub fn evaluate(ctrl: &ControlSignals, d: &Decoded, pc: u32, ops: Operands) -> ExecOutcome {
    let a = match ctrl.a_src {
        OpASrc::Rs => ops.rs,
        OpASrc::Rt => ops.rt,
        OpASrc::Zero => 0,
    };
    let b = match ctrl.b_src {
        OpBSrc::Imm => d.imm,
        OpBSrc::ZeroImm => d.zimm,
        OpBSrc::Rt => ops.rt,
        OpBSrc::Shamt => d.shamt,
    };

    let (value, hilo) = match ctrl.hilo {
        HiLoOp::None => {
            let value = if ctrl.link {
                pc.wrapping_add(WORD_BYTES)
            } else {
                Alu::execute(ctrl.alu, a, b)
            };
            (value, None)
        }
        HiLoOp::Mfhi => (ops.hi, None),
        HiLoOp::Mflo => (ops.lo, None),
        HiLoOp::Mthi => (0, Some((ops.rs, ops.lo))),
        HiLoOp::Mtlo => (0, Some((ops.hi, ops.rs))),
        op @ (HiLoOp::Mult | HiLoOp::Multu | HiLoOp::Div | HiLoOp::Divu) => {
            (0, MulDiv::execute(op, ops.rs, ops.rt))
        }
    };

    let redirect = match ctrl.jump {
        JumpKind::Direct => Some(Bru::jump_target(pc, d.target)),
        JumpKind::Register => Some(ops.rs),
        JumpKind::None => {
            Bru::taken(ctrl.branch, ops.rs, ops.rt).then(|| Bru::branch_target(pc, d.imm))
        }
    };

    ExecOutcome {
        value,
        store_data: ops.rt,
        hilo,
        redirect,
    }
}
