//! Pipeline control signals and operation types.
//!
//! This module defines the signals that control instruction execution. It performs:
//! 1. **Operation Classification:** Categorizes ALU, HI/LO, branch and jump behaviour.
//! 2. **Operand Selection:** Defines sources for ALU inputs (registers, immediates, shift amount).
//! 3. **Memory Control:** Specifies access widths and sign-extension requirements.
//! 4. **Register Control:** Names the destination field and the source registers read.

use crate::common::constants::REG_RA;
use crate::isa::Decoded;
use crate::isa::op::Op;

/// ALU operation types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// 32-bit wrapping addition (also address generation).
    #[default]
    Add,

    /// 32-bit wrapping subtraction.
    Sub,

    /// Bitwise AND.
    And,

    /// Bitwise OR.
    Or,

    /// Bitwise XOR.
    Xor,

    /// Bitwise NOR.
    Nor,

    /// Set less than (signed), yielding 0 or 1.
    Slt,

    /// Shift left logical.
    Sll,

    /// Shift right logical.
    Srl,

    /// Shift right arithmetic.
    Sra,

    /// Load upper immediate: operand B shifted into the high half.
    Lui,
}

/// Operations on the HI/LO register pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HiLoOp {
    /// HI/LO untouched.
    #[default]
    None,

    /// Signed 32x32 multiply into HI:LO.
    Mult,

    /// Unsigned 32x32 multiply into HI:LO.
    Multu,

    /// Signed divide: LO = quotient, HI = remainder.
    Div,

    /// Unsigned divide: LO = quotient, HI = remainder.
    Divu,

    /// Copy HI into the destination register.
    Mfhi,

    /// Copy LO into the destination register.
    Mflo,

    /// Copy `rs` into HI.
    Mthi,

    /// Copy `rs` into LO.
    Mtlo,
}

/// Memory access width for load and store operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MemWidth {
    /// No memory operation.
    #[default]
    Nop,

    /// 8-bit byte access.
    Byte,

    /// 16-bit half-word access.
    Half,

    /// 32-bit word access.
    Word,
}

/// Source for ALU operand A.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpASrc {
    /// Use the `rs` register value.
    #[default]
    Rs,

    /// Use the `rt` register value (shifts).
    Rt,

    /// Use zero.
    Zero,
}

/// Source for ALU operand B.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpBSrc {
    /// Use the sign-extended immediate.
    #[default]
    Imm,

    /// Use the zero-extended immediate.
    ZeroImm,

    /// Use the `rt` register value.
    Rt,

    /// Use the shift-amount field.
    Shamt,
}

/// Branch condition evaluated by the branch unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BranchCond {
    /// Not a branch.
    #[default]
    Never,

    /// `rs == rt`.
    Eq,

    /// `rs != rt`.
    Ne,

    /// `rs <= 0` (signed).
    Lez,

    /// `rs > 0` (signed).
    Gtz,

    /// `rs < 0` (signed).
    Ltz,

    /// `rs >= 0` (signed).
    Gez,
}

/// Unconditional control transfer kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JumpKind {
    /// Not a jump.
    #[default]
    None,

    /// Region-relative 26-bit target (`J`, `JAL`).
    Direct,

    /// Target taken from `rs` (`JR`, `JALR`).
    Register,
}

/// Field naming the destination register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RegDst {
    /// No register is written.
    #[default]
    None,

    /// The R-type `rd` field.
    Rd,

    /// The I-type `rt` field.
    Rt,

    /// The return-address register (`$31`).
    Ra,
}

/// Control signals for pipeline stage execution.
///
/// Generated once per instruction in decode and carried through every later
/// latch. The default value is a no-op: it reads nothing, writes nothing and
/// never redirects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Destination register field.
    pub reg_dst: RegDst,
    /// Instruction reads `rs`.
    pub reads_rs: bool,
    /// Instruction reads `rt`.
    pub reads_rt: bool,
    /// Enable memory read operation (load).
    pub mem_read: bool,
    /// Enable memory write operation (store).
    pub mem_write: bool,
    /// Width of memory access.
    pub width: MemWidth,
    /// Load should be sign-extended.
    pub signed_load: bool,
    /// ALU operation to perform.
    pub alu: AluOp,
    /// Source selection for ALU operand A.
    pub a_src: OpASrc,
    /// Source selection for ALU operand B.
    pub b_src: OpBSrc,
    /// HI/LO operation.
    pub hilo: HiLoOp,
    /// Conditional branch predicate.
    pub branch: BranchCond,
    /// Unconditional jump kind.
    pub jump: JumpKind,
    /// Destination receives the return address (`pc + 4`).
    pub link: bool,
    /// Instruction is `SYSCALL`.
    pub is_syscall: bool,
    /// Encoding was not recognized; the instruction runs as a no-op.
    pub decode_fault: bool,
}

impl ControlSignals {
    /// No-op control word for an encoding that failed to decode.
    pub fn unrecognized() -> Self {
        Self {
            decode_fault: true,
            ..Self::default()
        }
    }

    /// Builds the control word for `op`.
    pub fn for_op(op: Op) -> Self {
        let base = Self::default();
        let rrr = |alu| Self {
            reg_dst: RegDst::Rd,
            reads_rs: true,
            reads_rt: true,
            alu,
            b_src: OpBSrc::Rt,
            ..base
        };
        let shift = |alu| Self {
            reg_dst: RegDst::Rd,
            reads_rt: true,
            alu,
            a_src: OpASrc::Rt,
            b_src: OpBSrc::Shamt,
            ..base
        };
        let imm = |alu, b_src| Self {
            reg_dst: RegDst::Rt,
            reads_rs: true,
            alu,
            b_src,
            ..base
        };
        let muldiv = |hilo| Self {
            reads_rs: true,
            reads_rt: true,
            hilo,
            ..base
        };
        let load = |width, signed_load| Self {
            reg_dst: RegDst::Rt,
            reads_rs: true,
            mem_read: true,
            width,
            signed_load,
            ..base
        };
        let store = |width| Self {
            reads_rs: true,
            reads_rt: true,
            mem_write: true,
            width,
            ..base
        };
        let branch = |branch, reads_rt| Self {
            reads_rs: true,
            reads_rt,
            branch,
            ..base
        };

        match op {
            Op::Sll => shift(AluOp::Sll),
            Op::Srl => shift(AluOp::Srl),
            Op::Sra => shift(AluOp::Sra),
            Op::Jr => Self {
                reads_rs: true,
                jump: JumpKind::Register,
                ..base
            },
            Op::Jalr => Self {
                reg_dst: RegDst::Rd,
                reads_rs: true,
                jump: JumpKind::Register,
                link: true,
                ..base
            },
            Op::Syscall => Self {
                is_syscall: true,
                ..base
            },
            Op::Mfhi => Self {
                reg_dst: RegDst::Rd,
                hilo: HiLoOp::Mfhi,
                ..base
            },
            Op::Mflo => Self {
                reg_dst: RegDst::Rd,
                hilo: HiLoOp::Mflo,
                ..base
            },
            Op::Mthi => Self {
                reads_rs: true,
                hilo: HiLoOp::Mthi,
                ..base
            },
            Op::Mtlo => Self {
                reads_rs: true,
                hilo: HiLoOp::Mtlo,
                ..base
            },
            Op::Mult => muldiv(HiLoOp::Mult),
            Op::Multu => muldiv(HiLoOp::Multu),
            Op::Div => muldiv(HiLoOp::Div),
            Op::Divu => muldiv(HiLoOp::Divu),
            Op::Add | Op::Addu => rrr(AluOp::Add),
            Op::Sub | Op::Subu => rrr(AluOp::Sub),
            Op::And => rrr(AluOp::And),
            Op::Or => rrr(AluOp::Or),
            Op::Xor => rrr(AluOp::Xor),
            Op::Nor => rrr(AluOp::Nor),
            Op::Slt => rrr(AluOp::Slt),
            Op::Bltz => branch(BranchCond::Ltz, false),
            Op::Bgez => branch(BranchCond::Gez, false),
            Op::Blez => branch(BranchCond::Lez, false),
            Op::Bgtz => branch(BranchCond::Gtz, false),
            Op::Beq => branch(BranchCond::Eq, true),
            Op::Bne => branch(BranchCond::Ne, true),
            Op::J => Self {
                jump: JumpKind::Direct,
                ..base
            },
            Op::Jal => Self {
                reg_dst: RegDst::Ra,
                jump: JumpKind::Direct,
                link: true,
                ..base
            },
            Op::Addi | Op::Addiu => imm(AluOp::Add, OpBSrc::Imm),
            Op::Slti => imm(AluOp::Slt, OpBSrc::Imm),
            Op::Andi => imm(AluOp::And, OpBSrc::ZeroImm),
            Op::Ori => imm(AluOp::Or, OpBSrc::ZeroImm),
            Op::Xori => imm(AluOp::Xor, OpBSrc::ZeroImm),
            Op::Lui => Self {
                reg_dst: RegDst::Rt,
                alu: AluOp::Lui,
                a_src: OpASrc::Zero,
                b_src: OpBSrc::ZeroImm,
                ..base
            },
            Op::Lb => load(MemWidth::Byte, true),
            Op::Lh => load(MemWidth::Half, true),
            Op::Lw => load(MemWidth::Word, false),
            Op::Sb => store(MemWidth::Byte),
            Op::Sh => store(MemWidth::Half),
            Op::Sw => store(MemWidth::Word),
        }
    }

    /// Destination register index named by `reg_dst`, if any.
    pub const fn dest(&self, d: &Decoded) -> Option<usize> {
        match self.reg_dst {
            RegDst::None => None,
            RegDst::Rd => Some(d.rd),
            RegDst::Rt => Some(d.rt),
            RegDst::Ra => Some(REG_RA),
        }
    }

    /// Returns `true` for branches and jumps.
    pub fn is_control(&self) -> bool {
        self.branch != BranchCond::Never || self.jump != JumpKind::None
    }
}
