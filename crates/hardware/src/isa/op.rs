//! Supported instruction operations.
//!
//! `Op` names every instruction the pipeline implements. Decoding maps a raw
//! word to an `Op`; control-signal generation and disassembly consume it.

/// One supported MIPS32 instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Op {
    Sll,
    Srl,
    Sra,
    Jr,
    Jalr,
    Syscall,
    Mfhi,
    Mthi,
    Mflo,
    Mtlo,
    Mult,
    Multu,
    Div,
    Divu,
    Add,
    Addu,
    Sub,
    Subu,
    And,
    Or,
    Xor,
    Nor,
    Slt,
    Bltz,
    Bgez,
    J,
    Jal,
    Beq,
    Bne,
    Blez,
    Bgtz,
    Addi,
    Addiu,
    Slti,
    Andi,
    Ori,
    Xori,
    Lui,
    Lb,
    Lh,
    Lw,
    Sb,
    Sh,
    Sw,
}

/// Assembly operand layout, used by the disassembler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// `rd, rs, rt`
    RegRegReg,
    /// `rd, rt, shamt`
    Shift,
    /// `rs`
    RegRs,
    /// `rd, rs`
    RegRdRs,
    /// `rd`
    RegRd,
    /// `rs, rt`
    RegPair,
    /// No operands.
    None,
    /// `rt, rs, imm`
    Imm,
    /// `rt, imm`
    ImmUpper,
    /// `rs, rt, offset`
    BranchPair,
    /// `rs, offset`
    BranchZero,
    /// `target`
    Jump,
    /// `rt, offset(rs)`
    Memory,
}

impl Op {
    /// Lower-case assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Sll => "sll",
            Self::Srl => "srl",
            Self::Sra => "sra",
            Self::Jr => "jr",
            Self::Jalr => "jalr",
            Self::Syscall => "syscall",
            Self::Mfhi => "mfhi",
            Self::Mthi => "mthi",
            Self::Mflo => "mflo",
            Self::Mtlo => "mtlo",
            Self::Mult => "mult",
            Self::Multu => "multu",
            Self::Div => "div",
            Self::Divu => "divu",
            Self::Add => "add",
            Self::Addu => "addu",
            Self::Sub => "sub",
            Self::Subu => "subu",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Nor => "nor",
            Self::Slt => "slt",
            Self::Bltz => "bltz",
            Self::Bgez => "bgez",
            Self::J => "j",
            Self::Jal => "jal",
            Self::Beq => "beq",
            Self::Bne => "bne",
            Self::Blez => "blez",
            Self::Bgtz => "bgtz",
            Self::Addi => "addi",
            Self::Addiu => "addiu",
            Self::Slti => "slti",
            Self::Andi => "andi",
            Self::Ori => "ori",
            Self::Xori => "xori",
            Self::Lui => "lui",
            Self::Lb => "lb",
            Self::Lh => "lh",
            Self::Lw => "lw",
            Self::Sb => "sb",
            Self::Sh => "sh",
            Self::Sw => "sw",
        }
    }

    /// Operand layout of the instruction's assembly form.
    pub const fn format(self) -> Format {
        match self {
            Self::Add
            | Self::Addu
            | Self::Sub
            | Self::Subu
            | Self::And
            | Self::Or
            | Self::Xor
            | Self::Nor
            | Self::Slt => Format::RegRegReg,
            Self::Sll | Self::Srl | Self::Sra => Format::Shift,
            Self::Jr | Self::Mthi | Self::Mtlo => Format::RegRs,
            Self::Jalr => Format::RegRdRs,
            Self::Mfhi | Self::Mflo => Format::RegRd,
            Self::Mult | Self::Multu | Self::Div | Self::Divu => Format::RegPair,
            Self::Syscall => Format::None,
            Self::Addi | Self::Addiu | Self::Slti | Self::Andi | Self::Ori | Self::Xori => {
                Format::Imm
            }
            Self::Lui => Format::ImmUpper,
            Self::Beq | Self::Bne => Format::BranchPair,
            Self::Bltz | Self::Bgez | Self::Blez | Self::Bgtz => Format::BranchZero,
            Self::J | Self::Jal => Format::Jump,
            Self::Lb | Self::Lh | Self::Lw | Self::Sb | Self::Sh | Self::Sw => Format::Memory,
        }
    }
}
