//! MIPS32 Instruction Decoder.
//!
//! This module turns a 32-bit encoding into its fields (`decode`) and then into a
//! supported operation (`classify`). Decoding is total and side-effect free: every
//! word yields a `Decoded`, and classification reports unknown encodings as a
//! `DecodeFault` instead of panicking.

use crate::common::DecodeFault;
use crate::isa::instruction::{Decoded, InstructionBits};
use crate::isa::mips32::{funct, opcodes, regimm};
use crate::isa::op::Op;

/// Extracts every field of `inst`.
pub fn decode(inst: u32) -> Decoded {
    Decoded {
        raw: inst,
        opcode: inst.opcode(),
        rs: inst.rs(),
        rt: inst.rt(),
        rd: inst.rd(),
        shamt: inst.shamt(),
        funct: inst.funct(),
        imm: inst.simm(),
        zimm: inst.imm16(),
        target: inst.target(),
    }
}

/// Maps decoded fields to a supported operation.
///
/// # Errors
///
/// Returns the `DecodeFault` describing which field holds an unsupported value.
pub fn classify(d: &Decoded) -> Result<Op, DecodeFault> {
    let op = match d.opcode {
        opcodes::OP_SPECIAL => classify_special(d.funct)?,
        opcodes::OP_REGIMM => match d.rt as u32 {
            regimm::BLTZ => Op::Bltz,
            regimm::BGEZ => Op::Bgez,
            rt => return Err(DecodeFault::UnknownRegimm { rt }),
        },
        opcodes::OP_J => Op::J,
        opcodes::OP_JAL => Op::Jal,
        opcodes::OP_BEQ => Op::Beq,
        opcodes::OP_BNE => Op::Bne,
        opcodes::OP_BLEZ => Op::Blez,
        opcodes::OP_BGTZ => Op::Bgtz,
        opcodes::OP_ADDI => Op::Addi,
        opcodes::OP_ADDIU => Op::Addiu,
        opcodes::OP_SLTI => Op::Slti,
        opcodes::OP_ANDI => Op::Andi,
        opcodes::OP_ORI => Op::Ori,
        opcodes::OP_XORI => Op::Xori,
        opcodes::OP_LUI => Op::Lui,
        opcodes::OP_LB => Op::Lb,
        opcodes::OP_LH => Op::Lh,
        opcodes::OP_LW => Op::Lw,
        opcodes::OP_SB => Op::Sb,
        opcodes::OP_SH => Op::Sh,
        opcodes::OP_SW => Op::Sw,
        opcode => return Err(DecodeFault::UnknownOpcode { opcode }),
    };
    Ok(op)
}

const fn classify_special(f: u32) -> Result<Op, DecodeFault> {
    let op = match f {
        funct::SLL => Op::Sll,
        funct::SRL => Op::Srl,
        funct::SRA => Op::Sra,
        funct::JR => Op::Jr,
        funct::JALR => Op::Jalr,
        funct::SYSCALL => Op::Syscall,
        funct::MFHI => Op::Mfhi,
        funct::MTHI => Op::Mthi,
        funct::MFLO => Op::Mflo,
        funct::MTLO => Op::Mtlo,
        funct::MULT => Op::Mult,
        funct::MULTU => Op::Multu,
        funct::DIV => Op::Div,
        funct::DIVU => Op::Divu,
        funct::ADD => Op::Add,
        funct::ADDU => Op::Addu,
        funct::SUB => Op::Sub,
        funct::SUBU => Op::Subu,
        funct::AND => Op::And,
        funct::OR => Op::Or,
        funct::XOR => Op::Xor,
        funct::NOR => Op::Nor,
        funct::SLT => Op::Slt,
        funct => return Err(DecodeFault::UnknownFunction { funct }),
    };
    Ok(op)
}
