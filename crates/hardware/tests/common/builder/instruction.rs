use mupipe_core::isa::mips32::funct;
use mupipe_core::isa::mips32::opcodes::*;
use mupipe_core::isa::mips32::regimm;

/// Assembles one MIPS32 instruction word.
///
/// R-type words are produced when the opcode is `OP_SPECIAL`, J-type for
/// `OP_J`/`OP_JAL`, I-type otherwise.
pub struct InstructionBuilder {
    opcode: u32,
    rs: u32,
    rt: u32,
    rd: u32,
    shamt: u32,
    funct: u32,
    imm: i32,
    target: u32,
}

impl Default for InstructionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InstructionBuilder {
    pub fn new() -> Self {
        Self {
            opcode: 0,
            rs: 0,
            rt: 0,
            rd: 0,
            shamt: 0,
            funct: 0,
            imm: 0,
            target: 0,
        }
    }

    pub fn opcode(mut self, op: u32) -> Self {
        self.opcode = op;
        self
    }

    pub fn rs(mut self, rs: u32) -> Self {
        self.rs = rs;
        self
    }

    pub fn rt(mut self, rt: u32) -> Self {
        self.rt = rt;
        self
    }

    pub fn rd(mut self, rd: u32) -> Self {
        self.rd = rd;
        self
    }

    pub fn shamt(mut self, shamt: u32) -> Self {
        self.shamt = shamt;
        self
    }

    pub fn funct(mut self, funct: u32) -> Self {
        self.funct = funct;
        self
    }

    pub fn imm(mut self, imm: i32) -> Self {
        self.imm = imm;
        self
    }

    pub fn target(mut self, target: u32) -> Self {
        self.target = target;
        self
    }

    // --- Generic formats ---

    pub fn r(self, f: u32, rd: u32, rs: u32, rt: u32) -> Self {
        self.opcode(OP_SPECIAL).funct(f).rd(rd).rs(rs).rt(rt)
    }

    pub fn i(self, op: u32, rt: u32, rs: u32, imm: i32) -> Self {
        self.opcode(op).rt(rt).rs(rs).imm(imm)
    }

    // --- R-type ---

    pub fn add(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.r(funct::ADD, rd, rs, rt)
    }

    pub fn addu(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.r(funct::ADDU, rd, rs, rt)
    }

    pub fn sub(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.r(funct::SUB, rd, rs, rt)
    }

    pub fn subu(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.r(funct::SUBU, rd, rs, rt)
    }

    pub fn and(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.r(funct::AND, rd, rs, rt)
    }

    pub fn or(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.r(funct::OR, rd, rs, rt)
    }

    pub fn xor(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.r(funct::XOR, rd, rs, rt)
    }

    pub fn nor(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.r(funct::NOR, rd, rs, rt)
    }

    pub fn slt(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.r(funct::SLT, rd, rs, rt)
    }

    pub fn sll(self, rd: u32, rt: u32, sa: u32) -> Self {
        self.r(funct::SLL, rd, 0, rt).shamt(sa)
    }

    pub fn srl(self, rd: u32, rt: u32, sa: u32) -> Self {
        self.r(funct::SRL, rd, 0, rt).shamt(sa)
    }

    pub fn sra(self, rd: u32, rt: u32, sa: u32) -> Self {
        self.r(funct::SRA, rd, 0, rt).shamt(sa)
    }

    pub fn jr(self, rs: u32) -> Self {
        self.r(funct::JR, 0, rs, 0)
    }

    pub fn jalr(self, rd: u32, rs: u32) -> Self {
        self.r(funct::JALR, rd, rs, 0)
    }

    pub fn syscall(self) -> Self {
        self.r(funct::SYSCALL, 0, 0, 0)
    }

    pub fn mfhi(self, rd: u32) -> Self {
        self.r(funct::MFHI, rd, 0, 0)
    }

    pub fn mflo(self, rd: u32) -> Self {
        self.r(funct::MFLO, rd, 0, 0)
    }

    pub fn mthi(self, rs: u32) -> Self {
        self.r(funct::MTHI, 0, rs, 0)
    }

    pub fn mtlo(self, rs: u32) -> Self {
        self.r(funct::MTLO, 0, rs, 0)
    }

    pub fn mult(self, rs: u32, rt: u32) -> Self {
        self.r(funct::MULT, 0, rs, rt)
    }

    pub fn multu(self, rs: u32, rt: u32) -> Self {
        self.r(funct::MULTU, 0, rs, rt)
    }

    pub fn div(self, rs: u32, rt: u32) -> Self {
        self.r(funct::DIV, 0, rs, rt)
    }

    pub fn divu(self, rs: u32, rt: u32) -> Self {
        self.r(funct::DIVU, 0, rs, rt)
    }

    // --- I-type ---

    pub fn addi(self, rt: u32, rs: u32, imm: i32) -> Self {
        self.i(OP_ADDI, rt, rs, imm)
    }

    pub fn addiu(self, rt: u32, rs: u32, imm: i32) -> Self {
        self.i(OP_ADDIU, rt, rs, imm)
    }

    pub fn slti(self, rt: u32, rs: u32, imm: i32) -> Self {
        self.i(OP_SLTI, rt, rs, imm)
    }

    pub fn andi(self, rt: u32, rs: u32, imm: u16) -> Self {
        self.i(OP_ANDI, rt, rs, i32::from(imm))
    }

    pub fn ori(self, rt: u32, rs: u32, imm: u16) -> Self {
        self.i(OP_ORI, rt, rs, i32::from(imm))
    }

    pub fn xori(self, rt: u32, rs: u32, imm: u16) -> Self {
        self.i(OP_XORI, rt, rs, i32::from(imm))
    }

    pub fn lui(self, rt: u32, imm: u16) -> Self {
        self.i(OP_LUI, rt, 0, i32::from(imm))
    }

    pub fn lb(self, rt: u32, base: u32, off: i32) -> Self {
        self.i(OP_LB, rt, base, off)
    }

    pub fn lh(self, rt: u32, base: u32, off: i32) -> Self {
        self.i(OP_LH, rt, base, off)
    }

    pub fn lw(self, rt: u32, base: u32, off: i32) -> Self {
        self.i(OP_LW, rt, base, off)
    }

    pub fn sb(self, rt: u32, base: u32, off: i32) -> Self {
        self.i(OP_SB, rt, base, off)
    }

    pub fn sh(self, rt: u32, base: u32, off: i32) -> Self {
        self.i(OP_SH, rt, base, off)
    }

    pub fn sw(self, rt: u32, base: u32, off: i32) -> Self {
        self.i(OP_SW, rt, base, off)
    }

    // --- Branches (offsets in instructions, relative to pc + 4) ---

    pub fn beq(self, rs: u32, rt: u32, off: i32) -> Self {
        self.i(OP_BEQ, rt, rs, off)
    }

    pub fn bne(self, rs: u32, rt: u32, off: i32) -> Self {
        self.i(OP_BNE, rt, rs, off)
    }

    pub fn blez(self, rs: u32, off: i32) -> Self {
        self.i(OP_BLEZ, 0, rs, off)
    }

    pub fn bgtz(self, rs: u32, off: i32) -> Self {
        self.i(OP_BGTZ, 0, rs, off)
    }

    pub fn bltz(self, rs: u32, off: i32) -> Self {
        self.i(OP_REGIMM, regimm::BLTZ, rs, off)
    }

    pub fn bgez(self, rs: u32, off: i32) -> Self {
        self.i(OP_REGIMM, regimm::BGEZ, rs, off)
    }

    // --- J-type (absolute byte address) ---

    pub fn j(self, addr: u32) -> Self {
        self.opcode(OP_J).target(addr >> 2)
    }

    pub fn jal(self, addr: u32) -> Self {
        self.opcode(OP_JAL).target(addr >> 2)
    }

    pub fn build(self) -> u32 {
        match self.opcode {
            OP_J | OP_JAL => (self.opcode << 26) | (self.target & 0x03FF_FFFF),
            OP_SPECIAL => {
                ((self.rs & 0x1F) << 21)
                    | ((self.rt & 0x1F) << 16)
                    | ((self.rd & 0x1F) << 11)
                    | ((self.shamt & 0x1F) << 6)
                    | (self.funct & 0x3F)
            }
            op => {
                (op << 26)
                    | ((self.rs & 0x1F) << 21)
                    | ((self.rt & 0x1F) << 16)
                    | (self.imm as u32 & 0xFFFF)
            }
        }
    }
}

/// Shorthand for `InstructionBuilder::new()`.
pub fn asm() -> InstructionBuilder {
    InstructionBuilder::new()
}
