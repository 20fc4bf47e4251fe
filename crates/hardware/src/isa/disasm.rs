//! Instruction Disassembler for the MIPS32 subset.
//!
//! Converts a 32-bit instruction encoding into assembler text for trace logging,
//! program listings and test diagnostics.
//!
//! Branch operands are printed as the raw signed word offset from the delay
//! position (`pc + 4`); jump operands as the 28-bit region-relative byte address.
//!
//! # Usage
//!
//! ```
//! use mupipe_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x2408_0005), "addiu $t0, $zero, 5");
//! assert_eq!(disassemble(0x8FA9_0004), "lw $t1, 4($sp)");
//! assert_eq!(disassemble(0x0000_0000), "nop");
//! ```

use crate::isa::abi::reg_name;
use crate::isa::decode::{classify, decode};
use crate::isa::op::{Format, Op};

/// Disassembles one instruction word.
///
/// Unrecognised encodings render as `<unknown 0x........>`.
pub fn disassemble(inst: u32) -> String {
    if inst == 0 {
        return "nop".to_string();
    }
    let d = decode(inst);
    let Ok(op) = classify(&d) else {
        return format!("<unknown {inst:#010x}>");
    };
    let m = op.mnemonic();
    let r = |idx: usize| format!("${}", reg_name(idx));
    let simm = d.imm as i32;

    match op.format() {
        Format::RegRegReg => format!("{m} {}, {}, {}", r(d.rd), r(d.rs), r(d.rt)),
        Format::Shift => format!("{m} {}, {}, {}", r(d.rd), r(d.rt), d.shamt),
        Format::RegRs => format!("{m} {}", r(d.rs)),
        Format::RegRdRs => format!("{m} {}, {}", r(d.rd), r(d.rs)),
        Format::RegRd => format!("{m} {}", r(d.rd)),
        Format::RegPair => format!("{m} {}, {}", r(d.rs), r(d.rt)),
        Format::None => m.to_string(),
        Format::Imm => match op {
            Op::Andi | Op::Ori | Op::Xori => {
                format!("{m} {}, {}, {:#x}", r(d.rt), r(d.rs), d.zimm)
            }
            _ => format!("{m} {}, {}, {simm}", r(d.rt), r(d.rs)),
        },
        Format::ImmUpper => format!("{m} {}, {:#x}", r(d.rt), d.zimm),
        Format::BranchPair => format!("{m} {}, {}, {simm}", r(d.rs), r(d.rt)),
        Format::BranchZero => format!("{m} {}, {simm}", r(d.rs)),
        Format::Jump => format!("{m} {:#x}", d.target << 2),
        Format::Memory => format!("{m} {}, {simm}({})", r(d.rt), r(d.rs)),
    }
}
