//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the instruction pipeline.
//! It commits results to the register file of the next snapshot and reports
//! what retired: nothing (bubble), an instruction, or a precise address fault.

use tracing::trace;

use crate::common::AddressFault;
use crate::core::arch::ArchState;
use crate::core::pipeline::latches::MemWb;
use crate::core::pipeline::signals::ControlSignals;

/// What left the pipeline this cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Retire {
    /// A bubble reached writeback.
    Nothing,
    /// An instruction completed.
    Instruction {
        /// Address of the instruction.
        pc: u32,
        /// Its control signals (for statistics and `SYSCALL` detection).
        ctrl: ControlSignals,
    },
    /// A faulting instruction reached writeback; it has no architectural effect.
    Fault {
        /// Address of the faulting instruction.
        pc: u32,
        /// The fault it carries.
        fault: AddressFault,
    },
}

/// Executes the writeback stage.
pub fn wb_stage(mem_wb: &MemWb, next: &mut ArchState) -> Retire {
    let Some(wb) = mem_wb.as_valid() else {
        return Retire::Nothing;
    };
    if let Some(fault) = wb.fault {
        return Retire::Fault { pc: wb.pc, fault };
    }
    if let Some(dest) = wb.dest {
        trace!(pc = wb.pc, reg = dest, value = wb.result(), "WB");
        next.gpr.write(dest, wb.result());
    }
    Retire::Instruction {
        pc: wb.pc,
        ctrl: wb.ctrl,
    }
}
