//! Data Hazard Detection, Forwarding and the Control-Hazard Channel.
//!
//! This module implements the logic for keeping pipelined execution identical to
//! sequential execution. It provides:
//! 1. **Hazard Detection:** Identifies load-use hazards that require a one-cycle stall.
//! 2. **Operand Forwarding:** Resolves Read-After-Write (RAW) hazards in Execute by
//!    bypassing the register file from the EX/MEM and MEM/WB latches.
//! 3. **Decode Bypass:** Lets Decode see the value retiring in the same cycle.
//! 4. **Control Channel:** Carries squash/redirect and halt requests from later
//!    stages back to Decode and Fetch within one cycle.
//!
//! Every function here reads latches as they stood at the start of the cycle.

use tracing::trace;

use crate::core::pipeline::latches::{ExMem, IdEx, IdExEntry, IfId, MemWb};
use crate::core::pipeline::signals::ControlSignals;
use crate::isa::{classify, decode};

/// Request raised by Execute (or Memory) for the younger stages this cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlHazard {
    /// Fetch and Decode proceed normally.
    #[default]
    None,
    /// A taken branch or jump: squash the IF/ID slot and fetch from `target`.
    Redirect {
        /// Resolved control-transfer target.
        target: u32,
    },
    /// Stop the machine: squash everything younger, commit `resume_pc`, fetch nothing more.
    Halt {
        /// PC committed once the pipeline drains.
        resume_pc: u32,
    },
}

impl ControlHazard {
    /// Returns `true` if the instruction in IF/ID must be discarded.
    pub const fn squashes(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Checks if a pipeline stall is needed due to a load-use data hazard.
///
/// A load-use hazard occurs when the instruction in Decode reads a register that
/// the load currently in Execute will only produce in the Memory stage.
///
/// ```text
/// ID/EX: lw   $1, 0($2)    <- loads into $1 (in execute)
/// IF/ID: addu $3, $1, $1   <- uses $1 (in decode)
/// ```
pub fn need_stall_load_use(id_ex: &IdEx, if_id: &IfId) -> bool {
    let Some(ex) = id_ex.as_valid() else {
        return false;
    };
    if !ex.ctrl.mem_read || ex.fault.is_some() {
        return false;
    }
    let Some(dest) = ex.dest else {
        return false;
    };
    let Some(id) = if_id.as_valid() else {
        return false;
    };
    if id.fault.is_some() {
        return false;
    }

    let fields = decode(id.inst);
    let Ok(op) = classify(&fields) else {
        return false;
    };
    let ctrl = ControlSignals::for_op(op);
    (ctrl.reads_rs && fields.rs == dest) || (ctrl.reads_rt && fields.rt == dest)
}

/// Returns the value `reg` receives from the instruction retiring this cycle, if any.
///
/// Decode reads the committed register file, which does not yet include the
/// writeback happening in the same cycle; this bypass supplies it.
pub fn bypass_decode(reg: usize, mem_wb: &MemWb) -> Option<u32> {
    let wb = mem_wb.as_valid()?;
    if wb.fault.is_some() || wb.dest != Some(reg) {
        return None;
    }
    trace!(reg, value = wb.result(), "ID  bypass from MEM/WB");
    Some(wb.result())
}

/// Forwards register values from later pipeline stages to resolve data hazards.
///
/// Prefers the most recent producer: the EX/MEM latch (one instruction older),
/// then the MEM/WB latch (two older). Loads in EX/MEM are skipped because their
/// data does not exist yet; the load-use stall guarantees no consumer needs it.
///
/// # Returns
///
/// A tuple `(rs_val, rt_val)` containing the most recent available values.
pub fn forward_operands(id: &IdExEntry, ex_mem: &ExMem, mem_wb: &MemWb) -> (u32, u32) {
    let mut a = id.rs_val;
    let mut b = id.rt_val;
    let mut a_src = "RegFile";
    let mut b_src = "RegFile";

    if let Some(wb) = mem_wb.as_valid().filter(|e| e.fault.is_none()) {
        if let Some(dest) = wb.dest {
            if dest == id.fields.rs {
                a = wb.result();
                a_src = "MEM/WB";
            }
            if dest == id.fields.rt {
                b = wb.result();
                b_src = "MEM/WB";
            }
        }
    }

    if let Some(mem) = ex_mem
        .as_valid()
        .filter(|e| e.fault.is_none() && !e.ctrl.mem_read)
    {
        if let Some(dest) = mem.dest {
            if dest == id.fields.rs {
                a = mem.alu;
                a_src = "EX/MEM";
            }
            if dest == id.fields.rt {
                b = mem.alu;
                b_src = "EX/MEM";
            }
        }
    }

    if a_src != "RegFile" || b_src != "RegFile" {
        trace!(pc = id.pc, rs = id.fields.rs, a_src, rt = id.fields.rt, b_src, "EX  forward");
    }
    (a, b)
}
