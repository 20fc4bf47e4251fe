//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the pipeline. It performs the following:
//! 1. **Squash:** Discards the IF/ID instruction when Execute redirects or halts.
//! 2. **Hazard Detection:** Detects load-use hazards and requests a one-cycle stall.
//! 3. **Instruction Decoding:** Classifies the raw word and generates control signals;
//!    unknown encodings are reported and carried forward as no-ops.
//! 4. **Register Read:** Reads `rs`/`rt` from the committed register file, with the
//!    value retiring this cycle bypassed in.

use tracing::{trace, warn};

use crate::core::arch::ArchState;
use crate::core::pipeline::hazards::{self, ControlHazard};
use crate::core::pipeline::latches::{IdEx, IdExEntry, IfId, Latch, MemWb};
use crate::core::pipeline::signals::ControlSignals;
use crate::isa::disasm::disassemble;
use crate::isa::{classify, decode};
use crate::stats::SimStats;

/// Output of the decode stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeOutput {
    /// New ID/EX latch.
    pub id_ex: IdEx,
    /// `true` if IF/ID and the PC must be held this cycle.
    pub stall: bool,
}

/// Executes the instruction decode stage.
///
/// # Arguments
///
/// * `if_id` - IF/ID latch as of the start of the cycle.
/// * `id_ex` - ID/EX latch as of the start of the cycle (for load-use detection).
/// * `mem_wb` - MEM/WB latch as of the start of the cycle (for the register bypass).
/// * `current` - Committed architectural state.
/// * `hazard` - Control request raised by Execute or Memory this cycle.
/// * `stats` - Statistics sink.
pub fn decode_stage(
    if_id: &IfId,
    id_ex: &IdEx,
    mem_wb: &MemWb,
    current: &ArchState,
    hazard: ControlHazard,
    stats: &mut SimStats,
) -> DecodeOutput {
    let bubble = |stall| DecodeOutput {
        id_ex: Latch::Bubble,
        stall,
    };

    let Some(entry) = if_id.as_valid() else {
        return bubble(false);
    };

    if hazard.squashes() {
        trace!(pc = entry.pc, "ID  squash");
        if matches!(hazard, ControlHazard::Redirect { .. }) {
            stats.squashed_fetches += 1;
        }
        return bubble(false);
    }

    if hazards::need_stall_load_use(id_ex, if_id) {
        trace!(pc = entry.pc, "ID  load-use stall");
        stats.stalls_load_use += 1;
        return bubble(true);
    }

    let fields = decode(entry.inst);
    if entry.fault.is_some() {
        return DecodeOutput {
            id_ex: Latch::Valid(IdExEntry {
                pc: entry.pc,
                fields,
                fault: entry.fault,
                ..IdExEntry::default()
            }),
            stall: false,
        };
    }

    let ctrl = match classify(&fields) {
        Ok(op) => ControlSignals::for_op(op),
        Err(fault) => {
            warn!(pc = entry.pc, inst = entry.inst, %fault, "decode fault, executing as no-op");
            ControlSignals::unrecognized()
        }
    };

    let read = |reg: usize| {
        hazards::bypass_decode(reg, mem_wb).unwrap_or_else(|| current.gpr.read(reg))
    };
    let dest = ctrl.dest(&fields).filter(|&r| !current.gpr.discards(r));

    trace!(pc = entry.pc, asm = %disassemble(entry.inst), ?dest, "ID");

    DecodeOutput {
        id_ex: Latch::Valid(IdExEntry {
            pc: entry.pc,
            fields,
            dest,
            rs_val: read(fields.rs),
            rt_val: read(fields.rt),
            ctrl,
            fault: None,
        }),
        stall: false,
    }
}
