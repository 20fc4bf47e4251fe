//! Execute (EX) Stage.
//!
//! This module implements the third stage of the pipeline. It performs the following:
//! 1. **Operand Resolution:** Uses forwarding logic to resolve data hazards.
//! 2. **Arithmetic Execution:** Runs the shared datapath (ALU, multiply/divide, HI/LO moves).
//! 3. **HI/LO Update:** Writes HI/LO into the next snapshot; no later stage touches them.
//! 4. **Control Resolution:** Raises a redirect for taken branches/jumps and a halt for
//!    `SYSCALL`.

use tracing::trace;

use crate::common::constants::WORD_BYTES;
use crate::core::arch::ArchState;
use crate::core::pipeline::hazards::{self, ControlHazard};
use crate::core::pipeline::latches::{ExMem, ExMemEntry, IdEx, Latch, MemWb};
use crate::core::units::datapath::{self, Operands};
use crate::stats::SimStats;

/// Executes the instruction execute stage.
///
/// # Arguments
///
/// * `id_ex` - ID/EX latch as of the start of the cycle.
/// * `ex_mem` - EX/MEM latch as of the start of the cycle (forwarding source).
/// * `mem_wb` - MEM/WB latch as of the start of the cycle (forwarding source).
/// * `current` - Committed architectural state (HI/LO source).
/// * `next` - Next architectural state (HI/LO destination).
/// * `upstream` - Control request already raised by the Memory stage this cycle.
/// * `stats` - Statistics sink.
///
/// # Returns
///
/// The new EX/MEM latch and the control request for Decode and Fetch.
pub fn execute_stage(
    id_ex: &IdEx,
    ex_mem: &ExMem,
    mem_wb: &MemWb,
    current: &ArchState,
    next: &mut ArchState,
    upstream: ControlHazard,
    stats: &mut SimStats,
) -> (ExMem, ControlHazard) {
    let Some(id) = id_ex.as_valid() else {
        return (Latch::Bubble, upstream);
    };

    if upstream.squashes() {
        trace!(pc = id.pc, "EX  squash");
        return (Latch::Bubble, upstream);
    }

    if id.fault.is_some() {
        return (
            Latch::Valid(ExMemEntry {
                pc: id.pc,
                inst: id.fields.raw,
                fault: id.fault,
                ..ExMemEntry::default()
            }),
            ControlHazard::None,
        );
    }

    let (rs, rt) = hazards::forward_operands(id, ex_mem, mem_wb);
    let out = datapath::evaluate(
        &id.ctrl,
        &id.fields,
        id.pc,
        Operands {
            rs,
            rt,
            hi: current.hi,
            lo: current.lo,
        },
    );

    if let Some((hi, lo)) = out.hilo {
        next.hi = hi;
        next.lo = lo;
    }

    let hazard = if id.ctrl.is_syscall {
        trace!(pc = id.pc, "EX  syscall, halting fetch");
        ControlHazard::Halt {
            resume_pc: id.pc.wrapping_add(WORD_BYTES),
        }
    } else if let Some(target) = out.redirect {
        trace!(pc = id.pc, target, "EX  taken");
        stats.taken_transfers += 1;
        ControlHazard::Redirect { target }
    } else {
        ControlHazard::None
    };

    trace!(pc = id.pc, result = out.value, "EX");

    (
        Latch::Valid(ExMemEntry {
            pc: id.pc,
            inst: id.fields.raw,
            dest: id.dest,
            alu: out.value,
            store_data: out.store_data,
            ctrl: id.ctrl,
            fault: None,
        }),
        hazard,
    )
}
