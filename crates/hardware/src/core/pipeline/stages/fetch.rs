//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the pipeline. It performs the following:
//! 1. **Control Consumption:** Applies this cycle's redirect or halt before fetching.
//! 2. **Instruction Retrieval:** Reads the word at the PC and advances the PC by 4.
//! 3. **Fault Capture:** A failed fetch enters IF/ID carrying its fault and blocks
//!    further fetches until a redirect proves it was on the wrong path.

use tracing::trace;

use crate::common::constants::WORD_BYTES;
use crate::core::arch::ArchState;
use crate::core::pipeline::hazards::ControlHazard;
use crate::core::pipeline::latches::{IfId, IfIdEntry, Latch};
use crate::isa::disasm::disassemble;
use crate::soc::Memory;

/// Fetch unit state carried across cycles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchStatus {
    /// Fetching normally.
    #[default]
    Running,
    /// The last fetch faulted; waiting for a redirect or for the fault to retire.
    Blocked,
    /// A halt was requested; no further fetches until reset.
    Halted,
}

/// Executes the instruction fetch stage.
///
/// Reads `current.pc` (or the redirect target), writes the following PC into
/// `next.pc`, and returns the new IF/ID latch.
pub fn fetch_stage(
    mem: &Memory,
    current: &ArchState,
    next: &mut ArchState,
    hazard: ControlHazard,
    status: &mut FetchStatus,
) -> IfId {
    let pc = match hazard {
        ControlHazard::Halt { resume_pc } => {
            trace!(resume_pc, "IF  halt");
            next.pc = resume_pc;
            *status = FetchStatus::Halted;
            return Latch::Bubble;
        }
        ControlHazard::Redirect { target } => {
            if *status == FetchStatus::Halted {
                return Latch::Bubble;
            }
            trace!(target, "IF  redirect");
            *status = FetchStatus::Running;
            target
        }
        ControlHazard::None => {
            if *status != FetchStatus::Running {
                return Latch::Bubble;
            }
            current.pc
        }
    };

    match mem.read_word(pc) {
        Ok(inst) => {
            trace!(pc, inst, asm = %disassemble(inst), "IF");
            next.pc = pc.wrapping_add(WORD_BYTES);
            Latch::Valid(IfIdEntry {
                pc,
                inst,
                fault: None,
            })
        }
        Err(fault) => {
            trace!(pc, %fault, "IF  fault");
            next.pc = pc;
            *status = FetchStatus::Blocked;
            Latch::Valid(IfIdEntry {
                pc,
                inst: 0,
                fault: Some(fault),
            })
        }
    }
}
