//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the pipeline. It performs the following:
//! 1. **Load Execution:** Reads data through the LSU with sign extension for LB/LH.
//! 2. **Store Execution:** Writes data through the LSU (read-modify-write for sub-word).
//! 3. **Fault Handling:** A faulting access marks its entry and requests a halt that
//!    squashes every younger instruction.

use tracing::trace;

use crate::core::pipeline::hazards::ControlHazard;
use crate::core::pipeline::latches::{ExMem, Latch, MemWb, MemWbEntry};
use crate::core::units::lsu::Lsu;
use crate::soc::Memory;

/// Executes the memory access stage.
///
/// # Returns
///
/// The new MEM/WB latch and, on a fresh fault, a halt request resuming at the
/// faulting instruction.
pub fn mem_stage(ex_mem: &ExMem, mem: &mut Memory) -> (MemWb, ControlHazard) {
    let Some(ex) = ex_mem.as_valid() else {
        return (Latch::Bubble, ControlHazard::None);
    };

    let mut wb = MemWbEntry {
        pc: ex.pc,
        inst: ex.inst,
        dest: ex.dest,
        alu: ex.alu,
        load_data: 0,
        ctrl: ex.ctrl,
        fault: ex.fault,
    };
    if ex.fault.is_some() {
        return (Latch::Valid(wb), ControlHazard::None);
    }

    let access = if ex.ctrl.mem_read {
        Lsu::load(mem, ex.ctrl.width, ex.ctrl.signed_load, ex.alu).map(|data| {
            trace!(pc = ex.pc, addr = ex.alu, data, "MEM load");
            wb.load_data = data;
        })
    } else if ex.ctrl.mem_write {
        trace!(pc = ex.pc, addr = ex.alu, data = ex.store_data, "MEM store");
        Lsu::store(mem, ex.ctrl.width, ex.alu, ex.store_data)
    } else {
        Ok(())
    };

    match access {
        Ok(()) => (Latch::Valid(wb), ControlHazard::None),
        Err(fault) => {
            trace!(pc = ex.pc, %fault, "MEM fault");
            wb.fault = Some(fault);
            (
                Latch::Valid(wb),
                ControlHazard::Halt { resume_pc: ex.pc },
            )
        }
    }
}
