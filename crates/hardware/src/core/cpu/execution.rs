//! Pipeline cycle driver.
//!
//! Runs one clock cycle: the five stages in reverse dataflow order (WB, MEM, EX,
//! ID, IF), each consuming the latches as they stood at the start of the cycle,
//! followed by an atomic publish of the next snapshot and the new latches.

use tracing::trace;

use crate::core::Cpu;
use crate::core::pipeline::latches::PipelineLatches;
use crate::core::pipeline::stages::writeback::Retire;
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage,
};

impl Cpu {
    /// Advances the pipeline by one clock cycle and reports what retired.
    ///
    /// Updates `stats.cycles` and, for a retired instruction, the retirement
    /// counters. A `Retire::Fault` has no architectural effect and is not
    /// counted; acting on it is the caller's decision.
    pub fn tick(&mut self) -> Retire {
        self.next.clone_from(&self.current);
        let old = std::mem::take(&mut self.latches);

        let retire = wb_stage(&old.mem_wb, &mut self.next);
        let (mem_wb, mem_hazard) = mem_stage(&old.ex_mem, &mut self.mem);
        let (ex_mem, hazard) = execute_stage(
            &old.id_ex,
            &old.ex_mem,
            &old.mem_wb,
            &self.current,
            &mut self.next,
            mem_hazard,
            &mut self.stats,
        );
        let decoded = decode_stage(
            &old.if_id,
            &old.id_ex,
            &old.mem_wb,
            &self.current,
            hazard,
            &mut self.stats,
        );
        let if_id = if decoded.stall {
            old.if_id
        } else {
            fetch_stage(
                &self.mem,
                &self.current,
                &mut self.next,
                hazard,
                &mut self.fetch,
            )
        };

        self.latches = PipelineLatches {
            if_id,
            id_ex: decoded.id_ex,
            ex_mem,
            mem_wb,
        };
        std::mem::swap(&mut self.current, &mut self.next);

        self.stats.cycles += 1;
        if let Retire::Instruction { ctrl, .. } = &retire {
            self.stats.record_retire(ctrl);
        }
        trace!(cycle = self.stats.cycles, pc = self.current.pc, "cycle end");
        retire
    }
}
