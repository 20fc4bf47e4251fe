//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the pipeline simulator. It provides:
//! 1. **Cycle and IPC:** Total cycles, retired instructions, and derived metrics (CPI, IPC).
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch/jump, HI/LO, system).
//! 3. **Hazards:** Load-use stall cycles, taken transfers and squashed fetches.
//! 4. **Decode faults:** Unrecognized encodings executed as no-ops.

use std::time::Instant;

use serde::Serialize;

use crate::core::pipeline::signals::{ControlSignals, HiLoOp};

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug, Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions retired (non-bubble, non-faulting writebacks).
    pub instructions_retired: u64,

    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of branch/jump instructions retired.
    pub inst_branch: u64,
    /// Count of multiply/divide and HI/LO move instructions retired.
    pub inst_hilo: u64,
    /// Count of `SYSCALL` instructions retired.
    pub inst_system: u64,
    /// Count of other instructions retired (ALU, shifts, decode-fault no-ops).
    pub inst_alu: u64,

    /// Branches and jumps that redirected fetch.
    pub taken_transfers: u64,
    /// Cycles Decode spent stalled on a load-use hazard.
    pub stalls_load_use: u64,
    /// Wrong-path fetches discarded by a taken branch or jump.
    pub squashed_fetches: u64,
    /// Retired instructions that failed to decode and ran as no-ops.
    pub decode_faults: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_hilo: 0,
            inst_system: 0,
            inst_alu: 0,
            taken_transfers: 0,
            stalls_load_use: 0,
            squashed_fetches: 0,
            decode_faults: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"instruction_mix"`, `"hazards"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "hazards"];

impl SimStats {
    /// Counts one retired instruction in the totals and the instruction mix.
    pub fn record_retire(&mut self, ctrl: &ControlSignals) {
        self.instructions_retired += 1;
        if ctrl.decode_fault {
            self.decode_faults += 1;
        }
        if ctrl.mem_read {
            self.inst_load += 1;
        } else if ctrl.mem_write {
            self.inst_store += 1;
        } else if ctrl.is_control() {
            self.inst_branch += 1;
        } else if ctrl.hilo != HiLoOp::None {
            self.inst_hilo += 1;
        } else if ctrl.is_syscall {
            self.inst_system += 1;
        } else {
            self.inst_alu += 1;
        }
    }

    /// Cycles per retired instruction (0 before anything retires).
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Retired instructions per cycle (0 before the first cycle).
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_retired as f64 / self.cycles as f64
        }
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]. Pass an empty
    /// slice to print all sections (same as `print()`).
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.cycles.max(1) as f64;
        let instr = self.instructions_retired.max(1) as f64;

        println!("\n==========================================================");
        println!("MIPS PIPELINE SIMULATION STATISTICS");
        println!("==========================================================");
        if want("summary") {
            println!("host_seconds             {seconds:.4} s");
            println!("sim_cycles               {}", self.cycles);
            println!("sim_insts                {}", self.instructions_retired);
            println!("sim_ipc                  {:.4}", self.ipc());
            println!("sim_cpi                  {:.4}", self.cpi());
            println!("----------------------------------------------------------");
        }
        if want("instruction_mix") {
            let row = |name: &str, n: u64| {
                println!("  {name:<22} {n} ({:.2}%)", (n as f64 / instr) * 100.0);
            };
            println!("INSTRUCTION MIX");
            row("op.alu", self.inst_alu);
            row("op.load", self.inst_load);
            row("op.store", self.inst_store);
            row("op.branch", self.inst_branch);
            row("op.hilo", self.inst_hilo);
            row("op.system", self.inst_system);
            println!("----------------------------------------------------------");
        }
        if want("hazards") {
            println!("HAZARDS");
            println!(
                "  stalls.load_use        {} ({:.2}%)",
                self.stalls_load_use,
                (self.stalls_load_use as f64 / cyc) * 100.0
            );
            println!("  control.taken          {}", self.taken_transfers);
            println!("  control.squashed       {}", self.squashed_fetches);
            println!("  decode.faults          {}", self.decode_faults);
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
