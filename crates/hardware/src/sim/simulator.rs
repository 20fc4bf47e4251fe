//! Simulator: the shell-facing handle around the pipelined CPU.
//!
//! Owns the CPU, the loaded program and the run flag, and exposes the discrete
//! operations a command shell issues between cycles: stepping, running to
//! completion, reset, register/HI/LO access and memory dumps. A cycle is atomic
//! from the caller's point of view; halting is only observed at cycle boundaries.

use std::path::Path;

use tracing::{debug, error};

use crate::common::constants::MIPS_REGS;
use crate::common::{AddressFault, SimError};
use crate::config::Config;
use crate::core::Cpu;
use crate::core::arch::ArchState;
use crate::core::pipeline::latches::PipelineLatches;
use crate::core::pipeline::stages::writeback::Retire;
use crate::sim::loader;
use crate::soc::Memory;
use crate::stats::SimStats;

/// Top-level simulator: pipelined CPU, program image and run control.
#[derive(Clone, Debug)]
pub struct Simulator {
    cpu: Cpu,
    config: Config,
    program: Vec<u32>,
    running: bool,
    fault: Option<AddressFault>,
}

impl Simulator {
    /// Creates a simulator with empty memory and the run flag set.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Layout` if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self, SimError> {
        let cpu = Cpu::new(&config)?;
        Ok(Self {
            cpu,
            config,
            program: Vec::new(),
            running: true,
            fault: None,
        })
    }

    /// Configuration in effect.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Installs `words` as the program and resets the machine onto it.
    ///
    /// Returns the number of words loaded.
    ///
    /// # Errors
    ///
    /// `SimError::ProgramTooLarge` if the program does not fit between the text base
    /// and the end of its region.
    pub fn load_program(&mut self, words: Vec<u32>) -> Result<usize, SimError> {
        let capacity = self
            .cpu
            .mem
            .capacity_words(self.config.general.text_base)
            .unwrap_or(0);
        if words.len() > capacity {
            return Err(SimError::ProgramTooLarge {
                words: words.len(),
                capacity,
            });
        }
        self.program = words;
        self.reset()?;
        debug!(
            words = self.program.len(),
            base = self.config.general.text_base,
            "program loaded"
        );
        Ok(self.program.len())
    }

    /// Reads a hex-word program file and loads it.
    ///
    /// # Errors
    ///
    /// Propagates loader errors (`Io`, `Parse`) and `ProgramTooLarge`.
    pub fn load_program_file(&mut self, path: &Path) -> Result<usize, SimError> {
        let words = loader::load_program_file(path)?;
        self.load_program(words)
    }

    /// Returns the machine to its initial state and reloads the program.
    ///
    /// PC = text base; registers, HI, LO, latches and counters zero; memory cleared
    /// then the program rewritten; run flag set; any recorded fault forgotten.
    ///
    /// # Errors
    ///
    /// Propagates an address fault from rewriting the program (cannot happen for a
    /// program accepted by `load_program`).
    pub fn reset(&mut self) -> Result<(), SimError> {
        let base = self.config.general.text_base;
        self.cpu.reset(base);
        self.cpu.mem.load_words(base, &self.program)?;
        self.running = true;
        self.fault = None;
        debug!(pc = base, "reset");
        Ok(())
    }

    /// Runs exactly one cycle, ignoring the run flag.
    fn tick(&mut self) -> Result<(), SimError> {
        match self.cpu.tick() {
            Retire::Fault { pc, fault } => {
                error!(pc, %fault, cycle = self.cpu.stats.cycles, "address fault, halting");
                self.running = false;
                self.fault = Some(fault);
                Err(fault.into())
            }
            Retire::Instruction { pc, ctrl } if ctrl.is_syscall => {
                debug!(pc, cycle = self.cpu.stats.cycles, "syscall retired, halting");
                self.running = false;
                Ok(())
            }
            Retire::Instruction { .. } | Retire::Nothing => Ok(()),
        }
    }

    /// Runs up to `n` cycles, stopping early when the run flag clears.
    ///
    /// Returns the number of cycles executed (0 if the flag was already clear).
    ///
    /// # Errors
    ///
    /// `SimError::Address` when a faulting instruction retires; the run flag is cleared.
    pub fn step(&mut self, n: u64) -> Result<u64, SimError> {
        let mut done = 0;
        while done < n && self.running {
            self.tick()?;
            done += 1;
        }
        Ok(done)
    }

    /// Runs until the run flag clears.
    ///
    /// Returns the number of cycles executed. A program with no `SYSCALL` that
    /// never faults does not terminate; use [`Simulator::step`] for a bound.
    ///
    /// # Errors
    ///
    /// `SimError::Address` when a faulting instruction retires.
    pub fn run_all(&mut self) -> Result<u64, SimError> {
        let mut done = 0;
        while self.running {
            self.tick()?;
            done += 1;
        }
        Ok(done)
    }

    /// Reads general-purpose register `idx`.
    ///
    /// # Errors
    ///
    /// `SimError::Register` if `idx >= 32`.
    pub fn reg(&self, idx: usize) -> Result<u32, SimError> {
        check_reg(idx)?;
        Ok(self.cpu.current.gpr.read(idx))
    }

    /// Writes general-purpose register `idx` in the committed state.
    ///
    /// Under the hard-wired policy a write to register 0 is discarded.
    ///
    /// # Errors
    ///
    /// `SimError::Register` if `idx >= 32`.
    pub fn set_reg(&mut self, idx: usize, val: u32) -> Result<(), SimError> {
        check_reg(idx)?;
        self.cpu.current.gpr.write(idx, val);
        Ok(())
    }

    /// Reads HI.
    pub const fn hi(&self) -> u32 {
        self.cpu.current.hi
    }

    /// Writes HI.
    pub const fn set_hi(&mut self, val: u32) {
        self.cpu.current.hi = val;
    }

    /// Reads LO.
    pub const fn lo(&self) -> u32 {
        self.cpu.current.lo
    }

    /// Writes LO.
    pub const fn set_lo(&mut self, val: u32) {
        self.cpu.current.lo = val;
    }

    /// Committed program counter (the next fetch address).
    pub const fn pc(&self) -> u32 {
        self.cpu.current.pc
    }

    /// Committed architectural state.
    pub const fn state(&self) -> &ArchState {
        &self.cpu.current
    }

    /// Physical memory.
    pub const fn memory(&self) -> &Memory {
        &self.cpu.mem
    }

    /// Words from `start` to `stop` inclusive, as `(address, value)` pairs.
    ///
    /// # Errors
    ///
    /// `SimError::Address` if `start` is misaligned or the range leaves mapped memory.
    pub fn mdump(&self, start: u32, stop: u32) -> Result<Vec<(u32, u32)>, SimError> {
        Ok(self.cpu.mem.dump(start, stop)?)
    }

    /// Pipeline latches as of the last cycle boundary.
    pub const fn latches(&self) -> &PipelineLatches {
        &self.cpu.latches
    }

    /// Cycles executed since the last reset.
    pub const fn cycles(&self) -> u64 {
        self.cpu.stats.cycles
    }

    /// Instructions retired since the last reset.
    pub const fn instructions(&self) -> u64 {
        self.cpu.stats.instructions_retired
    }

    /// Returns `true` while further cycles may be issued.
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Performance statistics.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }

    /// Number of words in the loaded program.
    pub fn program_size(&self) -> usize {
        self.program.len()
    }

    /// The address fault that stopped the run, if any.
    pub const fn fault(&self) -> Option<AddressFault> {
        self.fault
    }
}

const fn check_reg(idx: usize) -> Result<(), SimError> {
    if idx < MIPS_REGS {
        Ok(())
    } else {
        Err(SimError::Register { index: idx })
    }
}
