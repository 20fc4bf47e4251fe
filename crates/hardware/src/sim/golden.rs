//! Sequential reference model.
//!
//! Executes one whole instruction per step with no overlap, sharing the decoder,
//! control signals, datapath and load/store unit with the pipeline. Anything the
//! pipeline computes differently from this model is a hazard-handling bug.

use tracing::debug;

use crate::common::constants::WORD_BYTES;
use crate::common::{AddressFault, SimError};
use crate::config::Config;
use crate::core::arch::ArchState;
use crate::core::pipeline::signals::ControlSignals;
use crate::core::units::datapath::{self, Operands};
use crate::core::units::lsu::Lsu;
use crate::isa::{classify, decode};
use crate::soc::Memory;

/// Non-pipelined interpreter over the same state model as the pipeline.
#[derive(Clone, Debug)]
pub struct GoldenModel {
    /// Architectural state.
    pub state: ArchState,
    /// Physical memory.
    pub mem: Memory,
    halted: bool,
    retired: u64,
    fault: Option<AddressFault>,
}

impl GoldenModel {
    /// Creates a model with `program` loaded at the text base.
    ///
    /// # Errors
    ///
    /// `SimError::Layout` for an invalid configuration, `SimError::Address` if the
    /// program does not fit in mapped memory.
    pub fn new(config: &Config, program: &[u32]) -> Result<Self, SimError> {
        config.validate()?;
        let mut mem = Memory::new(&config.memory)?;
        mem.load_words(config.general.text_base, program)?;
        Ok(Self {
            state: ArchState::new(config.general.text_base, config.pipeline.zero_register),
            mem,
            halted: false,
            retired: 0,
            fault: None,
        })
    }

    /// Executes one instruction. Returns `false` once the model has halted.
    ///
    /// # Errors
    ///
    /// `SimError::Address` if the fetch or data access faults; the model halts with
    /// the PC left at the faulting instruction and no state changed.
    pub fn step(&mut self) -> Result<bool, SimError> {
        if self.halted {
            return Ok(false);
        }
        let pc = self.state.pc;
        let inst = self.mem.read_word(pc).map_err(|f| self.halt_on(f))?;
        let fields = decode(inst);
        let ctrl = classify(&fields).map_or_else(
            |fault| {
                debug!(pc, %fault, "reference model: decode fault, no-op");
                ControlSignals::unrecognized()
            },
            ControlSignals::for_op,
        );

        let out = datapath::evaluate(
            &ctrl,
            &fields,
            pc,
            Operands {
                rs: self.state.gpr.read(fields.rs),
                rt: self.state.gpr.read(fields.rt),
                hi: self.state.hi,
                lo: self.state.lo,
            },
        );

        let mut value = out.value;
        if ctrl.mem_read {
            value = Lsu::load(&self.mem, ctrl.width, ctrl.signed_load, out.value)
                .map_err(|f| self.halt_on(f))?;
        } else if ctrl.mem_write {
            Lsu::store(&mut self.mem, ctrl.width, out.value, out.store_data)
                .map_err(|f| self.halt_on(f))?;
        }

        if let Some((hi, lo)) = out.hilo {
            self.state.hi = hi;
            self.state.lo = lo;
        }
        if let Some(dest) = ctrl.dest(&fields) {
            self.state.gpr.write(dest, value);
        }
        self.state.pc = out
            .redirect
            .unwrap_or_else(|| pc.wrapping_add(WORD_BYTES));
        self.retired += 1;

        if ctrl.is_syscall {
            self.halted = true;
            return Ok(false);
        }
        Ok(true)
    }

    /// Runs until halt or until `max_steps` instructions have executed.
    ///
    /// Returns the number of instructions executed by this call.
    ///
    /// # Errors
    ///
    /// Propagates the first address fault.
    pub fn run(&mut self, max_steps: u64) -> Result<u64, SimError> {
        let start = self.retired;
        while self.retired - start < max_steps && self.step()? {}
        Ok(self.retired - start)
    }

    /// Returns `true` once a `SYSCALL` or fault has stopped the model.
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    /// Instructions completed.
    pub const fn retired(&self) -> u64 {
        self.retired
    }

    /// The fault that stopped the model, if any.
    pub const fn fault(&self) -> Option<AddressFault> {
        self.fault
    }

    fn halt_on(&mut self, fault: AddressFault) -> SimError {
        self.halted = true;
        self.fault = Some(fault);
        SimError::Address(fault)
    }
}
