//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Holds the committed and next architectural snapshots.
//! 2. **Pipeline Control:** Owns the four inter-stage latches and the fetch unit status.
//! 3. **Memory:** Owns the region-mapped physical memory.
//! 4. **Statistics:** Accumulates cycle, retirement and hazard counters.

/// Per-cycle pipeline driver.
pub mod execution;

use crate::common::SimError;
use crate::config::Config;
use crate::core::arch::ArchState;
use crate::core::pipeline::latches::PipelineLatches;
use crate::core::pipeline::stages::fetch::FetchStatus;
use crate::soc::Memory;
use crate::stats::SimStats;

/// Main CPU structure containing all processor state.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// Committed architectural state; the only snapshot visible between cycles.
    pub current: ArchState,
    /// Snapshot being built during a cycle.
    next: ArchState,
    /// Physical memory.
    pub mem: Memory,
    /// Inter-stage latches.
    pub latches: PipelineLatches,
    /// Fetch unit status (running, blocked on a fault, or halted).
    pub fetch: FetchStatus,
    /// Performance statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU with zeroed state, empty pipeline and the PC at the text base.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Layout` if the configured memory layout is invalid.
    pub fn new(config: &Config) -> Result<Self, SimError> {
        config.validate()?;
        let state = ArchState::new(config.general.text_base, config.pipeline.zero_register);
        Ok(Self {
            current: state.clone(),
            next: state,
            mem: Memory::new(&config.memory)?,
            latches: PipelineLatches::default(),
            fetch: FetchStatus::Running,
            stats: SimStats::default(),
        })
    }

    /// Returns the processor to its power-on state: registers, HI/LO and latches
    /// cleared, PC at `text_base`, memory zeroed, counters reset.
    pub fn reset(&mut self, text_base: u32) {
        let zero = self.current.gpr.zero_policy();
        self.current = ArchState::new(text_base, zero);
        self.next = self.current.clone();
        self.latches = PipelineLatches::default();
        self.fetch = FetchStatus::Running;
        self.stats = SimStats::default();
        self.mem.clear();
    }
}
