//! MIPS architectural state.
//!
//! This module contains the programmer-visible elements of the processor:
//! 1. **GPRs:** The 32-entry general-purpose register file and its zero policy.
//! 2. **State:** The full snapshot (PC, GPRs, HI, LO) double-buffered by the pipeline.

/// General-Purpose Register file implementation.
pub mod gpr;

/// Architectural state snapshot.
pub mod state;

pub use gpr::Gpr;
pub use state::ArchState;
