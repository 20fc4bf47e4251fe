//! Core processor implementation.
//!
//! This module contains the main CPU implementation including the instruction
//! pipeline, execution units, architectural state, and the per-cycle driver
//! that coordinates them.

/// Architectural state (register file, HI/LO, PC snapshot).
pub mod arch;

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Instruction pipeline implementation (stages, latches, hazards, signals).
pub mod pipeline;

/// Execution units (ALU, multiply/divide, branch, load/store, datapath).
pub mod units;

pub use self::cpu::Cpu;
