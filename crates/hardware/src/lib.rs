//! Cycle-level MIPS32 pipeline simulator library.
//!
//! This crate implements a five-stage pipelined MIPS32 integer core with the following:
//! 1. **Core:** Pipeline (fetch, decode, execute, memory, writeback), forwarding and
//!    load-use stalls, branch squash, double-buffered architectural state.
//! 2. **Memory:** Disjoint little-endian regions with faulting word, halfword and byte access.
//! 3. **ISA:** Decoding, control-signal generation and disassembly for the supported subset.
//! 4. **Simulation:** Program loader, run control, sequential reference model, statistics.

/// Common types and constants (memory layout, faults, errors).
pub mod common;
/// Simulator configuration (defaults, memory layout, pipeline policy).
pub mod config;
/// CPU core (pipeline, arch state, execution units, cycle driver).
pub mod core;
/// Instruction set (field extraction, decode, encoding tables, disassembly).
pub mod isa;
/// Loader, simulator handle and reference model.
pub mod sim;
/// Memory subsystem.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds state, latches, memory and stats.
pub use crate::core::Cpu;
/// Shell-facing simulator handle.
pub use crate::sim::Simulator;
/// Top-level error type.
pub use crate::common::SimError;
