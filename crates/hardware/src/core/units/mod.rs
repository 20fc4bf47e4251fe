//! Execution units and functional components.
//!
//! This module contains the processor's execution units: the integer ALU, the
//! multiply/divide unit, the branch resolution unit, the load/store unit, and
//! the combinational datapath that wires them together for one instruction.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit: predicates and targets.
pub mod bru;

/// Combinational execute datapath shared by the pipeline and the reference model.
pub mod datapath;

/// Load/Store Unit for memory access operations.
pub mod lsu;

/// Multiply/divide unit writing HI/LO.
pub mod muldiv;
