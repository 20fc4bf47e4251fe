//! Simulation front end: program loading, run control and the reference model.
//!
//! 1. **Loader:** Parses hex-word program text.
//! 2. **Simulator:** Shell-facing handle around the pipelined CPU.
//! 3. **Golden:** Sequential one-instruction-per-step reference interpreter.

/// Sequential reference model for equivalence checking.
pub mod golden;

/// Hex-word program loader.
pub mod loader;

/// Pipelined simulator and run control.
pub mod simulator;

pub use golden::GoldenModel;
pub use simulator::Simulator;
