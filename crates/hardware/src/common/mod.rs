//! Common utilities and types used throughout the MIPS pipeline simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Default memory layout and architectural sizes.
//! 2. **Error Handling:** Address faults, decode faults and the top-level simulator error.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types and fault definitions.
pub mod error;

pub use error::{AddressFault, DecodeFault, SimError};
