//! System-on-Chip components outside the core.
//!
//! The MIPS pipeline talks to a single flat memory with no devices or
//! interconnect, so this module only holds the memory subsystem.

/// Region-mapped physical memory.
pub mod memory;

pub use memory::Memory;
