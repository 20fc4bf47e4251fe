//! Architectural state snapshot.
//!
//! The pipeline holds two of these: the committed `current` snapshot and the
//! `next` snapshot written during a cycle. Stages read `current` and write `next`;
//! the driver publishes `next` as `current` once every stage has run.

use crate::config::ZeroRegister;
use crate::core::arch::gpr::Gpr;

/// Programmer-visible processor state.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ArchState {
    /// Program counter.
    pub pc: u32,
    /// General-purpose registers.
    pub gpr: Gpr,
    /// High word of the multiply/divide result (remainder after divide).
    pub hi: u32,
    /// Low word of the multiply/divide result (quotient after divide).
    pub lo: u32,
}

impl ArchState {
    /// Creates a zeroed state with the PC at `pc`.
    pub const fn new(pc: u32, zero: ZeroRegister) -> Self {
        Self {
            pc,
            gpr: Gpr::new(zero),
            hi: 0,
            lo: 0,
        }
    }
}
