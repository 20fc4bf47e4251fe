//! MIPS General-Purpose Register File.
//!
//! This module implements the 32-entry integer register file. It performs the following:
//! 1. **Storage:** Maintains 32 registers (`$0`-`$31`), 32 bits each.
//! 2. **Zero Policy:** Enforces the configured behaviour of register `$0`.
//! 3. **Inspection:** Exposes the raw register array for dumps and comparisons.

use crate::common::constants::MIPS_REGS;
use crate::config::ZeroRegister;

/// General-Purpose Register file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; MIPS_REGS],
    zero: ZeroRegister,
}

impl Gpr {
    /// Creates a register file with every register zero.
    pub const fn new(zero: ZeroRegister) -> Self {
        Self {
            regs: [0; MIPS_REGS],
            zero,
        }
    }

    /// Reads register `idx` (0-31).
    ///
    /// Under [`ZeroRegister::Hardwired`] register 0 always reads as zero.
    pub fn read(&self, idx: usize) -> u32 {
        if self.discards(idx) { 0 } else { self.regs[idx] }
    }

    /// Writes register `idx` (0-31).
    ///
    /// Under [`ZeroRegister::Hardwired`] writes to register 0 are discarded.
    pub fn write(&mut self, idx: usize, val: u32) {
        if !self.discards(idx) {
            self.regs[idx] = val;
        }
    }

    /// Returns `true` if register `idx` is the hard-wired zero register.
    pub fn discards(&self, idx: usize) -> bool {
        idx == 0 && self.zero == ZeroRegister::Hardwired
    }

    /// Policy applied to register 0.
    pub const fn zero_policy(&self) -> ZeroRegister {
        self.zero
    }

    /// Snapshot of all 32 registers.
    pub const fn as_array(&self) -> &[u32; MIPS_REGS] {
        &self.regs
    }

    /// Zeroes every register.
    pub fn clear(&mut self) {
        self.regs = [0; MIPS_REGS];
    }
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new(ZeroRegister::default())
    }
}
