//! Physical Memory Subsystem.
//!
//! This module implements the simulator's flat 32-bit address space. It provides:
//! 1. **Buffer:** Backing storage (`MemoryRegion`) for each configured region.
//! 2. **Memory:** Region lookup plus aligned word access, faulting on anything else.
//! 3. **Sub-word Access:** Byte and halfword reads/writes synthesized from the
//!    containing aligned word (read-modify-write on store).

/// Backing storage for individual regions.
pub mod buffer;

use self::buffer::MemoryRegion;
use crate::common::AddressFault;
use crate::common::SimError;
use crate::config::MemoryConfig;

/// Bit shift converting a byte lane index into a bit offset.
const LANE_SHIFT: u32 = 3;

/// System memory: a set of disjoint regions.
#[derive(Clone, Debug)]
pub struct Memory {
    regions: Vec<MemoryRegion>,
}

impl Memory {
    /// Allocates every region in `config`, zero-filled.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Layout` if the regions are empty, wrap or overlap.
    pub fn new(config: &MemoryConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            regions: config.regions.iter().map(MemoryRegion::new).collect(),
        })
    }

    /// Configured regions, in configuration order.
    pub fn regions(&self) -> &[MemoryRegion] {
        &self.regions
    }

    /// Finds the region and offset holding the full word at `addr`.
    fn locate(&self, addr: u32) -> Result<(usize, usize), AddressFault> {
        self.regions
            .iter()
            .enumerate()
            .find_map(|(i, r)| {
                r.offset_of(addr)
                    .filter(|off| off + 4 <= r.len())
                    .map(|off| (i, off))
            })
            .ok_or(AddressFault::Unmapped { addr })
    }

    /// Reads the aligned word at `addr`.
    ///
    /// # Errors
    ///
    /// `Misaligned` if `addr` is not a multiple of 4, `Unmapped` if it lies outside every region.
    pub fn read_word(&self, addr: u32) -> Result<u32, AddressFault> {
        check_align(addr, 4)?;
        let (i, off) = self.locate(addr)?;
        Ok(self.regions[i].read_word(off))
    }

    /// Writes the aligned word at `addr`.
    ///
    /// # Errors
    ///
    /// Same contract as [`Memory::read_word`].
    pub fn write_word(&mut self, addr: u32, val: u32) -> Result<(), AddressFault> {
        check_align(addr, 4)?;
        let (i, off) = self.locate(addr)?;
        self.regions[i].write_word(off, val);
        Ok(())
    }

    /// Reads one byte.
    ///
    /// # Errors
    ///
    /// `Unmapped` if the containing word lies outside every region.
    pub fn read_byte(&self, addr: u32) -> Result<u8, AddressFault> {
        let word = self.containing_word(addr)?;
        Ok((word >> lane_shift(addr)) as u8)
    }

    /// Reads one halfword.
    ///
    /// # Errors
    ///
    /// `Misaligned` if `addr` is odd, `Unmapped` if outside every region.
    pub fn read_half(&self, addr: u32) -> Result<u16, AddressFault> {
        check_align(addr, 2)?;
        let word = self.containing_word(addr)?;
        Ok((word >> lane_shift(addr)) as u16)
    }

    /// Writes one byte, preserving the other three bytes of the containing word.
    ///
    /// # Errors
    ///
    /// `Unmapped` if the containing word lies outside every region.
    pub fn write_byte(&mut self, addr: u32, val: u8) -> Result<(), AddressFault> {
        self.merge(addr, u32::from(val), 0xFF)
    }

    /// Writes one halfword, preserving the other half of the containing word.
    ///
    /// # Errors
    ///
    /// `Misaligned` if `addr` is odd, `Unmapped` if outside every region.
    pub fn write_half(&mut self, addr: u32, val: u16) -> Result<(), AddressFault> {
        check_align(addr, 2)?;
        self.merge(addr, u32::from(val), 0xFFFF)
    }

    fn containing_word(&self, addr: u32) -> Result<u32, AddressFault> {
        let (i, off) = self
            .locate(addr & !3)
            .map_err(|_| AddressFault::Unmapped { addr })?;
        Ok(self.regions[i].read_word(off))
    }

    fn merge(&mut self, addr: u32, val: u32, mask: u32) -> Result<(), AddressFault> {
        let (i, off) = self
            .locate(addr & !3)
            .map_err(|_| AddressFault::Unmapped { addr })?;
        let shift = lane_shift(addr);
        let old = self.regions[i].read_word(off);
        let new = (old & !(mask << shift)) | ((val & mask) << shift);
        self.regions[i].write_word(off, new);
        Ok(())
    }

    /// Zero-fills every region.
    pub fn clear(&mut self) {
        for r in &mut self.regions {
            r.clear();
        }
    }

    /// Writes `words` at consecutive word addresses starting at `base`.
    ///
    /// # Errors
    ///
    /// Returns the first fault encountered; earlier words stay written.
    pub fn load_words(&mut self, base: u32, words: &[u32]) -> Result<(), AddressFault> {
        let mut addr = base;
        for &w in words {
            self.write_word(addr, w)?;
            addr = addr.wrapping_add(4);
        }
        Ok(())
    }

    /// Number of whole words between `addr` and the end of its region.
    pub fn capacity_words(&self, addr: u32) -> Option<usize> {
        self.regions
            .iter()
            .find_map(|r| r.offset_of(addr).map(|off| (r.len() - off) / 4))
    }

    /// Returns `(address, word)` pairs for every word from `start` to `stop` inclusive.
    ///
    /// # Errors
    ///
    /// Faults if `start` is misaligned or any word in the range is unmapped.
    pub fn dump(&self, start: u32, stop: u32) -> Result<Vec<(u32, u32)>, AddressFault> {
        check_align(start, 4)?;
        let mut out = Vec::new();
        let mut addr = start;
        while addr <= stop {
            out.push((addr, self.read_word(addr)?));
            match addr.checked_add(4) {
                Some(next) => addr = next,
                None => break,
            }
        }
        Ok(out)
    }
}

const fn check_align(addr: u32, align: u32) -> Result<(), AddressFault> {
    if addr % align == 0 {
        Ok(())
    } else {
        Err(AddressFault::Misaligned { addr, align })
    }
}

const fn lane_shift(addr: u32) -> u32 {
    (addr & 3) << LANE_SHIFT
}
