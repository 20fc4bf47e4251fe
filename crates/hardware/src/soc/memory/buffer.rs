//! Memory Region Buffer.
//!
//! This module provides the backing storage for one contiguous memory region.
//! Regions are byte arrays mapped at a fixed base address; all multi-byte
//! accesses go through aligned words packed little-endian.

use crate::config::RegionConfig;

/// One contiguous region of byte-addressable storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryRegion {
    name: String,
    base: u32,
    bytes: Vec<u8>,
}

impl MemoryRegion {
    /// Allocates a zero-filled region described by `config`.
    pub fn new(config: &RegionConfig) -> Self {
        Self {
            name: config.name.clone(),
            base: config.base,
            bytes: vec![0; config.size as usize],
        }
    }

    /// Region name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// First address of the region.
    pub const fn base(&self) -> u32 {
        self.base
    }

    /// Size of the region in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the region holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the byte offset of `addr` inside the region, if it lies there.
    pub fn offset_of(&self, addr: u32) -> Option<usize> {
        let off = addr.checked_sub(self.base)? as usize;
        (off < self.bytes.len()).then_some(off)
    }

    /// Reads the little-endian word at `offset`.
    ///
    /// The caller guarantees `offset + 4 <= len()`.
    pub fn read_word(&self, offset: usize) -> u32 {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(&self.bytes[offset..offset + 4]);
        u32::from_le_bytes(buf)
    }

    /// Writes `val` little-endian at `offset`.
    ///
    /// The caller guarantees `offset + 4 <= len()`.
    pub fn write_word(&mut self, offset: usize, val: u32) {
        self.bytes[offset..offset + 4].copy_from_slice(&val.to_le_bytes());
    }

    /// Zero-fills the region.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }
}
