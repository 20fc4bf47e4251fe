//! Load/Store Unit (LSU).
//!
//! Performs the memory half of loads and stores on behalf of the Memory stage
//! and the sequential reference model. Byte and halfword loads are
//! sign-extended; word loads pass through unchanged.

use crate::common::AddressFault;
use crate::core::pipeline::signals::MemWidth;
use crate::soc::Memory;

/// Load/Store Unit for memory operations.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Loads a value of `width` from `addr`.
    ///
    /// # Errors
    ///
    /// Propagates the memory subsystem's `AddressFault`.
    pub fn load(
        mem: &Memory,
        width: MemWidth,
        signed: bool,
        addr: u32,
    ) -> Result<u32, AddressFault> {
        let val = match width {
            MemWidth::Nop => 0,
            MemWidth::Byte => {
                let b = mem.read_byte(addr)?;
                if signed { i32::from(b as i8) as u32 } else { u32::from(b) }
            }
            MemWidth::Half => {
                let h = mem.read_half(addr)?;
                if signed { i32::from(h as i16) as u32 } else { u32::from(h) }
            }
            MemWidth::Word => mem.read_word(addr)?,
        };
        Ok(val)
    }

    /// Stores the low `width` bits of `data` at `addr`.
    ///
    /// # Errors
    ///
    /// Propagates the memory subsystem's `AddressFault`.
    pub fn store(
        mem: &mut Memory,
        width: MemWidth,
        addr: u32,
        data: u32,
    ) -> Result<(), AddressFault> {
        match width {
            MemWidth::Nop => Ok(()),
            MemWidth::Byte => mem.write_byte(addr, data as u8),
            MemWidth::Half => mem.write_half(addr, data as u16),
            MemWidth::Word => mem.write_word(addr, data),
        }
    }
}
