//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Memory Layout:** Base addresses and sizes of the default MU-MIPS regions.
//! 2. **Architecture Constants:** Register counts, word size and well-known registers.

/// Base address of the user text segment; programs load here and reset PC points here.
pub const MEM_TEXT_BEGIN: u32 = 0x0040_0000;

/// Base address of the user data segment.
pub const MEM_DATA_BEGIN: u32 = 0x1000_0000;

/// Base address of the stack segment.
pub const MEM_STACK_BEGIN: u32 = 0x7FF0_0000;

/// Base address of the kernel text segment.
pub const MEM_KTEXT_BEGIN: u32 = 0x8000_0000;

/// Base address of the kernel data segment.
pub const MEM_KDATA_BEGIN: u32 = 0x9000_0000;

/// Size of every default region (1 MiB).
pub const MEM_REGION_SIZE: u32 = 0x0010_0000;

/// Number of general-purpose registers.
pub const MIPS_REGS: usize = 32;

/// Size of an instruction and of a memory word in bytes.
pub const WORD_BYTES: u32 = 4;

/// Register written by `JAL` (`$ra`).
pub const REG_RA: usize = 31;
