//! Fault and error definitions.
//!
//! This module defines the error taxonomy of the simulator. It provides:
//! 1. **Address Faults:** Accesses outside every memory region or violating alignment.
//! 2. **Decode Faults:** Unrecognized opcode/function encodings (reported, never fatal).
//! 3. **Simulator Errors:** The top-level error type returned by the driver and loader.

use std::path::PathBuf;

use thiserror::Error;

/// A memory access that cannot be serviced.
///
/// Address faults are fatal to a run: they travel with the faulting instruction
/// through the pipeline and stop the run loop when that instruction reaches writeback.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum AddressFault {
    /// The address does not fall inside any configured memory region.
    #[error("address {addr:#010x} is not mapped to any memory region")]
    Unmapped {
        /// The faulting address.
        addr: u32,
    },

    /// The address is not aligned to the access width.
    #[error("address {addr:#010x} is not {align}-byte aligned")]
    Misaligned {
        /// The faulting address.
        addr: u32,
        /// Required alignment in bytes.
        align: u32,
    },
}

impl AddressFault {
    /// Returns the address that caused the fault.
    pub const fn addr(&self) -> u32 {
        match self {
            Self::Unmapped { addr } | Self::Misaligned { addr, .. } => *addr,
        }
    }
}

/// An instruction word that does not decode to a supported instruction.
///
/// Decode faults degrade the instruction to a no-op; the run continues.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DecodeFault {
    /// The primary opcode field is not implemented.
    #[error("unknown opcode {opcode:#04x}")]
    UnknownOpcode {
        /// The 6-bit opcode field.
        opcode: u32,
    },

    /// The R-type function field is not implemented.
    #[error("unknown SPECIAL function {funct:#04x}")]
    UnknownFunction {
        /// The 6-bit function field.
        funct: u32,
    },

    /// The REGIMM rt selector is not implemented.
    #[error("unknown REGIMM selector {rt:#04x}")]
    UnknownRegimm {
        /// The 5-bit rt field.
        rt: u32,
    },
}

/// Top-level simulator error.
#[derive(Debug, Error)]
pub enum SimError {
    /// A fetch, load or store touched an invalid address.
    #[error("address fault: {0}")]
    Address(#[from] AddressFault),

    /// The program file could not be opened or read.
    #[error("cannot read program file {}", path.display())]
    Io {
        /// Path of the program file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A token in the program text is not a 32-bit hexadecimal word.
    #[error("{}:{line}: invalid hexadecimal word {token:?}", path.display())]
    Parse {
        /// Path of the program file (empty for in-memory text).
        path: PathBuf,
        /// One-based line number of the token.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// The program does not fit in the text region.
    #[error("program of {words} words exceeds text region capacity of {capacity} words")]
    ProgramTooLarge {
        /// Number of words in the program.
        words: usize,
        /// Capacity of the text region in words.
        capacity: usize,
    },

    /// A register index outside `0..32`.
    #[error("register index {index} is out of range (0-31)")]
    Register {
        /// The requested index.
        index: usize,
    },

    /// The configured memory layout is unusable.
    #[error("invalid memory layout: {0}")]
    Layout(String),
}
