//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the entry types carried through the five-stage pipeline:
//! Fetch → Decode → Execute → Memory → Writeback.
//!
//! 1. **Validity:** Every latch is a [`Latch`], either a `Bubble` or a `Valid` entry.
//! 2. **Instruction Flow:** Entries accumulate staging fields as they advance.
//! 3. **Fault Propagation:** Address faults ride in the entry until writeback.

use crate::common::AddressFault;
use crate::core::pipeline::signals::ControlSignals;
use crate::isa::Decoded;

/// One inter-stage register: a real in-flight instruction or a bubble.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Latch<T> {
    /// No useful instruction.
    #[default]
    Bubble,
    /// An in-flight instruction.
    Valid(T),
}

impl<T> Latch<T> {
    /// Returns the entry, or `None` for a bubble.
    pub const fn as_valid(&self) -> Option<&T> {
        match self {
            Self::Bubble => None,
            Self::Valid(e) => Some(e),
        }
    }

    /// Returns `true` if the latch holds a bubble.
    pub const fn is_bubble(&self) -> bool {
        matches!(self, Self::Bubble)
    }
}

impl<T> From<Option<T>> for Latch<T> {
    fn from(entry: Option<T>) -> Self {
        entry.map_or(Self::Bubble, Self::Valid)
    }
}

/// Entry in the IF/ID pipeline latch (Fetch to Decode stage).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IfIdEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding (0 if the fetch faulted).
    pub inst: u32,
    /// Fault raised by the fetch, if any.
    pub fault: Option<AddressFault>,
}

/// Entry in the ID/EX pipeline latch (Decode to Execute stage).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdExEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Decoded instruction fields (raw word, register indices, immediates).
    pub fields: Decoded,
    /// Register written at writeback, after the zero-register policy is applied.
    pub dest: Option<usize>,
    /// Value of `rs` read in decode (operand A before forwarding).
    pub rs_val: u32,
    /// Value of `rt` read in decode (operand B before forwarding).
    pub rt_val: u32,
    /// Control signals for downstream pipeline stages.
    pub ctrl: ControlSignals,
    /// Fault carried from fetch, if any.
    pub fault: Option<AddressFault>,
}

/// Entry in the EX/MEM pipeline latch (Execute to Memory stage).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExMemEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Register written at writeback.
    pub dest: Option<usize>,
    /// ALU result, link address, HI/LO move result, or effective address.
    pub alu: u32,
    /// Data to be stored (for store instructions).
    pub store_data: u32,
    /// Control signals for downstream pipeline stages.
    pub ctrl: ControlSignals,
    /// Fault carried from an earlier stage, if any.
    pub fault: Option<AddressFault>,
}

/// Entry in the MEM/WB pipeline latch (Memory to Writeback stage).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemWbEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Register written at writeback.
    pub dest: Option<usize>,
    /// ALU result (for non-load instructions).
    pub alu: u32,
    /// Data loaded from memory (for load instructions).
    pub load_data: u32,
    /// Control signals for the writeback stage.
    pub ctrl: ControlSignals,
    /// Fault raised by the memory access or carried from earlier, if any.
    pub fault: Option<AddressFault>,
}

impl MemWbEntry {
    /// Value written to `dest` at writeback.
    pub const fn result(&self) -> u32 {
        if self.ctrl.mem_read { self.load_data } else { self.alu }
    }
}

/// IF/ID latch.
pub type IfId = Latch<IfIdEntry>;
/// ID/EX latch.
pub type IdEx = Latch<IdExEntry>;
/// EX/MEM latch.
pub type ExMem = Latch<ExMemEntry>;
/// MEM/WB latch.
pub type MemWb = Latch<MemWbEntry>;

/// The four inter-stage latches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PipelineLatches {
    /// Fetch → Decode.
    pub if_id: IfId,
    /// Decode → Execute.
    pub id_ex: IdEx,
    /// Execute → Memory.
    pub ex_mem: ExMem,
    /// Memory → Writeback.
    pub mem_wb: MemWb,
}

impl PipelineLatches {
    /// Returns `true` if every latch holds a bubble.
    pub const fn is_empty(&self) -> bool {
        self.if_id.is_bubble()
            && self.id_ex.is_bubble()
            && self.ex_mem.is_bubble()
            && self.mem_wb.is_bubble()
    }
}
