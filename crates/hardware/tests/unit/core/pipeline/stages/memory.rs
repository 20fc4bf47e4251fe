//! Memory Stage Unit Tests.

use mupipe_core::common::AddressFault;
use mupipe_core::common::constants::MEM_DATA_BEGIN;
use mupipe_core::config::MemoryConfig;
use mupipe_core::core::pipeline::hazards::ControlHazard;
use mupipe_core::core::pipeline::latches::{ExMemEntry, Latch};
use mupipe_core::core::pipeline::signals::{ControlSignals, MemWidth};
use mupipe_core::core::pipeline::stages::mem_stage;
use mupipe_core::soc::Memory;

const D: u32 = MEM_DATA_BEGIN;
const PC: u32 = 0x0040_0020;

fn mem() -> Memory {
    Memory::new(&MemoryConfig::default()).unwrap()
}

fn access(addr: u32, ctrl: ControlSignals, store_data: u32) -> Latch<ExMemEntry> {
    Latch::Valid(ExMemEntry {
        pc: PC,
        dest: ctrl.mem_read.then_some(4),
        alu: addr,
        store_data,
        ctrl,
        ..Default::default()
    })
}

fn load(width: MemWidth, signed_load: bool) -> ControlSignals {
    ControlSignals {
        mem_read: true,
        width,
        signed_load,
        ..Default::default()
    }
}

fn store(width: MemWidth) -> ControlSignals {
    ControlSignals {
        mem_write: true,
        width,
        ..Default::default()
    }
}

#[test]
fn load_fills_load_data() {
    let mut m = mem();
    m.write_word(D, 0x0000_00F0).unwrap();
    let (wb, hazard) = mem_stage(&access(D, load(MemWidth::Byte, true), 0), &mut m);
    let wb = wb.as_valid().unwrap();
    assert_eq!(wb.load_data, 0xFFFF_FFF0);
    assert_eq!(wb.result(), 0xFFFF_FFF0);
    assert_eq!(hazard, ControlHazard::None);
}

#[test]
fn store_writes_memory() {
    let mut m = mem();
    let (wb, hazard) = mem_stage(&access(D + 4, store(MemWidth::Word), 0xCAFE), &mut m);
    assert!(wb.as_valid().is_some_and(|e| e.fault.is_none()));
    assert_eq!(hazard, ControlHazard::None);
    assert_eq!(m.read_word(D + 4).unwrap(), 0xCAFE);
}

#[test]
fn non_memory_instruction_passes_alu_result() {
    let mut m = mem();
    let entry = Latch::Valid(ExMemEntry {
        dest: Some(3),
        alu: 77,
        ..Default::default()
    });
    let (wb, _) = mem_stage(&entry, &mut m);
    assert_eq!(wb.as_valid().map(|e| e.result()), Some(77));
}

#[test]
fn faulting_access_marks_entry_and_halts_at_its_pc() {
    let mut m = mem();
    let (wb, hazard) = mem_stage(&access(D + 2, load(MemWidth::Word, false), 0), &mut m);
    assert_eq!(
        wb.as_valid().and_then(|e| e.fault),
        Some(AddressFault::Misaligned {
            addr: D + 2,
            align: 4
        })
    );
    assert_eq!(hazard, ControlHazard::Halt { resume_pc: PC });
}

#[test]
fn carried_fault_is_not_raised_again() {
    let mut m = mem();
    let fault = AddressFault::Unmapped { addr: 0x2000_0000 };
    let entry = Latch::Valid(ExMemEntry {
        pc: 0x2000_0000,
        fault: Some(fault),
        ..Default::default()
    });
    let (wb, hazard) = mem_stage(&entry, &mut m);
    assert_eq!(wb.as_valid().and_then(|e| e.fault), Some(fault));
    assert_eq!(hazard, ControlHazard::None);
}

#[test]
fn bubble_passes_through() {
    let mut m = mem();
    let (wb, hazard) = mem_stage(&Latch::Bubble, &mut m);
    assert!(wb.is_bubble());
    assert_eq!(hazard, ControlHazard::None);
}
