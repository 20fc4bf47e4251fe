//! Decode Stage Unit Tests.
//!
//! Verifies that `decode_stage` reads operands (with the MEM/WB bypass),
//! applies the zero-register policy to the destination, squashes on a control
//! hazard, stalls on load-use, forwards fetch faults and degrades unknown
//! encodings to no-ops.

use crate::common::builder::asm;
use mupipe_core::common::AddressFault;
use mupipe_core::config::ZeroRegister;
use mupipe_core::core::arch::ArchState;
use mupipe_core::core::pipeline::hazards::ControlHazard;
use mupipe_core::core::pipeline::latches::{IdExEntry, IfIdEntry, Latch, MemWbEntry};
use mupipe_core::core::pipeline::signals::ControlSignals;
use mupipe_core::core::pipeline::stages::decode_stage;
use mupipe_core::isa::{Op, decode};
use mupipe_core::stats::SimStats;

const PC: u32 = 0x0040_0010;

fn fetched(word: u32) -> Latch<IfIdEntry> {
    Latch::Valid(IfIdEntry {
        pc: PC,
        inst: word,
        fault: None,
    })
}

fn state(zero: ZeroRegister) -> ArchState {
    let mut s = ArchState::new(PC, zero);
    s.gpr.write(1, 100);
    s.gpr.write(2, 200);
    s
}

fn valid(latch: &Latch<IdExEntry>) -> &IdExEntry {
    latch.as_valid().expect("decode produced a bubble")
}

#[test]
fn reads_operands_and_signals() {
    let mut stats = SimStats::default();
    let cur = state(ZeroRegister::Hardwired);
    let out = decode_stage(
        &fetched(asm().addu(3, 1, 2).build()),
        &Latch::Bubble,
        &Latch::Bubble,
        &cur,
        ControlHazard::None,
        &mut stats,
    );
    assert!(!out.stall);
    let e = valid(&out.id_ex);
    assert_eq!((e.pc, e.rs_val, e.rt_val, e.dest), (PC, 100, 200, Some(3)));
    assert_eq!(e.ctrl, ControlSignals::for_op(Op::Addu));
}

#[test]
fn bypass_supplies_retiring_value() {
    let mut stats = SimStats::default();
    let cur = state(ZeroRegister::Hardwired);
    let retiring = Latch::Valid(MemWbEntry {
        dest: Some(2),
        alu: 999,
        ..Default::default()
    });
    let out = decode_stage(
        &fetched(asm().addu(3, 1, 2).build()),
        &Latch::Bubble,
        &retiring,
        &cur,
        ControlHazard::None,
        &mut stats,
    );
    assert_eq!(valid(&out.id_ex).rt_val, 999);
}

#[test]
fn hardwired_zero_destination_is_dropped() {
    let mut stats = SimStats::default();
    let out = decode_stage(
        &fetched(asm().addiu(0, 1, 5).build()),
        &Latch::Bubble,
        &Latch::Bubble,
        &state(ZeroRegister::Hardwired),
        ControlHazard::None,
        &mut stats,
    );
    assert_eq!(valid(&out.id_ex).dest, None);
}

#[test]
fn writable_zero_destination_is_kept() {
    let mut stats = SimStats::default();
    let out = decode_stage(
        &fetched(asm().addiu(0, 1, 5).build()),
        &Latch::Bubble,
        &Latch::Bubble,
        &state(ZeroRegister::Writable),
        ControlHazard::None,
        &mut stats,
    );
    assert_eq!(valid(&out.id_ex).dest, Some(0));
}

#[test]
fn control_hazard_squashes() {
    let mut stats = SimStats::default();
    let out = decode_stage(
        &fetched(asm().addu(3, 1, 2).build()),
        &Latch::Bubble,
        &Latch::Bubble,
        &state(ZeroRegister::Hardwired),
        ControlHazard::Redirect { target: 0 },
        &mut stats,
    );
    assert!(out.id_ex.is_bubble());
    assert!(!out.stall);
    assert_eq!(stats.squashed_fetches, 1);
}

#[test]
fn load_use_stalls() {
    let mut stats = SimStats::default();
    let load = Latch::Valid(IdExEntry {
        fields: decode(asm().lw(1, 28, 0).build()),
        dest: Some(1),
        ctrl: ControlSignals::for_op(Op::Lw),
        ..Default::default()
    });
    let out = decode_stage(
        &fetched(asm().addu(3, 1, 2).build()),
        &load,
        &Latch::Bubble,
        &state(ZeroRegister::Hardwired),
        ControlHazard::None,
        &mut stats,
    );
    assert!(out.id_ex.is_bubble());
    assert!(out.stall);
    assert_eq!(stats.stalls_load_use, 1);
}

#[test]
fn fetch_fault_passes_through() {
    let mut stats = SimStats::default();
    let fault = AddressFault::Unmapped { addr: 0x2000_0000 };
    let faulted = Latch::Valid(IfIdEntry {
        pc: 0x2000_0000,
        inst: 0,
        fault: Some(fault),
    });
    let out = decode_stage(
        &faulted,
        &Latch::Bubble,
        &Latch::Bubble,
        &state(ZeroRegister::Hardwired),
        ControlHazard::None,
        &mut stats,
    );
    let e = valid(&out.id_ex);
    assert_eq!(e.fault, Some(fault));
    assert_eq!(e.dest, None);
}

#[test]
fn unknown_encoding_becomes_no_op() {
    let mut stats = SimStats::default();
    let out = decode_stage(
        &fetched(0xFC00_0000),
        &Latch::Bubble,
        &Latch::Bubble,
        &state(ZeroRegister::Hardwired),
        ControlHazard::None,
        &mut stats,
    );
    let e = valid(&out.id_ex);
    assert_eq!(e.ctrl, ControlSignals::unrecognized());
    assert_eq!(e.dest, None);
    assert_eq!(stats.decode_faults, 0, "counted when it retires");
}

#[test]
fn bubble_in_bubble_out() {
    let mut stats = SimStats::default();
    let out = decode_stage(
        &Latch::Bubble,
        &Latch::Bubble,
        &Latch::Bubble,
        &state(ZeroRegister::Hardwired),
        ControlHazard::Halt { resume_pc: 0 },
        &mut stats,
    );
    assert!(out.id_ex.is_bubble());
    assert_eq!(stats.squashed_fetches, 0);
}

#[test]
fn halt_squashes_without_counting_wrong_path() {
    let mut stats = SimStats::default();
    let out = decode_stage(
        &fetched(0),
        &Latch::Bubble,
        &Latch::Bubble,
        &state(ZeroRegister::Hardwired),
        ControlHazard::Halt { resume_pc: PC },
        &mut stats,
    );
    assert!(out.id_ex.is_bubble());
    assert_eq!(stats.squashed_fetches, 0);
}
