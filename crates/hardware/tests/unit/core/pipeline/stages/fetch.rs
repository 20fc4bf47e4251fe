//! Fetch Stage Unit Tests.
//!
//! Verifies that `fetch_stage`:
//!   1. Reads the word at the PC and advances `next.pc` by 4
//!   2. Fetches from the redirect target instead of the PC
//!   3. Stops for good on a halt, committing the resume PC
//!   4. Captures a fetch fault in the latch, holds the PC and blocks until redirected

use mupipe_core::common::AddressFault;
use mupipe_core::config::{MemoryConfig, ZeroRegister};
use mupipe_core::core::arch::ArchState;
use mupipe_core::core::pipeline::hazards::ControlHazard;
use mupipe_core::core::pipeline::latches::{IfIdEntry, Latch};
use mupipe_core::core::pipeline::stages::fetch::FetchStatus;
use mupipe_core::core::pipeline::stages::fetch_stage;
use mupipe_core::soc::Memory;
use pretty_assertions::assert_eq;

const TEXT: u32 = 0x0040_0000;

fn setup(pc: u32) -> (Memory, ArchState, ArchState) {
    let mut mem = Memory::new(&MemoryConfig::default()).unwrap();
    mem.load_words(TEXT, &[0x1111_1111, 0x2222_2222, 0x3333_3333])
        .unwrap();
    let cur = ArchState::new(pc, ZeroRegister::Hardwired);
    (mem, cur.clone(), cur)
}

#[test]
fn sequential_fetch() {
    let (mem, cur, mut next) = setup(TEXT + 4);
    let mut status = FetchStatus::Running;
    let latch = fetch_stage(&mem, &cur, &mut next, ControlHazard::None, &mut status);
    assert_eq!(
        latch,
        Latch::Valid(IfIdEntry {
            pc: TEXT + 4,
            inst: 0x2222_2222,
            fault: None
        })
    );
    assert_eq!(next.pc, TEXT + 8);
    assert_eq!(status, FetchStatus::Running);
}

#[test]
fn redirect_overrides_pc() {
    let (mem, cur, mut next) = setup(TEXT);
    let mut status = FetchStatus::Running;
    let latch = fetch_stage(
        &mem,
        &cur,
        &mut next,
        ControlHazard::Redirect { target: TEXT + 8 },
        &mut status,
    );
    assert_eq!(latch.as_valid().map(|e| e.inst), Some(0x3333_3333));
    assert_eq!(next.pc, TEXT + 12);
}

#[test]
fn halt_commits_resume_pc_and_sticks() {
    let (mem, cur, mut next) = setup(TEXT);
    let mut status = FetchStatus::Running;
    let latch = fetch_stage(
        &mem,
        &cur,
        &mut next,
        ControlHazard::Halt { resume_pc: TEXT + 4 },
        &mut status,
    );
    assert!(latch.is_bubble());
    assert_eq!(next.pc, TEXT + 4);
    assert_eq!(status, FetchStatus::Halted);

    let mut next2 = cur.clone();
    let latch = fetch_stage(&mem, &cur, &mut next2, ControlHazard::None, &mut status);
    assert!(latch.is_bubble());
    let latch = fetch_stage(
        &mem,
        &cur,
        &mut next2,
        ControlHazard::Redirect { target: TEXT },
        &mut status,
    );
    assert!(latch.is_bubble(), "a halted fetch unit ignores redirects");
    assert_eq!(next2.pc, TEXT);
}

#[test]
fn fault_is_captured_and_blocks() {
    let bad = 0x2000_0000;
    let (mem, cur, mut next) = setup(bad);
    let mut status = FetchStatus::Running;
    let latch = fetch_stage(&mem, &cur, &mut next, ControlHazard::None, &mut status);
    assert_eq!(
        latch,
        Latch::Valid(IfIdEntry {
            pc: bad,
            inst: 0,
            fault: Some(AddressFault::Unmapped { addr: bad })
        })
    );
    assert_eq!(next.pc, bad, "PC holds at the faulting address");
    assert_eq!(status, FetchStatus::Blocked);

    let latch = fetch_stage(&mem, &cur, &mut next, ControlHazard::None, &mut status);
    assert!(latch.is_bubble());
}

#[test]
fn redirect_unblocks() {
    let (mem, cur, mut next) = setup(TEXT);
    let mut status = FetchStatus::Blocked;
    let latch = fetch_stage(
        &mem,
        &cur,
        &mut next,
        ControlHazard::Redirect { target: TEXT },
        &mut status,
    );
    assert_eq!(latch.as_valid().map(|e| e.pc), Some(TEXT));
    assert_eq!(status, FetchStatus::Running);
}

#[test]
fn misaligned_pc_faults() {
    let (mem, cur, mut next) = setup(TEXT + 2);
    let mut status = FetchStatus::Running;
    let latch = fetch_stage(&mem, &cur, &mut next, ControlHazard::None, &mut status);
    assert_eq!(
        latch.as_valid().and_then(|e| e.fault),
        Some(AddressFault::Misaligned {
            addr: TEXT + 2,
            align: 4
        })
    );
}
