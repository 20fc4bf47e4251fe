//! Reference Model Tests.
//!
//! The sequential model executes one instruction per step with no overlap.
//! These tests pin its own behaviour before it is used as the oracle for the
//! pipeline.

use crate::common::builder::asm;
use crate::common::harness::{DATA, DATA_REG, pc_of};
use mupipe_core::common::AddressFault;
use mupipe_core::common::constants::REG_RA;
use mupipe_core::config::Config;
use mupipe_core::sim::GoldenModel;
use mupipe_core::{SimError, Simulator};
use pretty_assertions::assert_eq;

fn model(program: &[u32]) -> GoldenModel {
    GoldenModel::new(&Config::default(), program).unwrap()
}

#[test]
fn steps_one_instruction_at_a_time() {
    let mut g = model(&[
        asm().addiu(1, 0, 3).build(),
        asm().addu(2, 1, 1).build(),
        asm().syscall().build(),
    ]);
    assert!(g.step().unwrap());
    assert_eq!(g.state.gpr.read(1), 3);
    assert_eq!(g.state.pc, pc_of(1));
    assert!(g.step().unwrap());
    assert_eq!(g.state.gpr.read(2), 6);
    assert!(!g.step().unwrap(), "syscall halts");
    assert!(g.is_halted());
    assert_eq!(g.retired(), 3);
    assert_eq!(g.state.pc, pc_of(3));
    assert!(!g.step().unwrap());
    assert_eq!(g.retired(), 3);
}

#[test]
fn run_is_bounded() {
    let mut g = model(&[
        asm().addiu(1, 1, 1).build(),
        asm().j(pc_of(0)).build(),
    ]);
    assert_eq!(g.run(11).unwrap(), 11);
    assert_eq!(g.state.gpr.read(1), 6);
    assert!(!g.is_halted());
}

#[test]
fn branches_and_links() {
    let mut g = model(&[
        asm().jal(pc_of(3)).build(),
        asm().addiu(2, 2, 10).build(),
        asm().syscall().build(),
        asm().addiu(2, 0, 1).build(),
        asm().bne(2, 0, 1).build(),
        asm().addiu(2, 0, 99).build(),
        asm().jr(REG_RA as u32).build(),
    ]);
    g.run(100).unwrap();
    assert!(g.is_halted());
    assert_eq!(g.state.gpr.read(REG_RA), pc_of(1));
    assert_eq!(g.state.gpr.read(2), 11);
}

#[test]
fn memory_and_hilo() {
    let mut g = model(&[
        asm().lui(DATA_REG, (DATA >> 16) as u16).build(),
        asm().addiu(1, 0, -6).build(),
        asm().sh(1, DATA_REG, 2).build(),
        asm().lh(3, DATA_REG, 2).build(),
        asm().lw(4, DATA_REG, 0).build(),
        asm().addiu(5, 0, 4).build(),
        asm().div(1, 5).build(),
        asm().syscall().build(),
    ]);
    g.run(100).unwrap();
    assert_eq!(g.state.gpr.read(3), -6_i32 as u32);
    assert_eq!(g.state.gpr.read(4), 0xFFFA_0000);
    assert_eq!(g.state.lo, -1_i32 as u32);
    assert_eq!(g.state.hi, -2_i32 as u32);
    assert_eq!(g.mem.read_word(DATA).unwrap(), 0xFFFA_0000);
}

#[test]
fn fault_leaves_state_untouched() {
    let mut g = model(&[
        asm().lui(5, 0x2000).build(),
        asm().lw(6, 5, 0).build(),
        asm().syscall().build(),
    ]);
    let err = g.run(100).unwrap_err();
    let fault = AddressFault::Unmapped { addr: 0x2000_0000 };
    assert!(matches!(err, SimError::Address(f) if f == fault));
    assert!(g.is_halted());
    assert_eq!(g.fault(), Some(fault));
    assert_eq!(g.state.pc, pc_of(1));
    assert_eq!(g.retired(), 1);
    assert_eq!(g.state.gpr.read(6), 0);
}

#[test]
fn fetch_fault_is_reported() {
    let mut g = model(&[asm().lui(5, 0x2000).build(), asm().jr(5).build()]);
    assert!(g.run(10).is_err());
    assert_eq!(g.state.pc, 0x2000_0000);
    assert_eq!(g.retired(), 2);
}

#[test]
fn agrees_with_pipeline_on_fault() {
    let program = [
        asm().addiu(1, 0, 1).build(),
        asm().lui(5, 0x2000).build(),
        asm().sb(1, 5, 3).build(),
        asm().addiu(2, 0, 2).build(),
        asm().syscall().build(),
    ];
    let mut g = model(&program);
    let mut sim = Simulator::new(Config::default()).unwrap();
    sim.load_program(program.to_vec()).unwrap();
    let g_err = g.run(100).unwrap_err();
    let s_err = sim.run_all().unwrap_err();
    assert_eq!(g_err.to_string(), s_err.to_string());
    assert_eq!(sim.state(), &g.state);
    assert_eq!(sim.instructions(), g.retired());
}

#[test]
fn rejects_invalid_layout() {
    let mut config = Config::default();
    config.general.text_base = 0x0040_0002;
    assert!(matches!(
        GoldenModel::new(&config, &[]),
        Err(SimError::Layout(_))
    ));
}
