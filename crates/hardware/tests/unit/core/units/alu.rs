//! ALU Operation Tests.
//!
//! Edge-case vectors for every integer ALU operation: boundary values
//! (0, 1, -1, MAX, MIN), wrap-around, signed comparison and shift amounts.

use mupipe_core::core::pipeline::signals::AluOp;
use mupipe_core::core::units::alu::Alu;
use rstest::rstest;

const NEG1: u32 = -1i32 as u32;
const I32_MAX: u32 = i32::MAX as u32;
const I32_MIN: u32 = i32::MIN as u32;

#[rstest]
#[case(0, 0, 0)]
#[case(1, 2, 3)]
#[case(NEG1, 1, 0)]
#[case(I32_MAX, 1, I32_MIN)]
#[case(I32_MIN, NEG1, I32_MAX)]
fn add_wraps(#[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(AluOp::Add, a, b), expected);
}

#[rstest]
#[case(5, 3, 2)]
#[case(0, 1, NEG1)]
#[case(I32_MIN, 1, I32_MAX)]
#[case(7, 7, 0)]
fn sub_wraps(#[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(AluOp::Sub, a, b), expected);
}

#[test]
fn logic_ops() {
    let a = 0xF0F0_1234;
    let b = 0x0FF0_00FF;
    assert_eq!(Alu::execute(AluOp::And, a, b), 0x00F0_0034);
    assert_eq!(Alu::execute(AluOp::Or, a, b), 0xFFF0_12FF);
    assert_eq!(Alu::execute(AluOp::Xor, a, b), 0xFF00_12CB);
    assert_eq!(Alu::execute(AluOp::Nor, a, b), 0x000F_ED00);
    assert_eq!(Alu::execute(AluOp::Nor, 0, 0), NEG1);
}

#[rstest]
#[case(NEG1, 0, 1)]
#[case(0, NEG1, 0)]
#[case(I32_MIN, I32_MAX, 1)]
#[case(I32_MAX, I32_MIN, 0)]
#[case(3, 3, 0)]
#[case(2, 3, 1)]
fn slt_is_signed(#[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(AluOp::Slt, a, b), expected);
}

#[rstest]
#[case(AluOp::Sll, 1, 31, 0x8000_0000)]
#[case(AluOp::Sll, 0xFFFF_FFFF, 4, 0xFFFF_FFF0)]
#[case(AluOp::Srl, 0x8000_0000, 31, 1)]
#[case(AluOp::Srl, 0xFFFF_FFFF, 28, 0xF)]
#[case(AluOp::Sra, 0x8000_0000, 31, NEG1)]
#[case(AluOp::Sra, 0x7FFF_FFFF, 30, 1)]
#[case(AluOp::Sra, 0xF000_0000, 0, 0xF000_0000)]
fn shifts(#[case] op: AluOp, #[case] a: u32, #[case] sh: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(op, a, sh), expected);
}

#[test]
fn shift_amount_uses_low_five_bits() {
    assert_eq!(Alu::execute(AluOp::Sll, 1, 33), 2);
}

#[test]
fn lui_places_immediate_in_upper_half() {
    assert_eq!(Alu::execute(AluOp::Lui, 0xDEAD, 0xFFFF), 0xFFFF_0000);
    assert_eq!(Alu::execute(AluOp::Lui, 0, 0x1000), 0x1000_0000);
}
