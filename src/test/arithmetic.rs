use super::*;
use crate::Instruction::*;

#[test]
fn add_sub_mul() {
    // 10+3=13, 10-3=7, 10*3=30
    let program = vec![
        Push(10),
        Push(3),
        Add,
        WriteInt,
        Push(10),
        Push(3),
        Sub,
        WriteInt,
        Push(10),
        Push(3),
        Mul,
        WriteInt,
        Halt,
    ];
    assert_eq!(run_ok(&program, ""), "13730");
}

#[test]
fn add_wraps_on_overflow() {
    let program = vec![Push(i32::MAX), Push(1), Add, WriteInt, Halt];
    assert_eq!(run_ok(&program, ""), i32::MIN.to_string());
}

#[test]
fn floored_division_rounds_toward_negative_infinity() {
    let program = vec![Push(-7), Push(2), Div, WriteInt, Halt];
    assert_eq!(run_ok(&program, ""), "-4");
}

#[test]
fn division_of_positives_matches_truncating_division() {
    let program = vec![Push(7), Push(2), Div, WriteInt, Halt];
    assert_eq!(run_ok(&program, ""), "3");
}

#[test]
fn knuth_modulo_sign_follows_divisor() {
    let program = vec![Push(-7), Push(2), Mod, WriteInt, Halt];
    assert_eq!(run_ok(&program, ""), "1");
}

#[test]
fn knuth_modulo_with_negative_divisor() {
    let program = vec![Push(7), Push(-2), Mod, WriteInt, Halt];
    assert_eq!(run_ok(&program, ""), "-1");
}

#[test]
fn division_by_zero_is_an_error() {
    let program = vec![Push(1), Push(0), Div, Halt];
    run_err(&program, RuntimeError::DivisionByZero);
}

#[test]
fn modulo_by_zero_is_an_error() {
    let program = vec![Push(1), Push(0), Mod, Halt];
    run_err(&program, RuntimeError::DivisionByZero);
}

#[test]
fn division_and_modulo_satisfy_the_division_identity() {
    for &(a, b) in &[(17, 5), (-17, 5), (17, -5), (-17, -5), (100, 7)] {
        let program = vec![
            Push(a),
            Push(b),
            Div,
            Push(b),
            Mul,
            Push(a),
            Push(b),
            Mod,
            Add,
            WriteInt,
            Halt,
        ];
        assert_eq!(run_ok(&program, ""), a.to_string());
    }
}
