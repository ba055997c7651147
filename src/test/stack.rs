use super::*;
use crate::Instruction::*;

#[test]
fn push_discard_is_a_no_op() {
    let program = vec![Push(5), Discard, Push(9), WriteInt, Halt];
    assert_eq!(run_ok(&program, ""), "9");
}

#[test]
fn dup_then_swap_then_discard_restores_original_top() {
    let program = vec![Push(7), Dup, Swap, Discard, WriteInt, Halt];
    assert_eq!(run_ok(&program, ""), "7");
}

#[test]
fn double_swap_restores_order() {
    let program = vec![
        Push(1),
        Push(2),
        Swap,
        Swap,
        WriteInt,
        Discard,
        WriteInt,
        Halt,
    ];
    assert_eq!(run_ok(&program, ""), "21");
}

#[test]
fn copy_zero_behaves_like_dup() {
    let program = vec![Push(42), Copy(0), WriteInt, Discard, WriteInt, Halt];
    assert_eq!(run_ok(&program, ""), "4242");
}

#[test]
fn copy_reaches_below_the_top() {
    let program = vec![Push(1), Push(2), Push(3), Copy(2), WriteInt, Halt];
    assert_eq!(run_ok(&program, ""), "1");
}

#[test]
fn copy_out_of_range_is_stack_underflow() {
    let program = vec![Push(1), Copy(5), Halt];
    run_err(&program, RuntimeError::StackUnderflow);
}

#[test]
fn slide_keeps_top_and_drops_n_below_it() {
    // stack: 1 2 3 4 (top=4); slide(2) drops 2 and 3, keeps 1 and 4
    let program = vec![
        Push(1),
        Push(2),
        Push(3),
        Push(4),
        Slide(2),
        WriteInt,
        Discard,
        WriteInt,
        Halt,
    ];
    assert_eq!(run_ok(&program, ""), "41");
}

#[test]
fn slide_with_negative_count_clears_down_to_top() {
    let program = vec![
        Push(1),
        Push(2),
        Push(3),
        Slide(-1),
        WriteInt,
        Halt,
    ];
    assert_eq!(run_ok(&program, ""), "3");
}

#[test]
fn slide_with_count_spanning_whole_stack_clears_down_to_top() {
    let program = vec![Push(1), Push(2), Push(3), Slide(10), WriteInt, Halt];
    assert_eq!(run_ok(&program, ""), "3");
}

#[test]
fn discard_on_empty_stack_is_underflow() {
    let program = vec![Discard, Halt];
    run_err(&program, RuntimeError::StackUnderflow);
}
