use super::*;
use crate::io::{NullPort, StringPort};

/// Runs `program` to completion against a `StringPort` seeded with `input`,
/// asserting it halts cleanly, and returns the captured output.
pub fn run_ok(program: &Program, input: &str) -> String {
    let mut vm = Vm::new(program);
    let mut input = StringPort::new(input);
    let mut output = StringPort::default();
    vm.run(&mut input, &mut output)
        .expect("program should run to completion");
    String::from_utf8(output.output).expect("test programs only emit ASCII output")
}

/// Runs `program` with no I/O available, asserting it fails with `expected`.
pub fn run_err(program: &Program, expected: RuntimeError) {
    let mut vm = Vm::new(program);
    let mut input = NullPort::default();
    let mut output = StringPort::default();
    let result = vm.run(&mut input, &mut output);
    assert_eq!(result, Err(expected));
}

mod arithmetic;
mod stack;
