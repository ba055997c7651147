//! The stack/heap virtual machine.
//!
//! `Vm::run` drives `Vm::step` in a loop until it reports `Halted` — a
//! `step()`/tick-result pair rather than one monolithic run loop, so
//! callers can single-step for debugging or tests.

use std::collections::HashMap;

use num_integer::Integer;

use crate::error::RuntimeError;
use crate::instruction::{Instruction, Program};
use crate::io::{InputPort, OutputPort};

/// Outcome of executing a single instruction.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum StepResult {
    Continue,
    Halted,
}

pub struct Vm<'p> {
    instructions: &'p [Instruction],
    pc: usize,
    stack: Vec<i32>,
    call_stack: Vec<usize>,
    heap: HashMap<i32, i32>,
}

impl<'p> Vm<'p> {
    pub fn new(program: &'p Program) -> Vm<'p> {
        Vm {
            instructions: program,
            pc: 0,
            stack: Vec::new(),
            call_stack: Vec::new(),
            heap: HashMap::new(),
        }
    }

    pub fn stack(&self) -> &[i32] {
        &self.stack
    }

    pub fn heap(&self) -> &HashMap<i32, i32> {
        &self.heap
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Runs to completion, driving `step` until it reports `Halted`.
    pub fn run(
        &mut self,
        input: &mut dyn InputPort,
        output: &mut dyn OutputPort,
    ) -> Result<(), RuntimeError> {
        loop {
            if self.step(input, output)? == StepResult::Halted {
                return Ok(());
            }
        }
    }

    pub fn step(
        &mut self,
        input: &mut dyn InputPort,
        output: &mut dyn OutputPort,
    ) -> Result<StepResult, RuntimeError> {
        let instruction = match self.instructions.get(self.pc) {
            Some(instruction) => *instruction,
            None => return Ok(StepResult::Halted),
        };

        let mut next_pc = self.pc + 1;

        match instruction {
            Instruction::Push(n) => self.stack.push(n),
            Instruction::Dup => self.op_copy(0)?,
            Instruction::Copy(n) => self.op_copy(n)?,
            Instruction::Swap => {
                let len = self.stack.len();
                if len < 2 {
                    return Err(RuntimeError::StackUnderflow);
                }
                self.stack.swap(len - 1, len - 2);
            }
            Instruction::Discard => {
                self.stack.pop().ok_or(RuntimeError::StackUnderflow)?;
            }
            Instruction::Slide(n) => self.op_slide(n)?,

            Instruction::Add => self.op_arithmetic(|lhs, rhs| lhs.wrapping_add(rhs))?,
            Instruction::Sub => self.op_arithmetic(|lhs, rhs| lhs.wrapping_sub(rhs))?,
            Instruction::Mul => self.op_arithmetic(|lhs, rhs| lhs.wrapping_mul(rhs))?,
            Instruction::Div => self.op_division(Integer::div_floor)?,
            Instruction::Mod => self.op_division(Integer::mod_floor)?,

            Instruction::Store => {
                let val = self.stack.pop().ok_or(RuntimeError::StackUnderflow)?;
                let addr = self.stack.pop().ok_or(RuntimeError::StackUnderflow)?;
                self.heap.insert(addr, val);
            }
            Instruction::Load => {
                let addr = self.stack.pop().ok_or(RuntimeError::StackUnderflow)?;
                let val = *self
                    .heap
                    .get(&addr)
                    .ok_or(RuntimeError::UnmappedHeapAddress(addr))?;
                self.stack.push(val);
            }

            Instruction::Call(target) => {
                self.check_target(target)?;
                self.call_stack.push(next_pc);
                next_pc = target;
            }
            Instruction::Jump(target) => {
                self.check_target(target)?;
                next_pc = target;
            }
            Instruction::Jz(target) => {
                let v = self.stack.pop().ok_or(RuntimeError::StackUnderflow)?;
                if v == 0 {
                    self.check_target(target)?;
                    next_pc = target;
                }
            }
            Instruction::Jn(target) => {
                let v = self.stack.pop().ok_or(RuntimeError::StackUnderflow)?;
                if v < 0 {
                    self.check_target(target)?;
                    next_pc = target;
                }
            }
            Instruction::Ret => {
                next_pc = self
                    .call_stack
                    .pop()
                    .ok_or(RuntimeError::CallStackUnderflow)?;
            }
            Instruction::Halt => {
                self.pc = next_pc;
                return Ok(StepResult::Halted);
            }

            Instruction::ReadChar => {
                let addr = self.stack.pop().ok_or(RuntimeError::StackUnderflow)?;
                let c = input.next_char()?;
                self.heap.insert(addr, c as i32);
            }
            Instruction::ReadInt => {
                let addr = self.stack.pop().ok_or(RuntimeError::StackUnderflow)?;
                let v = input.next_int()?;
                self.heap.insert(addr, v);
            }
            Instruction::WriteChar => {
                let v = self.stack.pop().ok_or(RuntimeError::StackUnderflow)?;
                output.put_char((v & 0xFF) as u8)?;
            }
            Instruction::WriteInt => {
                let v = self.stack.pop().ok_or(RuntimeError::StackUnderflow)?;
                output.put_int(v)?;
            }
        }

        self.pc = next_pc;
        Ok(StepResult::Continue)
    }

    /// Bounds-checks a jump/call target before committing it to `pc`.
    ///
    /// Every target produced by `wsasm::assemble` is already guaranteed to
    /// index a valid instruction slot, so this never trips on an assembled
    /// program; it guards a hand-built `Program` instead.
    fn check_target(&self, target: usize) -> Result<(), RuntimeError> {
        if target >= self.instructions.len() {
            Err(RuntimeError::InvalidJumpTarget(target))
        } else {
            Ok(())
        }
    }

    fn op_copy(&mut self, n: i32) -> Result<(), RuntimeError> {
        let depth = self.stack.len();
        if n < 0 || (n as usize) >= depth {
            return Err(RuntimeError::StackUnderflow);
        }
        let value = self.stack[depth - 1 - n as usize];
        self.stack.push(value);
        Ok(())
    }

    /// `n < 0` or `n + 1 >= depth` clears the stack down to the saved top
    /// instead of erroring — a deliberately preserved quirk of the original
    /// language's reference behavior.
    fn op_slide(&mut self, n: i32) -> Result<(), RuntimeError> {
        let top = *self.stack.last().ok_or(RuntimeError::StackUnderflow)?;
        let depth = self.stack.len() as i64;
        if (n as i64) < 0 || (n as i64) + 1 >= depth {
            self.stack.clear();
        } else {
            let keep = (depth - (n as i64 + 1)) as usize;
            self.stack.truncate(keep);
        }
        self.stack.push(top);
        Ok(())
    }

    fn op_arithmetic(&mut self, f: impl FnOnce(i32, i32) -> i32) -> Result<(), RuntimeError> {
        let rhs = self.stack.pop().ok_or(RuntimeError::StackUnderflow)?;
        let lhs = self.stack.pop().ok_or(RuntimeError::StackUnderflow)?;
        self.stack.push(f(lhs, rhs));
        Ok(())
    }

    /// Shared by `div`/`mod`: both require the floored-division family of
    /// operations (`num_integer::Integer::div_floor`/`mod_floor`) rather than
    /// Rust's truncating `/`/`%`, and both reject a zero divisor the same way.
    fn op_division(&mut self, f: impl FnOnce(&i32, &i32) -> i32) -> Result<(), RuntimeError> {
        let rhs = self.stack.pop().ok_or(RuntimeError::StackUnderflow)?;
        let lhs = self.stack.pop().ok_or(RuntimeError::StackUnderflow)?;
        if rhs == 0 {
            return Err(RuntimeError::DivisionByZero);
        }
        self.stack.push(f(&lhs, &rhs));
        Ok(())
    }
}
