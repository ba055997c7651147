//! Single-pass label resolution.
//!
//! Unlike a two-pass approach that builds a list of unresolved instructions
//! and finalizes targets in a second sweep, this keeps one table of
//! placeholder positions per undefined label, patched in place as `label`
//! definitions are reached during the single linear scan over the token
//! stream.

use std::collections::HashMap;

use wsvm::Instruction;

use crate::error::ParseError;
use crate::numbers::Label;

#[derive(Default)]
pub struct LabelTable {
    defined: HashMap<Label, usize>,
    unresolved: HashMap<Label, Vec<usize>>,
}

impl LabelTable {
    pub fn new() -> LabelTable {
        LabelTable::default()
    }

    /// Records `label` as defined at `index`, back-patching every placeholder
    /// left by an earlier forward reference to it.
    pub fn define(
        &mut self,
        label: Label,
        index: usize,
        instructions: &mut [Instruction],
    ) -> Result<(), ParseError> {
        if self.defined.contains_key(&label) {
            return Err(ParseError::LabelRedefinition);
        }
        if let Some(positions) = self.unresolved.remove(&label) {
            for pos in positions {
                instructions[pos] = patch(instructions[pos], index);
            }
        }
        self.defined.insert(label, index);
        Ok(())
    }

    /// Resolves `label` against a branch instruction that will occupy
    /// `position` in the instruction array, or records `position` as a
    /// placeholder awaiting a later `define` call.
    ///
    /// The placeholder target embedded in the returned instruction is
    /// meaningless; it is always overwritten once `label` is defined, and
    /// `finish` rejects the program if it never is.
    pub fn reference(
        &mut self,
        label: Label,
        position: usize,
        ctor: fn(usize) -> Instruction,
    ) -> Instruction {
        match self.defined.get(&label) {
            Some(&index) => ctor(index),
            None => {
                self.unresolved.entry(label).or_insert_with(Vec::new).push(position);
                ctor(usize::MAX)
            }
        }
    }

    pub fn finish(self) -> Result<(), ParseError> {
        if self.unresolved.is_empty() {
            Ok(())
        } else {
            Err(ParseError::UnresolvedLabel)
        }
    }
}

fn patch(instruction: Instruction, target: usize) -> Instruction {
    match instruction {
        Instruction::Call(_) => Instruction::Call(target),
        Instruction::Jump(_) => Instruction::Jump(target),
        Instruction::Jz(_) => Instruction::Jz(target),
        Instruction::Jn(_) => Instruction::Jn(target),
        other => other,
    }
}
