//! Token reader and single-pass assembler for Whitespace source.
//!
//! `assemble` is the only entry point most callers need: it turns a raw
//! byte buffer into a [`wsvm::Program`] with every label reference already
//! resolved to an absolute instruction-array index.

mod decode;
mod error;
mod labels;
mod numbers;
mod token;

pub use error::ParseError;
pub use numbers::Label;

use wsvm::{Instruction, Program};

use decode::{decode_flow, decode_stack, decode_tab_category, FlowOp};
use labels::LabelTable;
use token::{Token, TokenReader};

pub type Result<T> = std::result::Result<T, ParseError>;

/// Assembles a complete Whitespace program from its source bytes.
pub fn assemble(source: &[u8]) -> Result<Program> {
    let mut reader = TokenReader::new(source);
    let mut instructions: Program = Vec::new();
    let mut labels = LabelTable::new();

    loop {
        let first = match reader.next_token() {
            Some(token) => token,
            None => break,
        };

        match first {
            Token::Space => {
                let instr = decode_stack(&mut reader)?;
                instructions.push(instr);
            }
            Token::Tab => {
                let instr = decode_tab_category(&mut reader)?;
                instructions.push(instr);
            }
            Token::Newline => match decode_flow(&mut reader)? {
                FlowOp::Plain(instr) => instructions.push(instr),
                FlowOp::Label(label) => {
                    labels.define(label, instructions.len(), &mut instructions)?;
                }
                FlowOp::Branch(ctor, label) => {
                    let position = instructions.len();
                    let instr = labels.reference(label, position, ctor);
                    instructions.push(instr);
                }
            },
        }
    }

    labels.finish()?;

    if instructions.is_empty() {
        return Err(ParseError::EmptyProgram);
    }

    Ok(instructions)
}
