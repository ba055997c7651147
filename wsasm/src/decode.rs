//! Opcode decoding: a nested prefix dispatch over IMP tokens followed by a
//! category-specific opcode.

use wsvm::Instruction;

use crate::error::ParseError;
use crate::numbers::{decode_integer, decode_label, Label};
use crate::token::{Token, TokenReader};

/// The result of decoding an `N`-prefixed (flow control) instruction: plain
/// instructions, a label definition, or a branch still needing its label
/// resolved to an instruction-array index.
pub enum FlowOp {
    Plain(Instruction),
    Label(Label),
    Branch(fn(usize) -> Instruction, Label),
}

pub fn decode_stack(reader: &mut TokenReader) -> Result<Instruction, ParseError> {
    match reader.next_token() {
        Some(Token::Space) => Ok(Instruction::Push(decode_integer(reader)?)),
        Some(Token::Tab) => match reader.next_token() {
            Some(Token::Space) => Ok(Instruction::Copy(decode_integer(reader)?)),
            Some(Token::Newline) => Ok(Instruction::Slide(decode_integer(reader)?)),
            _ => Err(ParseError::MalformedOpcode),
        },
        Some(Token::Newline) => match reader.next_token() {
            Some(Token::Space) => Ok(Instruction::Dup),
            Some(Token::Tab) => Ok(Instruction::Swap),
            Some(Token::Newline) => Ok(Instruction::Discard),
            None => Err(ParseError::MalformedOpcode),
        },
        None => Err(ParseError::MalformedOpcode),
    }
}

pub fn decode_tab_category(reader: &mut TokenReader) -> Result<Instruction, ParseError> {
    match reader.next_token() {
        Some(Token::Space) => decode_arithmetic(reader),
        Some(Token::Tab) => decode_heap(reader),
        Some(Token::Newline) => decode_io(reader),
        None => Err(ParseError::MalformedOpcode),
    }
}

fn decode_arithmetic(reader: &mut TokenReader) -> Result<Instruction, ParseError> {
    let a = reader.next_token().ok_or(ParseError::MalformedOpcode)?;
    let b = reader.next_token().ok_or(ParseError::MalformedOpcode)?;
    match (a, b) {
        (Token::Space, Token::Space) => Ok(Instruction::Add),
        (Token::Space, Token::Tab) => Ok(Instruction::Sub),
        (Token::Space, Token::Newline) => Ok(Instruction::Mul),
        (Token::Tab, Token::Space) => Ok(Instruction::Div),
        (Token::Tab, Token::Tab) => Ok(Instruction::Mod),
        _ => Err(ParseError::MalformedOpcode),
    }
}

fn decode_heap(reader: &mut TokenReader) -> Result<Instruction, ParseError> {
    match reader.next_token() {
        Some(Token::Space) => Ok(Instruction::Store),
        Some(Token::Tab) => Ok(Instruction::Load),
        _ => Err(ParseError::MalformedOpcode),
    }
}

fn decode_io(reader: &mut TokenReader) -> Result<Instruction, ParseError> {
    let a = reader.next_token().ok_or(ParseError::MalformedOpcode)?;
    let b = reader.next_token().ok_or(ParseError::MalformedOpcode)?;
    match (a, b) {
        (Token::Space, Token::Space) => Ok(Instruction::WriteChar),
        (Token::Space, Token::Tab) => Ok(Instruction::WriteInt),
        (Token::Tab, Token::Space) => Ok(Instruction::ReadChar),
        (Token::Tab, Token::Tab) => Ok(Instruction::ReadInt),
        _ => Err(ParseError::MalformedOpcode),
    }
}

pub fn decode_flow(reader: &mut TokenReader) -> Result<FlowOp, ParseError> {
    match reader.next_token() {
        Some(Token::Space) => match reader.next_token() {
            Some(Token::Space) => Ok(FlowOp::Label(decode_label(reader)?)),
            Some(Token::Tab) => Ok(FlowOp::Branch(Instruction::Call, decode_label(reader)?)),
            Some(Token::Newline) => Ok(FlowOp::Branch(Instruction::Jump, decode_label(reader)?)),
            None => Err(ParseError::MalformedOpcode),
        },
        Some(Token::Tab) => match reader.next_token() {
            Some(Token::Space) => Ok(FlowOp::Branch(Instruction::Jz, decode_label(reader)?)),
            Some(Token::Tab) => Ok(FlowOp::Branch(Instruction::Jn, decode_label(reader)?)),
            Some(Token::Newline) => Ok(FlowOp::Plain(Instruction::Ret)),
            None => Err(ParseError::MalformedOpcode),
        },
        Some(Token::Newline) => match reader.next_token() {
            Some(Token::Newline) => Ok(FlowOp::Plain(Instruction::Halt)),
            _ => Err(ParseError::MalformedOpcode),
        },
        None => Err(ParseError::MalformedOpcode),
    }
}
