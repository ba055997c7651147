//! Integer and label literal decoding.

use crate::error::ParseError;
use crate::token::{Token, TokenReader};

/// A label is a bit-string over `{S=0, T=1}`; compared structurally, never
/// numerically, so `S` and `SS` are distinct labels despite both denoting
/// zero as a number.
pub type Label = Vec<bool>;

const MAX_MAGNITUDE_BITS: u32 = 31;

/// Decodes a signed integer literal: a sign token followed by a `{S,T}`
/// magnitude (MSB first) terminated by `N`. The empty magnitude is zero.
pub fn decode_integer(reader: &mut TokenReader) -> Result<i32, ParseError> {
    let negative = match reader.next_token() {
        Some(Token::Space) => false,
        Some(Token::Tab) => true,
        Some(Token::Newline) | None => return Err(ParseError::MalformedNumber),
    };

    let mut magnitude: i64 = 0;
    let mut bits = 0u32;
    loop {
        match reader.next_token() {
            Some(Token::Space) => {
                magnitude = (magnitude << 1) | 0;
                bits += 1;
            }
            Some(Token::Tab) => {
                magnitude = (magnitude << 1) | 1;
                bits += 1;
            }
            Some(Token::Newline) => break,
            None => return Err(ParseError::MalformedNumber),
        }
        if bits > MAX_MAGNITUDE_BITS {
            return Err(ParseError::NumberTooLarge);
        }
    }

    let value = if negative { -magnitude } else { magnitude };
    if value > i32::MAX as i64 || value < i32::MIN as i64 {
        return Err(ParseError::NumberTooLarge);
    }
    Ok(value as i32)
}

/// Decodes a label literal: a `{S,T}` bit-string terminated by `N`. The
/// empty label is valid.
pub fn decode_label(reader: &mut TokenReader) -> Result<Label, ParseError> {
    let mut bits = Vec::new();
    loop {
        match reader.next_token() {
            Some(Token::Space) => bits.push(false),
            Some(Token::Tab) => bits.push(true),
            Some(Token::Newline) => return Ok(bits),
            None => return Err(ParseError::MalformedOpcode),
        }
    }
}
