//! Token reader: filters a raw byte stream down to the three significant
//! Whitespace tokens, silently skipping every other byte as a comment.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Token {
    Space,
    Tab,
    Newline,
}

pub struct TokenReader<'s> {
    source: &'s [u8],
    cursor: usize,
}

impl<'s> TokenReader<'s> {
    pub fn new(source: &'s [u8]) -> TokenReader<'s> {
        TokenReader { source, cursor: 0 }
    }

    /// Returns the next significant token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token> {
        while self.cursor < self.source.len() {
            let byte = self.source[self.cursor];
            self.cursor += 1;
            match byte {
                b' ' => return Some(Token::Space),
                b'\t' => return Some(Token::Tab),
                b'\n' => return Some(Token::Newline),
                _ => continue,
            }
        }
        None
    }
}
