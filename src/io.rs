//! I/O port abstraction: pluggable sources of input characters/integers and
//! sinks for output characters/integers, injected into a [`crate::vm::Vm`]
//! by its caller rather than hard-wired to stdio.

use std::error::Error as StdError;
use std::fmt;
use std::io::{self, BufRead, Write};

/// I/O errors: end of input, an unimplemented capability, or a malformed
/// integer line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum IoError {
    EndOfInput,
    NotImplemented,
    MalformedInteger(String),
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IoError::EndOfInput => f.write_str("end of input"),
            IoError::NotImplemented => f.write_str("input not implemented"),
            IoError::MalformedInteger(line) => {
                write!(f, "malformed integer literal: {:?}", line)
            }
        }
    }
}

impl StdError for IoError {}

/// A source of input characters and integers.
pub trait InputPort {
    fn next_char(&mut self) -> Result<u8, IoError>;
    fn next_int(&mut self) -> Result<i32, IoError>;
}

/// A sink for output characters and integers.
pub trait OutputPort {
    fn put_char(&mut self, c: u8) -> Result<(), IoError>;
    fn put_int(&mut self, n: i32) -> Result<(), IoError>;
}

fn parse_int_line(line: &str) -> Result<i32, IoError> {
    let trimmed = line.trim();
    let result = if let Some(hex) = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        i32::from_str_radix(hex, 16)
    } else {
        trimmed.parse::<i32>()
    };
    result.map_err(|_| IoError::MalformedInteger(trimmed.to_owned()))
}

/// Interactive stdin/stdout port. Re-prompts on a syntactically invalid
/// integer line rather than surfacing a parse error, matching a terminal
/// session's tolerance for retyping a bad line.
pub struct StdioPort {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl StdioPort {
    pub fn new() -> StdioPort {
        StdioPort {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for StdioPort {
    fn default() -> StdioPort {
        StdioPort::new()
    }
}

impl InputPort for StdioPort {
    fn next_char(&mut self) -> Result<u8, IoError> {
        let mut buf = [0u8; 1];
        let mut handle = self.stdin.lock();
        match io::Read::read(&mut handle, &mut buf) {
            Ok(0) => Err(IoError::EndOfInput),
            Ok(_) => Ok(buf[0]),
            Err(_) => Err(IoError::EndOfInput),
        }
    }

    fn next_int(&mut self) -> Result<i32, IoError> {
        loop {
            let mut line = String::new();
            let read = self.stdin.lock().read_line(&mut line);
            match read {
                Ok(0) => return Err(IoError::EndOfInput),
                Ok(_) => match parse_int_line(&line) {
                    Ok(value) => return Ok(value),
                    Err(_) => {
                        println!("invalid integer, try again:");
                        continue;
                    }
                },
                Err(_) => return Err(IoError::EndOfInput),
            }
        }
    }
}

impl OutputPort for StdioPort {
    fn put_char(&mut self, c: u8) -> Result<(), IoError> {
        self.stdout.write_all(&[c]).map_err(|_| IoError::EndOfInput)?;
        self.stdout.flush().map_err(|_| IoError::EndOfInput)
    }

    fn put_int(&mut self, n: i32) -> Result<(), IoError> {
        write!(self.stdout, "{}", n).map_err(|_| IoError::EndOfInput)
    }
}

/// String-backed port for tests and batch execution: input is consumed from
/// a fixed buffer and output is accumulated into an owned byte buffer. Unlike
/// [`StdioPort`], a malformed integer line is surfaced as an error instead
/// of re-prompted, since there is no interactive user to retype it.
#[derive(Default)]
pub struct StringPort {
    input: Vec<u8>,
    cursor: usize,
    pub output: Vec<u8>,
}

impl StringPort {
    pub fn new(input: impl Into<String>) -> StringPort {
        StringPort {
            input: input.into().into_bytes(),
            cursor: 0,
            output: Vec::new(),
        }
    }
}

impl InputPort for StringPort {
    fn next_char(&mut self) -> Result<u8, IoError> {
        if self.cursor >= self.input.len() {
            return Err(IoError::EndOfInput);
        }
        let c = self.input[self.cursor];
        self.cursor += 1;
        Ok(c)
    }

    fn next_int(&mut self) -> Result<i32, IoError> {
        if self.cursor >= self.input.len() {
            return Err(IoError::EndOfInput);
        }
        let rest = &self.input[self.cursor..];
        let newline_pos = rest.iter().position(|&b| b == b'\n').ok_or(IoError::EndOfInput)?;
        let line = String::from_utf8_lossy(&rest[..newline_pos]).into_owned();
        self.cursor += newline_pos + 1;
        parse_int_line(&line)
    }
}

impl OutputPort for StringPort {
    fn put_char(&mut self, c: u8) -> Result<(), IoError> {
        self.output.push(c);
        Ok(())
    }

    fn put_int(&mut self, n: i32) -> Result<(), IoError> {
        self.output.extend_from_slice(n.to_string().as_bytes());
        Ok(())
    }
}

/// A port that accepts no input at all; every call fails with
/// [`IoError::NotImplemented`]. Useful for running programs that are known
/// not to perform input, without wiring up stdio or a fixture buffer.
#[derive(Default)]
pub struct NullPort;

impl InputPort for NullPort {
    fn next_char(&mut self) -> Result<u8, IoError> {
        Err(IoError::NotImplemented)
    }

    fn next_int(&mut self) -> Result<i32, IoError> {
        Err(IoError::NotImplemented)
    }
}
