use std::error::Error as StdError;
use std::fmt;

use crate::io::IoError;

/// Errors that can abort `Vm::step`/`Vm::run` mid-execution.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RuntimeError {
    StackUnderflow,
    CallStackUnderflow,
    DivisionByZero,
    UnmappedHeapAddress(i32),
    InvalidJumpTarget(usize),
    Io(IoError),
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RuntimeError::StackUnderflow => f.write_str("stack underflow"),
            RuntimeError::CallStackUnderflow => f.write_str("call stack underflow"),
            RuntimeError::DivisionByZero => f.write_str("division by zero"),
            RuntimeError::UnmappedHeapAddress(addr) => {
                write!(f, "read from unmapped heap address {}", addr)
            }
            RuntimeError::InvalidJumpTarget(target) => {
                write!(f, "jump target {} is outside the instruction array", target)
            }
            RuntimeError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl StdError for RuntimeError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            RuntimeError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<IoError> for RuntimeError {
    fn from(err: IoError) -> RuntimeError {
        RuntimeError::Io(err)
    }
}
