/// A single Whitespace instruction, fully decoded.
///
/// Labels (`N SS`) are erased during assembly: by the time a program reaches
/// the virtual machine, every `Call`/`Jump`/`Jz`/`Jn` target has already been
/// resolved to an absolute index into the instruction array.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Instruction {
    Push(i32),
    Dup,
    Swap,
    Discard,
    /// Nonstandard extension (`S TS`): duplicate the value `n` positions below the top.
    Copy(i32),
    /// Nonstandard extension (`S TN`): discard `n` values below the top.
    Slide(i32),

    Add,
    Sub,
    Mul,
    Div,
    Mod,

    Store,
    Load,

    Call(usize),
    Jump(usize),
    Jz(usize),
    Jn(usize),
    Ret,
    Halt,

    ReadChar,
    ReadInt,
    WriteChar,
    WriteInt,
}

/// A fully assembled program: a flat, read-only instruction array indexed by
/// the virtual machine's program counter.
pub type Program = Vec<Instruction>;
