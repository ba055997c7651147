#[macro_use]
extern crate clap;

use std::fmt;
use std::path::{Path, PathBuf};

use clap::Arg;

use wsvm::io::StdioPort;
use wsvm::Vm;

#[derive(Debug)]
enum Error {
    Parse(wsasm::ParseError),
    Runtime(wsvm::RuntimeError),
    Io(std::io::Error, PathBuf),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Parse(err) => write!(f, "parse error: {}", err),
            Error::Runtime(err) => write!(f, "runtime error: {}", err),
            Error::Io(err, path) => write!(f, "io error: {}: {}", path.display(), err),
        }
    }
}

fn run(path: &str) -> Result<(), Error> {
    let path = Path::new(path);
    let source = std::fs::read(path).map_err(|err| Error::Io(err, path.to_path_buf()))?;
    let program = wsasm::assemble(&source).map_err(Error::Parse)?;

    let mut vm = Vm::new(&program);
    let mut input = StdioPort::new();
    let mut output = StdioPort::new();
    vm.run(&mut input, &mut output).map_err(Error::Runtime)
}

fn main() {
    let mut app = app_from_crate!().arg(
        Arg::with_name("PROGRAM")
            .help("Sets the Whitespace source file to run")
            .index(1)
            .multiple(true),
    );

    let matches = app.clone().get_matches();
    let programs: Vec<&str> = matches
        .values_of("PROGRAM")
        .map(|values| values.collect())
        .unwrap_or_default();

    // Wrong argument count prints usage and exits cleanly rather than erroring.
    if programs.len() != 1 {
        app.print_help().ok();
        println!();
        std::process::exit(0);
    }

    match run(programs[0]) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}
