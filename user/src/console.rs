use core::fmt::{self, Write};

use crate::fs::{Fd, STDERR, STDOUT, write_all};

/// ANSI colour sequences used by test output.
pub mod color {
    pub const NONE: &str = "\x1b[m";
    pub const LIGHT_RED: &str = "\x1b[1;31m";
    pub const LIGHT_GREEN: &str = "\x1b[1;32m";
    pub const YELLOW: &str = "\x1b[1;33m";
}

/// `fmt::Write` over a descriptor.
pub struct FdWriter(pub Fd);

impl Write for FdWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        write_all(self.0, s.as_bytes()).map_err(|_| fmt::Error)
    }
}

pub fn stdout() -> FdWriter {
    FdWriter(STDOUT)
}

pub fn stderr() -> FdWriter {
    FdWriter(STDERR)
}

// A console that cannot be written has nowhere to report it, so output
// errors are dropped.
pub fn print(args: fmt::Arguments) {
    stdout().write_fmt(args).ok();
}

pub fn eprint(args: fmt::Arguments) {
    stderr().write_fmt(args).ok();
}

#[macro_export]
macro_rules! print {
    ($fmt: literal $(, $($arg: tt)+)?) => {
        $crate::console::print(format_args!($fmt $(, $($arg)+)?))
    }
}

#[macro_export]
macro_rules! println {
    () => {
        $crate::console::print(format_args!("\n"))
    };
    ($fmt: literal $(, $($arg: tt)+)?) => {
        $crate::console::print(format_args!(concat!($fmt, "\n") $(, $($arg)+)?))
    }
}

#[macro_export]
macro_rules! eprintln {
    ($fmt: literal $(, $($arg: tt)+)?) => {
        $crate::console::eprint(format_args!(concat!($fmt, "\n") $(, $($arg)+)?))
    }
}
