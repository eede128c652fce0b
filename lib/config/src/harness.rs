//! Constants of the conformance harness.

/// Capacity of a test program name buffer, terminating NUL included.
pub const PROG_NAME_MAX_LENGTH: usize = 40;

/// Exit code a forked child uses when `exec` of the target returned.
/// No conformance program exits with it, so the harness can tell an
/// unstartable program from one that ran and failed.
pub const EXEC_FAILED_EXIT: i32 = 127;

/// Exit code of a user program that panicked.
pub const PANIC_EXIT: i32 = -1;

/// Leading fields of a manifest record before the program name,
/// i.e. `./runtest.exe -w entry-static.exe <name>`.
pub const MANIFEST_SKIP_FIELDS: usize = 3;

/// Field separator of a manifest record.
pub const MANIFEST_DELIMITER: u8 = b' ';

/// Manifest read when `usertests --manifest` is given no path.
pub const DEFAULT_MANIFEST: &str = "./run-static.sh";

/// Program and leading arguments used to launch manifest scenarios.
pub const DEFAULT_RUNNER: &str = "./runtest.exe";
pub const DEFAULT_RUNNER_ARGS: &[&str] = &["-w", "entry-static.exe"];

/// Scenarios run by `usertests` without arguments.
pub const DEFAULT_SCENARIOS: &[&str] = &[
    "mmap",
    "munmap",
    "clone",
    "yield",
    "waitpid",
    "dup2",
    "dup",
    "exec",
    "exit",
    "fork",
    "getpid",
    "getppid",
    "gettimeofday",
    "uname",
    "sleep",
    "times",
    "pipe",
    "wait",
    "open",
    "brk",
];

/// Scenarios in [`DEFAULT_SCENARIOS`] this user land has no program for.
pub const DEFAULT_SKIP: &[&str] = &["clone", "uname", "times"];
