use config::{harness::EXEC_FAILED_EXIT, process::ExitStatus};

use super::TestName;
use crate::{Pid, SyscallErr};

/// One target program to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scenario {
    pub name: TestName,
}

impl Scenario {
    pub fn new(name: &str) -> Self {
        Self {
            name: TestName::new(name),
        }
    }
}

/// How a scenario ended, as the harness sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    /// The program ran and exited with this non-zero code.
    Fail(i32),
    /// The program was killed by this signal.
    Signaled(u8),
    /// The child could not exec the program.
    ExecFailed,
    /// No child was started, or it could not be reaped.
    LaunchFailed(SyscallErr),
    Skipped,
}

impl Verdict {
    pub const fn from_status(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Exited(0) => Verdict::Pass,
            ExitStatus::Exited(EXEC_FAILED_EXIT) => Verdict::ExecFailed,
            ExitStatus::Exited(code) => Verdict::Fail(code),
            ExitStatus::Signaled(sig) => Verdict::Signaled(sig),
        }
    }

    pub const fn is_failure(&self) -> bool {
        !matches!(self, Verdict::Pass | Verdict::Skipped)
    }
}

/// What happened to the scenario at `index` of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunRecord {
    pub index: usize,
    pub name: TestName,
    pub pid: Option<Pid>,
    pub status: Option<ExitStatus>,
    pub verdict: Verdict,
}
