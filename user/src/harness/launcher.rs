use alloc::{string::String, vec::Vec};

use config::{
    harness::EXEC_FAILED_EXIT,
    process::{ExitStatus, WaitOptions},
};

use super::Scenario;
use crate::{Fork, Pid, SysResult, SyscallErr, execve, exit, fork, waitpid};

/// A reaped scenario process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Launched {
    pub pid: Pid,
    pub status: ExitStatus,
}

/// Runs one scenario to completion.
pub trait Launcher {
    fn launch(&mut self, scenario: &Scenario) -> SysResult<Launched>;
}

/// What the child execs for a scenario.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LaunchStyle {
    /// The scenario name is the program.
    Exec,
    /// `program args... <name>`, e.g. `./runtest.exe -w entry-static.exe brk`.
    Runner { program: String, args: Vec<String> },
}

impl LaunchStyle {
    /// Program path and argument vector for `name`.
    pub fn command<'a>(&'a self, name: &'a str) -> (&'a str, Vec<&'a str>) {
        match self {
            LaunchStyle::Exec => (name, alloc::vec![name]),
            LaunchStyle::Runner { program, args } => {
                let argv = core::iter::once(program.as_str())
                    .chain(args.iter().map(String::as_str))
                    .chain(core::iter::once(name))
                    .collect();
                (program.as_str(), argv)
            }
        }
    }
}

/// Forks a child per scenario, which execs the target, and waits for
/// exactly that child.
pub struct ForkExec {
    style: LaunchStyle,
}

impl ForkExec {
    pub fn new(style: LaunchStyle) -> Self {
        Self { style }
    }

    fn exec_target(&self, name: &str) -> SyscallErr {
        let (path, argv) = self.style.command(name);
        execve(path, &argv, &[])
    }
}

impl Launcher for ForkExec {
    fn launch(&mut self, scenario: &Scenario) -> SysResult<Launched> {
        let name = scenario.name.as_str();
        match fork()? {
            Fork::Child => {
                let err = self.exec_target(name);
                eprintln!("usertests: cannot exec {}: {}", name, err);
                exit(EXEC_FAILED_EXIT);
            }
            Fork::Parent(pid) => {
                log::debug!("[ForkExec::launch] {name} runs as pid {pid}");
                let (reaped, status) = waitpid(pid as isize, WaitOptions::empty())?;
                let status = status.exit_status();
                log::debug!("[ForkExec::launch] pid {reaped} ended with {status:?}");
                Ok(Launched {
                    pid: reaped,
                    status,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn exec_style_runs_the_name_itself() {
        let (path, argv) = LaunchStyle::Exec.command("getpid");
        assert_eq!(path, "getpid");
        assert_eq!(argv, ["getpid"]);
    }

    #[test]
    fn runner_style_appends_the_name() {
        let style = LaunchStyle::Runner {
            program: "./runtest.exe".to_string(),
            args: alloc::vec!["-w".to_string(), "entry-static.exe".to_string()],
        };
        let (path, argv) = style.command("brk");
        assert_eq!(path, "./runtest.exe");
        assert_eq!(argv, ["./runtest.exe", "-w", "entry-static.exe", "brk"]);
    }

    #[cfg(not(any(target_arch = "riscv64", target_arch = "loongarch64")))]
    #[test]
    fn failed_fork_is_reported_not_hidden() {
        let mut launcher = ForkExec::new(LaunchStyle::Exec);
        let err = launcher.launch(&Scenario::new("fork")).unwrap_err();
        assert_eq!(err, systype::error::SysError::ENOSYS);
    }
}
