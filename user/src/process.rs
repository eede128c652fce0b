//! Process control: building up and tearing down process trees.

use alloc::{ffi::CString, vec::Vec};

use config::process::{ExitStatus, SIGCHLD, StatusLayout, WAIT_STATUS_LAYOUT, WaitOptions};
use systype::error::SysError;

use crate::{
    error::{SysResult, SyscallErr, check},
    syscall::*,
};

pub type Pid = usize;

/// Which side of a successful `fork` the caller is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fork {
    Child,
    Parent(Pid),
}

/// Duplicates the calling process.
pub fn fork() -> SysResult<Fork> {
    // The exit signal travels in the low byte of the clone flags.
    let pid = check(sys_clone(SIGCHLD, 0, 0, 0, 0))?;
    Ok(match pid {
        0 => Fork::Child,
        pid => Fork::Parent(pid),
    })
}

/// Replaces the program image with `name`, passing only the program name
/// as argument. Returns only if the kernel refused.
pub fn exec(name: &str) -> SyscallErr {
    execve(name, &[name], &[])
}

/// Replaces the program image. Returns only if the kernel refused, or
/// without trapping with `EINVAL` if a string holds an interior NUL.
pub fn execve(path: &str, argv: &[&str], envp: &[&str]) -> SyscallErr {
    let Ok(path) = CString::new(path) else {
        return SysError::EINVAL.into();
    };
    let (Some(argv), Some(envp)) = (to_cstrings(argv), to_cstrings(envp)) else {
        return SysError::EINVAL.into();
    };
    let argv_ptrs = null_terminated(&argv);
    let envp_ptrs = null_terminated(&envp);
    SyscallErr::from_raw(sys_execve(
        path.as_ptr() as *const u8,
        argv_ptrs.as_ptr(),
        envp_ptrs.as_ptr(),
    ))
}

fn to_cstrings(strs: &[&str]) -> Option<Vec<CString>> {
    strs.iter().map(|s| CString::new(*s).ok()).collect()
}

fn null_terminated(strs: &[CString]) -> Vec<usize> {
    strs.iter()
        .map(|s| s.as_ptr() as usize)
        .chain(core::iter::once(0))
        .collect()
}

pub fn exit(exit_code: i32) -> ! {
    sys_exit(exit_code);
    unreachable!("sys_exit should not return");
}

pub fn exit_group(exit_code: i32) -> ! {
    sys_exit_group(exit_code);
    unreachable!("sys_exit_group should not return");
}

/// The status word `wait4` stores for a reaped child.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WaitStatus {
    raw: i32,
}

impl WaitStatus {
    pub const fn from_raw(raw: i32) -> Self {
        Self { raw }
    }

    pub const fn raw(self) -> i32 {
        self.raw
    }

    pub const fn decode(self, layout: StatusLayout) -> ExitStatus {
        layout.decode(self.raw)
    }

    /// How the child ended, under the layout this build targets.
    pub const fn exit_status(self) -> ExitStatus {
        self.decode(WAIT_STATUS_LAYOUT)
    }

    /// Exit code, `None` if the child was killed.
    pub const fn code(self) -> Option<i32> {
        self.exit_status().code()
    }
}

/// `WEXITSTATUS`: the exit code in a raw wait status word.
#[macro_export]
macro_rules! wexitstatus {
    ($a:expr) => {
        $crate::WaitStatus::from_raw($a).code().unwrap_or(-1)
    };
}

/// Blocks until any child exits and reaps it.
pub fn wait() -> SysResult<(Pid, WaitStatus)> {
    waitpid(-1, WaitOptions::empty())
}

/// Blocks until the child `pid` (any child if `pid == -1`) exits and reaps it.
/// With `WNOHANG` and nothing to reap, the returned pid is 0.
pub fn waitpid(pid: isize, options: WaitOptions) -> SysResult<(Pid, WaitStatus)> {
    let mut raw: i32 = 0;
    let reaped = check(sys_wait4(pid, &mut raw, options.bits() as usize, 0))?;
    log::trace!("[waitpid] reaped {reaped} (waited for {pid}), status {raw:#x}");
    Ok((reaped, WaitStatus::from_raw(raw)))
}

pub fn getpid() -> Pid {
    sys_getpid() as Pid
}

pub fn getppid() -> Pid {
    sys_getppid() as Pid
}

pub fn sched_yield() -> SysResult<()> {
    check(sys_yield()).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_word_follows_the_configured_layout() {
        let status = WaitStatus::from_raw(WAIT_STATUS_LAYOUT.encode_exit(3));
        assert_eq!(status.code(), Some(3));
        assert_eq!(status.exit_status(), ExitStatus::Exited(3));
        assert_eq!(wexitstatus!(WAIT_STATUS_LAYOUT.encode_exit(3)), 3);
    }

    #[test]
    fn both_layouts_decode_the_same_word_differently() {
        let status = WaitStatus::from_raw(0x300);
        assert_eq!(status.decode(StatusLayout::Raw), ExitStatus::Exited(0x300));
        assert_eq!(status.decode(StatusLayout::Linux), ExitStatus::Exited(3));
    }

    #[test]
    fn argument_vectors_end_with_null() {
        let strs = to_cstrings(&["busybox", "sh"]).unwrap();
        let ptrs = null_terminated(&strs);
        assert_eq!(ptrs.len(), 3);
        assert_eq!(ptrs[2], 0);
        assert!(null_terminated(&[]).iter().eq([0].iter()));
    }

    #[test]
    fn interior_nul_is_rejected_before_trapping() {
        assert_eq!(execve("bad\0name", &[], &[]), SysError::EINVAL);
        assert_eq!(execve("ok", &["a\0b"], &[]), SysError::EINVAL);
    }

    #[cfg(not(any(target_arch = "riscv64", target_arch = "loongarch64")))]
    #[test]
    fn kernel_refusals_pass_through() {
        assert_eq!(fork(), Err(SyscallErr::from(SysError::ENOSYS)));
        assert_eq!(wait().unwrap_err(), SysError::ENOSYS);
        assert_eq!(exec("fork"), SysError::ENOSYS);
    }
}
