//! File descriptor layer: descriptor lifecycle and byte streams.

use alloc::{ffi::CString, string::String, vec::Vec};
use core::ffi::CStr;

use config::vfs::{AT_FDCWD, DEFAULT_FILE_MODE, F_GETFD, OpenFlags, PATH_MAX, Whence};
use systype::{error::SysError, stat::Kstat};

use crate::{
    error::{SysResult, SyscallErr, check},
    syscall::*,
};

pub type Fd = usize;

pub const STDIN: Fd = 0;
pub const STDOUT: Fd = 1;
pub const STDERR: Fd = 2;

/// Opens `path` relative to the working directory. Files created through
/// `O_CREAT` get mode 0o644.
pub fn open(path: &str, flags: OpenFlags) -> SysResult<Fd> {
    let path = CString::new(path).map_err(|_| SyscallErr::from(SysError::EINVAL))?;
    let mode = if flags.creates() { DEFAULT_FILE_MODE } else { 0 };
    check(sys_openat(
        AT_FDCWD,
        path.as_ptr() as *const u8,
        flags.bits() as usize,
        mode,
    ))
}

pub fn close(fd: Fd) -> SysResult<()> {
    check(sys_close(fd)).map(|_| ())
}

/// Reads at most `buf.len()` bytes. `Ok(0)` is end of stream.
pub fn read(fd: Fd, buf: &mut [u8]) -> SysResult<usize> {
    check(sys_read(fd, buf.as_mut_ptr(), buf.len()))
}

/// Writes at most `buf.len()` bytes, returning how many were taken.
pub fn write(fd: Fd, buf: &[u8]) -> SysResult<usize> {
    check(sys_write(fd, buf.as_ptr(), buf.len()))
}

/// Writes the whole buffer, retrying after short writes.
pub fn write_all(fd: Fd, mut buf: &[u8]) -> SysResult<()> {
    while !buf.is_empty() {
        match write(fd, buf)? {
            0 => return Err(SysError::EIO.into()),
            n => buf = &buf[n..],
        }
    }
    Ok(())
}

/// Reads until end of stream.
pub fn read_to_end(fd: Fd) -> SysResult<Vec<u8>> {
    let mut data = Vec::new();
    let mut chunk = [0u8; 512];
    loop {
        match read(fd, &mut chunk)? {
            0 => return Ok(data),
            n => data.extend_from_slice(&chunk[..n]),
        }
    }
}

/// New descriptor for the same open file, the lowest one free.
pub fn dup(fd: Fd) -> SysResult<Fd> {
    check(sys_dup(fd))
}

/// Makes `new` refer to the open file behind `old`, closing whatever `new`
/// referred to. The kernel's `dup3` does the close and rebind in one step.
pub fn dup2(old: Fd, new: Fd) -> SysResult<Fd> {
    if old == new {
        // `dup3` refuses equal descriptors; `dup2` only requires `old` to be open.
        check(sys_fcntl(old, F_GETFD, 0))?;
        return Ok(new);
    }
    check(sys_dup3(old, new, 0))
}

/// Both ends of a pipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pipe {
    pub read: Fd,
    pub write: Fd,
}

pub fn pipe() -> SysResult<Pipe> {
    let mut fds = [0i32; 2];
    check(sys_pipe2(fds.as_mut_ptr(), 0))?;
    log::trace!("[pipe] read end {}, write end {}", fds[0], fds[1]);
    Ok(Pipe {
        read: fds[0] as Fd,
        write: fds[1] as Fd,
    })
}

pub fn fstat(fd: Fd) -> SysResult<Kstat> {
    let mut stat = Kstat::default();
    check(sys_fstat(fd, &mut stat))?;
    Ok(stat)
}

pub fn lseek(fd: Fd, offset: isize, whence: Whence) -> SysResult<usize> {
    check(sys_lseek(fd, offset, whence as usize))
}

pub fn unlink(path: &str) -> SysResult<()> {
    let path = CString::new(path).map_err(|_| SyscallErr::from(SysError::EINVAL))?;
    check(sys_unlinkat(AT_FDCWD, path.as_ptr() as *const u8, 0)).map(|_| ())
}

pub fn getcwd() -> SysResult<String> {
    let mut buf = alloc::vec![0u8; PATH_MAX];
    check(sys_getcwd(buf.as_mut_ptr(), buf.len()))?;
    let path = CStr::from_bytes_until_nul(&buf)
        .map_err(|_| SyscallErr::from(SysError::ENAMETOOLONG))?;
    let path = path.to_str().map_err(|_| SyscallErr::from(SysError::EINVAL))?;
    Ok(String::from(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_with_nul_never_reach_the_kernel() {
        assert_eq!(open("a\0b", OpenFlags::O_RDONLY), Err(SyscallErr::from(SysError::EINVAL)));
        assert_eq!(unlink("a\0b"), Err(SyscallErr::from(SysError::EINVAL)));
    }

    #[test]
    fn empty_write_all_is_a_no_op() {
        assert_eq!(write_all(STDOUT, b""), Ok(()));
    }

    #[cfg(not(any(target_arch = "riscv64", target_arch = "loongarch64")))]
    #[test]
    fn errors_surface_unchanged() {
        assert_eq!(dup(STDOUT), Err(SyscallErr::from(SysError::ENOSYS)));
        assert_eq!(dup2(STDOUT, STDOUT), Err(SyscallErr::from(SysError::ENOSYS)));
        assert_eq!(pipe(), Err(SyscallErr::from(SysError::ENOSYS)));
        assert_eq!(read_to_end(STDIN), Err(SyscallErr::from(SysError::ENOSYS)));
        assert_eq!(getcwd(), Err(SyscallErr::from(SysError::ENOSYS)));
    }
}
