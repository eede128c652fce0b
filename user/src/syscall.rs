//! Raw trap layer. Every `sys_*` here packs its arguments into the kernel's
//! calling convention, traps, and hands the result register back untouched.

use strum::FromRepr;

/// Syscall numbers of the target kernel (Linux generic numbering).
#[derive(FromRepr, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(usize)]
#[allow(non_camel_case_types)]
pub enum SyscallNo {
    GETCWD = 17,
    DUP = 23,
    DUP3 = 24,
    FCNTL = 25,
    UNLINKAT = 35,
    OPENAT = 56,
    CLOSE = 57,
    PIPE2 = 59,
    LSEEK = 62,
    READ = 63,
    WRITE = 64,
    FSTAT = 80,
    EXIT = 93,
    EXIT_GROUP = 94,
    NANOSLEEP = 101,
    SCHED_YIELD = 124,
    GETTIMEOFDAY = 169,
    GETPID = 172,
    GETPPID = 173,
    BRK = 214,
    MUNMAP = 215,
    CLONE = 220,
    EXECVE = 221,
    MMAP = 222,
    WAIT4 = 260,
}

macro_rules! syscall {
    ($name:ident, $id:expr) => {
        pub fn $name() -> isize {
            syscall($id, [0; 6])
        }
    };
    ($name:ident, $id:expr, $t0:ty) => {
        pub fn $name(a0: $t0) -> isize {
            syscall($id, [a0 as usize, 0, 0, 0, 0, 0])
        }
    };
    ($name:ident, $id:expr, $t0:ty, $t1:ty) => {
        pub fn $name(a0: $t0, a1: $t1) -> isize {
            syscall($id, [a0 as usize, a1 as usize, 0, 0, 0, 0])
        }
    };
    ($name:ident, $id:expr, $t0:ty, $t1:ty, $t2:ty) => {
        pub fn $name(a0: $t0, a1: $t1, a2: $t2) -> isize {
            syscall($id, [a0 as usize, a1 as usize, a2 as usize, 0, 0, 0])
        }
    };
    ($name:ident, $id:expr, $t0:ty, $t1:ty, $t2:ty, $t3:ty) => {
        pub fn $name(a0: $t0, a1: $t1, a2: $t2, a3: $t3) -> isize {
            syscall(
                $id,
                [a0 as usize, a1 as usize, a2 as usize, a3 as usize, 0, 0],
            )
        }
    };
    ($name:ident, $id:expr, $t0:ty, $t1:ty, $t2:ty, $t3:ty, $t4:ty) => {
        pub fn $name(a0: $t0, a1: $t1, a2: $t2, a3: $t3, a4: $t4) -> isize {
            syscall(
                $id,
                [a0 as usize, a1 as usize, a2 as usize, a3 as usize, a4 as usize, 0],
            )
        }
    };
    ($name:ident, $id:expr, $t0:ty, $t1:ty, $t2:ty, $t3:ty, $t4:ty, $t5:ty) => {
        pub fn $name(a0: $t0, a1: $t1, a2: $t2, a3: $t3, a4: $t4, a5: $t5) -> isize {
            syscall(
                $id,
                [
                    a0 as usize,
                    a1 as usize,
                    a2 as usize,
                    a3 as usize,
                    a4 as usize,
                    a5 as usize,
                ],
            )
        }
    };
}

#[cfg(target_arch = "riscv64")]
fn syscall(id: SyscallNo, args: [usize; 6]) -> isize {
    let mut ret: isize;
    unsafe {
        core::arch::asm!(
            "ecall",
            inlateout("a0") args[0] => ret,
            in("a1") args[1],
            in("a2") args[2],
            in("a3") args[3],
            in("a4") args[4],
            in("a5") args[5],
            in("a7") id as usize
        );
    }
    ret
}

#[cfg(target_arch = "loongarch64")]
fn syscall(id: SyscallNo, args: [usize; 6]) -> isize {
    let mut ret: isize;
    unsafe {
        core::arch::asm!(
            "syscall 0",
            inlateout("$a0") args[0] => ret,
            in("$a1") args[1],
            in("$a2") args[2],
            in("$a3") args[3],
            in("$a4") args[4],
            in("$a5") args[5],
            in("$a7") id as usize
        );
    }
    ret
}

/// No kernel to trap into: every call fails as unimplemented.
#[cfg(not(any(target_arch = "riscv64", target_arch = "loongarch64")))]
fn syscall(_id: SyscallNo, _args: [usize; 6]) -> isize {
    systype::error::SysError::ENOSYS.as_ret()
}

use SyscallNo::*;

// file system
syscall!(sys_getcwd, GETCWD, *mut u8, usize);
syscall!(sys_openat, OPENAT, isize, *const u8, usize, usize);
syscall!(sys_close, CLOSE, usize);
syscall!(sys_read, READ, usize, *mut u8, usize);
syscall!(sys_write, WRITE, usize, *const u8, usize);
syscall!(sys_lseek, LSEEK, usize, isize, usize);
syscall!(sys_dup, DUP, usize);
syscall!(sys_dup3, DUP3, usize, usize, usize);
syscall!(sys_fcntl, FCNTL, usize, usize, usize);
syscall!(sys_pipe2, PIPE2, *mut i32, usize);
syscall!(sys_fstat, FSTAT, usize, *mut systype::stat::Kstat);
syscall!(sys_unlinkat, UNLINKAT, isize, *const u8, usize);

// memory
syscall!(sys_mmap, MMAP, usize, usize, usize, usize, usize, usize);
syscall!(sys_munmap, MUNMAP, usize, usize);
syscall!(sys_brk, BRK, usize);

// task
syscall!(sys_getpid, GETPID);
syscall!(sys_getppid, GETPPID);
syscall!(sys_exit, EXIT, i32);
syscall!(sys_exit_group, EXIT_GROUP, i32);
syscall!(sys_clone, CLONE, usize, usize, usize, usize, usize);
syscall!(sys_execve, EXECVE, *const u8, *const usize, *const usize);
syscall!(sys_wait4, WAIT4, isize, *mut i32, usize, usize);
syscall!(sys_yield, SCHED_YIELD);

// time
syscall!(sys_gettimeofday, GETTIMEOFDAY, *mut systype::time::TimeVal, usize);
syscall!(
    sys_nanosleep,
    NANOSLEEP,
    *const systype::time::TimeSpec,
    *mut systype::time::TimeSpec
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbering_matches_the_kernel_abi() {
        assert_eq!(WRITE as usize, 64);
        assert_eq!(EXIT as usize, 93);
        assert_eq!(CLONE as usize, 220);
        assert_eq!(WAIT4 as usize, 260);
        assert_eq!(SyscallNo::from_repr(222), Some(MMAP));
        assert_eq!(SyscallNo::from_repr(0), None);
    }

    #[cfg(not(any(target_arch = "riscv64", target_arch = "loongarch64")))]
    #[test]
    fn host_trampoline_reports_enosys() {
        assert_eq!(sys_getpid(), -38);
        assert_eq!(sys_write(1, b"x".as_ptr(), 1), -38);
    }
}
