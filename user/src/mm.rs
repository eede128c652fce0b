//! Memory mapping layer: `mmap`/`munmap` regions and the heap break.

use config::mm::{MAX_ERRNO, MmapFlags, MmapProt};
use systype::error::SysError;

use crate::{
    error::{SysResult, SyscallErr, check},
    fs::Fd,
    syscall::*,
};

/// A region established by [`mmap`]. It stays mapped until [`Mapping::unmap`]
/// or process exit.
#[derive(Debug, PartialEq, Eq)]
pub struct Mapping {
    addr: usize,
    len: usize,
}

impl Mapping {
    pub fn addr(&self) -> usize {
        self.addr
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// # Safety
    ///
    /// The mapping must be readable and nobody may write it, through a shared
    /// mapping in another process included, while the slice is alive.
    pub unsafe fn as_slice(&self) -> &[u8] {
        unsafe { core::slice::from_raw_parts(self.addr as *const u8, self.len) }
    }

    /// # Safety
    ///
    /// The mapping must be writable and not accessed by anyone else while the
    /// slice is alive.
    pub unsafe fn as_mut_slice(&mut self) -> &mut [u8] {
        unsafe { core::slice::from_raw_parts_mut(self.addr as *mut u8, self.len) }
    }

    pub fn unmap(self) -> SysResult<()> {
        munmap(self.addr, self.len)
    }
}

/// Maps `len` bytes of `fd` starting at `offset`, or anonymous memory when
/// `fd` is `None`. `hint` of 0 lets the kernel choose the address. `flags`
/// must hold exactly one of `MAP_SHARED` and `MAP_PRIVATE`.
pub fn mmap(
    hint: usize,
    len: usize,
    prot: MmapProt,
    flags: MmapFlags,
    fd: Option<Fd>,
    offset: usize,
) -> SysResult<Mapping> {
    if !flags.has_valid_sharing() {
        return Err(SysError::EINVAL.into());
    }
    let (flags, fd) = match fd {
        Some(fd) => (flags, fd as isize),
        None => (flags | MmapFlags::MAP_ANONYMOUS, -1),
    };
    let ret = sys_mmap(
        hint,
        len,
        prot.bits() as usize,
        flags.bits() as usize,
        fd as usize,
        offset,
    );
    let addr = check_addr(ret)?;
    log::debug!(
        "[mmap] [{addr:#x}, {:#x}) prot {prot:?} flags {flags:?} fd {fd} offset {offset:#x}",
        addr + len
    );
    Ok(Mapping { addr, len })
}

/// Address-returning syscalls report errors in the top page of the address
/// space, which `MAP_FAILED` belongs to. Anything else is an address.
fn check_addr(ret: isize) -> SysResult<usize> {
    if (-MAX_ERRNO..0).contains(&ret) {
        Err(SyscallErr::from_raw(ret))
    } else {
        Ok(ret as usize)
    }
}

/// Releases exactly the region `[addr, addr + len)` of an earlier mapping.
pub fn munmap(addr: usize, len: usize) -> SysResult<()> {
    check(sys_munmap(addr, len)).map(|_| ())
}

/// Moves the heap break to `addr` and returns the break the kernel settled on.
/// `brk(0)` queries it.
pub fn brk(addr: usize) -> SysResult<usize> {
    check(sys_brk(addr))
}

/// Grows the heap by `increment` bytes and returns the old break, the start
/// of the new memory.
pub fn sbrk(increment: usize) -> SysResult<usize> {
    let old = brk(0)?;
    let wanted = old
        .checked_add(increment)
        .ok_or(SyscallErr::from(SysError::ENOMEM))?;
    // A kernel that cannot move the break leaves it where it was.
    if brk(wanted)? < wanted {
        return Err(SysError::ENOMEM.into());
    }
    Ok(old)
}

#[cfg(test)]
mod tests {
    use config::mm::MAP_FAILED;

    use super::*;

    #[test]
    fn failure_window_excludes_real_addresses() {
        assert_eq!(check_addr(MAP_FAILED as isize), Err(SyscallErr::from(SysError::EPERM)));
        assert_eq!(check_addr(-12), Err(SyscallErr::from(SysError::ENOMEM)));
        assert_eq!(check_addr(-4095).map_err(SyscallErr::raw), Err(-4095));
        assert_eq!(check_addr(0x6000_0000), Ok(0x6000_0000));
        // Only the top page is the error window.
        assert_eq!(check_addr(-4096), Ok(-4096isize as usize));
    }

    #[test]
    fn sharing_type_is_checked_before_trapping() {
        let prot = MmapProt::PROT_READ;
        assert_eq!(
            mmap(0, 4096, prot, MmapFlags::MAP_FILE, None, 0),
            Err(SyscallErr::from(SysError::EINVAL))
        );
        assert_eq!(
            mmap(0, 4096, prot, MmapFlags::MAP_SHARED | MmapFlags::MAP_PRIVATE, Some(3), 0),
            Err(SyscallErr::from(SysError::EINVAL))
        );
    }

    #[cfg(not(any(target_arch = "riscv64", target_arch = "loongarch64")))]
    #[test]
    fn failed_mapping_is_never_an_address() {
        let ret = mmap(
            0,
            0,
            MmapProt::PROT_READ,
            MmapFlags::MAP_SHARED,
            Some(3),
            0,
        );
        assert_eq!(ret, Err(SyscallErr::from(SysError::ENOSYS)));
        assert_eq!(sbrk(64), Err(SyscallErr::from(SysError::ENOSYS)));
    }
}
