/// File status as filled in by `fstat`, in the layout of the generic
/// 64-bit Linux `struct stat` (RISC-V, LoongArch).
#[derive(Debug, Default, Clone, Copy)]
#[repr(C)]
pub struct Kstat {
    pub st_dev: u64,
    pub st_ino: u64,
    pub st_mode: u32,
    pub st_nlink: u32,
    pub st_uid: u32,
    pub st_gid: u32,
    pub st_rdev: u64,
    pub __pad: u64,
    pub st_size: i64,
    pub st_blksize: u32,
    pub __pad2: i32,
    pub st_blocks: u64,
    pub st_atime_sec: i64,
    pub st_atime_nsec: i64,
    pub st_mtime_sec: i64,
    pub st_mtime_nsec: i64,
    pub st_ctime_sec: i64,
    pub st_ctime_nsec: i64,
    pub __unused: [u32; 2],
}

/// Mask of the file type bits in `st_mode`.
pub const S_IFMT: u32 = 0o170000;
pub const S_IFREG: u32 = 0o100000;

impl Kstat {
    /// Size in bytes. A negative size from a confused kernel reads as empty.
    pub fn size(&self) -> usize {
        usize::try_from(self.st_size).unwrap_or(0)
    }

    pub fn is_regular(&self) -> bool {
        self.st_mode & S_IFMT == S_IFREG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_the_kernel_record() {
        assert_eq!(core::mem::size_of::<Kstat>(), 128);
        assert_eq!(core::mem::offset_of!(Kstat, st_size), 48);
    }

    #[test]
    fn file_type_and_size() {
        let stat = Kstat {
            st_mode: S_IFREG | 0o644,
            st_size: 27,
            ..Default::default()
        };
        assert!(stat.is_regular());
        assert!(!Kstat { st_mode: 0o010644, ..stat }.is_regular());
        assert_eq!(stat.size(), 27);
        assert_eq!(Kstat { st_size: -1, ..stat }.size(), 0);
    }
}
