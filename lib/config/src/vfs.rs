bitflags::bitflags! {
    /// This is a bitmask of flags that can be passed to the `open` syscall as parameter
    /// `flags`. It modifies the behavior when accessing and creating the file it opens.
    ///
    /// - File access modes are O_RDONLY, O_WRONLY, and O_RDWR.
    /// - File creation flags are O_CLOEXEC, O_CREAT, O_DIRECTORY, O_EXCL and O_TRUNC.
    /// - Other flags are file status flags.
    ///
    /// Defined in <bits/fcntl-linux.h>. See `man 2 open` for more information.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OpenFlags: i32 {
        /* File access modes. */

        // `O_RDONLY` is zero, so `contains` is always true for it.
        const O_RDONLY      = 0;
        const O_WRONLY      = 1;
        const O_RDWR        = 2;

        /* File creation flags. */
        const O_CREAT       = 0o100;
        const O_EXCL        = 0o200;
        const O_TRUNC       = 0o1000;
        const O_DIRECTORY   = 0o200000;
        const O_CLOEXEC     = 0o2000000;

        /* File status flags. */
        const O_APPEND      = 0o2000;
        const O_NONBLOCK    = 0o4000;
    }
}

impl OpenFlags {
    /// Whether opening may create the file, in which case a mode must be supplied.
    pub fn creates(&self) -> bool {
        self.contains(Self::O_CREAT)
    }
}

/// Special `dirfd` value meaning "relative to the current working directory".
pub const AT_FDCWD: isize = -100;

/// Longest path the kernel hands back, terminating NUL included.
pub const PATH_MAX: usize = 4096;

/// Permission bits for files created through `open(.., O_CREAT)`.
pub const DEFAULT_FILE_MODE: usize = 0o644;

/// `fcntl` command returning the descriptor flags. Used as a cheap validity probe.
pub const F_GETFD: usize = 1;

/// `lseek` whence values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum Whence {
    Set = 0,
    Cur = 1,
    End = 2,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_o_creat_needs_a_mode() {
        assert!((OpenFlags::O_RDWR | OpenFlags::O_CREAT).creates());
        assert!(!(OpenFlags::O_RDWR | OpenFlags::O_TRUNC).creates());
        assert!(!OpenFlags::O_RDONLY.creates());
    }
}
