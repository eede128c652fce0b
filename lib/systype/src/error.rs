use strum::FromRepr;

/// Linux specific error codes defined in `errno.h`.
// See in "asm-generic/errno-base.h" and "asm-generic/errno.h".
/// https://elixir.bootlin.com/linux/v6.8.9/source/include/uapi/asm-generic/errno.h#L71
#[derive(FromRepr, Clone, Copy, Debug, Eq, PartialEq)]
#[repr(i32)]
pub enum SysError {
    /// Operation not permitted
    EPERM = 1,
    /// No such file or directory
    ENOENT = 2,
    /// No such process
    ESRCH = 3,
    /// Interrupted system call
    EINTR = 4,
    /// I/O error
    EIO = 5,
    /// Argument list too long
    E2BIG = 7,
    /// Exec format error
    ENOEXEC = 8,
    /// Bad file number
    EBADF = 9,
    /// No child processes
    ECHILD = 10,
    /// Try again
    EAGAIN = 11,
    /// Out of memory
    ENOMEM = 12,
    /// Permission denied
    EACCES = 13,
    /// Bad address
    EFAULT = 14,
    /// Device or resource busy
    EBUSY = 16,
    /// File exists
    EEXIST = 17,
    /// Not a directory
    ENOTDIR = 20,
    /// Is a directory
    EISDIR = 21,
    /// Invalid argument
    EINVAL = 22,
    /// File table overflow
    ENFILE = 23,
    /// Too many open files
    EMFILE = 24,
    /// File too large
    EFBIG = 27,
    /// No space left on device
    ENOSPC = 28,
    /// Illegal seek
    ESPIPE = 29,
    /// Read-only file system
    EROFS = 30,
    /// Broken pipe
    EPIPE = 32,
    /// File name too long
    ENAMETOOLONG = 36,
    /// Invalid system call number
    ENOSYS = 38,
}

impl SysError {
    /// Returns the error description.
    pub const fn as_str(&self) -> &'static str {
        use self::SysError::*;
        match self {
            EPERM => "Operation not permitted",
            ENOENT => "No such file or directory",
            ESRCH => "No such process",
            EINTR => "Interrupted system call",
            EIO => "I/O error",
            E2BIG => "Argument list too long",
            ENOEXEC => "Exec format error",
            EBADF => "Bad file number",
            ECHILD => "No child processes",
            EAGAIN => "Try again",
            ENOMEM => "Out of memory",
            EACCES => "Permission denied",
            EFAULT => "Bad address",
            EBUSY => "Device or resource busy",
            EEXIST => "File exists",
            ENOTDIR => "Not a directory",
            EISDIR => "Is a directory",
            EINVAL => "Invalid argument",
            ENFILE => "File table overflow",
            EMFILE => "Too many open files",
            EFBIG => "File too large",
            ENOSPC => "No space left on device",
            ESPIPE => "Illegal seek",
            EROFS => "Read-only file system",
            EPIPE => "Broken pipe",
            ENAMETOOLONG => "File name too long",
            ENOSYS => "Invalid system call number",
        }
    }

    /// Interprets a raw syscall return. Non-negative values are not errors,
    /// and codes this table does not name give `None`.
    pub fn from_ret(ret: isize) -> Option<Self> {
        if ret >= 0 {
            return None;
        }
        ret.checked_neg()
            .and_then(|code| i32::try_from(code).ok())
            .and_then(Self::from_repr)
    }

    /// Returns the error code value in `i32`.
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// The value a kernel returns in `a0` to report this error.
    pub const fn as_ret(self) -> isize {
        -(self as i32 as isize)
    }
}

impl core::fmt::Display for SysError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}: {}", self, self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_returns_map_to_errno() {
        assert_eq!(SysError::from_ret(-10), Some(SysError::ECHILD));
        assert_eq!(SysError::from_ret(-1), Some(SysError::EPERM));
        assert_eq!(SysError::from_ret(0), None);
        assert_eq!(SysError::from_ret(3), None);
    }

    #[test]
    fn unnamed_codes_are_not_guessed() {
        assert_eq!(SysError::from_ret(-6), None);
        assert_eq!(SysError::from_ret(isize::MIN), None);
        assert_eq!(SysError::from_ret(isize::MIN + 1), None);
        assert_eq!(SysError::from_ret(i32::MIN as isize), None);
    }

    #[test]
    fn ret_round_trips_through_code() {
        assert_eq!(SysError::EBADF.as_ret(), -9);
        assert_eq!(SysError::from_ret(SysError::ENOSYS.as_ret()), Some(SysError::ENOSYS));
    }
}
