use core::fmt;

use systype::error::SysError;

/// A failed syscall: the negative value the kernel left in the result
/// register, kept as is so codes outside [`SysError`] survive too.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SyscallErr(isize);

pub type SysResult<T> = Result<T, SyscallErr>;

impl SyscallErr {
    pub const fn from_raw(ret: isize) -> Self {
        Self(ret)
    }

    pub const fn raw(self) -> isize {
        self.0
    }

    pub fn errno(self) -> Option<SysError> {
        SysError::from_ret(self.0)
    }
}

impl From<SysError> for SyscallErr {
    fn from(err: SysError) -> Self {
        Self(err.as_ret())
    }
}

impl PartialEq<SysError> for SyscallErr {
    fn eq(&self, other: &SysError) -> bool {
        self.0 == other.as_ret()
    }
}

impl fmt::Debug for SyscallErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errno() {
            Some(errno) => write!(f, "{:?}({})", errno, self.0),
            None => write!(f, "SyscallErr({})", self.0),
        }
    }
}

impl fmt::Display for SyscallErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errno() {
            Some(errno) => write!(f, "{} ({})", errno.as_str(), self.0),
            None => write!(f, "kernel error {}", self.0),
        }
    }
}

/// Splits a raw return into the count/handle it carries or the error.
pub(crate) fn check(ret: isize) -> SysResult<usize> {
    if ret < 0 {
        Err(SyscallErr(ret))
    } else {
        Ok(ret as usize)
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn negative_returns_become_errors_unchanged() {
        assert_eq!(check(3), Ok(3));
        assert_eq!(check(0), Ok(0));
        let err = check(-10).unwrap_err();
        assert_eq!(err.raw(), -10);
        assert_eq!(err, SysError::ECHILD);
        assert_eq!(err.errno(), Some(SysError::ECHILD));
    }

    #[test]
    fn unknown_codes_are_kept() {
        let err = check(-6).unwrap_err();
        assert_eq!(err.errno(), None);
        assert_eq!(format!("{err}"), "kernel error -6");
        assert_eq!(format!("{err:?}"), "SyscallErr(-6)");
    }

    #[test]
    fn extreme_returns_format_without_panicking() {
        let err = check(isize::MIN).unwrap_err();
        assert_eq!(err.errno(), None);
        assert_eq!(format!("{err}"), format!("kernel error {}", isize::MIN));
        assert_eq!(format!("{err:?}"), format!("SyscallErr({})", isize::MIN));
    }

    #[test]
    fn display_names_known_errors() {
        let err = SyscallErr::from(SysError::EBADF);
        assert_eq!(format!("{err}"), "Bad file number (-9)");
        assert_eq!(format!("{err:?}"), "EBADF(-9)");
    }
}
