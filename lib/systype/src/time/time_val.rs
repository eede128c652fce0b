/// `struct timeval` as filled in by `gettimeofday`, microsecond resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
#[repr(C)]
pub struct TimeVal {
    pub tv_sec: usize,
    pub tv_usec: usize,
}

impl TimeVal {
    pub const MICRO_PER_SEC: usize = 1_000_000;

    pub fn new(sec: usize, usec: usize) -> Self {
        Self {
            tv_sec: sec,
            tv_usec: usec,
        }
    }

    pub fn into_usec(&self) -> usize {
        self.tv_sec * Self::MICRO_PER_SEC + self.tv_usec
    }

    /// Microseconds from `earlier` to `self`, zero if `earlier` is later.
    pub fn usec_since(&self, earlier: &TimeVal) -> usize {
        self.into_usec().saturating_sub(earlier.into_usec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_between_timevals() {
        let before = TimeVal::new(2, 999_000);
        let after = TimeVal::new(3, 1_000);
        assert_eq!(after.into_usec(), 3_001_000);
        assert_eq!(after.usec_since(&before), 2_000);
        assert_eq!(before.usec_since(&after), 0);
    }
}
