/// `struct timespec` as taken by `nanosleep`, nanosecond resolution.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct TimeSpec {
    pub tv_sec: usize,
    pub tv_nsec: usize,
}

impl TimeSpec {
    pub fn from_ms(ms: usize) -> Self {
        Self {
            tv_sec: ms / 1000,
            tv_nsec: (ms % 1000) * 1_000_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milliseconds_split_into_seconds_and_nanos() {
        assert_eq!(TimeSpec::from_ms(1_500), TimeSpec { tv_sec: 1, tv_nsec: 500_000_000 });
        assert_eq!(TimeSpec::from_ms(999), TimeSpec { tv_sec: 0, tv_nsec: 999_000_000 });
        assert_eq!(TimeSpec::from_ms(0), TimeSpec::default());
    }
}
