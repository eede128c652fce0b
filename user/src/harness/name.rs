use core::fmt;

use config::harness::PROG_NAME_MAX_LENGTH;

/// A test program name in a fixed buffer, always NUL-terminated.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TestName {
    buf: [u8; PROG_NAME_MAX_LENGTH],
    len: usize,
}

impl TestName {
    /// Longest name that fits next to the terminating NUL.
    pub const CAPACITY: usize = PROG_NAME_MAX_LENGTH - 1;

    /// Copies `name`, cut to [`Self::CAPACITY`] bytes on a char boundary.
    /// The flag tells whether anything was cut.
    pub fn clamped(name: &str) -> (Self, bool) {
        let mut end = name.len().min(Self::CAPACITY);
        while !name.is_char_boundary(end) {
            end -= 1;
        }
        let mut buf = [0; PROG_NAME_MAX_LENGTH];
        buf[..end].copy_from_slice(&name.as_bytes()[..end]);
        (Self { buf, len: end }, end < name.len())
    }

    pub fn new(name: &str) -> Self {
        Self::clamped(name).0
    }

    pub fn as_str(&self) -> &str {
        // Only whole chars of a `str` are ever copied in.
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or_default()
    }

    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..=self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl PartialEq<str> for TestName {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for TestName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Debug for TestName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for TestName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
