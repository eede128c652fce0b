//! Line reader for test manifests.
//!
//! A record is one line of fields separated by a single space. The first
//! `skip_fields` fields are dropped and the rest of the line is the program
//! name, spaces included:
//!
//! ```text
//! ./runtest.exe -w entry-static.exe argv
//! ```

use core::fmt;

use config::harness::MANIFEST_DELIMITER;

use super::TestName;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ManifestError {
    /// The line has fewer fields than the skipped ones plus a name.
    MissingFields {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// Nothing follows the last skipped field.
    EmptyName { line: usize },
    InvalidUtf8 { line: usize },
}

impl ManifestError {
    pub fn line(&self) -> usize {
        match *self {
            ManifestError::MissingFields { line, .. }
            | ManifestError::EmptyName { line }
            | ManifestError::InvalidUtf8 { line } => line,
        }
    }
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestError::MissingFields {
                line,
                expected,
                found,
            } => write!(f, "line {line}: expected {expected} fields, found {found}"),
            ManifestError::EmptyName { line } => write!(f, "line {line}: empty program name"),
            ManifestError::InvalidUtf8 { line } => write!(f, "line {line}: not valid UTF-8"),
        }
    }
}

/// Yields one program name, or the reason it could not be read, per
/// non-blank line of `buf`. A bad line never stops the reader.
pub struct ManifestReader<'a> {
    buf: &'a [u8],
    offset: usize,
    line: usize,
    skip_fields: usize,
}

impl<'a> ManifestReader<'a> {
    pub fn new(buf: &'a [u8], skip_fields: usize) -> Self {
        Self {
            buf,
            offset: 0,
            line: 0,
            skip_fields,
        }
    }

    /// Number of lines consumed so far, blank ones included.
    pub fn line(&self) -> usize {
        self.line
    }

    fn next_line(&mut self) -> Option<&'a [u8]> {
        let rest = self.buf.get(self.offset..).filter(|rest| !rest.is_empty())?;
        let (line, advance) = match rest.iter().position(|&b| b == b'\n') {
            Some(end) => (&rest[..end], end + 1),
            None => (rest, rest.len()),
        };
        self.offset += advance;
        self.line += 1;
        Some(line.strip_suffix(b"\r").unwrap_or(line))
    }

    fn parse(&self, record: &[u8]) -> Result<TestName, ManifestError> {
        let line = self.line;
        let mut rest = record;
        for found in 0..self.skip_fields {
            match rest.iter().position(|&b| b == MANIFEST_DELIMITER) {
                Some(at) => rest = &rest[at + 1..],
                None => {
                    return Err(ManifestError::MissingFields {
                        line,
                        expected: self.skip_fields + 1,
                        found: found + 1,
                    });
                }
            }
        }
        if rest.is_empty() {
            return Err(ManifestError::EmptyName { line });
        }
        let name = core::str::from_utf8(rest).map_err(|_| ManifestError::InvalidUtf8 { line })?;
        let (name, clamped) = TestName::clamped(name);
        if clamped {
            log::warn!("[manifest] line {line}: program name clamped to {name:?}");
        }
        Ok(name)
    }
}

impl Iterator for ManifestReader<'_> {
    type Item = Result<TestName, ManifestError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = self.next_line()?;
            if record.iter().all(u8::is_ascii_whitespace) {
                continue;
            }
            return Some(self.parse(record));
        }
    }
}
