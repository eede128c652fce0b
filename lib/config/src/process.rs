use bitflags::bitflags;

/// Signal a forked child raises on its parent when it exits. Passing it as the
/// exit signal of `clone` is what makes the child visible to a plain `wait4`.
pub const SIGCHLD: usize = 17;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    /// Defined in <bits/waitflags.h>.
    pub struct WaitOptions: i32 {
        /// Don't block waiting.
        const WNOHANG = 0x00000001;
        /// Report status of stopped children.
        const WUNTRACED = 0x00000002;
        /// Report continued child.
        const WCONTINUED = 0x00000008;
    }
}

/// How a reaped child ended, decoded from the kernel's status word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The child called `exit` with this code.
    Exited(i32),
    /// The child was terminated by this signal.
    Signaled(u8),
}

impl ExitStatus {
    pub const fn code(self) -> Option<i32> {
        match self {
            ExitStatus::Exited(code) => Some(code),
            ExitStatus::Signaled(_) => None,
        }
    }

    pub const fn success(self) -> bool {
        matches!(self, ExitStatus::Exited(0))
    }
}

/// Bit layout of the status word `wait4` stores for a reaped child.
///
/// The packing belongs to the kernel. `Raw` is what the target kernel does
/// (the word is the exit code, untruncated); `Linux` is the `WEXITSTATUS`
/// convention with the code in bits 8..16 and a terminating signal in bits 0..7.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusLayout {
    Raw,
    Linux,
}

impl StatusLayout {
    pub const fn decode(self, raw: i32) -> ExitStatus {
        match self {
            StatusLayout::Raw => ExitStatus::Exited(raw),
            StatusLayout::Linux => {
                let sig = raw & 0x7f;
                if sig == 0 {
                    ExitStatus::Exited((raw >> 8) & 0xff)
                } else {
                    ExitStatus::Signaled(sig as u8)
                }
            }
        }
    }

    /// The status word a kernel using this layout stores for `exit(code)`.
    pub const fn encode_exit(self, code: i32) -> i32 {
        match self {
            StatusLayout::Raw => code,
            StatusLayout::Linux => (code & 0xff) << 8,
        }
    }

    /// The code a waiter decodes after the child called `exit(code)`.
    pub const fn observed_code(self, code: i32) -> i32 {
        match self.decode(self.encode_exit(code)) {
            ExitStatus::Exited(code) => code,
            ExitStatus::Signaled(_) => code,
        }
    }
}

#[cfg(not(feature = "linux-wait-status"))]
pub const WAIT_STATUS_LAYOUT: StatusLayout = StatusLayout::Raw;
#[cfg(feature = "linux-wait-status")]
pub const WAIT_STATUS_LAYOUT: StatusLayout = StatusLayout::Linux;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_layout_keeps_the_whole_word() {
        let layout = StatusLayout::Raw;
        assert_eq!(layout.decode(98988), ExitStatus::Exited(98988));
        assert_eq!(layout.decode(-1), ExitStatus::Exited(-1));
        assert_eq!(layout.observed_code(98988), 98988);
    }

    #[test]
    fn linux_layout_truncates_to_a_byte() {
        let layout = StatusLayout::Linux;
        assert_eq!(layout.encode_exit(3), 0x300);
        assert_eq!(layout.decode(0x300), ExitStatus::Exited(3));
        assert_eq!(layout.observed_code(98988), 98988 & 0xff);
        assert_eq!(layout.observed_code(-1), 255);
    }

    #[test]
    fn linux_layout_reports_signals() {
        let status = StatusLayout::Linux.decode(9);
        assert_eq!(status, ExitStatus::Signaled(9));
        assert_eq!(status.code(), None);
        assert!(!status.success());
    }

    #[test]
    fn zero_is_success_in_both_layouts() {
        assert!(StatusLayout::Raw.decode(0).success());
        assert!(StatusLayout::Linux.decode(0).success());
    }
}
