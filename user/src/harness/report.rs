use core::fmt::Write;

use super::{ManifestError, RunRecord, Summary, Verdict};
use crate::console::color::{LIGHT_GREEN, LIGHT_RED, NONE, YELLOW};

/// Writes the harness's colored progress lines to `W`.
///
/// The console is the only place a verdict can go, so write errors are dropped.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Announces the scenario about to run.
    pub fn start(&mut self, index: usize, name: &str) {
        writeln!(self.out, "[{index}] running {YELLOW}{name}{NONE}").ok();
    }

    pub fn record(&mut self, record: &RunRecord) {
        let name = record.name;
        let written = match record.verdict {
            Verdict::Pass => writeln!(self.out, "{LIGHT_GREEN}OK{NONE}"),
            Verdict::Skipped => writeln!(self.out, "{YELLOW}SKIPPED:{name}{NONE}"),
            Verdict::Fail(code) => writeln!(
                self.out,
                "{LIGHT_RED}TEST ERROR:{name} return code:{code}{NONE}"
            ),
            Verdict::ExecFailed => {
                writeln!(self.out, "{LIGHT_RED}TEST ERROR:{name} could not be executed{NONE}")
            }
            Verdict::Signaled(sig) => {
                writeln!(self.out, "{LIGHT_RED}TEST ERROR:{name} killed by signal {sig}{NONE}")
            }
            Verdict::LaunchFailed(err) => {
                writeln!(self.out, "{LIGHT_RED}TEST ERROR:{name} launch failed: {err}{NONE}")
            }
        };
        written.ok();
    }

    pub fn manifest_error(&mut self, err: &ManifestError) {
        writeln!(self.out, "{LIGHT_RED}MANIFEST ERROR:{err}{NONE}").ok();
    }

    pub fn summary(&mut self, summary: &Summary) {
        let color = if summary.first_failure.is_some() {
            LIGHT_RED
        } else {
            LIGHT_GREEN
        };
        writeln!(
            self.out,
            "{color}passed {}, failed {}, skipped {}{NONE}",
            summary.passed, summary.failed, summary.skipped
        )
        .ok();
        if summary.malformed > 0 {
            writeln!(self.out, "{LIGHT_RED}{} manifest lines ignored{NONE}", summary.malformed).ok();
        }
        if summary.stopped_early {
            writeln!(self.out, "{LIGHT_RED}stopped at the first failure{NONE}").ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::*;
    use crate::harness::TestName;

    fn record(verdict: Verdict) -> RunRecord {
        RunRecord {
            index: 0,
            name: TestName::new("waitpid"),
            pid: Some(4),
            status: None,
            verdict,
        }
    }

    #[test]
    fn verdict_lines_match_the_console_format() {
        let mut reporter = Reporter::new(String::new());
        reporter.record(&record(Verdict::Pass));
        reporter.record(&record(Verdict::Fail(3)));
        let out = reporter.into_inner();
        assert_eq!(
            out,
            "\x1b[1;32mOK\x1b[m\n\x1b[1;31mTEST ERROR:waitpid return code:3\x1b[m\n"
        );
    }

    #[test]
    fn exec_failure_has_its_own_line() {
        let mut reporter = Reporter::new(String::new());
        reporter.record(&record(Verdict::ExecFailed));
        assert!(reporter.into_inner().contains("waitpid could not be executed"));
    }

    #[test]
    fn summary_counts_everything() {
        let mut reporter = Reporter::new(String::new());
        reporter.summary(&Summary {
            passed: 2,
            failed: 1,
            skipped: 3,
            malformed: 1,
            first_failure: Some(1),
            stopped_early: true,
        });
        let out = reporter.into_inner();
        assert!(out.contains("passed 2, failed 1, skipped 3"));
        assert!(out.contains("1 manifest lines ignored"));
        assert!(out.contains("stopped at the first failure"));
    }
}
