use alloc::{string::String, vec::Vec};
use core::fmt::{self, Write};

use config::vfs::OpenFlags;

use super::{
    ForkExec, HarnessConfig, Launcher, ManifestError, ManifestReader, Reporter, RunRecord,
    Scenario, ScenarioSource, Verdict,
};
use crate::{SyscallErr, close, open, read_to_end};

/// Outcome of a whole run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    /// Manifest lines that named no scenario.
    pub malformed: usize,
    /// Index of the first failing scenario.
    pub first_failure: Option<usize>,
    /// Scenarios were left unrun after a failure.
    pub stopped_early: bool,
}

impl Summary {
    /// Exit code of the harness: `0` if nothing failed, otherwise
    /// `-(k + 1)` for the first failing index `k`.
    pub fn aggregate(&self) -> i32 {
        match self.first_failure {
            None => 0,
            Some(index) => i32::try_from(index).map_or(i32::MIN, |k| -k - 1),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HarnessError {
    /// The manifest could not be read.
    Manifest { path: String, err: SyscallErr },
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::Manifest { path, err } => write!(f, "cannot read {path}: {err}"),
        }
    }
}

/// Splits a manifest into runnable scenarios and the lines that were not.
pub fn scenarios_from_manifest(buf: &[u8], skip_fields: usize) -> (Vec<Scenario>, Vec<ManifestError>) {
    let mut scenarios = Vec::new();
    let mut errors = Vec::new();
    for entry in ManifestReader::new(buf, skip_fields) {
        match entry {
            Ok(name) => scenarios.push(Scenario { name }),
            Err(err) => errors.push(err),
        }
    }
    (scenarios, errors)
}

fn read_manifest(path: &str) -> Result<Vec<u8>, SyscallErr> {
    let fd = open(path, OpenFlags::O_RDONLY)?;
    let data = read_to_end(fd);
    close(fd)?;
    data
}

/// Runs scenarios one at a time through a [`Launcher`].
pub struct Harness<L: Launcher, W: Write> {
    launcher: L,
    reporter: Reporter<W>,
    skip: Vec<String>,
    fail_fast: bool,
    records: Vec<RunRecord>,
}

impl<W: Write> Harness<ForkExec, W> {
    pub fn from_config(config: &HarnessConfig, out: W) -> Self {
        Harness::new(
            ForkExec::new(config.style.clone()),
            out,
            config.skip.clone(),
            config.fail_fast,
        )
    }
}

impl<L: Launcher, W: Write> Harness<L, W> {
    pub fn new(launcher: L, out: W, skip: Vec<String>, fail_fast: bool) -> Self {
        Self {
            launcher,
            reporter: Reporter::new(out),
            skip,
            fail_fast,
            records: Vec::new(),
        }
    }

    /// Every scenario seen so far, in run order.
    pub fn records(&self) -> &[RunRecord] {
        &self.records
    }

    pub fn into_parts(self) -> (L, W) {
        (self.launcher, self.reporter.into_inner())
    }

    /// Resolves `source` to scenarios and runs them. A manifest that cannot
    /// be read is an error; a manifest line that names nothing is reported
    /// and left out.
    pub fn run_source(&mut self, source: &ScenarioSource) -> Result<Summary, HarnessError> {
        match source {
            ScenarioSource::Fixed(names) => {
                let scenarios: Vec<_> = names.iter().map(|name| Scenario::new(name)).collect();
                Ok(self.run(&scenarios))
            }
            ScenarioSource::Single(name) => Ok(self.run(&[Scenario::new(name)])),
            ScenarioSource::Manifest { path, skip_fields } => {
                let buf = read_manifest(path).map_err(|err| HarnessError::Manifest {
                    path: path.clone(),
                    err,
                })?;
                let (scenarios, errors) = scenarios_from_manifest(&buf, *skip_fields);
                for err in &errors {
                    log::warn!("[Harness::run_source] {path}: {err}");
                    self.reporter.manifest_error(err);
                }
                Ok(self.execute(&scenarios, errors.len()))
            }
        }
    }

    pub fn run(&mut self, scenarios: &[Scenario]) -> Summary {
        self.execute(scenarios, 0)
    }

    fn execute(&mut self, scenarios: &[Scenario], malformed: usize) -> Summary {
        let mut summary = Summary {
            malformed,
            ..Default::default()
        };
        for (index, scenario) in scenarios.iter().enumerate() {
            let record = self.run_one(index, scenario);
            self.reporter.record(&record);
            self.records.push(record);
            match record.verdict {
                Verdict::Pass => summary.passed += 1,
                Verdict::Skipped => summary.skipped += 1,
                _ => {
                    summary.failed += 1;
                    if summary.first_failure.is_none() {
                        summary.first_failure = Some(index);
                    }
                    if self.fail_fast {
                        summary.stopped_early = index + 1 < scenarios.len();
                        break;
                    }
                }
            }
        }
        log::debug!("[Harness::execute] {summary:?}");
        self.reporter.summary(&summary);
        summary
    }

    fn run_one(&mut self, index: usize, scenario: &Scenario) -> RunRecord {
        let name = scenario.name;
        let mut record = RunRecord {
            index,
            name,
            pid: None,
            status: None,
            verdict: Verdict::Skipped,
        };
        if self.skip.iter().any(|skip| name == skip.as_str()) {
            return record;
        }
        self.reporter.start(index, name.as_str());
        record.verdict = match self.launcher.launch(scenario) {
            Ok(launched) => {
                record.pid = Some(launched.pid);
                record.status = Some(launched.status);
                Verdict::from_status(launched.status)
            }
            Err(err) => Verdict::LaunchFailed(err),
        };
        record
    }
}

#[cfg(test)]
mod tests {
    use alloc::{
        collections::VecDeque,
        string::{String, ToString},
        vec,
    };

    use config::{harness::EXEC_FAILED_EXIT, process::ExitStatus};
    use systype::error::SysError;

    use super::*;
    use crate::{SysResult, harness::Launched};

    /// Hands out canned outcomes in order and remembers what it launched.
    struct Scripted {
        outcomes: VecDeque<SysResult<ExitStatus>>,
        launched: Vec<String>,
    }

    impl Scripted {
        fn new(outcomes: impl IntoIterator<Item = SysResult<ExitStatus>>) -> Self {
            Self {
                outcomes: outcomes.into_iter().collect(),
                launched: Vec::new(),
            }
        }
    }

    impl Launcher for Scripted {
        fn launch(&mut self, scenario: &Scenario) -> SysResult<Launched> {
            self.launched.push(scenario.name.as_str().to_string());
            let status = self.outcomes.pop_front().unwrap_or(Ok(ExitStatus::Exited(0)))?;
            Ok(Launched {
                pid: self.launched.len() + 1,
                status,
            })
        }
    }

    fn scenarios(names: &[&str]) -> Vec<Scenario> {
        names.iter().map(|name| Scenario::new(name)).collect()
    }

    #[test]
    fn all_passing_aggregates_to_zero() {
        let mut harness = Harness::new(Scripted::new([]), String::new(), vec![], false);
        let summary = harness.run(&scenarios(&["fork", "wait", "pipe"]));
        assert_eq!(summary.passed, 3);
        assert_eq!(summary.aggregate(), 0);
        let (launcher, out) = harness.into_parts();
        assert_eq!(launcher.launched, ["fork", "wait", "pipe"]);
        assert_eq!(out.matches("OK").count(), 3);
    }

    #[test]
    fn fail_fast_stops_after_the_first_failure() {
        let outcomes = [Ok(ExitStatus::Exited(0)), Ok(ExitStatus::Exited(3))];
        let mut harness = Harness::new(Scripted::new(outcomes), String::new(), vec![], true);
        let summary = harness.run(&scenarios(&["fork", "waitpid", "exit", "wait"]));
        assert_eq!(summary.first_failure, Some(1));
        assert_eq!(summary.aggregate(), -2);
        assert!(summary.stopped_early);
        assert_eq!(harness.records().len(), 2);
        let (launcher, out) = harness.into_parts();
        assert_eq!(launcher.launched, ["fork", "waitpid"]);
        assert!(out.contains("TEST ERROR:waitpid return code:3"));
    }

    #[test]
    fn failure_at_index_zero_is_not_success() {
        let mut harness = Harness::new(
            Scripted::new([Ok(ExitStatus::Exited(1))]),
            String::new(),
            vec![],
            true,
        );
        let summary = harness.run(&scenarios(&["fork"]));
        assert_eq!(summary.aggregate(), -1);
        assert!(!summary.stopped_early);
    }

    #[test]
    fn without_fail_fast_everything_runs_and_the_first_failure_counts() {
        let outcomes = [
            Ok(ExitStatus::Exited(0)),
            Ok(ExitStatus::Exited(EXEC_FAILED_EXIT)),
            Err(SysError::EAGAIN.into()),
            Ok(ExitStatus::Signaled(9)),
        ];
        let mut harness = Harness::new(Scripted::new(outcomes), String::new(), vec![], false);
        let summary = harness.run(&scenarios(&["a", "b", "c", "d"]));
        assert_eq!(summary.failed, 3);
        assert_eq!(summary.aggregate(), -2);
        let verdicts: Vec<_> = harness.records().iter().map(|r| r.verdict).collect();
        assert_eq!(
            verdicts,
            [
                Verdict::Pass,
                Verdict::ExecFailed,
                Verdict::LaunchFailed(SysError::EAGAIN.into()),
                Verdict::Signaled(9),
            ]
        );
        assert_eq!(harness.records()[2].pid, None);
    }

    #[test]
    fn skipped_scenarios_are_never_launched() {
        let mut harness = Harness::new(
            Scripted::new([]),
            String::new(),
            vec!["clone".to_string()],
            false,
        );
        let summary = harness.run(&scenarios(&["fork", "clone", "wait"]));
        assert_eq!((summary.passed, summary.skipped), (2, 1));
        assert_eq!(harness.records()[1].verdict, Verdict::Skipped);
        let (launcher, out) = harness.into_parts();
        assert_eq!(launcher.launched, ["fork", "wait"]);
        assert!(out.contains("SKIPPED:clone"));
    }

    #[test]
    fn manifest_lines_become_scenarios() {
        let buf = b"./runtest.exe -w entry-static.exe argv\nbroken\n./runtest.exe -w entry-static.exe fnmatch\n";
        let (found, errors) = scenarios_from_manifest(buf, 3);
        assert_eq!(found, scenarios(&["argv", "fnmatch"]));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line(), 2);
    }

    #[test]
    fn fixed_and_single_sources_run_directly() {
        let mut harness = Harness::new(Scripted::new([]), String::new(), vec![], false);
        let source = ScenarioSource::Fixed(vec!["getpid".to_string(), "getppid".to_string()]);
        assert_eq!(harness.run_source(&source).unwrap().passed, 2);
        let source = ScenarioSource::Single("busybox".to_string());
        assert_eq!(harness.run_source(&source).unwrap().passed, 1);
        assert_eq!(harness.records().len(), 3);
    }

    #[cfg(not(any(target_arch = "riscv64", target_arch = "loongarch64")))]
    #[test]
    fn unreadable_manifest_is_an_error() {
        let mut harness = Harness::new(Scripted::new([]), String::new(), vec![], false);
        let source = ScenarioSource::Manifest {
            path: "./run-static.sh".to_string(),
            skip_fields: 3,
        };
        assert_eq!(
            harness.run_source(&source),
            Err(HarnessError::Manifest {
                path: "./run-static.sh".to_string(),
                err: SysError::ENOSYS.into(),
            })
        );
    }
}
