//! Run configuration of `usertests`, parsed from its arguments.
//!
//! ```text
//! usertests [--fail-fast] [--skip <name>]... [--no-default-skip]
//!           [--manifest [<path>]] [--skip-fields <n>]
//!           [--runner <prog> [<arg>...] --] [--exec]
//!           [--single <prog>] [<name>...]
//! ```

use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::fmt;

use config::harness::{
    DEFAULT_MANIFEST, DEFAULT_RUNNER, DEFAULT_RUNNER_ARGS, DEFAULT_SCENARIOS, DEFAULT_SKIP,
    MANIFEST_SKIP_FIELDS,
};

use super::LaunchStyle;

/// Where the scenario list comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScenarioSource {
    Fixed(Vec<String>),
    Manifest { path: String, skip_fields: usize },
    Single(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    pub source: ScenarioSource,
    /// Names reported as skipped instead of run.
    pub skip: Vec<String>,
    /// Stop at the first failing scenario.
    pub fail_fast: bool,
    pub style: LaunchStyle,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArgsError {
    MissingValue(&'static str),
    InvalidNumber(String),
    UnknownFlag(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue(flag) => write!(f, "{flag} needs a value"),
            ArgsError::InvalidNumber(arg) => write!(f, "{arg:?} is not a number"),
            ArgsError::UnknownFlag(arg) => write!(f, "unknown flag {arg}"),
        }
    }
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            source: ScenarioSource::Fixed(owned(DEFAULT_SCENARIOS)),
            skip: owned(DEFAULT_SKIP),
            fail_fast: false,
            style: LaunchStyle::Exec,
        }
    }
}

impl HarnessConfig {
    /// Builds the configuration from the arguments after the program name.
    ///
    /// A manifest run launches through `./runtest.exe -w entry-static.exe`
    /// unless `--runner` or `--exec` says otherwise. When several sources are
    /// given the last one wins.
    pub fn from_args(args: &[&str]) -> Result<Self, ArgsError> {
        let mut config = Self::default();
        let mut style = None;
        let mut skip_fields = MANIFEST_SKIP_FIELDS;
        let mut manifest = None;
        let mut names = Vec::new();

        let mut args = args.iter().copied().peekable();
        while let Some(arg) = args.next() {
            match arg {
                "--fail-fast" => config.fail_fast = true,
                "--no-default-skip" => config.skip.clear(),
                "--skip" => {
                    let name = args.next().ok_or(ArgsError::MissingValue("--skip"))?;
                    config.skip.push(name.to_string());
                }
                "--manifest" => {
                    let path = args.next_if(|next| !next.starts_with("--"));
                    manifest = Some(path.unwrap_or(DEFAULT_MANIFEST).to_string());
                    names.clear();
                }
                "--skip-fields" => {
                    let n = args.next().ok_or(ArgsError::MissingValue("--skip-fields"))?;
                    skip_fields = n
                        .parse()
                        .map_err(|_| ArgsError::InvalidNumber(n.to_string()))?;
                }
                "--runner" => {
                    let program = args.next().ok_or(ArgsError::MissingValue("--runner"))?;
                    let mut runner_args = Vec::new();
                    loop {
                        match args.next() {
                            Some("--") => break,
                            Some(arg) => runner_args.push(arg.to_string()),
                            None => return Err(ArgsError::MissingValue("--")),
                        }
                    }
                    style = Some(LaunchStyle::Runner {
                        program: program.to_string(),
                        args: runner_args,
                    });
                }
                "--exec" => style = Some(LaunchStyle::Exec),
                "--single" => {
                    let program = args.next().ok_or(ArgsError::MissingValue("--single"))?;
                    config.source = ScenarioSource::Single(program.to_string());
                    manifest = None;
                    names.clear();
                }
                flag if flag.starts_with("--") => {
                    return Err(ArgsError::UnknownFlag(flag.to_string()));
                }
                name => {
                    names.push(name.to_string());
                    manifest = None;
                }
            }
        }

        if let Some(path) = manifest {
            config.source = ScenarioSource::Manifest { path, skip_fields };
            config.style = style.unwrap_or_else(|| LaunchStyle::Runner {
                program: DEFAULT_RUNNER.to_string(),
                args: owned(DEFAULT_RUNNER_ARGS),
            });
        } else {
            if !names.is_empty() {
                config.source = ScenarioSource::Fixed(names);
            }
            config.style = style.unwrap_or(LaunchStyle::Exec);
        }
        Ok(config)
    }

    pub fn skips(&self, name: &str) -> bool {
        self.skip.iter().any(|skip| skip == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_runs_the_default_battery() {
        let config = HarnessConfig::from_args(&[]).unwrap();
        assert_eq!(config, HarnessConfig::default());
        let ScenarioSource::Fixed(names) = &config.source else {
            panic!("expected a fixed list");
        };
        assert_eq!(names.len(), DEFAULT_SCENARIOS.len());
        assert!(config.skips("clone"));
        assert!(!config.skips("fork"));
        assert!(!config.fail_fast);
    }

    #[test]
    fn manifest_defaults_to_the_runtest_runner() {
        let config = HarnessConfig::from_args(&["--manifest", "--fail-fast"]).unwrap();
        assert_eq!(
            config.source,
            ScenarioSource::Manifest {
                path: DEFAULT_MANIFEST.to_string(),
                skip_fields: MANIFEST_SKIP_FIELDS
            }
        );
        assert!(config.fail_fast);
        assert_eq!(
            config.style,
            LaunchStyle::Runner {
                program: "./runtest.exe".to_string(),
                args: owned(&["-w", "entry-static.exe"]),
            }
        );
    }

    #[test]
    fn runner_arguments_end_at_double_dash() {
        let config = HarnessConfig::from_args(&[
            "--manifest",
            "./run-dynamic.sh",
            "--skip-fields",
            "2",
            "--runner",
            "./runtest.exe",
            "-w",
            "--",
            "--skip",
            "pthread_cancel",
        ])
        .unwrap();
        assert_eq!(
            config.source,
            ScenarioSource::Manifest {
                path: "./run-dynamic.sh".to_string(),
                skip_fields: 2
            }
        );
        assert_eq!(
            config.style,
            LaunchStyle::Runner {
                program: "./runtest.exe".to_string(),
                args: owned(&["-w"]),
            }
        );
        assert!(config.skips("pthread_cancel"));
    }

    #[test]
    fn positional_names_and_single_program() {
        let config = HarnessConfig::from_args(&["--no-default-skip", "fork", "wait"]).unwrap();
        assert_eq!(config.source, ScenarioSource::Fixed(owned(&["fork", "wait"])));
        assert!(config.skip.is_empty());

        let config = HarnessConfig::from_args(&["--single", "busybox"]).unwrap();
        assert_eq!(config.source, ScenarioSource::Single("busybox".to_string()));
        assert_eq!(config.style, LaunchStyle::Exec);
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert_eq!(
            HarnessConfig::from_args(&["--skip"]),
            Err(ArgsError::MissingValue("--skip"))
        );
        assert_eq!(
            HarnessConfig::from_args(&["--skip-fields", "three"]),
            Err(ArgsError::InvalidNumber("three".to_string()))
        );
        assert_eq!(
            HarnessConfig::from_args(&["--runner", "./runtest.exe", "-w", "--fail-fast"]),
            Err(ArgsError::MissingValue("--"))
        );
        assert_eq!(
            HarnessConfig::from_args(&["--verbose"]),
            Err(ArgsError::UnknownFlag("--verbose".to_string()))
        );
    }
}
