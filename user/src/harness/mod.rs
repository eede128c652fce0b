//! The conformance harness: runs each target program as an isolated child
//! and classifies how it ended.
//!
//! Scenarios come from a fixed list, a single program, or a manifest file
//! ([`manifest`]). [`Harness`] drives them through a [`Launcher`], reports
//! every [`RunRecord`] through a [`Reporter`] and folds them into a
//! [`Summary`] whose aggregate code becomes the harness's own exit code.

pub mod launcher;
pub mod manifest;
mod name;
pub mod options;
pub mod report;
pub mod runner;
mod scenario;

pub use launcher::{ForkExec, LaunchStyle, Launched, Launcher};
pub use manifest::{ManifestError, ManifestReader};
pub use name::TestName;
pub use options::{ArgsError, HarnessConfig, ScenarioSource};
pub use report::Reporter;
pub use runner::{Harness, HarnessError, Summary};
pub use scenario::{RunRecord, Scenario, Verdict};
