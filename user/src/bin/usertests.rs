#![no_std]
#![no_main]

extern crate user_lib;

use user_lib::{
    console::stdout,
    eprintln,
    harness::{Harness, HarnessConfig},
};

/// Exit code for a run that never got to its scenarios. Aggregates are
/// never positive, so it cannot be mistaken for one.
const SETUP_FAILED_EXIT: i32 = 2;

#[unsafe(no_mangle)]
fn main(_argc: usize, argv: &[&str]) -> i32 {
    let args = argv.get(1..).unwrap_or_default();
    let config = match HarnessConfig::from_args(args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("usertests: {}", err);
            return SETUP_FAILED_EXIT;
        }
    };
    let mut harness = Harness::from_config(&config, stdout());
    match harness.run_source(&config.source) {
        Ok(summary) => summary.aggregate(),
        Err(err) => {
            eprintln!("usertests: {}", err);
            SETUP_FAILED_EXIT
        }
    }
}
