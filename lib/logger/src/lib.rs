#![cfg_attr(not(test), no_std)]

use crate_interface::call_interface;
use log::{Level, LevelFilter};

struct SimpleLogger;

/// `log::Log` front end. Formatting and output belong to whoever implements
/// [`LogInterface`], so this crate stays free of any console or syscall code.
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }
    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        call_interface!(LogInterface::print_log(record));
    }
    fn flush(&self) {}
}

/// Output side of the logger, implemented once per program image with
/// `#[crate_interface::impl_interface]`.
#[crate_interface::def_interface]
pub trait LogInterface: Send + Sync {
    fn print_log(record: &log::Record);
}

/// Installs the logger with the level chosen by the `LOG` variable at build time.
pub fn init() {
    init_with(level_from_env(option_env!("LOG")));
}

/// Installs the logger with an explicit level.
pub fn init_with(level: LevelFilter) {
    static LOGGER: SimpleLogger = SimpleLogger;
    log::set_logger(&LOGGER).ok();
    log::set_max_level(level);
}

pub fn level_from_env(var: Option<&str>) -> LevelFilter {
    match var {
        Some("trace") => LevelFilter::Trace,
        Some("debug") => LevelFilter::Debug,
        Some("info") => LevelFilter::Info,
        Some("warn") => LevelFilter::Warn,
        Some("error") => LevelFilter::Error,
        _ => LevelFilter::Off,
    }
}

pub fn level2color(level: Level) -> u8 {
    match level {
        Level::Error => 31, // Red
        Level::Warn => 93,  // BrightYellow
        Level::Info => 36,  // Blue
        Level::Debug => 32, // Green
        Level::Trace => 90, // BrightBlack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Discard;

    #[crate_interface::impl_interface]
    impl LogInterface for Discard {
        fn print_log(_record: &log::Record) {}
    }

    #[test]
    fn records_above_the_level_are_filtered() {
        init_with(LevelFilter::Warn);
        let logger = log::logger();
        assert!(logger.enabled(&log::Metadata::builder().level(Level::Error).build()));
        assert!(!logger.enabled(&log::Metadata::builder().level(Level::Debug).build()));
        log::warn!("reaches the interface");
    }

    #[test]
    fn unknown_or_missing_level_turns_logging_off() {
        assert_eq!(level_from_env(Some("debug")), LevelFilter::Debug);
        assert_eq!(level_from_env(Some("TRACE")), LevelFilter::Off);
        assert_eq!(level_from_env(None), LevelFilter::Off);
    }
}
