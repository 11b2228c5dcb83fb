#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Parse a level name, falling back to `info` for anything unknown.
pub fn level_from_str(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Initialize logging with a level taken from the `PIRATE_FLEET_LOG` environment variable.
/// Defaults to `info` if the variable is not set or invalid. Records go to stderr so the
/// game board on stdout stays readable.
pub fn init_logging() {
    let level = level_from_str(env::var("PIRATE_FLEET_LOG").ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_level_falls_back_to_info() {
        assert_eq!(level_from_str(Some("chatty")), LevelFilter::Info);
        assert_eq!(level_from_str(None), LevelFilter::Info);
        assert_eq!(level_from_str(Some("debug")), LevelFilter::Debug);
    }
}
