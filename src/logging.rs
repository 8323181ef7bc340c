#![cfg(feature = "std")]
//! Diagnostics for the console game.
//!
//! Boards, prompts and results own stdout, so records go to stderr and stay
//! quiet by default. `SEA_BATTLE_LOG=debug` shows layout restarts and
//! rejected targets, `trace` adds every shot.

use std::env;
use std::io::{self, Write};

use log::{self, LevelFilter, Metadata, Record};

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "SEA_BATTLE_LOG";

const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && metadata.target().starts_with("sea_battle")
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut err = io::stderr().lock();
        // Nowhere left to report a failed diagnostic write.
        let _ = writeln!(err, "[{:<5} {}] {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Parse a level name such as `debug` or `OFF`. Missing or unknown values
/// fall back to `warn`.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_LEVEL)
}

/// Install the stderr logger at the level named by `SEA_BATTLE_LOG` and
/// return that level. Only the first call installs anything.
pub fn init_logging() -> LevelFilter {
    let level = parse_level(env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
    level
}
