//! Process-wide `tracing` subscriber.

use tracing::level_filters::LevelFilter;

use crate::LogLevel;

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

/// Write `tracing` events to stderr, where Spin collects component logs.
///
/// `StructuredLogger` already formats each line, so only the message is
/// written. Returns `false` when a subscriber was already installed.
pub fn init_tracing(max_level: LogLevel) -> bool {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(LevelFilter::from(max_level))
        .with_target(false)
        .with_level(false)
        .with_ansi(false)
        .without_time()
        .try_init()
        .is_ok()
}
