//! Structured logging setup.
//!
//! Events are written to stdout as JSON lines. Level names follow the
//! service's configuration vocabulary: `debug`, `info`, `warn`, `error`
//! and `fatal` (which maps to `ERROR`).

use tracing::level_filters::LevelFilter;

use crate::error::{ServerError, ServerResult};

/// Resolve a configured level name, case-insensitively.
pub fn parse_level(name: &str) -> ServerResult<LevelFilter> {
    match name.to_ascii_lowercase().as_str() {
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" => Ok(LevelFilter::WARN),
        "error" | "fatal" => Ok(LevelFilter::ERROR),
        _ => Err(ServerError::Config(format!("log level {name} not implemented"))),
    }
}

/// Install the global JSON subscriber at the given level.
///
/// Fails if the level name is unknown or a subscriber is already installed.
pub fn init(level: &str) -> ServerResult<()> {
    let filter = parse_level(level)?;
    tracing_subscriber::fmt()
        .json()
        .with_max_level(filter)
        .with_writer(std::io::stdout)
        .try_init()
        .map_err(|e| ServerError::Config(e.to_string()))
}
