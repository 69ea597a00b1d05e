//! Logging setup on top of `tracing-subscriber`

use std::io::IsTerminal;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Level names accepted by `--log-level`
pub const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Build the filter: `RUST_LOG` if set, otherwise `level`
pub fn build_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let level = level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        return Err(anyhow!(
            "Invalid log level: {}. Valid levels: {}",
            level,
            LOG_LEVELS.join(", ")
        ));
    }

    EnvFilter::try_new(&level).with_context(|| format!("Invalid log level: {}", level))
}

/// Install the global subscriber, writing to stderr so stdout stays clean
/// for `--dry-run` output
pub fn init_logging(level: &str, json: bool) -> Result<()> {
    let filter = build_filter(level)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| anyhow!("Failed to initialise logging: {}", e))
}
