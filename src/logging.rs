//! Log subscriber setup.
//!
//! The countdown owns the whole screen, so records are only written when a
//! log file is configured. `RUST_LOG` overrides the configured level.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Context;
use countdown_config::LogConfig;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber described by `config`, if any.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init(config: &LogConfig) -> anyhow::Result<()> {
    let Some(path) = config.file.as_ref().filter(|_| config.is_enabled()) else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))
}
