//! Log output configuration.
//!
//! The terminal is fully owned by the countdown display, so log records are
//! only written when a file is configured.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Default log level when none is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Levels accepted by [`LogConfig::validate`].
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for log output.
///
/// # Examples
///
/// ```
/// use countdown_config::LogConfig;
///
/// let config = LogConfig::default();
/// assert!(config.file.is_none());
/// assert_eq!(config.level, "info");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogConfig {
    /// File that receives log records. Logging is disabled when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Level filter used when `RUST_LOG` is not set.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: default_level(),
        }
    }
}

impl LogConfig {
    /// Returns whether log records should be written at all.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.file.is_some() && !self.level.eq_ignore_ascii_case("off")
    }

    /// Validates the configured level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogLevel`] if the level is not one of
    /// [`LOG_LEVELS`] (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use countdown_config::LogConfig;
    ///
    /// let mut config = LogConfig::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.level = "verbose".to_string();
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if LOG_LEVELS
            .iter()
            .any(|level| level.eq_ignore_ascii_case(&self.level))
        {
            Ok(())
        } else {
            Err(ConfigError::InvalidLogLevel {
                level: self.level.clone(),
            })
        }
    }
}
