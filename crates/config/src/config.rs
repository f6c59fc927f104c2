//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the countdown application.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::logging::LogConfig;
use crate::persistence::{find_config_file, read_config_file};

/// The main configuration struct for the countdown application.
///
/// # Examples
///
/// ```
/// use countdown_config::{Config, LogConfig};
///
/// // Create a default config
/// let config = Config::default();
/// assert!(config.message.is_none());
///
/// // Create a custom config
/// let config = Config {
///     message: Some("Back in".to_string()),
///     log: LogConfig {
///         file: Some("countdown.log".into()),
///         ..LogConfig::default()
///     },
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Banner shown above the timer when `--message` is not given.
    #[serde(default)]
    pub message: Option<String>,

    /// Log output settings.
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Loads configuration from the default file locations.
    ///
    /// If no configuration file is found, returns a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(path),
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use countdown_config::Config;
    ///
    /// # fn example() -> countdown_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(?path, "loading config file");
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the log level is not recognized.
    pub fn validate(&self) -> Result<()> {
        self.log.validate()?;
        Ok(())
    }

    /// Returns the banner to show: the explicit one if given, otherwise the
    /// configured default.
    ///
    /// # Examples
    ///
    /// ```
    /// use countdown_config::Config;
    ///
    /// let config = Config {
    ///     message: Some("Lunch".to_string()),
    ///     ..Default::default()
    /// };
    /// assert_eq!(config.banner(None), Some("Lunch".to_string()));
    /// assert_eq!(config.banner(Some("Deploy".to_string())), Some("Deploy".to_string()));
    /// ```
    #[must_use]
    pub fn banner(&self, explicit: Option<String>) -> Option<String> {
        explicit.or_else(|| self.message.clone())
    }
}
