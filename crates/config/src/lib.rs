//! Configuration management for the countdown application.
//!
//! This crate handles discovering, loading, and validating the optional
//! configuration file. Every setting has a built-in default, so running
//! without a file is the common case.
//!
//! # Overview
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`logging`]: Log file and level settings
//! - [`persistence`]: Config file discovery and reading
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. An explicit path (`--config`)
//! 2. Local config (`./countdown.json5` or `./countdown.json`)
//! 3. User config (`~/.config/countdown/config.json5` or `config.json`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use countdown_config::Config;
//!
//! # fn example() -> countdown_config::Result<()> {
//! let config = Config::load()?;
//! if let Some(message) = &config.message {
//!     println!("Default banner: {message}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use logging::LogConfig;
