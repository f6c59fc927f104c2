//! Shared types for the countdown application.
//!
//! This crate holds everything that does not touch the terminal: the block
//! glyph table, the countdown request model, resolution of command-line
//! options into a duration, and formatting of the remaining time.
//!
//! # Overview
//!
//! - [`glyph`]: Character to block-bitmap table and text enlargement
//! - [`request`]: Raw options and resolved countdown requests
//! - [`resolve`]: Absolute and relative time resolution
//! - [`display`]: Clock and days display formatting
//! - [`message`]: Loop control messages
//! - [`error`]: Error types for resolution
//!
//! # Examples
//!
//! ```
//! use countdown_protocol::{DisplayMode, TimeSpec, resolve::resolve};
//!
//! let request = resolve(&TimeSpec::relative(0, 1, 30, 0)).unwrap();
//! assert_eq!(request.total_seconds(), 5_400);
//! assert_eq!(request.description, "1 hours, 30 minutes");
//!
//! let mode = DisplayMode::for_total(request.total_seconds());
//! assert_eq!(mode.format(request.total_seconds()), "01:30:00");
//! ```

pub mod display;
pub mod error;
pub mod glyph;
pub mod message;
pub mod request;
pub mod resolve;

// Re-export primary types at crate root for convenience
pub use display::{DisplayMode, SECONDS_PER_DAY};
pub use error::{ResolveError, Result};
pub use message::Message;
pub use request::{CountdownRequest, Target, TimeSpec};
