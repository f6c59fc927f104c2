//! Terminal UI for the countdown application.
//!
//! This crate provides the Ratatui-based full-screen countdown: terminal
//! setup and teardown, key handling, frame rendering, and the tick loop.
//!
//! # Overview
//!
//! - [`app`]: Countdown state machine and run loop
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Key polling and key mappings
//! - [`layout`]: Shared placement constants
//! - [`widgets`]: Pure rendering functions
//!
//! # Example
//!
//! ```no_run
//! use countdown_protocol::{TimeSpec, resolve::resolve};
//! use countdown_tui::{Countdown, event::TerminalKeys, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let request = resolve(&TimeSpec::relative(0, 0, 1, 0))?;
//!
//!     let mut terminal = terminal::setup_terminal()?;
//!     let mut countdown = Countdown::new(request);
//!     let result = countdown.run(&mut terminal, &mut TerminalKeys).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result.map(|_| ())
//! }
//! ```

pub mod app;
pub mod event;
pub mod layout;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::{Countdown, Phase};
