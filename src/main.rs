//! countdown - A full-screen block-digit countdown timer.
//!
//! This is the main binary: it parses arguments, resolves the countdown
//! target, and runs the terminal display.

mod cli;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use countdown_config::Config;
use countdown_protocol::resolve::resolve;
use countdown_tui::{Countdown, Phase, event::TerminalKeys, terminal};
use tracing::{info, warn};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    logging::init(&config.log)?;

    let request = match resolve(&cli.time_spec()) {
        Ok(request) => request.with_message(config.banner(cli.message.clone())),
        Err(e) => {
            warn!(error = %e, "could not resolve countdown");
            eprintln!("{e}");
            return Ok(ExitCode::FAILURE);
        }
    };
    info!(total_seconds = request.total_seconds(), "countdown resolved");

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    let mut terminal = terminal::setup_terminal()?;
    let mut countdown = Countdown::new(request);
    let result = countdown.run(&mut terminal, &mut TerminalKeys).await;

    // Always restore terminal, even if the countdown failed
    terminal::restore_terminal(&mut terminal)?;

    if matches!(result, Ok(Phase::Interrupted)) {
        println!("Countdown interrupted by user.");
    }

    result.map(|_| ExitCode::SUCCESS)
}
