//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use countdown_protocol::TimeSpec;

/// Full-screen countdown timer.
///
/// Counts down a relative duration (days, hours, minutes, seconds) or to an
/// absolute date and time. Supplying `--date` or `--time` selects the
/// absolute mode and ignores the relative options. Press Esc or q to stop.
#[derive(Debug, Parser)]
#[command(name = "countdown", version, about)]
pub struct Cli {
    /// Number of days to count down.
    #[arg(short = 'D', long)]
    pub days: Option<u64>,

    /// Number of hours to count down.
    #[arg(short = 'H', long)]
    pub hours: Option<u64>,

    /// Number of minutes to count down.
    #[arg(short = 'M', long)]
    pub minutes: Option<u64>,

    /// Number of seconds to count down.
    #[arg(short = 'S', long)]
    pub seconds: Option<u64>,

    /// Date to count down to (YYYY-MM-DD, default: today).
    #[arg(short = 'd', long, value_name = "YYYY-MM-DD")]
    pub date: Option<String>,

    /// Time to count down to (HH:MM or HH:MM AM/PM, default: 00:00).
    #[arg(short = 't', long, value_name = "HH:MM")]
    pub time: Option<String>,

    /// Message to display above the countdown timer.
    #[arg(short = 'm', long)]
    pub message: Option<String>,

    /// Configuration file to use instead of the default locations.
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Collects the countdown options for resolution.
    #[must_use]
    pub fn time_spec(&self) -> TimeSpec {
        TimeSpec {
            days: self.days,
            hours: self.hours,
            minutes: self.minutes,
            seconds: self.seconds,
            date: self.date.clone(),
            time: self.time.clone(),
        }
    }
}
