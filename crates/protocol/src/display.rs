//! Remaining-time formatting.
//!
//! The countdown is shown either as a clock (`HH:MM:SS`) or, for countdowns
//! that start at one day or more, as a whole day count. The mode is chosen
//! once from the initial total and kept for the whole run.

/// Seconds in one day.
pub const SECONDS_PER_DAY: u64 = 86_400;

const CLOCK_LABELS: &[&str] = &["Hours", "Minutes", "Seconds"];
const DAYS_LABELS: &[&str] = &["Days"];

/// How the remaining time is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    /// `HH:MM:SS` with Hours/Minutes/Seconds labels.
    Clock,
    /// Whole days with a single Days label.
    Days,
}

impl DisplayMode {
    /// Picks the display mode for a countdown starting at `total_seconds`.
    ///
    /// # Examples
    ///
    /// ```
    /// use countdown_protocol::DisplayMode;
    ///
    /// assert_eq!(DisplayMode::for_total(3_600), DisplayMode::Clock);
    /// assert_eq!(DisplayMode::for_total(86_400), DisplayMode::Days);
    /// ```
    #[must_use]
    pub fn for_total(total_seconds: u64) -> Self {
        if total_seconds >= SECONDS_PER_DAY {
            Self::Days
        } else {
            Self::Clock
        }
    }

    /// Unit labels drawn beneath the digits, left to right.
    #[must_use]
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            Self::Clock => CLOCK_LABELS,
            Self::Days => DAYS_LABELS,
        }
    }

    /// Formats the remaining seconds for this mode.
    ///
    /// In days mode, once less than a full day remains, the text falls back
    /// to an unpadded `H:MM:SS` clock while the mode itself stays unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use countdown_protocol::DisplayMode;
    ///
    /// assert_eq!(DisplayMode::Clock.format(3_661), "01:01:01");
    /// assert_eq!(DisplayMode::Days.format(90_000), "1");
    /// ```
    #[must_use]
    pub fn format(self, seconds: u64) -> String {
        match self {
            Self::Clock => format_clock(seconds, 2),
            Self::Days if seconds >= SECONDS_PER_DAY => (seconds / SECONDS_PER_DAY).to_string(),
            Self::Days => format_clock(seconds, 1),
        }
    }
}

fn format_clock(seconds: u64, hour_width: usize) -> String {
    let hours = seconds / 3_600;
    let minutes = (seconds % 3_600) / 60;
    let seconds = seconds % 60;
    format!("{hours:0hour_width$}:{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_format_pads_hours() {
        assert_eq!(DisplayMode::Clock.format(3_661), "01:01:01");
        assert_eq!(DisplayMode::Clock.format(59), "00:00:59");
        assert_eq!(DisplayMode::Clock.format(86_399), "23:59:59");
        assert_eq!(DisplayMode::Clock.format(0), "00:00:00");
    }

    #[test]
    fn days_format_shows_whole_days() {
        assert_eq!(DisplayMode::Days.format(90_000), "1");
        assert_eq!(DisplayMode::Days.format(86_400), "1");
        assert_eq!(DisplayMode::Days.format(10 * 86_400 + 5), "10");
    }

    #[test]
    fn days_format_below_one_day_keeps_clock_text() {
        assert_eq!(DisplayMode::Days.format(86_399), "23:59:59");
        assert_eq!(DisplayMode::Days.format(3_661), "1:01:01");
    }

    #[test]
    fn mode_threshold() {
        assert_eq!(DisplayMode::for_total(86_399), DisplayMode::Clock);
        assert_eq!(DisplayMode::for_total(86_400), DisplayMode::Days);
        assert_eq!(DisplayMode::for_total(90_000), DisplayMode::Days);
        assert_eq!(DisplayMode::for_total(1), DisplayMode::Clock);
    }

    #[test]
    fn labels_per_mode() {
        assert_eq!(DisplayMode::Clock.labels(), ["Hours", "Minutes", "Seconds"]);
        assert_eq!(DisplayMode::Days.labels(), ["Days"]);
    }
}
