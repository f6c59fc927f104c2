//! Countdown request types.
//!
//! A [`TimeSpec`] is the raw set of options collected from the command line.
//! Resolving it (see [`crate::resolve`]) produces a [`CountdownRequest`].

use chrono::NaiveDateTime;

/// Raw countdown options before resolution.
///
/// Supplying `date` or `time` selects absolute mode; the relative
/// components are then ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeSpec {
    /// Relative days.
    pub days: Option<u64>,
    /// Relative hours.
    pub hours: Option<u64>,
    /// Relative minutes.
    pub minutes: Option<u64>,
    /// Relative seconds.
    pub seconds: Option<u64>,
    /// Absolute target date, `YYYY-MM-DD`.
    pub date: Option<String>,
    /// Absolute target time, `HH:MM` or `HH:MM AM/PM`.
    pub time: Option<String>,
}

impl TimeSpec {
    /// Creates a relative spec from its four components.
    ///
    /// # Examples
    ///
    /// ```
    /// use countdown_protocol::TimeSpec;
    ///
    /// let spec = TimeSpec::relative(0, 1, 30, 0);
    /// assert!(!spec.is_absolute());
    /// ```
    #[must_use]
    pub fn relative(days: u64, hours: u64, minutes: u64, seconds: u64) -> Self {
        Self {
            days: Some(days),
            hours: Some(hours),
            minutes: Some(minutes),
            seconds: Some(seconds),
            ..Self::default()
        }
    }

    /// Creates an absolute spec from an optional date and time.
    #[must_use]
    pub fn absolute(date: Option<&str>, time: Option<&str>) -> Self {
        Self {
            date: date.map(str::to_owned),
            time: time.map(str::to_owned),
            ..Self::default()
        }
    }

    /// Returns whether absolute mode is selected.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.date.is_some() || self.time.is_some()
    }

    /// Returns whether any relative component was supplied.
    #[must_use]
    pub fn has_relative(&self) -> bool {
        [self.days, self.hours, self.minutes, self.seconds]
            .iter()
            .any(Option::is_some)
    }
}

/// The resolved countdown target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A duration counted from now.
    Relative {
        /// Seconds to count down.
        total_seconds: u64,
    },
    /// A local wall-clock instant.
    Absolute {
        /// The target instant.
        target: NaiveDateTime,
        /// Whole seconds between resolution time and the target.
        total_seconds: u64,
    },
}

/// A fully resolved countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownRequest {
    /// What is being counted down to.
    pub target: Target,
    /// Banner shown above the timer.
    pub message: Option<String>,
    /// Summary drawn in the bottom-right corner.
    pub description: String,
}

impl CountdownRequest {
    /// Seconds to count down from.
    #[must_use]
    pub fn total_seconds(&self) -> u64 {
        match self.target {
            Target::Relative { total_seconds } | Target::Absolute { total_seconds, .. } => {
                total_seconds
            }
        }
    }

    /// Attaches a banner message, replacing any previous one.
    #[must_use]
    pub fn with_message(mut self, message: Option<String>) -> Self {
        self.message = message;
        self
    }
}
