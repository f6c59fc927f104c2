//! Error types for countdown request resolution.
//!
//! Every variant is terminal: the binary prints the message as a single line
//! and exits with a non-zero status.

use thiserror::Error;

/// Errors that can occur while resolving a countdown request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The date or time string could not be parsed.
    #[error("Invalid date/time format: {reason}. Use YYYY-MM-DD, HH:MM, or HH:MM AM/PM.")]
    InvalidFormat {
        /// Why the parser rejected the input.
        reason: String,
    },

    /// The absolute target is not in the future.
    #[error("The specified time is in the past!")]
    TargetInPast,

    /// Relative mode was selected but every component is zero or unset.
    #[error("No valid time specified. Please provide days, hours, minutes, or seconds.")]
    NoDurationSpecified,

    /// The relative components sum to more seconds than fit in 64 bits.
    #[error("The specified duration is too large.")]
    DurationOverflow,
}

/// A specialized Result type for resolution operations.
pub type Result<T> = std::result::Result<T, ResolveError>;
