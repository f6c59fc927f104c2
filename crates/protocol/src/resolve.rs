//! Time resolution.
//!
//! Turns a [`TimeSpec`] into a [`CountdownRequest`]: a positive number of
//! seconds plus a human-readable description.
//!
//! # Modes
//!
//! - **Absolute**: `date` and/or `time` supplied. The date defaults to today
//!   and the time to `00:00`. The 12-hour format is used only when the time
//!   string contains the literal `AM` or `PM`.
//! - **Relative**: days, hours, minutes and seconds are summed.

use chrono::{Local, NaiveDateTime, TimeDelta};
use tracing::{debug, warn};

use crate::error::{ResolveError, Result};
use crate::request::{CountdownRequest, Target, TimeSpec};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_24H_FORMAT: &str = "%H:%M";
const TIME_12H_FORMAT: &str = "%I:%M %p";
const DEFAULT_TIME: &str = "00:00";

/// Resolves a spec against the current local wall clock.
///
/// # Errors
///
/// See [`resolve_at`].
pub fn resolve(spec: &TimeSpec) -> Result<CountdownRequest> {
    resolve_at(spec, Local::now().naive_local())
}

/// Resolves a spec against an explicit "now".
///
/// # Errors
///
/// - [`ResolveError::InvalidFormat`] if the date or time cannot be parsed
/// - [`ResolveError::TargetInPast`] if the absolute target is not at least
///   one whole second in the future
/// - [`ResolveError::NoDurationSpecified`] if every relative component is
///   zero or unset
/// - [`ResolveError::DurationOverflow`] if the relative sum overflows
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use countdown_protocol::{TimeSpec, resolve::resolve_at};
///
/// let now = NaiveDate::from_ymd_opt(2030, 6, 1)
///     .unwrap()
///     .and_hms_opt(12, 0, 0)
///     .unwrap();
///
/// let request = resolve_at(&TimeSpec::absolute(None, Some("13:00")), now).unwrap();
/// assert_eq!(request.total_seconds(), 3600);
/// assert_eq!(request.description, "Countdown until 2030-06-01 13:00");
/// ```
pub fn resolve_at(spec: &TimeSpec, now: NaiveDateTime) -> Result<CountdownRequest> {
    if spec.is_absolute() {
        if spec.has_relative() {
            warn!("relative duration options are ignored when a date or time is given");
        }
        resolve_absolute(spec.date.as_deref(), spec.time.as_deref(), now)
    } else {
        resolve_relative(spec)
    }
}

fn resolve_absolute(
    date: Option<&str>,
    time: Option<&str>,
    now: NaiveDateTime,
) -> Result<CountdownRequest> {
    let date = date.map_or_else(|| now.format(DATE_FORMAT).to_string(), str::to_owned);
    let time = time.unwrap_or(DEFAULT_TIME);

    let target = parse_target(&date, time)?;
    let delta = target - now;
    if delta <= TimeDelta::zero() {
        return Err(ResolveError::TargetInPast);
    }

    // A partial second left over still gets its own tick.
    let whole = delta.num_seconds();
    let remaining = if delta > TimeDelta::seconds(whole) {
        whole + 1
    } else {
        whole
    };
    debug!(%target, remaining, "resolved absolute target");

    let total_seconds = u64::try_from(remaining).map_err(|_| ResolveError::TargetInPast)?;

    Ok(CountdownRequest {
        target: Target::Absolute {
            target,
            total_seconds,
        },
        message: None,
        description: format!("Countdown until {date} {time}"),
    })
}

/// Parses a date and time into a naive local instant.
///
/// # Errors
///
/// Returns [`ResolveError::InvalidFormat`] if either part is malformed.
///
/// # Examples
///
/// ```
/// use countdown_protocol::resolve::parse_target;
///
/// let target = parse_target("2099-01-01", "01:30 PM").unwrap();
/// assert_eq!(target.to_string(), "2099-01-01 13:30:00");
/// ```
pub fn parse_target(date: &str, time: &str) -> Result<NaiveDateTime> {
    let format = if time.contains("AM") || time.contains("PM") {
        TIME_12H_FORMAT
    } else {
        TIME_24H_FORMAT
    };

    NaiveDateTime::parse_from_str(
        &format!("{date} {time}"),
        &format!("{DATE_FORMAT} {format}"),
    )
    .map_err(|e| ResolveError::InvalidFormat {
        reason: e.to_string(),
    })
}

fn resolve_relative(spec: &TimeSpec) -> Result<CountdownRequest> {
    let components = [
        (spec.days, 86_400_u64, "days"),
        (spec.hours, 3_600, "hours"),
        (spec.minutes, 60, "minutes"),
        (spec.seconds, 1, "seconds"),
    ];

    let mut total_seconds = 0_u64;
    let mut parts = Vec::new();
    for (value, unit, name) in components {
        let value = value.unwrap_or(0);
        if value == 0 {
            continue;
        }
        total_seconds = value
            .checked_mul(unit)
            .and_then(|secs| total_seconds.checked_add(secs))
            .ok_or(ResolveError::DurationOverflow)?;
        parts.push(format!("{value} {name}"));
    }

    if total_seconds == 0 {
        return Err(ResolveError::NoDurationSpecified);
    }
    debug!(total_seconds, "resolved relative duration");

    Ok(CountdownRequest {
        target: Target::Relative { total_seconds },
        message: None,
        description: parts.join(", "),
    })
}
