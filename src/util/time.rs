//! Human readable durations, used for the bot's uptime.

use chrono::{DateTime, Duration, Utc};

use crate::error::{internal::InternalError, AppError};

/// Unit names paired with their length in seconds, largest first.
const INTERVALS: [(&str, u64); 7] = [
    ("years", 31_536_000),
    ("months", 2_628_000),
    ("weeks", 604_800),
    ("days", 86_400),
    ("hours", 3_600),
    ("minutes", 60),
    ("seconds", 1),
];

/// Renders a number of seconds as e.g. `"33 minutes, 20 seconds"`.
///
/// Units with a value of zero are skipped and units with a value of one are
/// singularised. At most `granularity` units are shown, starting from the largest.
///
/// # Arguments
/// - `seconds` - Duration to render
/// - `granularity` - Maximum number of units in the output, between 1 and 7
///
/// # Returns
/// - `Ok(String)` - Rendered duration (empty for zero seconds)
/// - `Err(AppError::InternalErr(InvalidGranularity))` - Granularity out of range
pub fn display_time(seconds: u64, granularity: usize) -> Result<String, AppError> {
    if !(1..=INTERVALS.len()).contains(&granularity) {
        return Err(InternalError::InvalidGranularity(granularity).into());
    }

    let mut remaining = seconds;
    let mut parts = Vec::new();

    for (name, count) in INTERVALS {
        let value = remaining / count;
        if value == 0 {
            continue;
        }
        remaining -= value * count;

        let name = if value == 1 {
            name.trim_end_matches('s')
        } else {
            name
        };
        parts.push(format!("{value} {name}"));
    }

    parts.truncate(granularity);
    Ok(parts.join(", "))
}

/// Renders a [`Duration`] with [`display_time`]. Negative durations render as empty.
pub fn display_time_from_delta(delta: Duration, granularity: usize) -> Result<String, AppError> {
    let seconds = u64::try_from(delta.num_seconds()).unwrap_or(0);
    display_time(seconds, granularity)
}

/// Renders the time elapsed from `second` to `first` with [`display_time`].
pub fn display_time_from_datetimes(
    first: DateTime<Utc>,
    second: DateTime<Utc>,
    granularity: usize,
) -> Result<String, AppError> {
    display_time_from_delta(first - second, granularity)
}
