//! Elapsed-time display for time entries

use crate::constants::{HOURS_UNIT, IN_PROGRESS};
use crate::utils::datetime::{DateTimeError, Timestamp};
use crate::utils::numerals::to_localized_numerals;
use log::warn;

const MILLIS_PER_MINUTE: i64 = 60 * 1000;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;

/// What to show when an entry ends before it starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NegativeDurationPolicy {
    /// Render `۰:۰۰` and log a warning
    #[default]
    Clamp,
    /// Render the magnitude with a leading minus sign
    Signed,
}

/// Whole hours and remaining minutes of a millisecond span
///
/// Seconds are truncated. Both parts carry the sign of `millis`.
pub fn split_hours_minutes(millis: i64) -> (i64, i64) {
    let hours = millis / MILLIS_PER_HOUR;
    let minutes = (millis % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE;
    (hours, minutes)
}

/// Render the time between two ISO-8601 instants as localized `H:MM`
///
/// A missing `end` means the timer is still running and yields the in-progress
/// sentinel. Negative spans are clamped to zero.
///
/// # Errors
/// Returns [`DateTimeError::InvalidTimestamp`] if either instant cannot be parsed
pub fn format_duration(start: &str, end: Option<&str>) -> Result<String, DateTimeError> {
    let Some(end) = end else {
        return Ok(IN_PROGRESS.to_string());
    };
    let start = Timestamp::parse(start)?;
    let end = Timestamp::parse(end)?;
    Ok(format_elapsed(&start, Some(&end), NegativeDurationPolicy::Clamp))
}

/// Render the time between two timestamps as localized `H:MM`
pub fn format_elapsed(start: &Timestamp, end: Option<&Timestamp>, policy: NegativeDurationPolicy) -> String {
    let Some(end) = end else {
        return IN_PROGRESS.to_string();
    };

    let millis = start.millis_until(end);
    if millis >= 0 {
        return render_hours_minutes(millis);
    }

    match policy {
        NegativeDurationPolicy::Clamp => {
            warn!("Time entry ends before it starts ({} -> {}), showing zero", start, end);
            render_hours_minutes(0)
        }
        NegativeDurationPolicy::Signed => format!("-{}", render_hours_minutes(millis.saturating_abs())),
    }
}

fn render_hours_minutes(millis: i64) -> String {
    let (hours, minutes) = split_hours_minutes(millis);
    to_localized_numerals(&format!("{}:{:02}", hours, minutes))
}

/// Decimal hours with one fractional digit and the hour unit, e.g. `۱۲.۵ ساعت`
pub fn format_hours(hours: f64) -> String {
    format!("{} {}", to_localized_numerals(&format!("{:.1}", hours)), HOURS_UNIT)
}
