//! Localized date and time formatting and parsing
//!
//! Rows arrive from the backend with ISO-8601 UTC timestamps. Users see and type
//! them as `YYYY/MM/DD - HH:mm` in the display zone, written with Persian digits
//! (e.g. `۱۴۰۲/۱۲/۲۲ - ۱۸:۳۰`). This module converts between the two forms.
//!
//! Only the digit glyphs are translated. A year typed as `۱۴۰۲` is read as the
//! Gregorian year 1402; no calendar conversion takes place.

use crate::constants::{DATE_TIME_SEPARATOR, PLACEHOLDER};
use crate::utils::numerals::{to_ascii_numerals, to_localized_numerals};
use chrono::{
    DateTime, Datelike, Duration, FixedOffset, Local, LocalResult, NaiveDate, NaiveDateTime, Offset, SecondsFormat,
    TimeZone, Timelike, Utc,
};
use log::warn;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static DATE_SEGMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<year>[0-9]+)/(?P<month>[0-9]+)/(?P<day>[0-9]+)$").expect("valid date segment regex")
});
static TIME_SEGMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<hour>[0-9]+):(?P<minute>[0-9]+)$").expect("valid time segment regex"));

/// Timestamp layouts with an explicit offset, tried after RFC 3339
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"];

/// Timestamp layouts without an offset; these are read as UTC
const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Errors raised while formatting or parsing date/time values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateTimeError {
    #[error("Malformed date/time text: {0}")]
    MalformedInput(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

/// An instant in time, stored and transmitted as an ISO-8601 UTC string
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Parse a timestamp as produced by the backend
    ///
    /// Accepts RFC 3339 (`2024-01-01T10:00:00Z`, `2024-01-01T10:00:00.123+00:00`),
    /// the PostgreSQL text form (`2024-01-01 10:00:00+00`) and offset-less ISO
    /// forms, which are taken to be UTC.
    ///
    /// # Errors
    /// Returns [`DateTimeError::InvalidTimestamp`] when no layout matches
    pub fn parse(input: &str) -> Result<Self, DateTimeError> {
        let trimmed = input.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(dt.with_timezone(&Utc)));
        }

        for layout in OFFSET_FORMATS {
            if let Ok(dt) = DateTime::parse_from_str(trimmed, layout) {
                return Ok(Self(dt.with_timezone(&Utc)));
            }
        }

        for layout in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, layout) {
                return Ok(Self(Utc.from_utc_datetime(&naive)));
            }
        }

        Err(DateTimeError::InvalidTimestamp(format!("cannot parse '{}' as an ISO-8601 instant", input)))
    }

    /// Canonical wire form, e.g. `2024-01-01T10:00:00.000Z`
    pub fn to_iso_string(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Drop seconds and sub-second precision
    pub fn truncate_to_minute(&self) -> Self {
        let dt = self.0.with_second(0).and_then(|dt| dt.with_nanosecond(0)).unwrap_or(self.0);
        Self(dt)
    }

    /// Signed milliseconds from `self` to `later`
    pub fn millis_until(&self, later: &Timestamp) -> i64 {
        (later.0 - self.0).num_milliseconds()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

impl FromStr for Timestamp {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Timestamp {
    type Error = DateTimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Timestamp> for String {
    fn from(value: Timestamp) -> Self {
        value.to_iso_string()
    }
}

/// Invalid `display.timezone` value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid display timezone '{0}': expected \"local\", \"utc\" or an offset such as +03:30")]
pub struct ZoneParseError(pub String);

/// Timezone used when rendering and reading the display format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    /// The system's local time rules
    #[default]
    Local,
    /// A fixed UTC offset
    Fixed(FixedOffset),
}

impl DisplayZone {
    pub fn utc() -> Self {
        Self::Fixed(Utc.fix())
    }

    /// Fixed offset from whole hours and minutes east of UTC
    pub fn fixed(hours: i32, minutes: i32) -> Option<Self> {
        let sign = if hours < 0 { -1 } else { 1 };
        FixedOffset::east_opt(hours * 3600 + sign * minutes * 60).map(Self::Fixed)
    }

    fn to_naive_local(self, ts: &Timestamp) -> NaiveDateTime {
        match self {
            Self::Local => ts.0.with_timezone(&Local).naive_local(),
            Self::Fixed(offset) => ts.0.with_timezone(&offset).naive_local(),
        }
    }

    /// Resolve a wall-clock value in this zone to an instant
    ///
    /// Ambiguous wall-clock times (DST fall-back) resolve to the earlier instant.
    fn resolve_local(self, naive: &NaiveDateTime) -> Result<Timestamp, DateTimeError> {
        match self {
            Self::Local => earliest_instant(Local.from_local_datetime(naive), naive),
            Self::Fixed(offset) => earliest_instant(offset.from_local_datetime(naive), naive),
        }
    }
}

/// Pick the instant for a wall-clock lookup: the earlier of two on a fall-back
/// overlap, an error inside a spring-forward gap
fn earliest_instant<Tz: TimeZone>(
    lookup: LocalResult<DateTime<Tz>>,
    naive: &NaiveDateTime,
) -> Result<Timestamp, DateTimeError> {
    lookup
        .earliest()
        .map(|dt| Timestamp(dt.with_timezone(&Utc)))
        .ok_or_else(|| DateTimeError::InvalidTimestamp(format!("{} does not exist in the display timezone", naive)))
}

impl fmt::Display for DisplayZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Fixed(offset) if offset.local_minus_utc() == 0 => f.write_str("utc"),
            Self::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

impl FromStr for DisplayZone {
    type Err = ZoneParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        let err = || ZoneParseError(s.to_string());

        match value.to_ascii_lowercase().as_str() {
            "local" => return Ok(Self::Local),
            "utc" | "z" => return Ok(Self::utc()),
            _ => {}
        }

        let (sign, rest) = match value.chars().next() {
            Some('+') => (1, &value[1..]),
            Some('-') => (-1, &value[1..]),
            _ => return Err(err()),
        };
        let (hours, minutes) = rest.split_once(':').ok_or_else(err)?;
        let is_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !is_digits(hours) || !is_digits(minutes) {
            return Err(err());
        }
        let hours: i32 = hours.parse().map_err(|_| err())?;
        let minutes: i32 = minutes.parse().map_err(|_| err())?;
        if !(0..=23).contains(&hours) || !(0..=59).contains(&minutes) {
            return Err(err());
        }

        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .map(Self::Fixed)
            .ok_or_else(err)
    }
}

/// How out-of-range calendar fields in typed text are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangePolicy {
    /// Month 1-12, day within the month, hour 0-23, minute 0-59; anything else is rejected
    #[default]
    Strict,
    /// Excess values roll into the next unit (month 13 is January of the next year)
    Overflow,
}

/// Numeric fields read from the display format, before calendar validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFields {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
}

impl DisplayFields {
    /// Fields of a wall-clock value, as rendered in the display format
    pub fn from_naive(naive: &NaiveDateTime) -> Self {
        Self {
            year: i64::from(naive.year()),
            month: i64::from(naive.month()),
            day: i64::from(naive.day()),
            hour: i64::from(naive.hour()),
            minute: i64::from(naive.minute()),
        }
    }

    /// Read `YYYY/MM/DD - HH:mm` (Persian or ASCII digits) into its five fields
    ///
    /// # Errors
    /// Returns [`DateTimeError::MalformedInput`] when the separator is missing,
    /// a segment is empty or non-numeric, or year, month or day is zero
    pub fn parse(text: &str) -> Result<Self, DateTimeError> {
        let ascii = to_ascii_numerals(text.trim());

        let (date, time) = ascii.split_once(DATE_TIME_SEPARATOR).ok_or_else(|| {
            DateTimeError::MalformedInput(format!("expected 'YYYY/MM/DD - HH:mm', got '{}'", text))
        })?;
        let (date, time) = (date.trim(), time.trim());
        if date.is_empty() || time.is_empty() {
            return Err(DateTimeError::MalformedInput(format!("missing date or time in '{}'", text)));
        }

        let date_caps = DATE_SEGMENT_RE
            .captures(date)
            .ok_or_else(|| DateTimeError::MalformedInput(format!("date '{}' is not YYYY/MM/DD", date)))?;
        let time_caps = TIME_SEGMENT_RE
            .captures(time)
            .ok_or_else(|| DateTimeError::MalformedInput(format!("time '{}' is not HH:mm", time)))?;

        let fields = Self {
            year: capture_number(&date_caps, "year")?,
            month: capture_number(&date_caps, "month")?,
            day: capture_number(&date_caps, "day")?,
            hour: capture_number(&time_caps, "hour")?,
            minute: capture_number(&time_caps, "minute")?,
        };

        if fields.year == 0 || fields.month == 0 || fields.day == 0 {
            return Err(DateTimeError::MalformedInput(format!(
                "year, month and day must be non-zero in '{}'",
                text
            )));
        }

        Ok(fields)
    }

    /// Wall-clock value with every field range-checked
    pub fn to_naive_strict(&self) -> Result<NaiveDateTime, DateTimeError> {
        let build = || -> Option<NaiveDateTime> {
            let date = NaiveDate::from_ymd_opt(
                i32::try_from(self.year).ok()?,
                u32::try_from(self.month).ok()?,
                u32::try_from(self.day).ok()?,
            )?;
            date.and_hms_opt(u32::try_from(self.hour).ok()?, u32::try_from(self.minute).ok()?, 0)
        };
        build().ok_or_else(|| DateTimeError::InvalidTimestamp(format!("{} is not a real calendar date/time", self)))
    }

    /// Wall-clock value with excess fields carried into larger units
    pub fn to_naive_overflowing(&self) -> Result<NaiveDateTime, DateTimeError> {
        let build = || -> Option<NaiveDateTime> {
            let month_index = self.month - 1;
            let year = self.year.checked_add(month_index.div_euclid(12))?;
            let month = month_index.rem_euclid(12) + 1;

            let start = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, u32::try_from(month).ok()?, 1)?
                .and_hms_opt(0, 0, 0)?;
            start
                .checked_add_signed(Duration::try_days(self.day - 1)?)?
                .checked_add_signed(Duration::try_hours(self.hour)?)?
                .checked_add_signed(Duration::try_minutes(self.minute)?)
        };
        build().ok_or_else(|| DateTimeError::InvalidTimestamp(format!("{} is outside the supported range", self)))
    }
}

impl fmt::Display for DisplayFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}/{:02}/{:02} - {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

fn capture_number(caps: &Captures<'_>, name: &str) -> Result<i64, DateTimeError> {
    let raw = caps
        .name(name)
        .map(|m| m.as_str())
        .ok_or_else(|| DateTimeError::MalformedInput(format!("missing {}", name)))?;
    raw.parse::<i64>()
        .map_err(|_| DateTimeError::MalformedInput(format!("{} '{}' is not a usable number", name, raw)))
}

/// Renders and reads the localized display format in a fixed zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateTimeFormatter {
    zone: DisplayZone,
    ranges: RangePolicy,
}

impl DateTimeFormatter {
    pub fn new(zone: DisplayZone) -> Self {
        Self {
            zone,
            ranges: RangePolicy::Strict,
        }
    }

    pub fn with_range_policy(mut self, ranges: RangePolicy) -> Self {
        self.ranges = ranges;
        self
    }

    pub fn zone(&self) -> DisplayZone {
        self.zone
    }

    pub fn range_policy(&self) -> RangePolicy {
        self.ranges
    }

    /// Format an ISO-8601 instant as `YYYY/MM/DD - HH:mm` with Persian digits
    ///
    /// # Errors
    /// Returns [`DateTimeError::InvalidTimestamp`] if `instant` cannot be parsed;
    /// no partial string is produced
    pub fn format(&self, instant: &str) -> Result<String, DateTimeError> {
        let ts = Timestamp::parse(instant)?;
        Ok(self.format_timestamp(&ts))
    }

    pub fn format_timestamp(&self, ts: &Timestamp) -> String {
        let local = self.zone.to_naive_local(ts);
        to_localized_numerals(&DisplayFields::from_naive(&local))
    }

    /// Format for display, falling back to a placeholder when `instant` is unusable
    pub fn format_or_placeholder(&self, instant: &str) -> String {
        match self.format(instant) {
            Ok(formatted) => formatted,
            Err(e) => {
                warn!("Showing placeholder for unparsable instant '{}': {}", instant, e);
                PLACEHOLDER.to_string()
            }
        }
    }

    /// Read a localized `YYYY/MM/DD - HH:mm` string back into an instant
    ///
    /// # Errors
    /// * [`DateTimeError::MalformedInput`] when the text does not have the expected shape
    /// * [`DateTimeError::InvalidTimestamp`] when the fields do not form a real date/time
    pub fn parse(&self, text: &str) -> Result<Timestamp, DateTimeError> {
        let fields = DisplayFields::parse(text)?;
        let naive = match self.ranges {
            RangePolicy::Strict => fields.to_naive_strict()?,
            RangePolicy::Overflow => fields.to_naive_overflowing()?,
        };
        self.zone.resolve_local(&naive)
    }
}

/// Format an ISO-8601 instant in `zone`; see [`DateTimeFormatter::format`]
pub fn format_date_time(instant: &str, zone: DisplayZone) -> Result<String, DateTimeError> {
    DateTimeFormatter::new(zone).format(instant)
}

/// Parse localized display text in `zone` with strict ranges; see [`DateTimeFormatter::parse`]
pub fn parse_localized_date_time(text: &str, zone: DisplayZone) -> Result<Timestamp, DateTimeError> {
    DateTimeFormatter::new(zone).parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_number_rejects_huge_values() {
        let caps = TIME_SEGMENT_RE.captures("99999999999999999999:00").unwrap();
        assert!(matches!(capture_number(&caps, "hour"), Err(DateTimeError::MalformedInput(_))));
    }

    #[test]
    fn test_regexes_reject_non_ascii_digits() {
        // Arabic-Indic digits are not in the Persian table and must not sneak through
        assert!(DATE_SEGMENT_RE.captures("\u{0662}024/01/01").is_none());
    }

    #[test]
    fn test_earliest_instant_picks_first_of_overlap() {
        let naive = NaiveDate::from_ymd_opt(2024, 11, 3).unwrap().and_hms_opt(1, 30, 0).unwrap();
        let edt = FixedOffset::west_opt(4 * 3600).unwrap();
        let est = FixedOffset::west_opt(5 * 3600).unwrap();
        let overlap = LocalResult::Ambiguous(
            edt.from_local_datetime(&naive).unwrap(),
            est.from_local_datetime(&naive).unwrap(),
        );

        let resolved = earliest_instant(overlap, &naive).unwrap();
        assert_eq!(resolved.to_iso_string(), "2024-11-03T05:30:00.000Z");
    }

    #[test]
    fn test_earliest_instant_rejects_gap() {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap().and_hms_opt(2, 30, 0).unwrap();
        let gap: LocalResult<DateTime<FixedOffset>> = LocalResult::None;
        assert!(matches!(earliest_instant(gap, &naive), Err(DateTimeError::InvalidTimestamp(_))));
    }

    #[test]
    fn test_display_fields_from_naive_has_no_year_sign() {
        let naive = NaiveDate::from_ymd_opt(10000, 1, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
        assert_eq!(DisplayFields::from_naive(&naive).to_string(), "10000/01/01 - 10:00");
    }

    #[test]
    fn test_display_fields_display_pads() {
        let fields = DisplayFields {
            year: 2024,
            month: 1,
            day: 2,
            hour: 3,
            minute: 4,
        };
        assert_eq!(fields.to_string(), "2024/01/02 - 03:04");
    }
}
