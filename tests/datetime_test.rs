use timecard::utils::datetime::*;

fn tehran() -> DisplayZone {
    "+03:30".parse().unwrap()
}

fn ts(s: &str) -> Timestamp {
    Timestamp::parse(s).unwrap()
}

#[test]
fn test_format_utc() {
    let formatted = format_date_time("2024-01-01T10:00:00Z", DisplayZone::utc()).unwrap();
    assert_eq!(formatted, "۲۰۲۴/۰۱/۰۱ - ۱۰:۰۰");
}

#[test]
fn test_format_applies_display_offset() {
    let formatted = format_date_time("2024-03-12T15:00:00Z", tehran()).unwrap();
    assert_eq!(formatted, "۲۰۲۴/۰۳/۱۲ - ۱۸:۳۰");

    // Crosses midnight into the next day
    let formatted = format_date_time("2024-03-12T22:45:00Z", tehran()).unwrap();
    assert_eq!(formatted, "۲۰۲۴/۰۳/۱۳ - ۰۲:۱۵");
}

#[test]
fn test_format_rejects_unparsable_instant() {
    let result = format_date_time("not a date", DisplayZone::utc());
    assert!(matches!(result, Err(DateTimeError::InvalidTimestamp(_))));
}

#[test]
fn test_format_or_placeholder_falls_back() {
    let formatter = DateTimeFormatter::new(DisplayZone::utc());
    assert_eq!(formatter.format_or_placeholder("garbage"), "-");
    assert_eq!(formatter.format_or_placeholder("2024-01-01T00:00:00Z"), "۲۰۲۴/۰۱/۰۱ - ۰۰:۰۰");
}

#[test]
fn test_round_trip_at_minute_precision() {
    let zones = [DisplayZone::utc(), tehran(), "-05:00".parse().unwrap()];
    let instants = [
        "2024-01-01T10:00:00Z",
        "2023-12-31T23:59:00Z",
        "2024-02-29T00:00:00Z",
        "1999-07-04T12:34:00Z",
    ];

    for zone in zones {
        let formatter = DateTimeFormatter::new(zone);
        for instant in instants {
            let formatted = formatter.format(instant).unwrap();
            let parsed = formatter.parse(&formatted).unwrap();
            assert_eq!(parsed, ts(instant), "zone {} instant {}", zone, instant);
        }
    }
}

#[test]
fn test_round_trip_five_digit_year() {
    let formatter = DateTimeFormatter::new(DisplayZone::utc());
    let original = ts("+10000-01-01T10:00:00+00:00");

    let formatted = formatter.format_timestamp(&original);
    assert_eq!(formatted, "۱۰۰۰۰/۰۱/۰۱ - ۱۰:۰۰");
    assert_eq!(formatter.parse(&formatted).unwrap(), original);
}

#[test]
fn test_year_zero_formats_but_does_not_parse_back() {
    // Year, month and day must be non-zero when read, so year 0 cannot round-trip
    let formatter = DateTimeFormatter::new(DisplayZone::utc());
    let formatted = formatter.format("0000-06-01T00:00:00+00:00").unwrap();
    assert_eq!(formatted, "۰۰۰۰/۰۶/۰۱ - ۰۰:۰۰");
    assert!(matches!(formatter.parse(&formatted), Err(DateTimeError::MalformedInput(_))));
}

#[test]
fn test_round_trip_drops_seconds() {
    let formatter = DateTimeFormatter::new(tehran());
    let original = ts("2024-05-05T08:15:42.500Z");
    let parsed = formatter.parse(&formatter.format_timestamp(&original)).unwrap();
    assert_eq!(parsed, original.truncate_to_minute());
    assert_eq!(parsed.to_iso_string(), "2024-05-05T08:15:00.000Z");
}

#[test]
fn test_parse_persian_digits_without_calendar_conversion() {
    let fields = DisplayFields::parse("۱۴۰۲/۱۲/۲۲ - ۱۸:۳۰").unwrap();
    assert_eq!(
        fields,
        DisplayFields {
            year: 1402,
            month: 12,
            day: 22,
            hour: 18,
            minute: 30
        }
    );

    let parsed = parse_localized_date_time("۱۴۰۲/۱۲/۲۲ - ۱۸:۳۰", DisplayZone::utc()).unwrap();
    assert_eq!(parsed.to_iso_string(), "1402-12-22T18:30:00.000Z");
}

#[test]
fn test_parse_ascii_digits() {
    let parsed = parse_localized_date_time("2024/01/01 - 10:00", DisplayZone::utc()).unwrap();
    assert_eq!(parsed, ts("2024-01-01T10:00:00Z"));
}

#[test]
fn test_parse_returns_utc_instant() {
    let parsed = parse_localized_date_time("۲۰۲۴/۰۳/۱۲ - ۱۸:۳۰", tehran()).unwrap();
    assert_eq!(parsed.to_string(), "2024-03-12T15:00:00.000Z");
}

#[test]
fn test_parse_accepts_zero_hour_and_minute() {
    let parsed = parse_localized_date_time("2024/01/01 - 00:00", DisplayZone::utc()).unwrap();
    assert_eq!(parsed, ts("2024-01-01T00:00:00Z"));
}

#[test]
fn test_parse_trims_surrounding_whitespace() {
    let parsed = parse_localized_date_time("  2024/01/01 - 10:00\n", DisplayZone::utc()).unwrap();
    assert_eq!(parsed, ts("2024-01-01T10:00:00Z"));
}

#[test]
fn test_parse_malformed_input() {
    let cases = [
        "2024/01/01 10:00",
        "2024/01/01 -",
        " - 10:00",
        "2024/01 - 10:00",
        "2024/ab/01 - 10:00",
        "2024/01/01 - 10",
        "2024/01/01 - 10:xx",
        "2024/00/10 - 10:00",
        "0000/01/10 - 10:00",
        "2024/01/00 - 10:00",
        "",
    ];
    for text in cases {
        let result = parse_localized_date_time(text, DisplayZone::utc());
        assert!(
            matches!(result, Err(DateTimeError::MalformedInput(_))),
            "expected MalformedInput for {:?}, got {:?}",
            text,
            result
        );
    }
}

// Range validation is on by default; the overflow policy keeps the legacy
// behaviour of rolling excess values into the next unit.

#[test]
fn test_strict_rejects_month_thirteen() {
    let result = parse_localized_date_time("2024/13/01 - 10:00", DisplayZone::utc());
    assert!(matches!(result, Err(DateTimeError::InvalidTimestamp(_))));
}

#[test]
fn test_overflow_rolls_month_thirteen_into_next_year() {
    let formatter = DateTimeFormatter::new(DisplayZone::utc()).with_range_policy(RangePolicy::Overflow);
    let parsed = formatter.parse("2024/13/01 - 10:00").unwrap();
    assert_eq!(parsed, ts("2025-01-01T10:00:00Z"));
}

#[test]
fn test_strict_rejects_impossible_dates_and_times() {
    for text in ["2023/02/30 - 10:00", "2023/02/29 - 10:00", "2024/04/31 - 10:00", "2024/01/01 - 24:00", "2024/01/01 - 10:60"] {
        let result = parse_localized_date_time(text, DisplayZone::utc());
        assert!(
            matches!(result, Err(DateTimeError::InvalidTimestamp(_))),
            "expected InvalidTimestamp for {:?}",
            text
        );
    }
}

#[test]
fn test_strict_accepts_leap_day() {
    let parsed = parse_localized_date_time("2024/02/29 - 12:00", DisplayZone::utc()).unwrap();
    assert_eq!(parsed, ts("2024-02-29T12:00:00Z"));
}

#[test]
fn test_overflow_normalizes_days_hours_and_minutes() {
    let formatter = DateTimeFormatter::new(DisplayZone::utc()).with_range_policy(RangePolicy::Overflow);
    assert_eq!(formatter.parse("2023/02/30 - 10:00").unwrap(), ts("2023-03-02T10:00:00Z"));
    assert_eq!(formatter.parse("2024/01/31 - 24:00").unwrap(), ts("2024-02-01T00:00:00Z"));
    assert_eq!(formatter.parse("2024/01/01 - 10:75").unwrap(), ts("2024-01-01T11:15:00Z"));
    assert_eq!(formatter.parse("2024/25/01 - 00:00").unwrap(), ts("2026-01-01T00:00:00Z"));
}

#[test]
fn test_overflow_keeps_two_digit_years_literal() {
    let formatter = DateTimeFormatter::new(DisplayZone::utc()).with_range_policy(RangePolicy::Overflow);
    assert_eq!(formatter.parse("0099/01/01 - 10:00").unwrap(), ts("0099-01-01T10:00:00+00:00"));
}

#[test]
fn test_overflow_still_rejects_malformed_input() {
    let formatter = DateTimeFormatter::new(DisplayZone::utc()).with_range_policy(RangePolicy::Overflow);
    assert!(matches!(formatter.parse("2024/00/01 - 10:00"), Err(DateTimeError::MalformedInput(_))));
}

#[test]
fn test_timestamp_parse_variants() {
    let expected = ts("2024-01-01T10:00:00Z");
    assert_eq!(ts("2024-01-01T10:00:00+00:00"), expected);
    assert_eq!(ts("2024-01-01T13:30:00+03:30"), expected);
    assert_eq!(ts("2024-01-01 10:00:00+00"), expected);
    assert_eq!(ts("2024-01-01T10:00:00"), expected);
    assert_eq!(ts("2024-01-01 10:00:00"), expected);
    assert_eq!(ts("2024-01-01T10:00"), expected);
    assert_eq!(ts("2024-01-01T10:00:00.000Z"), expected);
}

#[test]
fn test_timestamp_canonical_form() {
    assert_eq!(ts("2024-01-01T13:30:00.123456+03:30").to_string(), "2024-01-01T10:00:00.123Z");
}

#[test]
fn test_timestamp_rejects_garbage() {
    assert!(matches!(Timestamp::parse(""), Err(DateTimeError::InvalidTimestamp(_))));
    assert!(matches!(Timestamp::parse("2024-13-01T00:00:00Z"), Err(DateTimeError::InvalidTimestamp(_))));
}

#[test]
fn test_timestamp_serde_uses_iso_string() {
    let value = ts("2024-01-01T10:00:00Z");
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, "\"2024-01-01T10:00:00.000Z\"");

    let back: Timestamp = serde_json::from_str(&json).unwrap();
    assert_eq!(back, value);
    assert!(serde_json::from_str::<Timestamp>("\"yesterday\"").is_err());
}

#[test]
fn test_display_zone_parsing() {
    assert_eq!("local".parse::<DisplayZone>().unwrap(), DisplayZone::Local);
    assert_eq!("UTC".parse::<DisplayZone>().unwrap(), DisplayZone::utc());
    assert_eq!(tehran(), DisplayZone::fixed(3, 30).unwrap());
    assert_eq!("-05:00".parse::<DisplayZone>().unwrap(), DisplayZone::fixed(-5, 0).unwrap());

    for bad in ["", "tehran", "+25:00", "+03:75", "03:30", "+0330", "++03:30", "-+03:30", "+03:+30", "+:30"] {
        assert!(bad.parse::<DisplayZone>().is_err(), "{:?} should not parse", bad);
    }
}

#[test]
fn test_display_zone_to_string() {
    assert_eq!(DisplayZone::Local.to_string(), "local");
    assert_eq!(DisplayZone::utc().to_string(), "utc");
    assert_eq!(tehran().to_string(), "+03:30");
    assert_eq!(DisplayZone::fixed(-5, 0).unwrap().to_string(), "-05:00");
}

#[test]
fn test_local_zone_round_trip() {
    // Midday in January avoids DST transitions in every common zone
    let formatter = DateTimeFormatter::new(DisplayZone::Local);
    let original = ts("2024-01-15T12:00:00Z");
    let parsed = formatter.parse(&formatter.format_timestamp(&original)).unwrap();
    assert_eq!(parsed, original);
}
