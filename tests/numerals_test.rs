use timecard::utils::numerals::*;

#[test]
fn test_all_digits_localize() {
    assert_eq!(to_localized_numerals("0123456789"), "۰۱۲۳۴۵۶۷۸۹");
}

#[test]
fn test_numbers_localize() {
    assert_eq!(to_localized_numerals(&1402), "۱۴۰۲");
    assert_eq!(to_localized_numerals(&-5), "-۵");
}

#[test]
fn test_non_digits_pass_through() {
    assert_eq!(to_localized_numerals("12:30 pm"), "۱۲:۳۰ pm");
    assert_eq!(to_localized_numerals("پروژه 7"), "پروژه ۷");
}

#[test]
fn test_missing_value_is_empty() {
    assert_eq!(to_localized_numerals_opt::<i32>(None), "");
    assert_eq!(to_localized_numerals_opt(Some(42)), "۴۲");
}

#[test]
fn test_ascii_digit_strings_round_trip() {
    for s in ["0", "7", "2024", "0000", "9876543210", "100200300"] {
        assert_eq!(to_ascii_numerals(&to_localized_numerals(s)), s);
    }
}

#[test]
fn test_to_ascii_only_reverses_table_matches() {
    // U+0663 is the Arabic-Indic three, not the Persian one
    assert_eq!(to_ascii_numerals("۱۲abc\u{0663}"), "12abc\u{0663}");
}

#[test]
fn test_convert_digits_direction() {
    assert_eq!(convert_digits("2024/01/01", NumeralDirection::ToLocalized), "۲۰۲۴/۰۱/۰۱");
    assert_eq!(convert_digits("۲۰۲۴/۰۱/۰۱", NumeralDirection::ToAscii), "2024/01/01");
}

#[test]
fn test_table_glyphs_are_persian_block() {
    let glyphs = PERSIAN_DIGITS.glyphs();
    for (d, g) in glyphs.iter().enumerate() {
        assert_eq!(*g as u32, 0x06F0 + d as u32);
    }
}
