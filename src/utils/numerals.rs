//! Persian numeral conversion
//!
//! Swaps ASCII digits for the Extended Arabic-Indic glyphs used in Persian text
//! and back again. Only the ten digit characters are touched; everything else in
//! the input passes through unchanged.

use std::fmt::Display;

/// Bidirectional digit lookup table indexed by digit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitTable {
    glyphs: [char; 10],
}

/// Persian digits `۰` through `۹` (U+06F0 to U+06F9).
pub const PERSIAN_DIGITS: DigitTable = DigitTable {
    glyphs: ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'],
};

impl DigitTable {
    /// Glyph for an ASCII digit, or `None` for any other character
    pub fn glyph(&self, ascii: char) -> Option<char> {
        ascii.to_digit(10).map(|d| self.glyphs[d as usize])
    }

    /// ASCII digit for a glyph in this table, or `None` when it is not an exact match
    pub fn ascii(&self, glyph: char) -> Option<char> {
        self.glyphs
            .iter()
            .position(|&g| g == glyph)
            .and_then(|d| char::from_digit(d as u32, 10))
    }

    /// All glyphs in digit order
    pub fn glyphs(&self) -> &[char; 10] {
        &self.glyphs
    }
}

/// Which way [`convert_digits`] translates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralDirection {
    /// ASCII `0-9` to localized glyphs
    ToLocalized,
    /// Localized glyphs back to ASCII `0-9`
    ToAscii,
}

/// Replace every ASCII digit in the string form of `input` with its Persian glyph
///
/// # Examples
/// ```
/// use timecard::utils::numerals::to_localized_numerals;
/// assert_eq!(to_localized_numerals(&"12:30"), "۱۲:۳۰");
/// assert_eq!(to_localized_numerals(&2024), "۲۰۲۴");
/// ```
pub fn to_localized_numerals<T: Display + ?Sized>(input: &T) -> String {
    input
        .to_string()
        .chars()
        .map(|c| PERSIAN_DIGITS.glyph(c).unwrap_or(c))
        .collect()
}

/// Like [`to_localized_numerals`], but a missing value renders as an empty string
pub fn to_localized_numerals_opt<T: Display>(input: Option<T>) -> String {
    match input {
        Some(value) => to_localized_numerals(&value),
        None => String::new(),
    }
}

/// Replace every Persian digit glyph with its ASCII digit
///
/// Characters that are not exact table matches (including other scripts' digits)
/// are left as they are.
pub fn to_ascii_numerals(input: &str) -> String {
    input.chars().map(|c| PERSIAN_DIGITS.ascii(c).unwrap_or(c)).collect()
}

/// Convert digits in `text` in the given direction
pub fn convert_digits(text: &str, direction: NumeralDirection) -> String {
    match direction {
        NumeralDirection::ToLocalized => to_localized_numerals(text),
        NumeralDirection::ToAscii => to_ascii_numerals(text),
    }
}
