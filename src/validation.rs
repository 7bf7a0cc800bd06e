//! Registration input checks

use crate::constants::{
    ERROR_PASSWORD_NO_DIGIT, ERROR_PASSWORD_NO_UPPERCASE, ERROR_PASSWORD_TOO_SHORT, PASSWORD_MIN_LENGTH,
};

/// Check a candidate password against the sign-up rules
///
/// Returns the message for every rule the password breaks, in a fixed order
/// (length, uppercase letter, digit). An empty vector means the password is
/// acceptable. Length is counted in characters, not bytes.
pub fn validate_password(password: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if password.chars().count() < PASSWORD_MIN_LENGTH {
        errors.push(ERROR_PASSWORD_TOO_SHORT.to_string());
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push(ERROR_PASSWORD_NO_UPPERCASE.to_string());
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push(ERROR_PASSWORD_NO_DIGIT.to_string());
    }

    errors
}
