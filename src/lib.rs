//! timecard - localized date/time display for project time tracking
//!
//! Time entries, projects and team memberships come from a hosted backend with
//! ISO-8601 UTC timestamps. This library turns them into the Persian-numeral
//! strings the dashboard shows, reads typed date/times back, and computes the
//! dashboard's summary numbers.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`entities`] - Backend row models
//! * [`forms`] - Time entry edit form handling
//! * [`logger`] - File logging setup
//! * [`stats`] - Dashboard statistics
//! * [`utils`] - Numeral conversion, date/time formatting and durations
//! * [`validation`] - Sign-up input checks

/// Configuration module for managing application settings
pub mod config;

/// Application constants and user-facing text
pub mod constants;

/// Serde models for backend rows
pub mod entities;

/// Edit form parsing for time entries
pub mod forms;

/// File logging setup
pub mod logger;

/// Dashboard aggregation
pub mod stats;

/// Localized date/time utilities
pub mod utils;

/// Password policy
pub mod validation;

pub use utils::datetime::{
    format_date_time, parse_localized_date_time, DateTimeError, DateTimeFormatter, DisplayZone, RangePolicy,
    Timestamp,
};
pub use utils::duration::{format_duration, format_elapsed, NegativeDurationPolicy};
pub use utils::numerals::{convert_digits, to_ascii_numerals, to_localized_numerals, NumeralDirection};
