//! Localized date/time utilities.
//!
//! These are the pure conversions used wherever a timestamp reaches the screen
//! or a typed date/time comes back from a form.
//!
//! # Available Utilities
//!
//! - [`numerals`] - ASCII to Persian digit conversion and back
//! - [`datetime`] - Timestamps, display zones, and the `YYYY/MM/DD - HH:mm` format
//! - [`duration`] - Elapsed-time rendering for time entries
//!
//! Every function here is synchronous and free of shared mutable state; the digit
//! table and the compiled patterns are read-only statics.

pub mod datetime;
pub mod duration;
pub mod numerals;
