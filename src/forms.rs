//! Time entry edit form
//!
//! The edit dialog shows start and end times in the localized display format and
//! lets the user retype them. Submitting turns the text back into timestamps; a
//! field that fails to parse aborts the whole update so nothing is half-applied.

use crate::constants::{ERROR_INVALID_END_TIME, ERROR_INVALID_START_TIME};
use crate::entities::{TimeEntry, TimeEntryUpdate};
use crate::utils::datetime::{DateTimeError, DateTimeFormatter};
use log::debug;
use uuid::Uuid;

/// Submission error carrying the message to show the user
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{message}")]
    InvalidStart {
        message: &'static str,
        #[source]
        source: DateTimeError,
    },

    #[error("{message}")]
    InvalidEnd {
        message: &'static str,
        #[source]
        source: DateTimeError,
    },
}

impl FormError {
    /// Localized text for the notification shown to the user
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidStart { message, .. } | Self::InvalidEnd { message, .. } => message,
        }
    }
}

/// Editable state of a time entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeEntryForm {
    pub project_id: Uuid,
    pub description: String,
    pub start_time: String,
    /// Empty while the timer is running
    pub end_time: String,
}

impl TimeEntryForm {
    /// Prefill the form from a stored entry
    pub fn from_entry(entry: &TimeEntry, formatter: &DateTimeFormatter) -> Self {
        Self {
            project_id: entry.project_id,
            description: entry.description.clone(),
            start_time: formatter.format_timestamp(&entry.start_time),
            end_time: entry
                .end_time
                .as_ref()
                .map(|end| formatter.format_timestamp(end))
                .unwrap_or_default(),
        }
    }

    /// Validate the typed times and build the update to send to the backend
    ///
    /// # Errors
    /// * [`FormError::InvalidStart`] if the start time does not parse
    /// * [`FormError::InvalidEnd`] if a non-empty end time does not parse
    pub fn into_update(self, formatter: &DateTimeFormatter) -> Result<TimeEntryUpdate, FormError> {
        let start_time = formatter.parse(&self.start_time).map_err(|source| {
            debug!("Rejected start time '{}': {}", self.start_time, source);
            FormError::InvalidStart {
                message: ERROR_INVALID_START_TIME,
                source,
            }
        })?;

        let end_time = if self.end_time.trim().is_empty() {
            None
        } else {
            let parsed = formatter.parse(&self.end_time).map_err(|source| {
                debug!("Rejected end time '{}': {}", self.end_time, source);
                FormError::InvalidEnd {
                    message: ERROR_INVALID_END_TIME,
                    source,
                }
            })?;
            Some(parsed)
        };

        Ok(TimeEntryUpdate {
            project_id: self.project_id,
            description: self.description,
            start_time,
            end_time,
        })
    }
}
