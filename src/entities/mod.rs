//! Row models as returned by the hosted backend.
//!
//! These mirror the JSON the backend sends for each table. Timestamps are parsed
//! into [`Timestamp`](crate::utils::datetime::Timestamp) at deserialization time.

pub mod project;
pub mod team;
pub mod time_entry;

pub use project::{Project, ProjectStatus};
pub use team::{Profile, Team, TeamMember};
pub use time_entry::{ProjectRef, TimeEntry, TimeEntryUpdate};
