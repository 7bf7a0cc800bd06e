use crate::utils::datetime::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: Uuid,
    pub project_id: Uuid,
    #[serde(default)]
    pub description: String,
    pub start_time: Timestamp,
    pub end_time: Option<Timestamp>,
    /// Joined project title, present when the query selects `projects(title)`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<ProjectRef>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub title: String,
}

impl TimeEntry {
    /// An entry without an end time is a running timer
    pub fn is_active(&self) -> bool {
        self.end_time.is_none()
    }

    pub fn project_title(&self) -> Option<&str> {
        self.projects.as_ref().map(|p| p.title.as_str())
    }

    /// Milliseconds between start and end, `None` while running
    pub fn elapsed_millis(&self) -> Option<i64> {
        self.end_time.as_ref().map(|end| self.start_time.millis_until(end))
    }
}

/// Fields written back when a time entry is edited
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeEntryUpdate {
    pub project_id: Uuid,
    pub description: String,
    pub start_time: Timestamp,
    pub end_time: Option<Timestamp>,
}
