//! Dashboard statistics
//!
//! Aggregates the user's projects and time entries into the numbers shown on the
//! dashboard. Only finished entries count toward hours; running timers appear in
//! recent activity but add no time.

use crate::constants::{RECENT_ACTIVITY_DEFAULT_LIMIT, UNKNOWN_PROJECT};
use crate::entities::{Project, ProjectStatus, TimeEntry};
use crate::utils::datetime::DateTimeFormatter;
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

const MILLIS_PER_HOUR: f64 = 60.0 * 60.0 * 1000.0;
const MILLIS_PER_DAY: f64 = 24.0 * MILLIS_PER_HOUR;

/// Hours logged against a single project
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectHours {
    pub title: String,
    pub hours: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    /// Timer still running
    Started,
    Completed,
}

/// One row of the recent activity list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentActivity {
    pub id: Uuid,
    pub kind: ActivityKind,
    pub project: String,
    /// Localized start time
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_projects: usize,
    pub active_projects: usize,
    pub completed_projects: usize,
    pub total_hours: f64,
    pub average_hours_per_day: f64,
    pub total_time_entries: usize,
    pub most_active_project: Option<ProjectHours>,
    pub recent_activity: Vec<RecentActivity>,
}

impl DashboardStats {
    /// Compute dashboard numbers with the default recent-activity length
    pub fn compute(projects: &[Project], entries: &[TimeEntry], formatter: &DateTimeFormatter) -> Self {
        Self::compute_with_limit(projects, entries, formatter, RECENT_ACTIVITY_DEFAULT_LIMIT)
    }

    pub fn compute_with_limit(
        projects: &[Project],
        entries: &[TimeEntry],
        formatter: &DateTimeFormatter,
        recent_limit: usize,
    ) -> Self {
        let active_projects = projects.iter().filter(|p| p.status == ProjectStatus::Active).count();
        let completed_projects = projects.iter().filter(|p| p.status == ProjectStatus::Completed).count();

        let total_hours = total_hours(entries);
        let average_hours_per_day = total_hours / tracked_days(entries);

        Self {
            total_projects: projects.len(),
            active_projects,
            completed_projects,
            total_hours,
            average_hours_per_day,
            total_time_entries: entries.len(),
            most_active_project: most_active_project(entries),
            recent_activity: recent_activity(entries, formatter, recent_limit),
        }
    }
}

/// Sum of finished entries in hours
pub fn total_hours(entries: &[TimeEntry]) -> f64 {
    entries
        .iter()
        .filter_map(TimeEntry::elapsed_millis)
        .map(|ms| ms as f64 / MILLIS_PER_HOUR)
        .sum()
}

/// Whole days spanned by entry start times, never less than one
fn tracked_days(entries: &[TimeEntry]) -> f64 {
    let first = entries.iter().map(|e| e.start_time).min();
    let last = entries.iter().map(|e| e.start_time).max();

    match (first, last) {
        (Some(first), Some(last)) => {
            let days = (first.millis_until(&last) as f64 / MILLIS_PER_DAY).ceil();
            if days > 0.0 {
                days
            } else {
                1.0
            }
        }
        _ => 1.0,
    }
}

/// Project with the most finished hours
///
/// Entries without a joined project title are skipped. On a tie the project seen
/// first keeps the lead.
pub fn most_active_project(entries: &[TimeEntry]) -> Option<ProjectHours> {
    let mut order: Vec<Uuid> = Vec::new();
    let mut by_project: HashMap<Uuid, ProjectHours> = HashMap::new();

    for entry in entries {
        let (Some(ms), Some(title)) = (entry.elapsed_millis(), entry.project_title()) else {
            continue;
        };
        let slot = by_project.entry(entry.project_id).or_insert_with(|| {
            order.push(entry.project_id);
            ProjectHours {
                title: title.to_string(),
                hours: 0.0,
            }
        });
        slot.hours += ms as f64 / MILLIS_PER_HOUR;
    }

    let mut best: Option<&ProjectHours> = None;
    for id in &order {
        if let Some(current) = by_project.get(id) {
            if best.map_or(true, |b| current.hours > b.hours) {
                best = Some(current);
            }
        }
    }
    best.cloned()
}

/// Most recent entries by start time, newest first
pub fn recent_activity(entries: &[TimeEntry], formatter: &DateTimeFormatter, limit: usize) -> Vec<RecentActivity> {
    let mut sorted: Vec<&TimeEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.start_time.cmp(&a.start_time));

    sorted
        .into_iter()
        .take(limit)
        .map(|entry| RecentActivity {
            id: entry.id,
            kind: if entry.is_active() { ActivityKind::Started } else { ActivityKind::Completed },
            project: entry.project_title().unwrap_or(UNKNOWN_PROJECT).to_string(),
            time: formatter.format_timestamp(&entry.start_time),
        })
        .collect()
}

/// The running timer, if any
pub fn active_entry(entries: &[TimeEntry]) -> Option<&TimeEntry> {
    entries.iter().find(|e| e.is_active())
}
