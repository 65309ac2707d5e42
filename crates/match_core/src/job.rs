use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque job identifier, stable for the session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JobId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Open,
    Filled,
    Cancelled,
    Completed,
}

/// A candidate job as delivered by the job source, already ranked.
///
/// The stack never mutates a job; decisions refer to it by [`JobId`].
/// Exact coordinates are deliberately absent: only a label and a distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skill_tags: BTreeSet<String>,
    #[serde(default)]
    pub location_label: Option<String>,
    /// Distance in miles, if the source disclosed one.
    #[serde(default)]
    pub distance: Option<f64>,
    pub shift_start: DateTime<Utc>,
    pub shift_end: DateTime<Utc>,
    #[serde(default)]
    pub is_urgent: bool,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub poster_username: String,
    #[serde(default)]
    pub status: JobStatus,
}

/// Renders the privacy-preserving location line of a card.
pub fn format_distance(job: &Job) -> String {
    match (job.distance, job.location_label.as_deref()) {
        (Some(miles), _) => format!("{miles:.1} mi"),
        (None, Some(label)) if !label.trim().is_empty() => label.trim().to_string(),
        _ => "Nearby".to_string(),
    }
}

/// Relative start time for shifts within a day, absolute date beyond that.
pub fn format_shift_time(start: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let until = start - now;
    let hours = until.num_hours();
    if until < chrono::Duration::hours(1) {
        let minutes = until.num_minutes().max(0);
        return format!("Starts in {minutes} min");
    }
    if hours < 24 {
        return format!("Starts in {hours}h");
    }
    start.format("%a, %b %-d, %-I:%M %p").to_string()
}
