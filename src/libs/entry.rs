use crate::libs::messages::Message;
use crate::msg_bail_anyhow;
use anyhow::Result;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One record of work against a client and project type.
///
/// `duration_min` is stored redundantly and must be kept consistent with the
/// start/end instants by every writer; use [`derive_duration`] rather than
/// trusting caller-supplied values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: i64,
    pub client_id: i64,
    pub project: String,
    pub description: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration_min: i64,
    pub billable: bool,
}

/// Payload for creating a time entry; id and duration are assigned by the store.
#[derive(Debug, Clone)]
pub struct TimeEntryDraft {
    pub client_id: i64,
    pub project: String,
    pub description: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub billable: bool,
}

impl TimeEntryDraft {
    pub fn new(client_id: i64, project: &str, start: NaiveDateTime, end: NaiveDateTime, billable: bool) -> Self {
        Self {
            client_id,
            project: project.to_string(),
            description: None,
            start,
            end,
            billable,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description.filter(|d| !d.trim().is_empty());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.end <= self.start {
            msg_bail_anyhow!(Message::EndBeforeStart);
        }
        Ok(())
    }

    pub fn duration_min(&self) -> i64 {
        derive_duration(self.start, self.end)
    }
}

/// Whole minutes between two instants, truncated. Sub-minute remainders are
/// dropped, so a 90.9-minute interval records as 90 minutes.
pub fn derive_duration(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_minutes()
}
