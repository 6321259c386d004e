//! Time-entry filtering for the reporting view.
//!
//! Filtering is a pure, synchronous transform over a caller-supplied entry
//! set; it holds no state and must be re-run in full whenever the entries or
//! the criteria change.

use crate::libs::entry::TimeEntry;
use chrono::NaiveDateTime;

/// Client criterion: everything, or one client id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClientSelector {
    #[default]
    All,
    Id(i64),
}

/// Project criterion: everything, or one exact label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProjectSelector {
    #[default]
    All,
    Label(String),
}

/// Filter criteria for a report: client, project, and an inclusive
/// start-instant range.
#[derive(Debug, Clone)]
pub struct EntryQuery {
    pub client: ClientSelector,
    pub project: ProjectSelector,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl EntryQuery {
    pub fn new(client: ClientSelector, project: ProjectSelector, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { client, project, start, end }
    }

    /// An entry matches when its start instant falls inside the range and
    /// both selectors accept it. Project labels compare as exact strings.
    pub fn matches(&self, entry: &TimeEntry) -> bool {
        let in_range = self.start <= entry.start && entry.start <= self.end;
        let client_match = match self.client {
            ClientSelector::All => true,
            ClientSelector::Id(id) => entry.client_id == id,
        };
        let project_match = match &self.project {
            ProjectSelector::All => true,
            ProjectSelector::Label(label) => &entry.project == label,
        };
        in_range && client_match && project_match
    }
}

/// Returns the matching subset, most recent start first. The sort is stable,
/// so entries with equal start instants keep their original relative order.
/// An empty input or an empty match yields an empty vec, never an error.
pub fn filter_entries(entries: &[TimeEntry], query: &EntryQuery) -> Vec<TimeEntry> {
    let mut matched: Vec<TimeEntry> = entries.iter().filter(|e| query.matches(e)).cloned().collect();
    matched.sort_by(|a, b| b.start.cmp(&a.start));
    matched
}
