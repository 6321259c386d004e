//! Duration aggregation for filtered time entries.
//!
//! Groups entry durations by client and by project label, preserving
//! first-encounter order so that ties in the descending duration sort stay
//! deterministic. The transform is pure and stateless; callers re-run it in
//! full whenever the filtered set changes.

use crate::libs::client::Client;
use crate::libs::entry::TimeEntry;
use crate::libs::messages::Message;

/// Summed minutes for one client, with its resolved display name.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientTotal {
    pub client_id: i64,
    pub name: String,
    pub minutes: i64,
}

/// Summed minutes for one project label.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectTotal {
    pub project: String,
    pub minutes: i64,
}

/// Aggregated report figures for one filtered entry set.
#[derive(Debug, Clone)]
pub struct Summary {
    pub total_minutes: i64,
    pub clients: Vec<ClientTotal>,
    pub projects: Vec<ProjectTotal>,
}

/// Resolves a client id to its display name. A lookup miss degrades to the
/// literal "Unknown Client" placeholder, never an error.
pub fn client_name(clients: &[Client], client_id: i64) -> String {
    clients
        .iter()
        .find(|c| c.id == client_id)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| Message::UnknownClientPlaceholder.to_string())
}

/// Computes the total duration and the per-client / per-project breakdowns
/// for an already-filtered entry set. An empty input yields a zero total and
/// empty breakdowns.
///
/// Both breakdowns are sorted descending by summed minutes; the sort is
/// stable, so groups with equal totals keep the order in which they were
/// first encountered.
pub fn aggregate(entries: &[TimeEntry], clients: &[Client]) -> Summary {
    let mut total_minutes = 0;
    let mut client_totals: Vec<ClientTotal> = Vec::new();
    let mut project_totals: Vec<ProjectTotal> = Vec::new();

    for entry in entries {
        total_minutes += entry.duration_min;

        match client_totals.iter_mut().find(|t| t.client_id == entry.client_id) {
            Some(total) => total.minutes += entry.duration_min,
            None => client_totals.push(ClientTotal {
                client_id: entry.client_id,
                name: client_name(clients, entry.client_id),
                minutes: entry.duration_min,
            }),
        }

        match project_totals.iter_mut().find(|t| t.project == entry.project) {
            Some(total) => total.minutes += entry.duration_min,
            None => project_totals.push(ProjectTotal {
                project: entry.project.clone(),
                minutes: entry.duration_min,
            }),
        }
    }

    client_totals.sort_by(|a, b| b.minutes.cmp(&a.minutes));
    project_totals.sort_by(|a, b| b.minutes.cmp(&a.minutes));

    Summary {
        total_minutes,
        clients: client_totals,
        projects: project_totals,
    }
}

/// Share of the total for one group, in percent. Returns `None` when the
/// total is zero; callers must guard before display instead of rendering
/// infinity or NaN.
pub fn percentage(minutes: i64, total_minutes: i64) -> Option<f64> {
    if total_minutes == 0 {
        None
    } else {
        Some(minutes as f64 / total_minutes as f64 * 100.0)
    }
}
