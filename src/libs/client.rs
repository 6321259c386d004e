use crate::libs::messages::Message;
use crate::msg_bail_anyhow;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Billing entity category. Stored as a lowercase string in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientKind {
    Business,
    Individual,
}

impl ClientKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientKind::Business => "business",
            ClientKind::Individual => "individual",
        }
    }

    /// Unrecognized values fall back to business, matching how records
    /// without an explicit type were treated historically.
    pub fn parse(value: &str) -> Self {
        match value {
            "individual" => ClientKind::Individual,
            _ => ClientKind::Business,
        }
    }
}

impl fmt::Display for ClientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A billing entity owning a set of project-type labels.
///
/// Project labels are case-sensitive exact strings, unique within the
/// client; their order carries no meaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub kind: ClientKind,
    pub projects: Vec<String>,
}

/// Payload for creating a client; the id is assigned by the store.
#[derive(Debug, Clone)]
pub struct ClientDraft {
    pub name: String,
    pub kind: ClientKind,
    pub projects: Vec<String>,
}

impl ClientDraft {
    pub fn new(name: &str, kind: ClientKind, projects: Vec<String>) -> Self {
        Self {
            name: name.trim().to_string(),
            kind,
            projects,
        }
    }

    /// Checks the client invariants: non-empty name, at least one project
    /// label, no duplicate labels (exact string comparison, no normalization).
    pub fn validate(&self) -> Result<()> {
        validate_client_fields(&self.name, &self.projects)
    }
}

pub fn validate_client_fields(name: &str, projects: &[String]) -> Result<()> {
    if name.trim().is_empty() {
        msg_bail_anyhow!(Message::ClientNameRequired);
    }
    if projects.is_empty() {
        msg_bail_anyhow!(Message::ClientProjectsRequired);
    }
    for (i, label) in projects.iter().enumerate() {
        if projects[..i].contains(label) {
            msg_bail_anyhow!(Message::DuplicateProjectLabel(label.clone()));
        }
    }
    Ok(())
}
