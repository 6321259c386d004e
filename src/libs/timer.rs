//! The single-instance timer session state machine.
//!
//! A session is either `Idle` or `Running`; only one can be active at a
//! time. Duration is always recomputed from the wall-clock start and stop
//! instants, never from an accumulated tick counter, so a paused or skipped
//! elapsed-time display can never corrupt the recorded entry.

use crate::libs::entry::TimeEntryDraft;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{Duration, NaiveDateTime};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    Running {
        start: NaiveDateTime,
        client_id: i64,
        project: String,
        description: Option<String>,
        billable: bool,
    },
}

/// Result of a start request against an already-consistent session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    /// Start while running is a state-guarded no-op, not an error.
    AlreadyRunning,
}

/// Timer session with the last used client/project selection retained
/// across stops, mirroring how the entry form keeps its selection.
#[derive(Debug, Clone)]
pub struct TimerSession {
    pub state: SessionState,
    pub last_client: Option<i64>,
    pub last_project: Option<String>,
}

impl TimerSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            last_client: None,
            last_project: None,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, SessionState::Running { .. })
    }

    /// Starts a session at `now`. Falls back to the retained selection when
    /// client or project are not supplied; a missing client or an empty
    /// project is a validation error reported to the caller, and the session
    /// stays `Idle`.
    pub fn start(
        &mut self,
        now: NaiveDateTime,
        client_id: Option<i64>,
        project: Option<String>,
        description: Option<String>,
        billable: bool,
    ) -> Result<StartOutcome> {
        if self.is_running() {
            return Ok(StartOutcome::AlreadyRunning);
        }

        let client_id = client_id
            .or(self.last_client)
            .ok_or_else(|| msg_error_anyhow!(Message::TimerRequiresClient))?;
        let project = project
            .filter(|p| !p.trim().is_empty())
            .or_else(|| self.last_project.clone())
            .ok_or_else(|| msg_error_anyhow!(Message::TimerRequiresProject))?;

        self.last_client = Some(client_id);
        self.last_project = Some(project.clone());
        self.state = SessionState::Running {
            start: now,
            client_id,
            project,
            description: description.filter(|d| !d.trim().is_empty()),
            billable,
        };
        Ok(StartOutcome::Started)
    }

    /// Stops a running session at `now` and emits the entry draft. The
    /// description is reset while the client/project selection is retained
    /// for the next start. Returns `None` when no session is running.
    pub fn stop(&mut self, now: NaiveDateTime) -> Option<TimeEntryDraft> {
        match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Idle => None,
            SessionState::Running {
                start,
                client_id,
                project,
                description,
                billable,
            } => Some(TimeEntryDraft::new(client_id, &project, start, now, billable).with_description(description)),
        }
    }

    /// Discards a running session without emitting an entry. Returns whether
    /// anything was cancelled.
    pub fn cancel(&mut self) -> bool {
        let was_running = self.is_running();
        self.state = SessionState::Idle;
        was_running
    }

    /// Wall-clock time since the session started; `None` when idle.
    pub fn elapsed(&self, now: NaiveDateTime) -> Option<Duration> {
        match &self.state {
            SessionState::Running { start, .. } => Some(now - *start),
            SessionState::Idle => None,
        }
    }
}

impl Default for TimerSession {
    fn default() -> Self {
        Self::new()
    }
}
