use crate::db::db::Db;
use crate::libs::timer::{SessionState, TimerSession};
use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension};

// Single-row tables: one timer session, one retained selection.
const SCHEMA_TIMER_SESSION: &str = "CREATE TABLE IF NOT EXISTS timer_session (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    client_id INTEGER NOT NULL,
    project TEXT NOT NULL,
    description TEXT,
    billable INTEGER NOT NULL,
    start TIMESTAMP NOT NULL
)";
const SCHEMA_TIMER_SELECTION: &str = "CREATE TABLE IF NOT EXISTS timer_selection (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    client_id INTEGER,
    project TEXT
)";
const SELECT_SESSION: &str = "SELECT client_id, project, description, billable, start FROM timer_session WHERE id = 1";
const REPLACE_SESSION: &str =
    "INSERT OR REPLACE INTO timer_session (id, client_id, project, description, billable, start) VALUES (1, ?1, ?2, ?3, ?4, ?5)";
const CLEAR_SESSION: &str = "DELETE FROM timer_session";
const SELECT_SELECTION: &str = "SELECT client_id, project FROM timer_selection WHERE id = 1";
const REPLACE_SELECTION: &str = "INSERT OR REPLACE INTO timer_selection (id, client_id, project) VALUES (1, ?1, ?2)";

/// Persistence for the timer state machine, so a running session survives
/// process restarts.
pub struct Sessions {
    pub conn: Connection,
}

impl Sessions {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_TIMER_SESSION, [])?;
        db.conn.execute(SCHEMA_TIMER_SELECTION, [])?;
        Ok(Self { conn: db.conn })
    }

    pub fn load(&mut self) -> Result<TimerSession> {
        let mut session = TimerSession::new();

        let selection = self
            .conn
            .query_row(SELECT_SELECTION, [], |row| {
                Ok((row.get::<_, Option<i64>>(0)?, row.get::<_, Option<String>>(1)?))
            })
            .optional()?;
        if let Some((client, project)) = selection {
            session.last_client = client;
            session.last_project = project;
        }

        let running = self
            .conn
            .query_row(SELECT_SESSION, [], |row| {
                Ok(SessionState::Running {
                    client_id: row.get(0)?,
                    project: row.get(1)?,
                    description: row.get(2)?,
                    billable: row.get(3)?,
                    start: row.get::<_, NaiveDateTime>(4)?,
                })
            })
            .optional()?;
        if let Some(state) = running {
            session.state = state;
        }

        Ok(session)
    }

    pub fn store(&mut self, session: &TimerSession) -> Result<()> {
        match &session.state {
            SessionState::Running {
                start,
                client_id,
                project,
                description,
                billable,
            } => {
                self.conn
                    .execute(REPLACE_SESSION, params![client_id, project, description, billable, start])?;
            }
            SessionState::Idle => {
                self.conn.execute(CLEAR_SESSION, [])?;
            }
        }

        self.conn
            .execute(REPLACE_SELECTION, params![session.last_client, session.last_project])?;
        Ok(())
    }
}
