use crate::db::db::Db;
use crate::libs::entry::{derive_duration, TimeEntry, TimeEntryDraft};
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_error_anyhow};
use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension, Row};

// No foreign key on client_id: an entry may outlive its client (a timer
// stopped after the client was deleted still records), and reports degrade
// the name lookup to a placeholder instead of failing.
pub(crate) const SCHEMA_TIME_ENTRIES: &str = "CREATE TABLE IF NOT EXISTS time_entries (
    id INTEGER PRIMARY KEY,
    client_id INTEGER NOT NULL,
    project TEXT NOT NULL,
    description TEXT,
    start TIMESTAMP NOT NULL,
    end TIMESTAMP NOT NULL,
    duration INTEGER NOT NULL,
    billable INTEGER NOT NULL DEFAULT 1
)";
const INSERT_ENTRY: &str =
    "INSERT INTO time_entries (client_id, project, description, start, end, duration, billable) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const UPDATE_ENTRY: &str =
    "UPDATE time_entries SET client_id = ?2, project = ?3, description = ?4, start = ?5, end = ?6, duration = ?7, billable = ?8 WHERE id = ?1";
const DELETE_ENTRY: &str = "DELETE FROM time_entries WHERE id = ?1";
const SELECT_ENTRIES: &str = "SELECT id, client_id, project, description, start, end, duration, billable FROM time_entries ORDER BY start";
const SELECT_ENTRY_BY_ID: &str = "SELECT id, client_id, project, description, start, end, duration, billable FROM time_entries WHERE id = ?1";

pub struct Entries {
    pub conn: Connection,
}

impl Entries {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(super::clients::SCHEMA_CLIENTS, [])?;
        db.conn.execute(SCHEMA_TIME_ENTRIES, [])?;
        Ok(Self { conn: db.conn })
    }

    /// Inserts a new entry. The stored duration is always derived from the
    /// start/end instants here, never taken from the caller.
    pub fn insert(&mut self, draft: &TimeEntryDraft) -> Result<TimeEntry> {
        draft.validate()?;
        let duration = draft.duration_min();

        self.conn.execute(
            INSERT_ENTRY,
            params![draft.client_id, draft.project, draft.description, draft.start, draft.end, duration, draft.billable],
        )?;

        Ok(TimeEntry {
            id: self.conn.last_insert_rowid(),
            client_id: draft.client_id,
            project: draft.project.clone(),
            description: draft.description.clone(),
            start: draft.start,
            end: draft.end,
            duration_min: duration,
            billable: draft.billable,
        })
    }

    /// Full-record replacement. Returns `None` when the id no longer exists.
    /// The duration is recomputed so the stored invariant holds regardless
    /// of what the caller put in `duration_min`.
    pub fn update(&mut self, entry: &TimeEntry) -> Result<Option<TimeEntry>> {
        if entry.end <= entry.start {
            msg_bail_anyhow!(Message::EndBeforeStart);
        }
        let duration = derive_duration(entry.start, entry.end);

        let affected = self.conn.execute(
            UPDATE_ENTRY,
            params![entry.id, entry.client_id, entry.project, entry.description, entry.start, entry.end, duration, entry.billable],
        )?;
        if affected == 0 {
            return Ok(None);
        }

        Ok(Some(TimeEntry {
            duration_min: duration,
            ..entry.clone()
        }))
    }

    pub fn delete(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute(DELETE_ENTRY, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::EntryNotFound(id)));
        }
        Ok(())
    }

    pub fn get(&mut self, id: i64) -> Result<Option<TimeEntry>> {
        self.conn
            .query_row(SELECT_ENTRY_BY_ID, params![id], map_entry_row)
            .optional()
            .map_err(Into::into)
    }

    /// All entries in chronological order; range filtering happens in the
    /// reporting core, not in SQL.
    pub fn fetch_all(&mut self) -> Result<Vec<TimeEntry>> {
        let mut stmt = self.conn.prepare(SELECT_ENTRIES)?;
        let entry_iter = stmt.query_map([], map_entry_row)?;

        let mut entries = Vec::new();
        for entry in entry_iter {
            entries.push(entry?);
        }
        Ok(entries)
    }
}

fn map_entry_row(row: &Row) -> rusqlite::Result<TimeEntry> {
    Ok(TimeEntry {
        id: row.get(0)?,
        client_id: row.get(1)?,
        project: row.get(2)?,
        description: row.get(3)?,
        start: row.get::<_, NaiveDateTime>(4)?,
        end: row.get::<_, NaiveDateTime>(5)?,
        duration_min: row.get(6)?,
        billable: row.get(7)?,
    })
}
