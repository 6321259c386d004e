use crate::db::db::Db;
use crate::libs::client::{validate_client_fields, Client, ClientDraft, ClientKind};
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

pub(crate) const SCHEMA_CLIENTS: &str = "CREATE TABLE IF NOT EXISTS clients (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    kind TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";
const SCHEMA_CLIENT_PROJECTS: &str = "CREATE TABLE IF NOT EXISTS client_projects (
    client_id INTEGER NOT NULL,
    label TEXT NOT NULL,
    PRIMARY KEY (client_id, label),
    FOREIGN KEY (client_id) REFERENCES clients(id) ON DELETE CASCADE
)";
const INSERT_CLIENT: &str = "INSERT INTO clients (name, kind) VALUES (?1, ?2)";
const UPDATE_CLIENT: &str = "UPDATE clients SET name = ?2, kind = ?3 WHERE id = ?1";
const DELETE_CLIENT: &str = "DELETE FROM clients WHERE id = ?1";
const DELETE_CLIENT_ENTRIES: &str = "DELETE FROM time_entries WHERE client_id = ?1";
const DELETE_CLIENT_PROJECTS: &str = "DELETE FROM client_projects WHERE client_id = ?1";
const INSERT_PROJECT: &str = "INSERT INTO client_projects (client_id, label) VALUES (?1, ?2)";
const SELECT_ALL_CLIENTS: &str = "SELECT id, name, kind FROM clients ORDER BY name";
const SELECT_CLIENT_BY_ID: &str = "SELECT id, name, kind FROM clients WHERE id = ?1";
const SELECT_PROJECTS: &str = "SELECT label FROM client_projects WHERE client_id = ?1 ORDER BY rowid";

pub struct Clients {
    pub conn: Connection,
}

impl Clients {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_CLIENTS, [])?;
        db.conn.execute(SCHEMA_CLIENT_PROJECTS, [])?;
        // Cascade target must exist even when entries were never touched.
        db.conn.execute(super::entries::SCHEMA_TIME_ENTRIES, [])?;
        Ok(Self { conn: db.conn })
    }

    pub fn insert(&mut self, draft: &ClientDraft) -> Result<Client> {
        draft.validate()?;

        let tx = self.conn.transaction()?;
        tx.execute(INSERT_CLIENT, params![draft.name, draft.kind.as_str()])?;
        let id = tx.last_insert_rowid();
        for label in &draft.projects {
            tx.execute(INSERT_PROJECT, params![id, label])?;
        }
        tx.commit()?;

        Ok(Client {
            id,
            name: draft.name.clone(),
            kind: draft.kind,
            projects: draft.projects.clone(),
        })
    }

    /// Full-record replacement including the project-label set. Returns
    /// `None` when the id no longer exists.
    pub fn update(&mut self, client: &Client) -> Result<Option<Client>> {
        validate_client_fields(&client.name, &client.projects)?;

        let tx = self.conn.transaction()?;
        let affected = tx.execute(UPDATE_CLIENT, params![client.id, client.name, client.kind.as_str()])?;
        if affected == 0 {
            return Ok(None);
        }
        tx.execute(DELETE_CLIENT_PROJECTS, params![client.id])?;
        for label in &client.projects {
            tx.execute(INSERT_PROJECT, params![client.id, label])?;
        }
        tx.commit()?;

        Ok(Some(client.clone()))
    }

    /// Deletes a client and cascades to every time entry referencing it,
    /// all inside one transaction.
    pub fn delete(&mut self, id: i64) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute(DELETE_CLIENT_ENTRIES, params![id])?;
        tx.execute(DELETE_CLIENT_PROJECTS, params![id])?;
        let affected = tx.execute(DELETE_CLIENT, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::ClientNotFound(id)));
        }
        tx.commit()?;
        Ok(())
    }

    pub fn get(&mut self, id: i64) -> Result<Option<Client>> {
        let row = self
            .conn
            .query_row(SELECT_CLIENT_BY_ID, params![id], |row| {
                Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?))
            })
            .optional()?;

        match row {
            None => Ok(None),
            Some((id, name, kind)) => {
                let projects = load_projects(&self.conn, id)?;
                Ok(Some(Client {
                    id,
                    name,
                    kind: ClientKind::parse(&kind),
                    projects,
                }))
            }
        }
    }

    pub fn fetch_all(&mut self) -> Result<Vec<Client>> {
        let rows = {
            let mut stmt = self.conn.prepare(SELECT_ALL_CLIENTS)?;
            let client_iter = stmt.query_map([], |row| {
                Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?))
            })?;

            let mut rows = Vec::new();
            for client in client_iter {
                rows.push(client?);
            }
            rows
        };

        let mut clients = Vec::new();
        for (id, name, kind) in rows {
            let projects = load_projects(&self.conn, id)?;
            clients.push(Client {
                id,
                name,
                kind: ClientKind::parse(&kind),
                projects,
            });
        }
        Ok(clients)
    }
}

fn load_projects(conn: &Connection, client_id: i64) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(SELECT_PROJECTS)?;
    let label_iter = stmt.query_map(params![client_id], |row| row.get(0))?;

    let mut labels = Vec::new();
    for label in label_iter {
        labels.push(label?);
    }
    Ok(labels)
}
