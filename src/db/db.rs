use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "lextrack.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let conn = Connection::open(db_file_path)?;

        // Needed per connection for the client -> project label cascade.
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        Ok(Db { conn })
    }
}
