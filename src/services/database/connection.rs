use anyhow::{Context, Result};
use rusqlite::Connection;

use super::schema;

/// Thin wrapper around the notes SQLite connection.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (or creates) the notes database at `path`. Pass `":memory:"`
    /// for a throwaway store.
    pub fn new(path: &str) -> Result<Self> {
        let conn =
            Connection::open(path).context(format!("Failed to open database at {}", path))?;

        Ok(Self { conn })
    }

    /// Opens the database and makes sure the schema exists.
    pub fn open_initialized(path: &str) -> Result<Self> {
        let db = Self::new(path)?;
        db.initialize_schema()?;
        Ok(db)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Creates the notes table and its index if missing.
    pub fn initialize_schema(&self) -> Result<()> {
        schema::initialize_schema(self.connection())
    }
}
