use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn initialize_schema(conn: &Connection) -> Result<()> {
    create_notes_table(conn)?;
    create_notes_index(conn)?;
    Ok(())
}

fn create_notes_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS notes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL,
            content TEXT
        )",
        [],
    )
    .context("Failed to create notes table")?;

    Ok(())
}

// Month listing filters with a `LIKE 'YYYY-MM%'` prefix.
fn create_notes_index(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_notes_date ON notes(date)",
        [],
    )
    .context("Failed to create notes date index")?;

    Ok(())
}
