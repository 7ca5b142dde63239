//! SQLite-backed note store.

use anyhow::Context;
use rusqlite::{params, Connection, Row};

use super::{NoteBackend, NoteError, NoteResult};
use crate::models::note::Note;

/// Service for note CRUD over a borrowed connection.
pub struct NoteService<'a> {
    conn: &'a Connection,
}

impl<'a> NoteService<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn row_to_note(row: &Row) -> rusqlite::Result<Note> {
        Ok(Note {
            id: row.get(0)?,
            date: row.get(1)?,
            content: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        })
    }

    fn query_notes(&self, sql: &str, args: &[&dyn rusqlite::ToSql]) -> NoteResult<Vec<Note>> {
        let mut stmt = self.conn.prepare(sql).context("Failed to prepare note query")?;
        let notes = stmt
            .query_map(args, Self::row_to_note)
            .context("Failed to query notes")?;

        Ok(notes
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read notes")?)
    }
}

impl NoteBackend for NoteService<'_> {
    fn list_month(&self, month_key: &str) -> NoteResult<Vec<Note>> {
        let pattern = format!("{}%", month_key);
        self.query_notes(
            "SELECT id, date, content FROM notes WHERE date LIKE ?1",
            &[&pattern],
        )
    }

    fn list_all(&self) -> NoteResult<Vec<Note>> {
        self.query_notes(
            "SELECT id, date, content FROM notes ORDER BY date ASC, id ASC",
            &[],
        )
    }

    fn get_by_date(&self, date: &str) -> NoteResult<Note> {
        let result = self.conn.query_row(
            "SELECT id, date, content FROM notes WHERE date = ?1 ORDER BY id ASC LIMIT 1",
            params![date],
            Self::row_to_note,
        );

        match result {
            Ok(note) => Ok(note),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(Note::empty_for(date)),
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("Failed to load note for {}", date))
                .into()),
        }
    }

    fn create(&self, date: &str, content: &str) -> NoteResult<i64> {
        if content.is_empty() {
            return Err(NoteError::EmptyContent);
        }

        self.conn
            .execute(
                "INSERT INTO notes (date, content) VALUES (?1, ?2)",
                params![date, content],
            )
            .context("Failed to insert note")?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update(&self, id: i64, content: &str) -> NoteResult<()> {
        if content.is_empty() {
            return Err(NoteError::EmptyContent);
        }

        let changed = self
            .conn
            .execute(
                "UPDATE notes SET content = ?1 WHERE id = ?2",
                params![content, id],
            )
            .context("Failed to update note")?;

        if changed == 0 {
            return Err(NoteError::NotFound(id));
        }
        Ok(())
    }

    fn delete(&self, id: i64) -> NoteResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1", params![id])
            .context("Failed to delete note")?;

        if changed == 0 {
            return Err(NoteError::NotFound(id));
        }
        Ok(())
    }

    fn save_or_replace(&self, date: &str, content: &str) -> NoteResult<()> {
        let existing = self.get_by_date(date)?;
        if existing.id != 0 {
            self.conn
                .execute(
                    "UPDATE notes SET content = ?1 WHERE id = ?2",
                    params![content, existing.id],
                )
                .context("Failed to replace note")?;
        } else {
            self.conn
                .execute(
                    "INSERT INTO notes (date, content) VALUES (?1, ?2)",
                    params![date, content],
                )
                .context("Failed to insert note")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::note::NOTEPAD_KEY;
    use crate::services::database::Database;
    use pretty_assertions::assert_eq;

    fn setup_test_db() -> Database {
        let db = Database::new(":memory:").unwrap();
        db.initialize_schema().unwrap();
        db
    }

    #[test]
    fn test_create_and_list_month() {
        let db = setup_test_db();
        let service = NoteService::new(db.connection());

        let id = service.create("2025-02-14", "Valentine").unwrap();
        service.create("2025-02-03", "dentist").unwrap();
        service.create("2025-03-01", "March").unwrap();

        let february = service.list_month("2025-02").unwrap();
        assert_eq!(february.len(), 2);
        assert_eq!(february[0], Note::new(id, "2025-02-14", "Valentine"));
    }

    #[test]
    fn test_month_listing_excludes_notepad() {
        let db = setup_test_db();
        let service = NoteService::new(db.connection());
        service.save_or_replace(NOTEPAD_KEY, "scratch").unwrap();

        assert!(service.list_month("2025-02").unwrap().is_empty());
    }

    #[test]
    fn test_list_all_sorted_by_date_then_id() {
        let db = setup_test_db();
        let service = NoteService::new(db.connection());

        let late = service.create("2025-03-01", "late").unwrap();
        let first = service.create("2025-01-05", "first").unwrap();
        let second = service.create("2025-01-05", "second").unwrap();

        let ids: Vec<i64> = service.list_all().unwrap().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![first, second, late]);
    }

    #[test]
    fn test_create_rejects_empty_content() {
        let db = setup_test_db();
        let service = NoteService::new(db.connection());

        let result = service.create("2025-02-14", "");
        assert!(matches!(result, Err(NoteError::EmptyContent)));
        assert!(service.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_update_content() {
        let db = setup_test_db();
        let service = NoteService::new(db.connection());

        let id = service.create("2025-02-14", "draft").unwrap();
        service.update(id, "final").unwrap();

        assert_eq!(service.list_month("2025-02").unwrap()[0].content, "final");
    }

    #[test]
    fn test_update_missing_note() {
        let db = setup_test_db();
        let service = NoteService::new(db.connection());

        assert!(matches!(service.update(42, "x"), Err(NoteError::NotFound(42))));
        assert!(matches!(service.update(42, ""), Err(NoteError::EmptyContent)));
    }

    #[test]
    fn test_delete() {
        let db = setup_test_db();
        let service = NoteService::new(db.connection());

        let id = service.create("2025-02-14", "gone").unwrap();
        service.delete(id).unwrap();

        assert!(service.list_all().unwrap().is_empty());
        assert!(matches!(service.delete(id), Err(NoteError::NotFound(_))));
    }

    #[test]
    fn test_get_by_date_missing_returns_placeholder() {
        let db = setup_test_db();
        let service = NoteService::new(db.connection());

        let note = service.get_by_date(NOTEPAD_KEY).unwrap();
        assert_eq!(note, Note::empty_for(NOTEPAD_KEY));
    }

    #[test]
    fn test_save_or_replace_keeps_single_row() {
        let db = setup_test_db();
        let service = NoteService::new(db.connection());

        service.save_or_replace(NOTEPAD_KEY, "one").unwrap();
        service.save_or_replace(NOTEPAD_KEY, "two").unwrap();
        service.save_or_replace(NOTEPAD_KEY, "").unwrap();

        let count: i64 = db
            .connection()
            .query_row("SELECT COUNT(*) FROM notes WHERE date = ?1", params![NOTEPAD_KEY], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(service.get_by_date(NOTEPAD_KEY).unwrap().content, "");
    }

    #[test]
    fn test_null_content_reads_as_empty() {
        let db = setup_test_db();
        db.connection()
            .execute("INSERT INTO notes (date, content) VALUES ('2025-02-14', NULL)", [])
            .unwrap();
        let service = NoteService::new(db.connection());

        assert_eq!(service.list_month("2025-02").unwrap()[0].content, "");
    }
}
