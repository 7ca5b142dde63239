//! Day-note actions layered over a [`NoteBackend`].

use chrono::NaiveDate;

use super::{NoteBackend, NoteError, NoteResult};
use crate::models::note::{toggle_mark, Note, DONE_MARK, FLAG_MARK};
use crate::utils::date::parse_date_key;

/// Status markers a note can carry at its front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMark {
    Done,
    Flagged,
}

impl StatusMark {
    pub fn glyph(self) -> &'static str {
        match self {
            StatusMark::Done => DONE_MARK,
            StatusMark::Flagged => FLAG_MARK,
        }
    }

    fn other(self) -> Self {
        match self {
            StatusMark::Done => StatusMark::Flagged,
            StatusMark::Flagged => StatusMark::Done,
        }
    }
}

/// Pending edit of an existing note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEdit {
    pub id: i64,
    pub original_date: String,
    pub date: String,
    pub content: String,
}

impl NoteEdit {
    pub fn from_note(note: &Note) -> Self {
        Self {
            id: note.id,
            original_date: note.date.clone(),
            date: note.date.clone(),
            content: note.content.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditOutcome {
    /// Date the note lives on after the edit
    pub date: NaiveDate,
    /// The note was recreated under a new id
    pub moved: bool,
}

/// Add a note to `date`. Blank input is ignored and yields `None`.
pub fn add_note(backend: &dyn NoteBackend, date: &str, text: &str) -> NoteResult<Option<i64>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    backend.create(date, text).map(Some)
}

/// Apply an edit. Content is trimmed and must not end up empty; a changed
/// date moves the note by deleting and recreating it.
pub fn edit_note(backend: &dyn NoteBackend, edit: &NoteEdit) -> NoteResult<EditOutcome> {
    let content = edit.content.trim();
    if content.is_empty() {
        return Err(NoteError::EmptyContent);
    }
    let date =
        parse_date_key(&edit.date).ok_or_else(|| NoteError::InvalidDate(edit.date.clone()))?;

    let moved = edit.date != edit.original_date;
    if moved {
        backend.delete(edit.id)?;
        backend.create(&edit.date, content)?;
    } else {
        backend.update(edit.id, content)?;
    }

    Ok(EditOutcome { date, moved })
}

pub fn delete_note(backend: &dyn NoteBackend, id: i64) -> NoteResult<()> {
    backend.delete(id)
}

/// Toggle `mark` on the note and persist the new content.
pub fn toggle_status(backend: &dyn NoteBackend, note: &Note, mark: StatusMark) -> NoteResult<String> {
    let content = toggle_mark(&note.content, mark.glyph(), mark.other().glyph());
    backend.update(note.id, &content)?;
    Ok(content)
}
