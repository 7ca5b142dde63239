//! Note storage contract and its SQLite implementation.

mod editor;
mod service;

pub use editor::{add_note, delete_note, edit_note, toggle_status, EditOutcome, NoteEdit, StatusMark};
pub use service::NoteService;

use crate::models::note::Note;

#[derive(thiserror::Error, Debug)]
pub enum NoteError {
    #[error("Content is empty")]
    EmptyContent,
    #[error("Note {0} not found")]
    NotFound(i64),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

pub type NoteResult<T> = std::result::Result<T, NoteError>;

/// Operations the front-end needs from a note store.
///
/// Dates are `YYYY-MM-DD` keys, except for singleton records such as the
/// notepad which use a reserved key.
#[cfg_attr(test, mockall::automock)]
pub trait NoteBackend {
    /// Notes whose date starts with `month_key` (`YYYY-MM`), in storage order.
    fn list_month(&self, month_key: &str) -> NoteResult<Vec<Note>>;

    /// Every note, ordered by date then id.
    fn list_all(&self) -> NoteResult<Vec<Note>>;

    /// First note stored under `date`, or an empty placeholder with id 0.
    fn get_by_date(&self, date: &str) -> NoteResult<Note>;

    fn create(&self, date: &str, content: &str) -> NoteResult<i64>;

    fn update(&self, id: i64, content: &str) -> NoteResult<()>;

    fn delete(&self, id: i64) -> NoteResult<()>;

    /// Overwrite the record stored under `date`, creating it if missing.
    /// Empty content is allowed here.
    fn save_or_replace(&self, date: &str, content: &str) -> NoteResult<()>;
}
