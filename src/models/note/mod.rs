// Note module
// Day notes and the prefix conventions the calendar interprets

use serde::{Deserialize, Serialize};

/// Reserved date key of the single free-text notepad note.
pub const NOTEPAD_KEY: &str = "NOTEPAD";

/// Marker prefix for notes rendered in the alert colour.
pub const IMPORTANT_PREFIX: char = '!';

/// Prefix of a tagged note shown as a tag glyph.
pub const TAG_PREFIX: char = '#';

/// Prefix of a tagged note shown as a code glyph.
pub const CODE_PREFIX: char = '@';

/// Completion marker toggled from the day-note modal.
pub const DONE_MARK: &str = "✅";

/// Flag marker toggled from the day-note modal.
pub const FLAG_MARK: &str = "🚩";

/// A note attached to a calendar day (or to the notepad sentinel key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    /// `YYYY-MM-DD`, or [`NOTEPAD_KEY`] for the notepad note
    pub date: String,
    pub content: String,
}

impl Note {
    pub fn new(id: i64, date: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            date: date.into(),
            content: content.into(),
        }
    }

    /// Placeholder returned when a key has no stored note yet.
    pub fn empty_for(date: impl Into<String>) -> Self {
        Self::new(0, date, String::new())
    }

    pub fn is_notepad(&self) -> bool {
        self.date == NOTEPAD_KEY
    }

    pub fn category(&self) -> NoteCategory {
        NoteCategory::of(&self.content)
    }
}

/// Kind of glyph a tagged note is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `#`-prefixed
    Hash,
    /// `@`-prefixed
    Code,
}

/// Display category decided by the raw content prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteCategory {
    Plain,
    Tagged(TagKind),
}

impl NoteCategory {
    /// Classify raw note content. The tag check looks at the first character
    /// only, so `"!#x"` is plain and `"#!x"` is tagged.
    pub fn of(content: &str) -> Self {
        match content.chars().next() {
            Some(TAG_PREFIX) => NoteCategory::Tagged(TagKind::Hash),
            Some(CODE_PREFIX) => NoteCategory::Tagged(TagKind::Code),
            _ => NoteCategory::Plain,
        }
    }

    pub fn is_tagged(self) -> bool {
        matches!(self, NoteCategory::Tagged(_))
    }
}

/// Result of stripping the important marker off a plain note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportantMemo<'a> {
    pub is_important: bool,
    pub content: &'a str,
}

/// Split a leading `!` off note content.
pub fn parse_important_memo(content: &str) -> ImportantMemo<'_> {
    match content.strip_prefix(IMPORTANT_PREFIX) {
        Some(rest) => ImportantMemo {
            is_important: true,
            content: rest,
        },
        None => ImportantMemo {
            is_important: false,
            content,
        },
    }
}

/// Content as shown in search results: the important marker is hidden.
pub fn display_content(content: &str) -> &str {
    content.strip_prefix(IMPORTANT_PREFIX).unwrap_or(content)
}

/// Toggle a status marker at the front of a note.
///
/// Pressing `mark` when it is already present removes it, pressing it while
/// `other` is present swaps the two, otherwise `mark` is prepended.
pub fn toggle_mark(content: &str, mark: &str, other: &str) -> String {
    if let Some(rest) = content.strip_prefix(mark) {
        rest.to_string()
    } else if let Some(rest) = content.strip_prefix(other) {
        format!("{}{}", mark, rest)
    } else {
        format!("{}{}", mark, content)
    }
}
