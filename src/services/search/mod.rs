//! Full-text search across every stored note.

use crate::models::note::{display_content, Note, NOTEPAD_KEY};
use crate::utils::date::parse_date_key;
use crate::services::calendar::CalendarCursor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub id: i64,
    pub date: String,
    /// Content with the important marker removed
    pub content: String,
}

impl SearchHit {
    /// Month to show when the hit is selected.
    pub fn cursor(&self) -> Option<CalendarCursor> {
        parse_date_key(&self.date).map(CalendarCursor::from_date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    /// Nothing typed yet
    Prompt,
    NoMatches,
    Results(Vec<SearchHit>),
}

impl SearchState {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SearchState::Prompt => Some("Enter a search term"),
            SearchState::NoMatches => Some("No matching notes"),
            SearchState::Results(_) => None,
        }
    }
}

/// Case-insensitive substring search. The query is trimmed first and the
/// notepad record never matches.
pub fn search_notes(notes: &[Note], query: &str) -> SearchState {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return SearchState::Prompt;
    }

    let mut matches: Vec<&Note> = notes
        .iter()
        .filter(|note| note.date != NOTEPAD_KEY)
        .filter(|note| note.content.to_lowercase().contains(&query))
        .collect();

    if matches.is_empty() {
        return SearchState::NoMatches;
    }

    matches.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
    SearchState::Results(
        matches
            .into_iter()
            .map(|note| SearchHit {
                id: note.id,
                date: note.date.clone(),
                content: display_content(&note.content).to_string(),
            })
            .collect(),
    )
}
