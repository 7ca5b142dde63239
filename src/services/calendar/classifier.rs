//! Per-day note classification.

use crate::models::note::Note;

/// One day's notes split into display groups, each in display order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DayNotes<'a> {
    /// Notes drawn as text lines (or dots once the line cap is reached)
    pub plain: Vec<&'a Note>,
    /// `#`/`@` notes drawn as glyphs
    pub tagged: Vec<&'a Note>,
}

/// Select the notes of `date` and split them into plain and tagged groups.
///
/// Both groups are ordered by descending raw content. The sort is stable, so
/// notes with identical content keep their input order.
pub fn classify_day<'a>(notes: &'a [Note], date: &str) -> DayNotes<'a> {
    let mut day = DayNotes::default();
    for note in notes.iter().filter(|note| note.date == date) {
        if note.category().is_tagged() {
            day.tagged.push(note);
        } else {
            day.plain.push(note);
        }
    }
    sort_for_display(&mut day.plain);
    sort_for_display(&mut day.tagged);
    day
}

/// Reverse lexicographic order of the raw content.
pub fn sort_for_display(notes: &mut [&Note]) {
    notes.sort_by(|a, b| b.content.cmp(&a.content));
}
