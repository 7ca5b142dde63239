// Test fixtures - reusable test data
// Provides consistent notes, canvases and databases across the test files

#![allow(dead_code)]

use std::collections::HashMap;

use chrono::NaiveDate;
use tempfile::TempDir;
use ucalendar::models::note::Note;
use ucalendar::services::calendar::geometry::Size;
use ucalendar::services::calendar::layout::FontSpec;
use ucalendar::services::database::Database;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Feb 14, 2025 (a Friday)
    pub fn valentine_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// A day outside every month the tests lay out
    pub fn far_away() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 6, 1).unwrap()
    }
}

/// Sample notes for testing
pub mod notes {
    use super::*;

    pub fn note(id: i64, date: &str, content: &str) -> Note {
        Note::new(id, date, content)
    }

    /// `count` plain notes on one day, contents `note 1`..`note N`
    pub fn plain_day(date: &str, count: usize) -> Vec<Note> {
        (1..=count)
            .map(|i| note(i as i64, date, &format!("note {}", i)))
            .collect()
    }
}

/// Width of 0.6 em per character, independent of any font backend
pub fn fixed_width(text: &str, font: FontSpec) -> f32 {
    text.chars().count() as f32 * font.size * 0.6
}

pub fn canvas() -> Size {
    Size::new(980.0, 720.0)
}

pub fn no_holidays() -> HashMap<String, String> {
    HashMap::new()
}

/// File-backed database with the schema applied. Keep the `TempDir` alive
/// for as long as the database is used.
pub fn temp_database() -> (TempDir, Database, String) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("calendar.db");
    let path = path.to_string_lossy().to_string();
    let db = Database::open_initialized(&path).expect("Failed to open database");
    (temp_dir, db, path)
}
