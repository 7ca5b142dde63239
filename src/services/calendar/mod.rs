// Calendar service module
// Month grid layout, hit testing and the cursor the views navigate with

pub mod classifier;
pub mod fetch;
pub mod geometry;
pub mod hit_test;
pub mod layout;
pub mod renderer;
pub mod text_fit;
pub mod year;

use chrono::{Datelike, NaiveDate};

use crate::utils::date::month_key;

/// Month currently shown. `month` is 0-based so that shifting is plain
/// arithmetic with rollover into the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarCursor {
    pub year: i32,
    pub month: u32,
}

impl CalendarCursor {
    /// Build a cursor, normalising any month overflow into the year.
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year: year + (month / 12) as i32,
            month: month % 12,
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month0())
    }

    /// Move by `delta` months in either direction.
    pub fn shift(self, delta: i32) -> Self {
        let total = self.year * 12 + self.month as i32 + delta;
        Self {
            year: total.div_euclid(12),
            month: total.rem_euclid(12) as u32,
        }
    }

    pub fn next(self) -> Self {
        self.shift(1)
    }

    pub fn previous(self) -> Self {
        self.shift(-1)
    }

    pub fn jump_to(year: i32, month_number: u32) -> Self {
        Self::new(year, month_number.saturating_sub(1))
    }

    /// 1-based month.
    pub fn month_number(self) -> u32 {
        self.month + 1
    }

    /// `YYYY-MM` key used to fetch the month's notes.
    pub fn month_key(self) -> String {
        month_key(self.year, self.month_number())
    }

    /// Title shown above the grid.
    pub fn label(self) -> String {
        format!("{}. {:02}", self.year, self.month_number())
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(2025, 0, -1 => (2024, 11) ; "january back")]
    #[test_case(2024, 11, 1 => (2025, 0) ; "december forward")]
    #[test_case(2025, 5, 0 => (2025, 5) ; "no move")]
    #[test_case(2025, 5, -30 => (2022, 11) ; "many months back")]
    #[test_case(2025, 5, 25 => (2027, 6) ; "many months forward")]
    fn test_shift(year: i32, month: u32, delta: i32) -> (i32, u32) {
        let cursor = CalendarCursor::new(year, month).shift(delta);
        (cursor.year, cursor.month)
    }

    #[test]
    fn test_new_normalises_overflow() {
        assert_eq!(CalendarCursor::new(2024, 13), CalendarCursor::new(2025, 1));
    }

    #[test]
    fn test_jump_to_uses_one_based_month() {
        let cursor = CalendarCursor::jump_to(2025, 2);
        assert_eq!(cursor.month, 1);
        assert_eq!(cursor.month_key(), "2025-02");
        assert_eq!(cursor.label(), "2025. 02");
    }

    #[test]
    fn test_from_date_and_contains() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 14).unwrap();
        let cursor = CalendarCursor::from_date(date);
        assert!(cursor.contains(date));
        assert!(!cursor.next().contains(date));
    }
}
