// Date utility functions
// Month arithmetic, ISO week numbers and the date keys notes are stored under

use chrono::{Datelike, Duration, NaiveDate};

/// Weekday of the first day of `month` (1-based), 0 = Sunday.
pub fn first_weekday_of_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|date| date.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Number of days in `month` (1-based), Gregorian leap rules.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// ISO-8601 week number.
///
/// Shifts the date to the Thursday of its week, then counts whole weeks from
/// the Thursday of the week that contains January 4th of that Thursday's year.
pub fn iso_week_number(date: NaiveDate) -> u32 {
    let nearest_thursday = thursday_of_week(date);
    let jan4 = NaiveDate::from_ymd_opt(nearest_thursday.year(), 1, 4)
        .unwrap_or(nearest_thursday);
    let first_thursday = thursday_of_week(jan4);
    let days = (nearest_thursday - first_thursday).num_days();
    (days as f64 / 7.0).round() as u32 + 1
}

fn thursday_of_week(date: NaiveDate) -> NaiveDate {
    // Monday = 1 .. Sunday = 7
    let iso_weekday = date.weekday().number_from_monday() as i64;
    date + Duration::days(4 - iso_weekday)
}

/// Storage key of a day: `YYYY-MM-DD`.
pub fn date_key(year: i32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Storage prefix of a month: `YYYY-MM`.
pub fn month_key(year: i32, month: u32) -> String {
    format!("{:04}-{:02}", year, month)
}

/// Parse a `YYYY-MM-DD` key.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}
