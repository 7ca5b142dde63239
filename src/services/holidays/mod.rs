//! Public holiday lookup.

use std::collections::HashMap;

use crate::utils::date::date_key;

/// Source of holiday names keyed by `YYYY-MM-DD`.
pub trait HolidayProvider {
    /// Holidays of `year`. Years the provider knows nothing about yield an
    /// empty map.
    fn holidays(&self, year: i32) -> HashMap<String, String>;
}

/// Dates that recur on the same day every year.
const FIXED: [(u32, u32, &str); 8] = [
    (1, 1, "New Year's Day"),
    (3, 1, "Independence Movement Day"),
    (5, 5, "Children's Day"),
    (6, 6, "Memorial Day"),
    (8, 15, "Liberation Day"),
    (10, 3, "National Foundation Day"),
    (10, 9, "Hangul Day"),
    (12, 25, "Christmas Day"),
];

/// Lunar-calendar holidays, resolved per year.
struct LunarYear {
    year: i32,
    seollal: (u32, u32),
    buddha: (u32, u32),
    chuseok: (u32, u32),
}

const LUNAR: [LunarYear; 4] = [
    LunarYear { year: 2024, seollal: (2, 10), buddha: (5, 15), chuseok: (9, 17) },
    LunarYear { year: 2025, seollal: (1, 29), buddha: (5, 5), chuseok: (10, 6) },
    LunarYear { year: 2026, seollal: (2, 17), buddha: (5, 24), chuseok: (9, 25) },
    LunarYear { year: 2027, seollal: (2, 7), buddha: (5, 13), chuseok: (9, 15) },
];

/// Built-in Korean public holiday table for the years it covers.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticHolidays;

impl StaticHolidays {
    pub fn covers(year: i32) -> bool {
        LUNAR.iter().any(|lunar| lunar.year == year)
    }
}

impl HolidayProvider for StaticHolidays {
    fn holidays(&self, year: i32) -> HashMap<String, String> {
        let mut map = HashMap::new();
        let Some(lunar) = LUNAR.iter().find(|lunar| lunar.year == year) else {
            return map;
        };

        for (month, day, name) in FIXED {
            map.insert(date_key(year, month, day), name.to_string());
        }

        // Three-day festivals centred on the lunar date
        for ((month, day), name) in [(lunar.seollal, "Seollal"), (lunar.chuseok, "Chuseok")] {
            let center = chrono::NaiveDate::from_ymd_opt(year, month, day);
            for offset in -1..=1i64 {
                if let Some(date) = center.and_then(|c| c.checked_add_signed(chrono::Duration::days(offset))) {
                    map.insert(date.format("%Y-%m-%d").to_string(), name.to_string());
                }
            }
        }

        let (month, day) = lunar.buddha;
        // Buddha's Birthday 2025 shares May 5th with Children's Day
        map.entry(date_key(year, month, day))
            .and_modify(|existing| existing.push_str(" / Buddha's Birthday"))
            .or_insert_with(|| "Buddha's Birthday".to_string());

        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("2025-01-28", "Seollal")]
    #[test_case("2025-01-29", "Seollal")]
    #[test_case("2025-01-30", "Seollal")]
    #[test_case("2024-09-16", "Chuseok")]
    #[test_case("2026-09-26", "Chuseok")]
    #[test_case("2027-05-13", "Buddha's Birthday")]
    #[test_case("2026-12-25", "Christmas Day")]
    fn test_known_holidays(key: &str, name: &str) {
        let year: i32 = key[..4].parse().unwrap();
        let holidays = StaticHolidays.holidays(year);
        assert_eq!(holidays.get(key).map(String::as_str), Some(name));
    }

    #[test]
    fn test_shared_day_keeps_both_names() {
        let holidays = StaticHolidays.holidays(2025);
        assert_eq!(
            holidays.get("2025-05-05").map(String::as_str),
            Some("Children's Day / Buddha's Birthday")
        );
    }

    #[test]
    fn test_unknown_year_is_empty() {
        assert!(StaticHolidays.holidays(1999).is_empty());
        assert!(!StaticHolidays::covers(2030));
    }

    #[test]
    fn test_ordinary_day_absent() {
        assert!(!StaticHolidays.holidays(2025).contains_key("2025-02-14"));
    }
}
