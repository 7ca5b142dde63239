//! Twelve-month overview of a single year.

use std::collections::HashMap;

use chrono::NaiveDate;

use super::geometry::MonthGrid;
use crate::utils::date::date_key;

/// How a day is highlighted in the overview. Earlier variants win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayClass {
    Today,
    Holiday,
    Sunday,
    Saturday,
    Weekday,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MiniDay {
    pub day: u32,
    pub column: u32,
    pub row: u32,
    pub class: DayClass,
    pub holiday: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MiniMonth {
    /// 1-based month
    pub month: u32,
    pub grid: MonthGrid,
    pub days: Vec<MiniDay>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YearOverview {
    pub year: i32,
    pub months: Vec<MiniMonth>,
}

impl YearOverview {
    pub fn build(year: i32, today: NaiveDate, holidays: &HashMap<String, String>) -> Self {
        let months = (1..=12)
            .map(|month| {
                let grid = MonthGrid::new(year, month, 42);
                let days = grid
                    .days()
                    .map(|(index, day)| {
                        let column = index % 7;
                        let holiday = holidays.get(&date_key(year, month, day)).cloned();
                        let class = if grid.date(day) == Some(today) {
                            DayClass::Today
                        } else if holiday.is_some() {
                            DayClass::Holiday
                        } else {
                            match column {
                                0 => DayClass::Sunday,
                                6 => DayClass::Saturday,
                                _ => DayClass::Weekday,
                            }
                        };
                        MiniDay {
                            day,
                            column,
                            row: index / 7,
                            class,
                            holiday,
                        }
                    })
                    .collect();
                MiniMonth { month, grid, days }
            })
            .collect();

        Self { year, months }
    }

    pub fn holiday_count(&self) -> usize {
        self.months
            .iter()
            .flat_map(|month| month.days.iter())
            .filter(|day| day.holiday.is_some())
            .count()
    }
}
