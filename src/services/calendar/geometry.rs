//! Month grid geometry.
//!
//! Pure arithmetic shared by the layout engine and the hit tester. Both sides
//! derive cell positions from the same [`GridGeometry`], so a cell rectangle
//! produced for drawing always maps back to the same day when clicked.

use chrono::NaiveDate;

use crate::models::settings::LayoutConfig;
use crate::utils::date::{days_in_month, first_weekday_of_month};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Inclusive on all four edges.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.w
            && point.y >= self.y
            && point.y <= self.y + self.h
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Shrink by `amount` on every side.
    pub fn inset(&self, amount: f32) -> Self {
        Self::new(
            self.x + amount,
            self.y + amount,
            self.w - amount * 2.0,
            self.h - amount * 2.0,
        )
    }
}

/// Pixel dimensions of the grid for one canvas size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub canvas: Size,
    pub header_height: f32,
    pub columns: u32,
    pub rows: u32,
    pub cell_width: f32,
    pub cell_height: f32,
}

impl GridGeometry {
    pub fn new(canvas: Size, config: &LayoutConfig) -> Self {
        let (cell_width, cell_height) = cell_size(
            canvas.width,
            canvas.height - config.footer_height,
            config.header_height,
            config.columns,
            config.rows,
        );
        Self {
            canvas,
            header_height: config.header_height,
            columns: config.columns,
            rows: config.rows,
            cell_width,
            cell_height,
        }
    }

    /// Rectangle of grid cell `index` (row-major, 0-based).
    pub fn cell_rect(&self, index: u32) -> Rect {
        let col = index % self.columns;
        let row = index / self.columns;
        Rect::new(
            col as f32 * self.cell_width,
            self.header_height + row as f32 * self.cell_height,
            self.cell_width,
            self.cell_height,
        )
    }

    /// Rectangle of the weekday label for `col` in the header band.
    pub fn header_rect(&self, col: u32) -> Rect {
        Rect::new(
            col as f32 * self.cell_width,
            0.0,
            self.cell_width,
            self.header_height,
        )
    }
}

/// Exact division of the area below the header into `cols` x `rows` cells.
///
/// No rounding is applied; fractional cell sizes are expected.
pub fn cell_size(width: f32, height: f32, header_height: f32, cols: u32, rows: u32) -> (f32, f32) {
    let cols = cols.max(1) as f32;
    let rows = rows.max(1) as f32;
    (width / cols, (height - header_height) / rows)
}

/// Calendar facts for one month, independent of pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    /// 1-based month
    pub month: u32,
    /// Number of leading blank cells (weekday of the 1st, Sunday = 0)
    pub first_weekday: u32,
    pub days_in_month: u32,
    pub cell_count: u32,
}

impl MonthGrid {
    pub fn new(year: i32, month: u32, cell_count: u32) -> Self {
        Self {
            year,
            month,
            first_weekday: first_weekday_of_month(year, month),
            days_in_month: days_in_month(year, month),
            cell_count,
        }
    }

    /// Day of month shown in cell `index`, `None` for leading/trailing blanks.
    pub fn day_for_index(&self, index: u32) -> Option<u32> {
        if index >= self.cell_count || index < self.first_weekday {
            return None;
        }
        let day = index - self.first_weekday + 1;
        (day <= self.days_in_month).then_some(day)
    }

    /// Grid index of `day`, `None` if the day is outside the month.
    pub fn index_for_day(&self, day: u32) -> Option<u32> {
        if day == 0 || day > self.days_in_month {
            return None;
        }
        let index = day - 1 + self.first_weekday;
        (index < self.cell_count).then_some(index)
    }

    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// Valid `(index, day)` pairs in grid order.
    pub fn days(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..self.cell_count).filter_map(move |index| self.day_for_index(index).map(|day| (index, day)))
    }
}

/// A drawn day cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarCell {
    pub day: u32,
    pub column: u32,
    pub row: u32,
    pub rect: Rect,
    pub is_today: bool,
    pub holiday_name: Option<String>,
}
