//! Drives a month layout onto a drawing surface.

use std::collections::HashMap;

use chrono::NaiveDate;

use super::geometry::{Point, Rect, Size};
use super::hit_test::{day_at, region_at};
use super::layout::{
    ColorRole, DrawOp, FontSpec, HitRegion, LayoutInput, MonthLayout, MonthLayoutEngine,
    TextAnchor, TextMeasure,
};
use super::CalendarCursor;
use crate::models::note::Note;
use crate::models::settings::LayoutConfig;

/// Anything the month view can be painted on.
pub trait CanvasSurface: TextMeasure {
    fn size(&self) -> Size;

    fn draw_text(
        &mut self,
        text: &str,
        pos: Point,
        anchor: TextAnchor,
        font: FontSpec,
        color: ColorRole,
    );

    fn stroke_rect(&mut self, rect: Rect, width: f32, color: ColorRole);
}

/// Keeps the most recent layout so pointer queries always match what is on
/// screen.
#[derive(Debug, Default)]
pub struct CalendarRenderer {
    config: LayoutConfig,
    last: Option<MonthLayout>,
}

impl CalendarRenderer {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config, last: None }
    }

    /// Lay out the cursor's month for the surface size and paint it.
    ///
    /// The hover regions of any previous draw are discarded.
    pub fn draw<S: CanvasSurface + ?Sized>(
        &mut self,
        cursor: CalendarCursor,
        today: NaiveDate,
        notes: &[Note],
        holidays: &HashMap<String, String>,
        surface: &mut S,
    ) -> &MonthLayout {
        let input = LayoutInput {
            year: cursor.year,
            month: cursor.month_number(),
            today,
            notes,
            holidays,
            canvas: surface.size(),
        };
        let layout = MonthLayoutEngine::new(&self.config, &*surface).layout(&input);
        replay(&layout.ops, surface);
        self.last.insert(layout)
    }

    pub fn regions(&self) -> &[HitRegion] {
        self.last
            .as_ref()
            .map(|layout| layout.regions.as_slice())
            .unwrap_or_default()
    }

    pub fn day_at(&self, point: Point) -> Option<u32> {
        let layout = self.last.as_ref()?;
        day_at(&layout.grid, &layout.geometry, point)
    }

    pub fn region_at(&self, point: Point) -> Option<&HitRegion> {
        region_at(self.regions(), point)
    }
}

pub fn replay<S: CanvasSurface + ?Sized>(ops: &[DrawOp], surface: &mut S) {
    for op in ops {
        match op {
            DrawOp::Text {
                text,
                pos,
                anchor,
                font,
                color,
            } => surface.draw_text(text, *pos, *anchor, *font, *color),
            DrawOp::StrokeRect { rect, width, color } => surface.stroke_rect(*rect, *width, *color),
        }
    }
}
