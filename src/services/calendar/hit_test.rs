//! Mapping pointer positions back to days and hover regions.

use super::geometry::{GridGeometry, MonthGrid, Point, Size};
use super::layout::HitRegion;

/// Gap between the cursor and the tooltip box.
pub const TOOLTIP_OFFSET: f32 = 12.0;
/// Fallback edge distance when the flipped tooltip would still overflow.
pub const TOOLTIP_MARGIN: f32 = 5.0;

/// Day of month under `point`, or `None` for the header band, blank cells and
/// anything outside the grid.
pub fn day_at(grid: &MonthGrid, geometry: &GridGeometry, point: Point) -> Option<u32> {
    if point.x < 0.0 || point.y < geometry.header_height {
        return None;
    }
    if geometry.cell_width <= 0.0 || geometry.cell_height <= 0.0 {
        return None;
    }

    let col = (point.x / geometry.cell_width).floor() as u32;
    let row = ((point.y - geometry.header_height) / geometry.cell_height).floor() as u32;
    if col >= geometry.columns || row >= geometry.rows {
        return None;
    }

    grid.day_for_index(row * geometry.columns + col)
}

/// First region containing `point`. Regions do not overlap in practice, so
/// the order only matters for degenerate cell sizes.
pub fn region_at(regions: &[HitRegion], point: Point) -> Option<&HitRegion> {
    regions.iter().find(|region| region.rect.contains(point))
}

/// Top-left corner for a tooltip of `size` next to `cursor`, kept inside
/// `viewport`.
///
/// The box sits below-right of the cursor. It flips to the other side of the
/// cursor on an axis where it would overflow, and is pinned to the margin if
/// the flipped position is negative.
pub fn place_tooltip(cursor: Point, size: Size, viewport: Size) -> Point {
    Point::new(
        place_axis(cursor.x, size.width, viewport.width),
        place_axis(cursor.y, size.height, viewport.height),
    )
}

fn place_axis(cursor: f32, extent: f32, limit: f32) -> f32 {
    let mut pos = cursor + TOOLTIP_OFFSET;
    if pos + extent > limit {
        pos = cursor - extent - TOOLTIP_OFFSET;
    }
    if pos < 0.0 {
        pos = TOOLTIP_MARGIN;
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::LayoutConfig;
    use crate::services::calendar::geometry::Rect;
    use proptest::prelude::*;

    fn setup(year: i32, month: u32) -> (MonthGrid, GridGeometry) {
        let config = LayoutConfig::default();
        (
            MonthGrid::new(year, month, config.cell_count()),
            GridGeometry::new(Size::new(700.0, 660.0), &config),
        )
    }

    #[test]
    fn test_header_band_is_never_a_day() {
        let (grid, geometry) = setup(2024, 6);
        assert_eq!(day_at(&grid, &geometry, Point::new(50.0, 0.0)), None);
        assert_eq!(day_at(&grid, &geometry, Point::new(650.0, 29.9)), None);
    }

    #[test]
    fn test_leading_blank_cell_is_noop() {
        // February 2025 starts on Saturday; (0, 5) lies in the header band
        let (grid, geometry) = setup(2025, 2);
        assert_eq!(day_at(&grid, &geometry, Point::new(0.0, 5.0)), None);
        assert_eq!(day_at(&grid, &geometry, Point::new(10.0, 40.0)), None);
        assert_eq!(day_at(&grid, &geometry, Point::new(610.0, 40.0)), Some(1));
    }

    #[test]
    fn test_outside_grid_rejected() {
        let (grid, geometry) = setup(2025, 3);
        assert_eq!(day_at(&grid, &geometry, Point::new(-1.0, 100.0)), None);
        assert_eq!(day_at(&grid, &geometry, Point::new(700.5, 100.0)), None);
        // footer band below the last row
        assert_eq!(day_at(&grid, &geometry, Point::new(50.0, 640.0)), None);
    }

    #[test]
    fn test_trailing_blank_cell() {
        let (grid, geometry) = setup(2025, 2);
        // row 4, col 6 → index 34, past the 28th
        assert_eq!(day_at(&grid, &geometry, Point::new(650.0, 30.0 + 450.0)), None);
    }

    #[test]
    fn test_region_lookup() {
        let regions = vec![
            HitRegion {
                rect: Rect::new(0.0, 0.0, 10.0, 10.0),
                full_text: "first".to_string(),
            },
            HitRegion {
                rect: Rect::new(20.0, 0.0, 10.0, 10.0),
                full_text: "second".to_string(),
            },
        ];
        assert_eq!(region_at(&regions, Point::new(25.0, 5.0)).map(|r| r.full_text.as_str()), Some("second"));
        assert!(region_at(&regions, Point::new(15.0, 5.0)).is_none());
    }

    #[test]
    fn test_tooltip_default_placement() {
        let pos = place_tooltip(Point::new(100.0, 100.0), Size::new(200.0, 40.0), Size::new(800.0, 600.0));
        assert_eq!(pos, Point::new(112.0, 112.0));
    }

    #[test]
    fn test_tooltip_flips_near_right_edge() {
        let pos = place_tooltip(Point::new(700.0, 100.0), Size::new(200.0, 40.0), Size::new(800.0, 600.0));
        assert_eq!(pos.x, 700.0 - 200.0 - 12.0);
        assert_eq!(pos.y, 112.0);
    }

    #[test]
    fn test_tooltip_flips_near_bottom_edge() {
        let pos = place_tooltip(Point::new(100.0, 590.0), Size::new(200.0, 40.0), Size::new(800.0, 600.0));
        assert_eq!(pos.y, 590.0 - 40.0 - 12.0);
    }

    #[test]
    fn test_tooltip_pins_to_margin_when_too_wide() {
        let pos = place_tooltip(Point::new(50.0, 50.0), Size::new(900.0, 40.0), Size::new(800.0, 600.0));
        assert_eq!(pos.x, 5.0);
    }

    proptest! {
        #[test]
        fn prop_cell_center_maps_to_its_day(year in 1990i32..2100, month in 1u32..=12, width in 350.0f32..2000.0, height in 400.0f32..1500.0) {
            let config = LayoutConfig::default();
            let grid = MonthGrid::new(year, month, config.cell_count());
            let geometry = GridGeometry::new(Size::new(width, height), &config);
            for (index, day) in grid.days() {
                let center = geometry.cell_rect(index).center();
                prop_assert_eq!(day_at(&grid, &geometry, center), Some(day));
            }
        }
    }
}
