//! Month layout engine.
//!
//! Turns a month's notes into a flat list of draw operations plus the hover
//! regions that belong to what was drawn. Nothing here touches a real drawing
//! surface: text widths come from an injected [`TextMeasure`], colours are
//! symbolic [`ColorRole`]s resolved by the renderer's palette.

use std::collections::HashMap;

use chrono::NaiveDate;

use super::classifier::{classify_day, DayNotes};
use super::geometry::{CalendarCell, GridGeometry, MonthGrid, Point, Rect, Size};
use super::text_fit::fit_text;
use crate::models::note::{parse_important_memo, Note, NoteCategory, TagKind};
use crate::models::settings::LayoutConfig;
use crate::utils::date::{date_key, iso_week_number};

/// Weekday labels of the header band, Sunday first.
pub const DAY_NAMES: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Glyphs used for notes that do not get a text line.
pub mod glyphs {
    pub const MORE_NOTE: &str = "🔵";
    pub const LAST_NOTE: &str = "⭕";
    pub const TAG_NOTE: &str = "🅰";
    pub const CODE_NOTE: &str = "💾";
    pub const LAST_TAGGED: &str = "🔚";
}

/// Palette slot a draw operation is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    BaseText,
    NoteText,
    DayHeader,
    Sunday,
    Saturday,
    Border,
    /// Today's double border; the same in every theme
    TodayAccent,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub size: f32,
    pub bold: bool,
}

impl FontSpec {
    pub fn regular(size: f32) -> Self {
        Self { size, bold: false }
    }

    pub fn bold(size: f32) -> Self {
        Self { size, bold: true }
    }
}

/// Which point of the text box `pos` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    LeftTop,
    CenterCenter,
    RightBottom,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        text: String,
        pos: Point,
        anchor: TextAnchor,
        font: FontSpec,
        color: ColorRole,
    },
    StrokeRect {
        rect: Rect,
        width: f32,
        color: ColorRole,
    },
}

/// Hoverable area with the untruncated note content it stands for.
#[derive(Debug, Clone, PartialEq)]
pub struct HitRegion {
    pub rect: Rect,
    pub full_text: String,
}

/// Text width provider. Implemented for closures so tests can pass a fake.
pub trait TextMeasure {
    fn text_width(&self, text: &str, font: FontSpec) -> f32;
}

impl<F> TextMeasure for F
where
    F: Fn(&str, FontSpec) -> f32,
{
    fn text_width(&self, text: &str, font: FontSpec) -> f32 {
        self(text, font)
    }
}

/// How a day's notes were distributed over the three display tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotePlacement {
    pub lines: usize,
    pub dots: usize,
    pub tags: usize,
    /// Notes that did not fit any tier
    pub hidden: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CellLayout {
    pub cell: CalendarCell,
    pub placement: NotePlacement,
}

/// Everything needed to lay out one month.
pub struct LayoutInput<'a> {
    pub year: i32,
    /// 1-based month
    pub month: u32,
    pub today: NaiveDate,
    pub notes: &'a [Note],
    pub holidays: &'a HashMap<String, String>,
    pub canvas: Size,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthLayout {
    pub grid: MonthGrid,
    pub geometry: GridGeometry,
    pub cells: Vec<CellLayout>,
    pub ops: Vec<DrawOp>,
    pub regions: Vec<HitRegion>,
}

impl MonthLayout {
    pub fn cell(&self, day: u32) -> Option<&CellLayout> {
        self.cells.iter().find(|cell| cell.cell.day == day)
    }
}

pub struct MonthLayoutEngine<'a, M: TextMeasure + ?Sized> {
    config: &'a LayoutConfig,
    measure: &'a M,
}

impl<'a, M: TextMeasure + ?Sized> MonthLayoutEngine<'a, M> {
    pub fn new(config: &'a LayoutConfig, measure: &'a M) -> Self {
        Self { config, measure }
    }

    pub fn layout(&self, input: &LayoutInput<'_>) -> MonthLayout {
        let geometry = GridGeometry::new(input.canvas, self.config);
        let grid = MonthGrid::new(input.year, input.month, self.config.cell_count());

        let mut out = MonthLayout {
            grid,
            geometry,
            cells: Vec::with_capacity(grid.days_in_month as usize),
            ops: Vec::new(),
            regions: Vec::new(),
        };

        self.layout_day_headers(&geometry, &mut out.ops);

        for (index, day) in grid.days() {
            let rect = geometry.cell_rect(index);
            let key = date_key(input.year, input.month, day);
            let cell = CalendarCell {
                day,
                column: index % geometry.columns,
                row: index / geometry.columns,
                rect,
                is_today: grid.date(day) == Some(input.today),
                holiday_name: input.holidays.get(&key).cloned(),
            };
            let day_notes = classify_day(input.notes, &key);
            let placement = self.layout_cell(&cell, &grid, &day_notes, &mut out);
            out.cells.push(CellLayout { cell, placement });
        }

        out
    }

    fn layout_day_headers(&self, geometry: &GridGeometry, ops: &mut Vec<DrawOp>) {
        for (col, name) in DAY_NAMES.iter().enumerate() {
            let color = match col {
                0 => ColorRole::Sunday,
                6 => ColorRole::Saturday,
                _ => ColorRole::DayHeader,
            };
            ops.push(DrawOp::Text {
                text: name.to_string(),
                pos: geometry.header_rect(col as u32).center(),
                anchor: TextAnchor::CenterCenter,
                font: FontSpec::bold(self.config.header_font_size),
                color,
            });
        }
    }

    fn layout_cell(
        &self,
        cell: &CalendarCell,
        grid: &MonthGrid,
        notes: &DayNotes<'_>,
        out: &mut MonthLayout,
    ) -> NotePlacement {
        let cfg = self.config;
        let rect = cell.rect;

        let day_color = if cell.holiday_name.is_some() {
            ColorRole::Sunday
        } else {
            column_color(cell.column)
        };
        out.ops.push(DrawOp::Text {
            text: cell.day.to_string(),
            pos: Point::new(rect.x + cfg.cell_inset, rect.y + cfg.cell_inset),
            anchor: TextAnchor::LeftTop,
            font: FontSpec::regular(cfg.day_number_font_size),
            color: day_color,
        });

        if let Some(name) = &cell.holiday_name {
            let font = FontSpec::regular(cfg.holiday_font_size);
            let x_offset = if cell.day >= 10 {
                cfg.holiday_offset_wide
            } else {
                cfg.holiday_offset_narrow
            };
            out.ops.push(DrawOp::Text {
                text: self.fit(name, rect.w - cfg.text_padding, font),
                pos: Point::new(rect.x + x_offset, rect.y + cfg.holiday_top),
                anchor: TextAnchor::LeftTop,
                font,
                color: ColorRole::Sunday,
            });
        }

        let notes_top = rect.y + cfg.notes_top;
        let mut placement = self.layout_plain_notes(&notes.plain, rect, notes_top, out);
        let tagged_top = notes_top + cfg.row_pitch * cfg.max_show_notes as f32 + cfg.row_pitch;
        let (tags, hidden_tags) = self.layout_tagged_notes(&notes.tagged, rect, tagged_top, out);
        placement.tags = tags;
        placement.hidden += hidden_tags;

        out.ops.push(DrawOp::StrokeRect {
            rect,
            width: cfg.border_width,
            color: ColorRole::Border,
        });
        if cell.is_today {
            for inset in cfg.today_insets {
                out.ops.push(DrawOp::StrokeRect {
                    rect: rect.inset(inset),
                    width: cfg.today_stroke_width,
                    color: ColorRole::TodayAccent,
                });
            }
        }

        if cell.column == 1 {
            if let Some(date) = grid.date(cell.day) {
                out.ops.push(DrawOp::Text {
                    text: format!("W{}", iso_week_number(date)),
                    pos: Point::new(
                        rect.x + rect.w - cfg.week_number_inset,
                        rect.y + rect.h - cfg.week_number_inset,
                    ),
                    anchor: TextAnchor::RightBottom,
                    font: FontSpec::regular(cfg.week_number_font_size),
                    color: ColorRole::BaseText,
                });
            }
        }

        placement
    }

    /// Lines first, then a row of dots. A single overflowing note is shown as
    /// a line rather than as one lonely dot.
    fn layout_plain_notes(
        &self,
        notes: &[&Note],
        rect: Rect,
        top: f32,
        out: &mut MonthLayout,
    ) -> NotePlacement {
        let cfg = self.config;
        let mut placement = NotePlacement::default();
        let show_all = notes.len() == cfg.max_show_notes + 1;
        let font = FontSpec::regular(cfg.note_font_size);
        let dot_y = top + cfg.max_show_notes as f32 * cfg.row_pitch;

        for (idx, note) in notes.iter().enumerate() {
            if idx < cfg.max_show_notes || (idx == cfg.max_show_notes && show_all) {
                placement.lines += 1;
                if note.content.is_empty() {
                    continue;
                }
                let memo = parse_important_memo(&note.content);
                let line_y = top + idx as f32 * cfg.row_pitch;
                out.ops.push(DrawOp::Text {
                    text: self.fit(memo.content, rect.w - cfg.text_padding, font),
                    pos: Point::new(rect.x + cfg.cell_inset, line_y),
                    anchor: TextAnchor::LeftTop,
                    font,
                    color: if memo.is_important {
                        ColorRole::Sunday
                    } else {
                        ColorRole::NoteText
                    },
                });

                if note.content.chars().count() > cfg.hover_text_threshold {
                    out.regions.push(HitRegion {
                        rect: Rect::new(
                            rect.x + cfg.cell_inset - cfg.hit_inset,
                            line_y - cfg.hit_inset,
                            cfg.hover_line_width,
                            cfg.hover_line_height,
                        ),
                        full_text: note.content.clone(),
                    });
                }
            } else if idx < cfg.max_dot_notes {
                placement.dots += 1;
                let slot = (idx - cfg.max_show_notes) as f32;
                let glyph = if idx + 1 == cfg.max_dot_notes {
                    glyphs::LAST_NOTE
                } else {
                    glyphs::MORE_NOTE
                };
                let pos = Point::new(rect.x + slot * cfg.row_pitch + cfg.cell_inset, dot_y);
                self.push_glyph(glyph, pos, &note.content, out);
            } else {
                placement.hidden += 1;
            }
        }

        placement
    }

    fn layout_tagged_notes(
        &self,
        notes: &[&Note],
        rect: Rect,
        top: f32,
        out: &mut MonthLayout,
    ) -> (usize, usize) {
        let cfg = self.config;
        let shown = notes.len().min(cfg.max_tagged_notes);

        for (idx, note) in notes.iter().take(shown).enumerate() {
            let glyph = if idx + 1 == cfg.max_tagged_notes {
                glyphs::LAST_TAGGED
            } else {
                match note.category() {
                    NoteCategory::Tagged(TagKind::Code) => glyphs::CODE_NOTE,
                    _ => glyphs::TAG_NOTE,
                }
            };
            let pos = Point::new(rect.x + idx as f32 * cfg.row_pitch + cfg.cell_inset, top);
            self.push_glyph(glyph, pos, &note.content, out);
        }

        (shown, notes.len() - shown)
    }

    fn push_glyph(&self, glyph: &str, pos: Point, content: &str, out: &mut MonthLayout) {
        let cfg = self.config;
        out.ops.push(DrawOp::Text {
            text: glyph.to_string(),
            pos,
            anchor: TextAnchor::LeftTop,
            font: FontSpec::regular(cfg.glyph_font_size),
            color: ColorRole::NoteText,
        });
        if !content.is_empty() {
            out.regions.push(HitRegion {
                rect: Rect::new(
                    pos.x - cfg.hit_inset,
                    pos.y - cfg.hit_inset,
                    cfg.glyph_hit_size,
                    cfg.glyph_hit_size,
                ),
                full_text: content.to_string(),
            });
        }
    }

    fn fit(&self, text: &str, max_width: f32, font: FontSpec) -> String {
        fit_text(text, max_width, |candidate| {
            self.measure.text_width(candidate, font)
        })
    }
}

/// Day-number colour of a weekday column.
pub fn column_color(column: u32) -> ColorRole {
    match column {
        0 => ColorRole::Sunday,
        6 => ColorRole::Saturday,
        _ => ColorRole::BaseText,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn measure(text: &str, font: FontSpec) -> f32 {
        text.chars().count() as f32 * font.size * 0.5
    }

    fn layout_with(
        config: &LayoutConfig,
        year: i32,
        month: u32,
        today: NaiveDate,
        notes: &[Note],
        holidays: &HashMap<String, String>,
    ) -> MonthLayout {
        let engine = MonthLayoutEngine::new(config, &measure);
        engine.layout(&LayoutInput {
            year,
            month,
            today,
            notes,
            holidays,
            canvas: Size::new(1050.0, 780.0),
        })
    }

    fn feb_2025(notes: &[Note]) -> MonthLayout {
        layout_with(
            &LayoutConfig::default(),
            2025,
            2,
            NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            notes,
            &HashMap::new(),
        )
    }

    fn texts_in(layout: &MonthLayout, rect: Rect) -> Vec<(String, ColorRole)> {
        layout
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, pos, color, .. } if rect.contains(*pos) => {
                    Some((text.clone(), *color))
                }
                _ => None,
            })
            .collect()
    }

    fn notes_on(date: &str, count: usize) -> Vec<Note> {
        (0..count)
            .map(|i| Note::new(i as i64 + 1, date, format!("note {}", i)))
            .collect()
    }

    #[test]
    fn test_only_valid_days_become_cells() {
        let layout = feb_2025(&[]);
        assert_eq!(layout.cells.len(), 28);
        assert_eq!(layout.cells[0].cell.column, 6);
        assert_eq!(layout.cells[0].cell.day, 1);
        assert!(layout.regions.is_empty());
    }

    #[test]
    fn test_header_band_has_seven_labels() {
        let layout = feb_2025(&[]);
        let headers: Vec<String> = layout.ops[..7]
            .iter()
            .map(|op| match op {
                DrawOp::Text { text, .. } => text.clone(),
                other => panic!("unexpected op {:?}", other),
            })
            .collect();
        assert_eq!(headers, DAY_NAMES.to_vec());
    }

    #[test]
    fn test_four_plain_notes_all_render_as_lines() {
        let layout = feb_2025(&notes_on("2025-02-10", 4));
        let placement = layout.cell(10).unwrap().placement;
        assert_eq!(placement, NotePlacement { lines: 4, dots: 0, tags: 0, hidden: 0 });
    }

    #[test]
    fn test_five_plain_notes_collapse_two_into_dots() {
        let layout = feb_2025(&notes_on("2025-02-10", 5));
        let cell = layout.cell(10).unwrap();
        assert_eq!(cell.placement, NotePlacement { lines: 3, dots: 2, tags: 0, hidden: 0 });
        let dots = texts_in(&layout, cell.cell.rect)
            .into_iter()
            .filter(|(text, _)| text == glyphs::MORE_NOTE)
            .count();
        assert_eq!(dots, 2);
    }

    #[test]
    fn test_dot_row_caps_and_marks_last_slot() {
        let layout = feb_2025(&notes_on("2025-02-10", 15));
        let cell = layout.cell(10).unwrap();
        assert_eq!(cell.placement, NotePlacement { lines: 3, dots: 9, tags: 0, hidden: 3 });
        let glyph_texts: Vec<String> = texts_in(&layout, cell.cell.rect)
            .into_iter()
            .map(|(text, _)| text)
            .filter(|text| text == glyphs::MORE_NOTE || text == glyphs::LAST_NOTE)
            .collect();
        assert_eq!(glyph_texts.last().map(String::as_str), Some(glyphs::LAST_NOTE));
        assert_eq!(glyph_texts.iter().filter(|t| *t == glyphs::LAST_NOTE).count(), 1);
        // every dot is hoverable
        assert_eq!(layout.regions.len(), 9);
    }

    #[test]
    fn test_tagged_row_glyphs_and_cap() {
        let mut notes: Vec<Note> = (0..10)
            .map(|i| Note::new(i + 1, "2025-02-10", format!("#tag{}", i)))
            .collect();
        notes.push(Note::new(99, "2025-02-10", "@snippet"));
        let layout = feb_2025(&notes);
        let cell = layout.cell(10).unwrap();
        assert_eq!(cell.placement.tags, 9);
        assert_eq!(cell.placement.hidden, 2);

        let glyph_texts: Vec<String> = texts_in(&layout, cell.cell.rect)
            .into_iter()
            .map(|(text, _)| text)
            .filter(|t| {
                t == glyphs::TAG_NOTE || t == glyphs::CODE_NOTE || t == glyphs::LAST_TAGGED
            })
            .collect();
        // "@snippet" sorts first in descending order
        assert_eq!(glyph_texts[0], glyphs::CODE_NOTE);
        assert_eq!(glyph_texts[8], glyphs::LAST_TAGGED);
        assert_eq!(layout.regions.len(), 9);
        assert_eq!(layout.regions[0].full_text, "@snippet");
    }

    #[test]
    fn test_long_line_registers_hover_with_raw_content() {
        let raw = "!Quarterly planning review";
        let layout = feb_2025(&[Note::new(1, "2025-02-10", raw)]);
        assert_eq!(layout.regions.len(), 1);
        assert_eq!(layout.regions[0].full_text, raw);
        let cell = layout.cell(10).unwrap().cell.rect;
        assert_eq!(layout.regions[0].rect.x, cell.x + 3.0);
        assert_eq!(layout.regions[0].rect.y, cell.y + 25.0 - 2.0);
    }

    #[test]
    fn test_hover_threshold_boundary() {
        let fourteen = "abcdefghijklmn";
        let fifteen = "abcdefghijklmno";
        let layout = feb_2025(&[Note::new(1, "2025-02-10", fourteen)]);
        assert!(layout.regions.is_empty());
        let layout = feb_2025(&[Note::new(1, "2025-02-10", fifteen)]);
        assert_eq!(layout.regions.len(), 1);
    }

    #[test]
    fn test_holiday_colors_day_number_and_draws_name() {
        let mut holidays = HashMap::new();
        holidays.insert("2025-03-03".to_string(), "Substitute Holiday".to_string());
        let layout = layout_with(
            &LayoutConfig::default(),
            2025,
            3,
            NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            &[],
            &holidays,
        );
        let cell = layout.cell(3).unwrap();
        assert_eq!(cell.cell.holiday_name.as_deref(), Some("Substitute Holiday"));
        let texts = texts_in(&layout, cell.cell.rect);
        assert_eq!(texts[0], ("3".to_string(), ColorRole::Sunday));
        assert_eq!(texts[1].1, ColorRole::Sunday);
        assert!(texts[1].0.starts_with("Substitute"));
    }

    #[test]
    fn test_today_gets_double_accent_border() {
        let today = NaiveDate::from_ymd_opt(2025, 2, 14).unwrap();
        let layout = layout_with(&LayoutConfig::default(), 2025, 2, today, &[], &HashMap::new());
        let cell_rect = layout.cell(14).unwrap().cell.rect;
        let accents: Vec<(Rect, f32)> = layout
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::StrokeRect { rect, width, color: ColorRole::TodayAccent } => Some((*rect, *width)),
                _ => None,
            })
            .collect();
        assert_eq!(accents, vec![(cell_rect.inset(2.0), 2.0), (cell_rect.inset(3.0), 2.0)]);
        assert!(layout.cell(14).unwrap().cell.is_today);
        let borders = layout
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::StrokeRect { width, color: ColorRole::Border, .. } if *width == 1.0))
            .count();
        assert_eq!(borders, 28);
    }

    /// Top-left corner in the upper-left quarter of `outer`.
    fn within(inner: &Rect, outer: &Rect) -> bool {
        inner.x >= outer.x
            && inner.y >= outer.y
            && inner.x < outer.x + outer.w / 2.0
            && inner.y < outer.y + outer.h / 2.0
    }

    #[test]
    fn test_border_strokes_follow_config() {
        let config = LayoutConfig {
            border_width: 0.5,
            today_insets: [4.0, 6.0],
            ..LayoutConfig::default()
        };
        let today = NaiveDate::from_ymd_opt(2025, 2, 14).unwrap();
        let layout = layout_with(&config, 2025, 2, today, &[], &HashMap::new());
        let cell_rect = layout.cell(14).unwrap().cell.rect;

        let strokes: Vec<(Rect, f32, ColorRole)> = layout
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::StrokeRect { rect, width, color } if within(rect, &cell_rect) => {
                    Some((*rect, *width, *color))
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            strokes,
            vec![
                (cell_rect, 0.5, ColorRole::Border),
                (cell_rect.inset(4.0), 2.0, ColorRole::TodayAccent),
                (cell_rect.inset(6.0), 2.0, ColorRole::TodayAccent),
            ]
        );
    }

    #[test]
    fn test_week_numbers_on_monday_column() {
        let layout = feb_2025(&[]);
        let weeks: Vec<String> = layout
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, anchor: TextAnchor::RightBottom, .. } => Some(text.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(weeks, vec!["W6", "W7", "W8", "W9"]);
    }

    #[test]
    fn test_caps_are_configurable() {
        let config = LayoutConfig {
            max_show_notes: 1,
            max_dot_notes: 3,
            ..LayoutConfig::default()
        };
        let layout = layout_with(
            &config,
            2025,
            2,
            NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            &notes_on("2025-02-10", 5),
            &HashMap::new(),
        );
        assert_eq!(
            layout.cell(10).unwrap().placement,
            NotePlacement { lines: 1, dots: 2, tags: 0, hidden: 2 }
        );
    }

    #[test]
    fn test_notepad_note_never_reaches_a_cell() {
        let notes = vec![Note::new(1, crate::models::note::NOTEPAD_KEY, "scratch")];
        let layout = feb_2025(&notes);
        assert!(layout.cells.iter().all(|c| c.placement == NotePlacement::default()));
    }
}
