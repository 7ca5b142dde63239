use std::collections::HashMap;

use chrono::NaiveDate;
use egui::text::LayoutJob;
use egui::{Align2, Color32, FontFamily, FontId, Pos2, Sense, Stroke, Vec2};

use crate::models::note::Note;
use crate::services::calendar::geometry::{Point, Rect, Size};
use crate::services::calendar::hit_test::place_tooltip;
use crate::services::calendar::layout::{ColorRole, FontSpec, TextAnchor, TextMeasure};
use crate::services::calendar::renderer::{CalendarRenderer, CanvasSurface};
use crate::services::calendar::CalendarCursor;
use crate::ui_egui::theme::CalendarTheme;

const TOOLTIP_WRAP_WIDTH: f32 = 320.0;
const TOOLTIP_FONT_SIZE: f32 = 13.0;
/// Frame::popup inner margin on both sides
const TOOLTIP_PADDING: f32 = 12.0;

/// Action returned from month view
pub enum MonthViewAction {
    None,
    OpenDay(NaiveDate),
}

/// [`CanvasSurface`] painting into a region of an egui painter.
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    origin: Pos2,
    size: Size,
    theme: &'a CalendarTheme,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect, theme: &'a CalendarTheme) -> Self {
        Self {
            painter,
            origin: rect.min,
            size: Size::new(rect.width(), rect.height()),
            theme,
        }
    }

    fn to_screen(&self, point: Point) -> Pos2 {
        self.origin + Vec2::new(point.x, point.y)
    }
}

fn font_id(font: FontSpec) -> FontId {
    FontId::new(font.size, FontFamily::Proportional)
}

impl TextMeasure for EguiSurface<'_> {
    fn text_width(&self, text: &str, font: FontSpec) -> f32 {
        let layout_job =
            LayoutJob::simple(text.to_string(), font_id(font), Color32::WHITE, f32::INFINITY);
        self.painter.ctx().fonts(|f| f.layout_job(layout_job).size().x)
    }
}

impl CanvasSurface for EguiSurface<'_> {
    fn size(&self) -> Size {
        self.size
    }

    fn draw_text(
        &mut self,
        text: &str,
        pos: Point,
        anchor: TextAnchor,
        font: FontSpec,
        color: ColorRole,
    ) {
        let align = match anchor {
            TextAnchor::LeftTop => Align2::LEFT_TOP,
            TextAnchor::CenterCenter => Align2::CENTER_CENTER,
            TextAnchor::RightBottom => Align2::RIGHT_BOTTOM,
        };
        let color = self.theme.color(color);
        let pos = self.to_screen(pos);
        self.painter.text(pos, align, text, font_id(font), color);
        // The default font set has no bold face
        if font.bold {
            self.painter
                .text(pos + Vec2::new(0.6, 0.0), align, text, font_id(font), color);
        }
    }

    fn stroke_rect(&mut self, rect: Rect, width: f32, color: ColorRole) {
        let screen = egui::Rect::from_min_size(
            self.to_screen(Point::new(rect.x, rect.y)),
            Vec2::new(rect.w, rect.h),
        );
        self.painter
            .rect_stroke(screen, 0.0, Stroke::new(width, self.theme.color(color)));
    }
}

pub struct MonthView;

impl MonthView {
    /// Paint the month filling the remaining space. Clicking a day cell asks
    /// for its day-note dialog; hovering a truncated note or glyph shows the
    /// full text.
    pub fn show(
        ui: &mut egui::Ui,
        renderer: &mut CalendarRenderer,
        cursor: CalendarCursor,
        today: NaiveDate,
        notes: &[Note],
        holidays: &HashMap<String, String>,
        theme: &CalendarTheme,
    ) -> MonthViewAction {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click());
        let canvas = response.rect;
        painter.rect_filled(canvas, 0.0, theme.canvas_background);

        let mut surface = EguiSurface::new(&painter, canvas, theme);
        renderer.draw(cursor, today, notes, holidays, &mut surface);

        let to_local = |pos: Pos2| Point::new(pos.x - canvas.min.x, pos.y - canvas.min.y);

        if let Some(hover) = response.hover_pos() {
            let local = to_local(hover);
            if let Some(region) = renderer.region_at(local) {
                show_note_tooltip(ui.ctx(), &region.full_text, local, canvas, theme);
            } else if renderer.day_at(local).is_some() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            }
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                if let Some(day) = renderer.day_at(to_local(pos)) {
                    if let Some(date) = NaiveDate::from_ymd_opt(cursor.year, cursor.month_number(), day) {
                        return MonthViewAction::OpenDay(date);
                    }
                }
            }
        }

        MonthViewAction::None
    }
}

fn show_note_tooltip(
    ctx: &egui::Context,
    text: &str,
    cursor: Point,
    canvas: egui::Rect,
    theme: &CalendarTheme,
) {
    let font = FontId::proportional(TOOLTIP_FONT_SIZE);
    let galley_size = ctx.fonts(|f| {
        f.layout(text.to_string(), font.clone(), theme.note_text, TOOLTIP_WRAP_WIDTH)
            .size()
    });
    let size = Size::new(
        galley_size.x + TOOLTIP_PADDING * 2.0,
        galley_size.y + TOOLTIP_PADDING * 2.0,
    );
    let pos = place_tooltip(cursor, size, Size::new(canvas.width(), canvas.height()));

    egui::Area::new(egui::Id::new("note_tooltip"))
        .fixed_pos(canvas.min + Vec2::new(pos.x, pos.y))
        .order(egui::Order::Tooltip)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_max_width(TOOLTIP_WRAP_WIDTH);
                ui.label(egui::RichText::new(text).font(font).color(theme.note_text));
            });
        });
}
