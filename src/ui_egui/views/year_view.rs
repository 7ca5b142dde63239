use egui::{Color32, RichText};

use crate::services::calendar::layout::{ColorRole, DAY_NAMES};
use crate::services::calendar::year::{DayClass, MiniMonth, YearOverview};
use crate::services::calendar::CalendarCursor;
use crate::ui_egui::theme::CalendarTheme;

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

pub enum YearViewAction {
    None,
    PreviousYear,
    NextYear,
    OpenMonth(CalendarCursor),
}

pub struct YearView;

impl YearView {
    pub fn show(ui: &mut egui::Ui, overview: &YearOverview, theme: &CalendarTheme) -> YearViewAction {
        let mut action = YearViewAction::None;

        ui.horizontal(|ui| {
            if ui.button("◀").on_hover_text("Previous year").clicked() {
                action = YearViewAction::PreviousYear;
            }
            ui.heading(overview.year.to_string());
            if ui.button("▶").on_hover_text("Next year").clicked() {
                action = YearViewAction::NextYear;
            }
            ui.weak(format!("{} holidays", overview.holiday_count()));
        });
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("year_overview")
                .num_columns(4)
                .spacing([18.0, 14.0])
                .show(ui, |ui| {
                    for (idx, month) in overview.months.iter().enumerate() {
                        ui.vertical(|ui| {
                            if Self::mini_month(ui, month, theme) {
                                action = YearViewAction::OpenMonth(CalendarCursor::jump_to(
                                    overview.year,
                                    month.month,
                                ));
                            }
                        });
                        if idx % 4 == 3 {
                            ui.end_row();
                        }
                    }
                });
        });

        action
    }

    /// Returns true when the month title was clicked.
    fn mini_month(ui: &mut egui::Ui, month: &MiniMonth, theme: &CalendarTheme) -> bool {
        let name = MONTH_NAMES[(month.month - 1) as usize];
        let clicked = ui
            .add(egui::Button::new(RichText::new(name).strong()).frame(false))
            .on_hover_text("Open month")
            .clicked();

        egui::Grid::new(("mini_month", month.month))
            .num_columns(7)
            .spacing([6.0, 2.0])
            .show(ui, |ui| {
                for (col, label) in DAY_NAMES.iter().enumerate() {
                    let color = match col {
                        0 => theme.color(ColorRole::Sunday),
                        6 => theme.color(ColorRole::Saturday),
                        _ => theme.day_header,
                    };
                    ui.label(RichText::new(&label[..1]).small().color(color));
                }
                ui.end_row();

                let mut column = 0;
                for _ in 0..month.grid.first_weekday {
                    ui.label("");
                    column += 1;
                }
                for day in &month.days {
                    let (color, background) = day_style(day.class, theme);
                    let mut text = RichText::new(format!("{:>2}", day.day)).monospace().color(color);
                    if let Some(bg) = background {
                        text = text.background_color(bg);
                    }
                    let response = ui.label(text);
                    if let Some(name) = &day.holiday {
                        response.on_hover_text(name);
                    }
                    column += 1;
                    if column % 7 == 0 {
                        ui.end_row();
                    }
                }
            });

        clicked
    }
}

fn day_style(class: DayClass, theme: &CalendarTheme) -> (Color32, Option<Color32>) {
    match class {
        DayClass::Today => (Color32::WHITE, Some(theme.today_accent)),
        DayClass::Holiday | DayClass::Sunday => (theme.sunday, None),
        DayClass::Saturday => (theme.saturday, None),
        DayClass::Weekday => (theme.base_text, None),
    }
}
