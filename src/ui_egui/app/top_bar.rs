use std::time::Instant;

use egui::RichText;

use super::state::ViewType;
use super::CalendarApp;

impl CalendarApp {
    pub(super) fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.current_view == ViewType::Month {
                    if ui.button("◀").on_hover_text("Previous month (PageUp)").clicked() {
                        self.shift_month(-1);
                    }
                    ui.label(RichText::new(self.cursor.label()).heading().strong());
                    if ui.button("▶").on_hover_text("Next month (PageDown)").clicked() {
                        self.shift_month(1);
                    }
                }
                if ui.button("Today").on_hover_text("Home").clicked() {
                    self.go_to_today();
                }
                if self.month_notes.is_loading() {
                    ui.spinner();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_icon = if self.active_theme.is_dark { "☀" } else { "🌙" };
                    if ui.button(theme_icon).on_hover_text("Toggle theme").clicked() {
                        self.toggle_theme(ctx);
                    }

                    let notepad_label = if self.notepad.is_open() { "📝 Close notepad" } else { "📝 Notepad" };
                    if ui.button(notepad_label).on_hover_text("Ctrl+N").clicked() {
                        self.toggle_notepad(Instant::now());
                    }
                    if ui.button("🔍 Search").on_hover_text("Ctrl+F").clicked() {
                        self.open_search();
                    }

                    let view_label = match self.current_view {
                        ViewType::Month => "📆 Year",
                        ViewType::Year => "📅 Month",
                    };
                    if ui.button(view_label).clicked() {
                        self.current_view = self.current_view.toggled();
                        if self.current_view == ViewType::Year {
                            self.overview_year = self.cursor.year;
                        }
                    }
                });
            });
        });
    }
}
