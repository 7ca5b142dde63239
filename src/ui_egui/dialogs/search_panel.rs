//! Search panel for finding notes across every month

use egui::{Margin, RichText, Stroke};

use crate::models::note::Note;
use crate::services::calendar::CalendarCursor;
use crate::services::search::{search_notes, SearchState};
use crate::ui_egui::theme::CalendarTheme;

/// State for the search panel
pub struct SearchPanelState {
    pub query: String,
    pub results: SearchState,
    /// Query the current results were computed for
    searched: Option<String>,
    focus_requested: bool,
}

impl Default for SearchPanelState {
    fn default() -> Self {
        Self {
            query: String::new(),
            results: SearchState::Prompt,
            searched: None,
            focus_requested: false,
        }
    }
}

impl SearchPanelState {
    /// Recompute the results when the query changed.
    pub fn refresh(&mut self, notes: &[Note]) {
        if self.searched.as_deref() == Some(self.query.as_str()) {
            return;
        }
        self.results = search_notes(notes, &self.query);
        self.searched = Some(self.query.clone());
    }

    /// Force the next [`refresh`](Self::refresh) to search again.
    pub fn invalidate(&mut self) {
        self.searched = None;
    }
}

/// Action result from the search panel
pub enum SearchPanelAction {
    None,
    Navigate(CalendarCursor),
    Close,
}

pub fn render_search_panel(
    ctx: &egui::Context,
    state: &mut SearchPanelState,
    notes: &[Note],
    theme: &CalendarTheme,
) -> SearchPanelAction {
    let mut action = SearchPanelAction::None;
    let mut open = true;

    egui::Window::new("🔍 Search Notes")
        .id(egui::Id::new("search_panel"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(420.0)
        .default_height(400.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Search:");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut state.query)
                        .desired_width(ui.available_width() - 60.0)
                        .hint_text("Type to search notes..."),
                );
                if !state.focus_requested {
                    response.request_focus();
                    state.focus_requested = true;
                }
                if ui.button("Clear").clicked() {
                    state.query.clear();
                }
            });

            state.refresh(notes);
            ui.add_space(6.0);

            match &state.results {
                SearchState::Results(hits) => {
                    ui.label(format!("{} note(s) found", hits.len()));
                    ui.separator();
                    egui::ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            for hit in hits {
                                let response = egui::Frame::none()
                                    .stroke(Stroke::new(1.0, theme.border))
                                    .rounding(4.0)
                                    .inner_margin(Margin::same(6.0))
                                    .show(ui, |ui| {
                                        ui.set_width(ui.available_width());
                                        ui.label(RichText::new(&hit.date).small().color(theme.day_header));
                                        ui.label(RichText::new(&hit.content).color(theme.note_text));
                                    })
                                    .response
                                    .interact(egui::Sense::click())
                                    .on_hover_cursor(egui::CursorIcon::PointingHand);

                                if response.clicked() {
                                    if let Some(cursor) = hit.cursor() {
                                        action = SearchPanelAction::Navigate(cursor);
                                    }
                                }
                            }
                        });
                }
                other => {
                    if let Some(message) = other.message() {
                        ui.label(RichText::new(message).italics());
                    }
                }
            }
        });

    if !open {
        action = SearchPanelAction::Close;
    }
    action
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_only_when_query_changes() {
        let mut notes = vec![Note::new(1, "2025-03-01", "Dentist")];
        let mut state = SearchPanelState::default();
        state.query = "dent".to_string();
        state.refresh(&notes);
        assert!(matches!(&state.results, SearchState::Results(hits) if hits.len() == 1));

        notes.push(Note::new(2, "2025-04-01", "dentist again"));
        state.refresh(&notes);
        assert!(matches!(&state.results, SearchState::Results(hits) if hits.len() == 1));

        state.invalidate();
        state.refresh(&notes);
        assert!(matches!(&state.results, SearchState::Results(hits) if hits.len() == 2));
    }

    #[test]
    fn test_blank_query_prompts() {
        let mut state = SearchPanelState::default();
        state.query = "   ".to_string();
        state.refresh(&[]);
        assert_eq!(state.results, SearchState::Prompt);
    }
}
