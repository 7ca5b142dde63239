//! Day-note dialog: list, add, edit, mark and delete the notes of one day.

use chrono::NaiveDate;
use egui::{RichText, Stroke};

use crate::models::note::{parse_important_memo, Note};
use crate::services::calendar::classifier::sort_for_display;
use crate::services::notes::{NoteEdit, StatusMark};
use crate::ui_egui::theme::CalendarTheme;

pub struct DayNotesState {
    pub date: NaiveDate,
    pub input: String,
    pub editing: Option<NoteEdit>,
    pub pending_delete: Option<Note>,
    /// Message shown inside the edit form
    pub edit_error: Option<String>,
}

impl DayNotesState {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            input: String::new(),
            editing: None,
            pending_delete: None,
            edit_error: None,
        }
    }

    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_edit(&mut self, note: &Note) {
        self.editing = Some(NoteEdit::from_note(note));
        self.edit_error = None;
    }

    /// Drop the edit form and any message shown in it.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.edit_error = None;
    }
}

pub enum DayNotesAction {
    None,
    Close,
    Add(String),
    Toggle(Note, StatusMark),
    SaveEdit(NoteEdit),
    Delete(i64),
}

/// Notes of the dialog's day in display order.
pub fn notes_for_day<'a>(notes: &'a [Note], date_key: &str) -> Vec<&'a Note> {
    let mut day: Vec<&Note> = notes.iter().filter(|note| note.date == date_key).collect();
    sort_for_display(&mut day);
    day
}

pub fn render_day_notes_dialog(
    ctx: &egui::Context,
    state: &mut DayNotesState,
    notes: &[Note],
    theme: &CalendarTheme,
) -> DayNotesAction {
    let mut action = DayNotesAction::None;
    let mut open = true;
    let date_key = state.date_key();

    egui::Window::new(format!("📅 {}", date_key))
        .id(egui::Id::new("day_notes_dialog"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(460.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let day_notes = notes_for_day(notes, &date_key);

            egui::ScrollArea::vertical()
                .max_height(320.0)
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    if day_notes.is_empty() {
                        ui.label(RichText::new("No notes for this day").italics());
                    }
                    for note in day_notes {
                        if let Some(row_action) = note_row(ui, note, theme) {
                            match row_action {
                                RowAction::Edit => state.start_edit(note),
                                RowAction::Delete => state.pending_delete = Some(note.clone()),
                                RowAction::Toggle(mark) => {
                                    action = DayNotesAction::Toggle(note.clone(), mark)
                                }
                            }
                        }
                    }
                });

            ui.separator();
            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut state.input)
                        .desired_width(ui.available_width() - 60.0)
                        .hint_text("New note (!important, #tag, @code)"),
                );
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Add").clicked() || submitted {
                    action = DayNotesAction::Add(std::mem::take(&mut state.input));
                }
            });
        });

    if let Some(edit_action) = render_edit_window(ctx, state) {
        action = edit_action;
    }
    if let Some(delete_action) = render_delete_confirm(ctx, state) {
        action = delete_action;
    }

    if !open {
        action = DayNotesAction::Close;
    }
    action
}

enum RowAction {
    Edit,
    Delete,
    Toggle(StatusMark),
}

fn note_row(ui: &mut egui::Ui, note: &Note, theme: &CalendarTheme) -> Option<RowAction> {
    let mut action = None;
    let memo = parse_important_memo(&note.content);
    let color = if memo.is_important {
        theme.sunday
    } else {
        theme.note_text
    };

    egui::Frame::none()
        .stroke(Stroke::new(1.0, theme.border))
        .rounding(4.0)
        .inner_margin(egui::Margin::symmetric(8.0, 4.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.add(egui::Label::new(RichText::new(&note.content).color(color)).wrap());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("❌").on_hover_text("Delete note").clicked() {
                        action = Some(RowAction::Delete);
                    }
                    if ui.small_button("✒").on_hover_text("Edit note").clicked() {
                        action = Some(RowAction::Edit);
                    }
                    if ui.small_button("🚩").on_hover_text("Toggle flag").clicked() {
                        action = Some(RowAction::Toggle(StatusMark::Flagged));
                    }
                    if ui.small_button("✔").on_hover_text("Toggle done").clicked() {
                        action = Some(RowAction::Toggle(StatusMark::Done));
                    }
                });
            });
        });

    action
}

fn render_edit_window(ctx: &egui::Context, state: &mut DayNotesState) -> Option<DayNotesAction> {
    let edit = state.editing.as_mut()?;
    let mut action = None;
    let mut open = true;
    let mut cancel = false;

    egui::Window::new("✒ Edit Note")
        .id(egui::Id::new("edit_note_dialog"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 40.0])
        .show(ctx, |ui| {
            egui::Grid::new("edit_note_grid").num_columns(2).show(ui, |ui| {
                ui.label("Date:");
                ui.add(egui::TextEdit::singleline(&mut edit.date).hint_text("YYYY-MM-DD"));
                ui.end_row();
                ui.label("Content:");
                ui.add(egui::TextEdit::multiline(&mut edit.content).desired_rows(3));
                ui.end_row();
            });

            if let Some(error) = &state.edit_error {
                ui.colored_label(egui::Color32::from_rgb(200, 50, 50), error);
            }

            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    action = Some(DayNotesAction::SaveEdit(edit.clone()));
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if cancel || !open {
        state.cancel_edit();
    }
    action
}

fn render_delete_confirm(ctx: &egui::Context, state: &mut DayNotesState) -> Option<DayNotesAction> {
    let note = state.pending_delete.as_ref()?;
    let mut action = None;
    let mut dismiss = false;

    egui::Window::new("Delete Note")
        .id(egui::Id::new("delete_note_confirm"))
        .collapsible(false)
        .resizable(false)
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(RichText::new(&note.content).strong());
            ui.label("Delete this note?");
            ui.horizontal(|ui| {
                if ui.button("Delete").clicked() {
                    action = Some(DayNotesAction::Delete(note.id));
                    dismiss = true;
                }
                if ui.button("Cancel").clicked() {
                    dismiss = true;
                }
            });
        });

    if dismiss {
        state.pending_delete = None;
    }
    action
}
