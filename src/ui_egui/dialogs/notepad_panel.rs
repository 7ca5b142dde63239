//! Notepad window: free text editor with find, symbols and autosave status.

use std::ops::Range;
use std::time::{Duration, Instant};

use egui::text::{CCursor, CCursorRange};
use egui::{Color32, RichText, Stroke};

use crate::services::notepad::Notepad;
use crate::ui_egui::theme::CalendarTheme;

const HELP_TEXT: &str = "\
Ctrl+S  save            Ctrl+L  divider line
Ctrl+F  find            Ctrl+. / Ctrl+,  next / previous match
Ctrl+H  go to start     Ctrl+E  go to end
Ctrl+Shift+A/C/I/O/R/Z/X  insert → √ ■ □ ※ ✅ ❎
Right-click a selected URL to open it";

/// Widget-side state kept between frames.
#[derive(Default)]
pub struct NotepadPanelState {
    /// Selection last exchanged with the text widget
    synced: Range<usize>,
    pub focus_find: bool,
    pub show_help: bool,
}

pub enum NotepadAction {
    None,
    Save,
    Close,
    /// Open the URL in the current selection
    OpenUrl,
}

fn text_edit_id() -> egui::Id {
    egui::Id::new("notepad_text")
}

pub fn render_notepad_panel(
    ctx: &egui::Context,
    notepad: &mut Notepad,
    state: &mut NotepadPanelState,
    theme: &CalendarTheme,
    now: Instant,
) -> NotepadAction {
    let mut action = NotepadAction::None;
    let mut open = true;

    push_selection(ctx, notepad, state);

    egui::Window::new("📝 Notepad")
        .id(egui::Id::new("notepad_panel"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_size([560.0, 480.0])
        .show(ctx, |ui| {
            find_bar(ui, notepad, state, theme, now);
            ui.separator();

            let available = ui.available_height() - 48.0;
            egui::ScrollArea::vertical()
                .id_source("notepad_scroll")
                .max_height(available.max(120.0))
                .show(ui, |ui| {
                    let output = egui::TextEdit::multiline(&mut notepad.text)
                        .id(text_edit_id())
                        .font(egui::TextStyle::Monospace)
                        .desired_width(f32::INFINITY)
                        .desired_rows(20)
                        .lock_focus(true)
                        .show(ui);

                    if let Some(range) = output.cursor_range {
                        let [start, end] = range.sorted_cursors();
                        notepad.selection = start.ccursor.index..end.ccursor.index;
                    }
                    state.synced = notepad.selection.clone();

                    if output.response.secondary_clicked() && notepad.selected_url().is_some() {
                        action = NotepadAction::OpenUrl;
                    }
                });

            ui.separator();
            ui.horizontal(|ui| {
                let dirty = if notepad.is_dirty() { " •" } else { "" };
                ui.label(format!(
                    "Lines: {}  Chars: {}{}",
                    notepad.line_count(),
                    notepad.char_count(),
                    dirty
                ));
                if let Some(remaining) = notepad.autosave_remaining(now) {
                    ui.label(
                        RichText::new(format!("autosave in {}s", remaining.as_secs()))
                            .small()
                            .color(theme.day_header),
                    );
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("💾 Save").clicked() {
                        action = NotepadAction::Save;
                    }
                    if ui.selectable_label(state.show_help, "❓").clicked() {
                        state.show_help = !state.show_help;
                    }
                });
            });

            if state.show_help {
                ui.label(RichText::new(HELP_TEXT).monospace().small());
            }
        });

    if notepad.search_missed(now) {
        ctx.request_repaint_after(Duration::from_millis(100));
    }

    if !open {
        action = NotepadAction::Close;
    }
    action
}

fn find_bar(
    ui: &mut egui::Ui,
    notepad: &mut Notepad,
    state: &mut NotepadPanelState,
    theme: &CalendarTheme,
    now: Instant,
) {
    let miss_stroke = if notepad.search_missed(now) {
        Stroke::new(2.0, theme.sunday)
    } else {
        Stroke::new(1.0, Color32::TRANSPARENT)
    };

    ui.horizontal(|ui| {
        ui.label("Find:");
        let response = egui::Frame::none()
            .stroke(miss_stroke)
            .rounding(3.0)
            .show(ui, |ui| {
                ui.add(egui::TextEdit::singleline(&mut notepad.query).desired_width(200.0))
            })
            .inner;

        if state.focus_find {
            response.request_focus();
            state.focus_find = false;
        }
        let mut searched = false;
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            notepad.find_next(false, now);
            searched = true;
        }
        if ui.button("Find").on_hover_text("Search from the top").clicked() {
            notepad.find_next(true, now);
            searched = true;
        }
        if ui.small_button("◀").on_hover_text("Previous match").clicked() {
            notepad.find_prev(now);
            searched = true;
        }
        if ui.small_button("▶").on_hover_text("Next match").clicked() {
            notepad.find_next(false, now);
            searched = true;
        }

        // The text widget renders after this bar, so hand it the match now.
        if searched {
            push_selection(ui.ctx(), notepad, state);
        }
    });
}

/// Move the widget's cursor when the notepad selection was changed by
/// something other than the widget itself.
fn push_selection(ctx: &egui::Context, notepad: &Notepad, state: &mut NotepadPanelState) {
    if notepad.selection == state.synced {
        return;
    }

    let id = text_edit_id();
    let mut edit_state = egui::TextEdit::load_state(ctx, id).unwrap_or_default();
    edit_state.cursor.set_char_range(Some(CCursorRange::two(
        CCursor::new(notepad.selection.start),
        CCursor::new(notepad.selection.end),
    )));
    edit_state.store(ctx, id);
    ctx.memory_mut(|mem| mem.request_focus(id));
    state.synced = notepad.selection.clone();
}
