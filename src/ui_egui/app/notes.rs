use std::time::Instant;

use chrono::NaiveDate;

use super::state::ViewType;
use super::CalendarApp;
use crate::services::calendar::CalendarCursor;
use crate::services::notepad::SaveOutcome;
use crate::services::notes::{
    add_note, delete_note, edit_note, toggle_status, EditOutcome, NoteError, NoteResult,
    NoteService,
};
use crate::ui_egui::dialogs::day_notes::{render_day_notes_dialog, DayNotesAction, DayNotesState};
use crate::ui_egui::dialogs::notepad_panel::{render_notepad_panel, NotepadAction};
use crate::ui_egui::dialogs::search_panel::{render_search_panel, SearchPanelAction, SearchPanelState};

impl CalendarApp {
    pub(super) fn open_day_dialog(&mut self, date: NaiveDate) {
        log::debug!("Opening notes for {}", date);
        self.state.day_dialog = Some(DayNotesState::new(date));
    }

    pub(super) fn open_search(&mut self) {
        if self.state.search_panel.is_none() {
            self.refresh_all_notes();
            self.state.search_panel = Some(SearchPanelState::default());
        }
    }

    pub(super) fn toggle_notepad(&mut self, now: Instant) {
        if self.notepad.is_open() {
            self.close_notepad();
        } else {
            let service = NoteService::new(self.database.connection());
            self.notepad.open(&service, now);
        }
    }

    pub(super) fn close_notepad(&mut self) {
        let service = NoteService::new(self.database.connection());
        if let Some(outcome) = self.notepad.close(&service) {
            if outcome != SaveOutcome::NoChanges {
                self.report_save(outcome);
            }
        }
    }

    pub(super) fn save_notepad(&mut self) {
        let service = NoteService::new(self.database.connection());
        let outcome = self.notepad.save(&service);
        self.report_save(outcome);
    }

    pub(super) fn report_save(&mut self, outcome: SaveOutcome) {
        match &outcome {
            SaveOutcome::Saved => self.toast_manager.success(outcome.message()),
            SaveOutcome::NoChanges => self.toast_manager.info(outcome.message()),
            SaveOutcome::Failed(_) => self.toast_manager.error(outcome.message()),
        }
    }

    /// Everything after a successful write: both caches are stale.
    fn notes_changed(&mut self) {
        self.refresh_month();
        self.refresh_all_notes();
    }

    fn report_note_error(&mut self, action: &str, err: NoteError) {
        log::error!("Failed to {} note: {}", action, err);
        self.toast_manager.error(format!("Failed to {} note: {}", action, err));
    }

    pub(super) fn render_dialogs(&mut self, ctx: &egui::Context, now: Instant) {
        self.render_day_dialog(ctx);
        self.render_search(ctx);

        if self.notepad.is_open() {
            let action = render_notepad_panel(
                ctx,
                &mut self.notepad,
                &mut self.state.notepad_panel,
                &self.active_theme,
                now,
            );
            match action {
                NotepadAction::None => {}
                NotepadAction::Save => self.save_notepad(),
                NotepadAction::Close => self.close_notepad(),
                NotepadAction::OpenUrl => match self.notepad.open_selected_url() {
                    Ok(Some(url)) => log::info!("Opened {}", url),
                    Ok(None) => {}
                    Err(e) => {
                        log::error!("{:#}", e);
                        self.toast_manager.error("Failed to open link");
                    }
                },
            }
        }
    }

    fn render_day_dialog(&mut self, ctx: &egui::Context) {
        let Some(state) = self.state.day_dialog.as_mut() else {
            return;
        };
        let action =
            render_day_notes_dialog(ctx, state, self.month_notes.notes(), &self.active_theme);

        match action {
            DayNotesAction::None => {}
            DayNotesAction::Close => self.state.day_dialog = None,
            DayNotesAction::Add(text) => {
                let date_key = state.date_key();
                let result = add_note(&self.note_service(), &date_key, &text);
                match result {
                    Ok(Some(id)) => {
                        log::info!("Added note {} on {}", id, date_key);
                        self.notes_changed();
                    }
                    Ok(None) => self.toast_manager.warning("Empty note not added"),
                    Err(e) => self.report_note_error("add", e),
                }
            }
            DayNotesAction::Toggle(note, mark) => {
                let result = toggle_status(&self.note_service(), &note, mark);
                match result {
                    Ok(_) => self.notes_changed(),
                    Err(e) => self.report_note_error("update", e),
                }
            }
            DayNotesAction::SaveEdit(edit) => {
                let result = edit_note(&self.note_service(), &edit);
                self.apply_edit_result(result);
            }
            DayNotesAction::Delete(id) => {
                let result = delete_note(&self.note_service(), id);
                match result {
                    Ok(()) => {
                        self.notes_changed();
                        self.toast_manager.info("Note deleted");
                    }
                    Err(e) => self.report_note_error("delete", e),
                }
            }
        }
    }

    fn apply_edit_result(&mut self, result: NoteResult<EditOutcome>) {
        match result {
            Ok(outcome) => {
                if let Some(dialog) = self.state.day_dialog.as_mut() {
                    dialog.cancel_edit();
                    dialog.date = outcome.date;
                }
                // Follow the note to its (possibly new) month
                self.cursor = CalendarCursor::from_date(outcome.date);
                self.overview_year = self.cursor.year;
                self.notes_changed();
                self.toast_manager.success("Note updated");
            }
            Err(e @ (NoteError::EmptyContent | NoteError::InvalidDate(_))) => {
                if let Some(dialog) = self.state.day_dialog.as_mut() {
                    dialog.edit_error = Some(e.to_string());
                }
            }
            Err(e) => self.report_note_error("update", e),
        }
    }

    fn render_search(&mut self, ctx: &egui::Context) {
        let Some(state) = self.state.search_panel.as_mut() else {
            return;
        };

        match render_search_panel(ctx, state, &self.all_notes, &self.active_theme) {
            SearchPanelAction::None => {}
            SearchPanelAction::Close => self.state.search_panel = None,
            SearchPanelAction::Navigate(cursor) => {
                self.state.search_panel = None;
                self.current_view = ViewType::Month;
                self.go_to(cursor);
            }
        }
    }
}
