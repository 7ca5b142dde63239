use std::time::Instant;

use egui::{Key, Modifiers};

use super::CalendarApp;
use crate::services::notepad::text::SYMBOLS;

impl CalendarApp {
    pub(super) fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context, now: Instant) {
        if self.notepad.is_open() {
            self.handle_notepad_shortcuts(ctx, now);
        }

        let ctrl = |key: Key| ctx.input_mut(|i| i.consume_key(Modifiers::CTRL, key));

        if ctrl(Key::F) {
            if self.notepad.is_open() {
                self.state.notepad_panel.focus_find = true;
            } else {
                self.open_search();
            }
        }
        if ctrl(Key::N) && !self.notepad.is_open() {
            self.toggle_notepad(now);
        }

        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            self.close_topmost();
        }

        // Calendar navigation only while nothing is being typed into
        let typing = ctx.memory(|m| m.focused().is_some());
        if self.state.modal_open() || typing {
            return;
        }
        ctx.input(|i| {
            if i.key_pressed(Key::PageUp) {
                self.shift_month(-1);
            }
            if i.key_pressed(Key::PageDown) {
                self.shift_month(1);
            }
            if i.key_pressed(Key::Home) {
                self.go_to_today();
            }
        });
    }

    fn handle_notepad_shortcuts(&mut self, ctx: &egui::Context, now: Instant) {
        // Shifted combos first: a plain Ctrl pattern also matches Ctrl+Shift
        for (letter, symbol) in SYMBOLS {
            let Some(key) = Key::from_name(&letter.to_string()) else {
                continue;
            };
            if ctx.input_mut(|i| i.consume_key(Modifiers::CTRL | Modifiers::SHIFT, key)) {
                self.notepad.insert_symbol(symbol);
            }
        }

        let ctrl = |key: Key| ctx.input_mut(|i| i.consume_key(Modifiers::CTRL, key));

        if ctrl(Key::S) {
            self.save_notepad();
        }
        if ctrl(Key::L) {
            self.notepad.insert_divider();
        }
        if ctrl(Key::H) {
            self.notepad.move_to_start();
        }
        if ctrl(Key::E) {
            self.notepad.move_to_end();
        }
        if ctrl(Key::Period) {
            self.notepad.find_next(false, now);
        }
        if ctrl(Key::Comma) {
            self.notepad.find_prev(now);
        }
    }

    /// Escape closes the innermost open surface.
    fn close_topmost(&mut self) {
        if let Some(dialog) = self.state.day_dialog.as_mut() {
            if dialog.pending_delete.is_some() {
                dialog.pending_delete = None;
            } else if dialog.editing.is_some() {
                dialog.cancel_edit();
            } else {
                self.state.day_dialog = None;
            }
        } else if self.state.search_panel.is_some() {
            self.state.search_panel = None;
        } else if self.notepad.is_open() {
            self.close_notepad();
        }
    }
}
