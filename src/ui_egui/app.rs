mod lifecycle;
mod navigation;
mod notes;
mod shortcuts;
mod state;
mod toast;
mod top_bar;

use std::collections::HashMap;

use self::state::{AppState, ViewType};
use self::toast::ToastManager;
use crate::models::note::Note;
use crate::services::calendar::fetch::{MonthLoader, MonthNotes};
use crate::services::calendar::renderer::CalendarRenderer;
use crate::services::calendar::CalendarCursor;
use crate::services::database::Database;
use crate::services::holidays::StaticHolidays;
use crate::services::notepad::Notepad;
use crate::ui_egui::theme::CalendarTheme;

pub struct CalendarApp {
    database: Database,
    /// Resolved database location, shared with background fetches
    db_path: String,
    renderer: CalendarRenderer,
    cursor: CalendarCursor,
    current_view: ViewType,
    /// Year shown by the year overview
    overview_year: i32,
    month_notes: MonthNotes,
    loader: MonthLoader,
    holiday_provider: StaticHolidays,
    holiday_cache: HashMap<i32, HashMap<String, String>>,
    /// Every stored note, for search
    all_notes: Vec<Note>,
    active_theme: CalendarTheme,
    notepad: Notepad,
    state: AppState,
    toast_manager: ToastManager,
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        self.handle_exit(gl);
    }
}
