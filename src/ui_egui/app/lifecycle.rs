use std::collections::HashMap;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::{Datelike, Local};

use super::state::{AppState, ViewType};
use super::toast::ToastManager;
use super::CalendarApp;
use crate::models::settings::AppConfig;
use crate::services::calendar::fetch::{MonthLoader, MonthNotes};
use crate::services::calendar::renderer::CalendarRenderer;
use crate::services::calendar::year::YearOverview;
use crate::services::calendar::CalendarCursor;
use crate::services::database::Database;
use crate::services::holidays::StaticHolidays;
use crate::services::notepad::Notepad;
use crate::services::notes::NoteService;
use crate::services::settings::{project_dirs, resolve_dark_mode, resolve_database_path};
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::month_view::{MonthView, MonthViewAction};
use crate::ui_egui::views::year_view::{YearView, YearViewAction};

/// Poll interval while a month fetch is in flight
const FETCH_POLL: Duration = Duration::from_millis(30);

impl CalendarApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Result<Self> {
        let data_dir = project_dirs().map(|dirs| dirs.data_dir().to_path_buf());
        let db_path = resolve_database_path(&config, data_dir.as_deref())?;
        let database = Database::open_initialized(&db_path)
            .with_context(|| format!("Failed to open database at {}", db_path))?;
        log::info!("Using database {}", db_path);

        let active_theme = CalendarTheme::for_mode(resolve_dark_mode(config.theme));
        active_theme.apply_to_context(&cc.egui_ctx);

        let today = Local::now().date_naive();
        let mut app = Self {
            loader: MonthLoader::new(db_path.clone()),
            database,
            db_path,
            renderer: CalendarRenderer::new(config.layout.clone()),
            notepad: Notepad::new(&config),
            cursor: CalendarCursor::from_date(today),
            current_view: ViewType::Month,
            overview_year: today.year(),
            month_notes: MonthNotes::default(),
            holiday_provider: StaticHolidays,
            holiday_cache: HashMap::new(),
            all_notes: Vec::new(),
            active_theme,
            state: AppState::default(),
            toast_manager: ToastManager::new(),
        };

        app.refresh_month();
        app.refresh_all_notes();
        Ok(app)
    }

    pub(super) fn note_service(&self) -> NoteService<'_> {
        NoteService::new(self.database.connection())
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        self.poll_month_fetches();
        if self.month_notes.is_loading() {
            ctx.request_repaint_after(FETCH_POLL);
        }

        self.handle_keyboard_shortcuts(ctx, now);
        self.tick_notepad(ctx, now);

        self.render_top_bar(ctx);
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(self.active_theme.app_background))
            .show(ctx, |ui| match self.current_view {
                ViewType::Month => self.render_month(ui),
                ViewType::Year => self.render_year(ui),
            });

        self.render_dialogs(ctx, now);
        self.toast_manager.render(ctx, self.active_theme.is_dark);
    }

    pub(super) fn handle_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        let service = NoteService::new(self.database.connection());
        if let Some(outcome) = self.notepad.close(&service) {
            log::info!("Notepad on exit: {}", outcome.message());
        }
        log::info!("uCalendar shutting down");
    }

    fn tick_notepad(&mut self, ctx: &egui::Context, now: Instant) {
        let service = NoteService::new(self.database.connection());
        if let Some(outcome) = self.notepad.tick(&service, now) {
            self.report_save(outcome);
        }
        if let Some(remaining) = self.notepad.autosave_remaining(now) {
            ctx.request_repaint_after(remaining.min(Duration::from_secs(1)));
        }
    }

    fn render_month(&mut self, ui: &mut egui::Ui) {
        let today = Local::now().date_naive();
        self.ensure_holidays(self.cursor.year);
        let empty = HashMap::new();
        let holidays = self.holiday_cache.get(&self.cursor.year).unwrap_or(&empty);

        let action = MonthView::show(
            ui,
            &mut self.renderer,
            self.cursor,
            today,
            self.month_notes.notes(),
            holidays,
            &self.active_theme,
        );

        if let MonthViewAction::OpenDay(date) = action {
            self.open_day_dialog(date);
        }
    }

    fn render_year(&mut self, ui: &mut egui::Ui) {
        let today = Local::now().date_naive();
        self.ensure_holidays(self.overview_year);
        let empty = HashMap::new();
        let holidays = self.holiday_cache.get(&self.overview_year).unwrap_or(&empty);
        let overview = YearOverview::build(self.overview_year, today, holidays);

        match YearView::show(ui, &overview, &self.active_theme) {
            YearViewAction::None => {}
            YearViewAction::PreviousYear => self.overview_year -= 1,
            YearViewAction::NextYear => self.overview_year += 1,
            YearViewAction::OpenMonth(cursor) => {
                self.current_view = ViewType::Month;
                self.go_to(cursor);
            }
        }
    }

    pub(super) fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.active_theme = self.active_theme.toggled();
        self.active_theme.apply_to_context(ctx);
        log::info!(
            "Switched to {} theme",
            if self.active_theme.is_dark { "dark" } else { "light" }
        );
    }
}
