use chrono::{Datelike, Local};

use super::CalendarApp;
use crate::services::calendar::fetch::FetchOutcome;
use crate::services::calendar::CalendarCursor;
use crate::services::holidays::{HolidayProvider, StaticHolidays};
use crate::services::notes::NoteBackend;

/// In-memory databases are per connection; worker threads would see an
/// empty store.
const IN_MEMORY_PATH: &str = ":memory:";

impl CalendarApp {
    pub(super) fn go_to(&mut self, cursor: CalendarCursor) {
        if cursor == self.cursor && self.month_notes.cursor() == Some(cursor) {
            return;
        }
        self.cursor = cursor;
        self.overview_year = cursor.year;
        self.refresh_month();
    }

    pub(super) fn shift_month(&mut self, delta: i32) {
        self.go_to(self.cursor.shift(delta));
    }

    pub(super) fn go_to_today(&mut self) {
        let today = Local::now().date_naive();
        self.overview_year = today.year();
        self.go_to(CalendarCursor::from_date(today));
    }

    /// Fetch the notes of the current month, superseding any fetch in flight.
    pub(super) fn refresh_month(&mut self) {
        let ticket = self.month_notes.begin(self.cursor);
        log::debug!(
            "Fetching notes for {} (generation {})",
            ticket.cursor.month_key(),
            ticket.generation
        );

        if self.db_path == IN_MEMORY_PATH {
            let result = self.note_service().list_month(&ticket.cursor.month_key());
            let outcome = self.month_notes.complete(ticket, result);
            self.apply_fetch(outcome);
        } else {
            self.loader.request(ticket);
        }
    }

    pub(super) fn poll_month_fetches(&mut self) {
        for (ticket, result) in self.loader.poll() {
            let outcome = self.month_notes.complete(ticket, result);
            self.apply_fetch(outcome);
        }
    }

    fn apply_fetch(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Applied { count } => {
                log::debug!("Loaded {} notes for {}", count, self.cursor.label());
            }
            FetchOutcome::Stale => {}
            FetchOutcome::Failed(message) => {
                self.toast_manager.error(format!("Failed to load notes: {}", message));
            }
        }
    }

    /// Reload the note list used by search.
    pub(super) fn refresh_all_notes(&mut self) {
        match self.note_service().list_all() {
            Ok(notes) => self.all_notes = notes,
            Err(e) => {
                log::error!("Failed to load notes for search: {}", e);
                self.all_notes.clear();
            }
        }
        if let Some(search) = self.state.search_panel.as_mut() {
            search.invalidate();
        }
    }

    pub(super) fn ensure_holidays(&mut self, year: i32) {
        if !self.holiday_cache.contains_key(&year) {
            if !StaticHolidays::covers(year) {
                log::info!("No holiday table for {}", year);
            }
            let holidays = self.holiday_provider.holidays(year);
            log::debug!("{} holidays for {}", holidays.len(), year);
            self.holiday_cache.insert(year, holidays);
        }
    }
}
