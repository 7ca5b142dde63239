//! Background month fetches with latest-request-wins semantics.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use super::CalendarCursor;
use crate::models::note::Note;
use crate::services::database::Database;
use crate::services::notes::{NoteBackend, NoteResult, NoteService};

/// Identifies one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub cursor: CalendarCursor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied { count: usize },
    /// A newer fetch was issued; the response was dropped
    Stale,
    /// The fetch failed; notes were cleared
    Failed(String),
}

/// Notes of the displayed month plus the generation counter guarding them.
#[derive(Debug, Default)]
pub struct MonthNotes {
    generation: u64,
    cursor: Option<CalendarCursor>,
    notes: Vec<Note>,
    loading: bool,
}

impl MonthNotes {
    /// Issue a new fetch for `cursor`, invalidating all earlier tickets.
    pub fn begin(&mut self, cursor: CalendarCursor) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        FetchTicket {
            generation: self.generation,
            cursor,
        }
    }

    /// Apply a fetch result if `ticket` is still the latest one.
    pub fn complete(&mut self, ticket: FetchTicket, result: NoteResult<Vec<Note>>) -> FetchOutcome {
        if ticket.generation != self.generation {
            log::debug!(
                "Dropping notes for {} (generation {} < {})",
                ticket.cursor.month_key(),
                ticket.generation,
                self.generation
            );
            return FetchOutcome::Stale;
        }

        self.loading = false;
        self.cursor = Some(ticket.cursor);
        match result {
            Ok(notes) => {
                self.notes = notes;
                FetchOutcome::Applied {
                    count: self.notes.len(),
                }
            }
            Err(err) => {
                log::warn!("Failed to load notes for {}: {}", ticket.cursor.month_key(), err);
                self.notes.clear();
                FetchOutcome::Failed(err.to_string())
            }
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Month the current notes belong to.
    pub fn cursor(&self) -> Option<CalendarCursor> {
        self.cursor
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

type FetchMessage = (FetchTicket, NoteResult<Vec<Note>>);

/// Runs month queries on worker threads, each with its own connection.
pub struct MonthLoader {
    db_path: String,
    tx: Sender<FetchMessage>,
    rx: Receiver<FetchMessage>,
}

impl MonthLoader {
    pub fn new(db_path: impl Into<String>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            db_path: db_path.into(),
            tx,
            rx,
        }
    }

    pub fn request(&self, ticket: FetchTicket) {
        let db_path = self.db_path.clone();
        let tx = self.tx.clone();

        thread::spawn(move || {
            let result = Database::new(&db_path)
                .map_err(Into::into)
                .and_then(|db| NoteService::new(db.connection()).list_month(&ticket.cursor.month_key()));
            // The receiver is gone once the app shuts down.
            let _ = tx.send((ticket, result));
        });
    }

    /// Drain every response that has arrived so far.
    pub fn poll(&self) -> Vec<FetchMessage> {
        let mut ready = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(message) => ready.push(message),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        ready
    }
}
