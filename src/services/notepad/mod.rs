// Notepad service module
// Free-text scratchpad stored under a reserved key, with autosave and find

pub mod text;
mod timer;

pub use timer::{AutoSaveTimer, MissPulse};

use std::ops::Range;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::models::note::NOTEPAD_KEY;
use crate::models::settings::AppConfig;
use crate::services::notes::NoteBackend;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    NoChanges,
    Saved,
    Failed(String),
}

impl SaveOutcome {
    pub fn message(&self) -> &str {
        match self {
            SaveOutcome::NoChanges => "No changes to save",
            SaveOutcome::Saved => "Notepad saved",
            SaveOutcome::Failed(_) => "Failed to save notepad",
        }
    }
}

/// Editor state of the notepad panel.
#[derive(Debug, Clone)]
pub struct Notepad {
    pub text: String,
    /// Current selection as a char range
    pub selection: Range<usize>,
    pub query: String,
    last_saved: String,
    open: bool,
    divider_length: usize,
    autosave: AutoSaveTimer,
    miss: MissPulse,
}

impl Notepad {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            text: String::new(),
            selection: 0..0,
            query: String::new(),
            last_saved: String::new(),
            open: false,
            divider_length: config.divider_length,
            autosave: AutoSaveTimer::new(Duration::from_secs(config.autosave_interval_secs)),
            miss: MissPulse::new(Duration::from_millis(config.search_miss_millis)),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_dirty(&self) -> bool {
        self.text != self.last_saved
    }

    /// Load the stored text and start autosaving. A failed load keeps
    /// whatever the editor held before.
    pub fn open(&mut self, backend: &dyn NoteBackend, now: Instant) {
        match backend.get_by_date(NOTEPAD_KEY) {
            Ok(note) => self.text = note.content,
            Err(err) => log::error!("Failed to load notepad: {}", err),
        }
        self.last_saved = self.text.clone();
        self.selection = 0..0;
        self.open = true;
        self.autosave.start(now);
    }

    /// Persist the text if it changed since the last save.
    pub fn save(&mut self, backend: &dyn NoteBackend) -> SaveOutcome {
        if !self.is_dirty() {
            return SaveOutcome::NoChanges;
        }
        match backend.save_or_replace(NOTEPAD_KEY, &self.text) {
            Ok(()) => {
                self.last_saved = self.text.clone();
                log::info!("Notepad saved ({} chars)", self.char_count());
                SaveOutcome::Saved
            }
            Err(err) => {
                log::error!("Failed to save notepad: {}", err);
                SaveOutcome::Failed(err.to_string())
            }
        }
    }

    /// Save and stop autosaving. Closing a closed notepad does nothing.
    pub fn close(&mut self, backend: &dyn NoteBackend) -> Option<SaveOutcome> {
        if !self.open {
            return None;
        }
        let outcome = self.save(backend);
        self.autosave.stop();
        self.open = false;
        Some(outcome)
    }

    /// Run a due autosave.
    pub fn tick(&mut self, backend: &dyn NoteBackend, now: Instant) -> Option<SaveOutcome> {
        if self.open && self.autosave.poll(now) {
            Some(self.save(backend))
        } else {
            None
        }
    }

    pub fn autosave_remaining(&self, now: Instant) -> Option<Duration> {
        self.autosave.remaining(now)
    }

    pub fn insert_divider(&mut self) {
        let cursor = text::insert_divider(&mut self.text, self.selection.clone(), self.divider_length);
        self.selection = cursor..cursor;
    }

    pub fn insert_symbol(&mut self, symbol: &str) {
        let cursor = text::replace_selection(&mut self.text, self.selection.clone(), symbol);
        self.selection = cursor..cursor;
    }

    pub fn move_to_start(&mut self) {
        self.selection = 0..0;
    }

    pub fn move_to_end(&mut self) {
        let end = self.char_count();
        self.selection = end..end;
    }

    /// Select the next match of the query. `from_start` restarts at the top.
    pub fn find_next(&mut self, from_start: bool, now: Instant) -> bool {
        if self.query.is_empty() {
            return false;
        }
        let from = if from_start { 0 } else { self.selection.end };
        self.apply_match(text::find_next(&self.text, &self.query, from), now)
    }

    pub fn find_prev(&mut self, now: Instant) -> bool {
        if self.query.is_empty() || self.selection.start == 0 {
            return false;
        }
        self.apply_match(text::find_prev(&self.text, &self.query, self.selection.start), now)
    }

    fn apply_match(&mut self, found: Option<Range<usize>>, now: Instant) -> bool {
        match found {
            Some(range) => {
                self.miss.clear();
                self.selection = range;
                true
            }
            None => {
                self.miss.trigger(now);
                false
            }
        }
    }

    pub fn search_missed(&self, now: Instant) -> bool {
        self.miss.is_active(now)
    }

    pub fn line_count(&self) -> usize {
        text::line_count(&self.text)
    }

    pub fn char_count(&self) -> usize {
        text::char_count(&self.text)
    }

    pub fn selected_url(&self) -> Option<String> {
        if self.selection.is_empty() {
            return None;
        }
        text::url_from_selection(text::selected_text(&self.text, self.selection.clone()))
    }

    /// Open the selected URL in the default browser. Returns the URL opened.
    pub fn open_selected_url(&self) -> Result<Option<String>> {
        let Some(url) = self.selected_url() else {
            return Ok(None);
        };
        webbrowser::open(&url).with_context(|| format!("Failed to open {}", url))?;
        Ok(Some(url))
    }
}
