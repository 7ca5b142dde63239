use crate::ui_egui::dialogs::day_notes::DayNotesState;
use crate::ui_egui::dialogs::notepad_panel::NotepadPanelState;
use crate::ui_egui::dialogs::search_panel::SearchPanelState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewType {
    Month,
    Year,
}

impl ViewType {
    pub fn toggled(self) -> Self {
        match self {
            ViewType::Month => ViewType::Year,
            ViewType::Year => ViewType::Month,
        }
    }
}

/// Dialog and panel state
#[derive(Default)]
pub struct AppState {
    pub day_dialog: Option<DayNotesState>,
    pub search_panel: Option<SearchPanelState>,
    pub notepad_panel: NotepadPanelState,
}

impl AppState {
    /// A modal that should swallow calendar navigation keys is open.
    pub fn modal_open(&self) -> bool {
        self.day_dialog.is_some() || self.search_panel.is_some()
    }
}
