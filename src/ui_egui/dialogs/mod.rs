pub mod day_notes;
pub mod notepad_panel;
pub mod search_panel;
