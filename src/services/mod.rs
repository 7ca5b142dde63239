// Service module exports

pub mod calendar;
pub mod database;
pub mod holidays;
pub mod notepad;
pub mod notes;
pub mod search;
pub mod settings;
