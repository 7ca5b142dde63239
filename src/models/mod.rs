// Module exports for models

pub mod note;
pub mod settings;
