// Settings module
// Application configuration and the tunable month layout parameters

use serde::{Deserialize, Serialize};

/// Theme preference stored in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
    /// Follow the operating system at startup
    System,
}

/// Top-level application configuration (`config.toml`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// SQLite file holding the notes. Relative paths resolve against the data dir.
    pub database_path: String,
    pub theme: ThemePreference,
    pub autosave_interval_secs: u64,
    pub search_miss_millis: u64,
    pub divider_length: usize,
    pub window_width: f32,
    pub window_height: f32,
    pub layout: LayoutConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: "calendar.db".to_string(),
            theme: ThemePreference::Light,
            autosave_interval_secs: 180,
            search_miss_millis: 450,
            divider_length: 50,
            window_width: 1024.0,
            window_height: 768.0,
            layout: LayoutConfig::default(),
        }
    }
}

impl AppConfig {
    /// Validate values that would break layout arithmetic.
    pub fn validate(&self) -> Result<(), String> {
        if self.autosave_interval_secs == 0 {
            return Err("Autosave interval must be at least one second".to_string());
        }
        self.layout.validate()
    }
}

/// A month spans at most six calendar weeks.
pub const MIN_GRID_ROWS: u32 = 6;

/// Pixel offsets, caps and pitches used by the month layout engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub columns: u32,
    pub rows: u32,
    /// Height of the weekday header band above the grid
    pub header_height: f32,
    /// Height of the band reserved below the grid
    pub footer_height: f32,

    pub header_font_size: f32,
    pub day_number_font_size: f32,
    pub holiday_font_size: f32,
    pub note_font_size: f32,
    pub glyph_font_size: f32,
    pub week_number_font_size: f32,

    /// Inset of cell text from the cell's left and top edges
    pub cell_inset: f32,
    /// Holiday name x offset for one-digit and two-digit days
    pub holiday_offset_narrow: f32,
    pub holiday_offset_wide: f32,
    pub holiday_top: f32,
    /// Distance from the cell top to the first note line
    pub notes_top: f32,
    /// Horizontal padding subtracted from the cell width when fitting text
    pub text_padding: f32,
    /// Vertical pitch of stacked note lines and horizontal pitch of glyph slots
    pub row_pitch: f32,

    pub max_show_notes: usize,
    pub max_dot_notes: usize,
    pub max_tagged_notes: usize,

    /// Notes longer than this many characters get a hover region on their line
    pub hover_text_threshold: usize,
    pub hover_line_width: f32,
    pub hover_line_height: f32,
    pub glyph_hit_size: f32,
    pub hit_inset: f32,

    pub week_number_inset: f32,
    pub border_width: f32,
    pub today_stroke_width: f32,
    /// Insets of the two accent strokes drawn inside today's cell
    pub today_insets: [f32; 2],
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            columns: 7,
            rows: 6,
            header_height: 30.0,
            footer_height: 30.0,
            header_font_size: 12.0,
            day_number_font_size: 16.0,
            holiday_font_size: 12.0,
            note_font_size: 14.0,
            glyph_font_size: 14.0,
            week_number_font_size: 10.0,
            cell_inset: 5.0,
            holiday_offset_narrow: 22.0,
            holiday_offset_wide: 32.0,
            holiday_top: 7.0,
            notes_top: 25.0,
            text_padding: 10.0,
            row_pitch: 15.0,
            max_show_notes: 3,
            max_dot_notes: 12,
            max_tagged_notes: 9,
            hover_text_threshold: 14,
            hover_line_width: 135.0,
            hover_line_height: 14.0,
            glyph_hit_size: 14.0,
            hit_inset: 2.0,
            week_number_inset: 3.0,
            border_width: 1.0,
            today_stroke_width: 2.0,
            today_insets: [2.0, 3.0],
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.columns != 7 {
            return Err("A calendar week must have 7 columns".to_string());
        }
        if self.rows < MIN_GRID_ROWS {
            return Err(format!(
                "Calendar grid needs at least {} rows, got {}",
                MIN_GRID_ROWS, self.rows
            ));
        }
        if self.row_pitch <= 0.0 {
            return Err("Row pitch must be positive".to_string());
        }
        if self.max_dot_notes < self.max_show_notes {
            return Err("max_dot_notes cannot be smaller than max_show_notes".to_string());
        }
        Ok(())
    }

    /// Number of cells in the grid (42 for the default 7x6 month).
    pub fn cell_count(&self) -> u32 {
        self.columns * self.rows
    }
}
