//! Theme module for the egui front-end
//!
//! Maps the symbolic colour roles of the month layout onto concrete colours
//! for the light and dark palettes.

use egui::Color32;

use crate::services::calendar::layout::ColorRole;

/// Border colour of today's cell in both palettes.
pub const TODAY_ACCENT: &str = "#2196F3";

/// A calendar palette
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTheme {
    pub is_dark: bool,
    pub app_background: Color32,
    pub canvas_background: Color32,
    /// Day numbers and week labels
    pub base_text: Color32,
    pub note_text: Color32,
    pub day_header: Color32,
    /// Sundays, holidays and important notes
    pub sunday: Color32,
    pub saturday: Color32,
    pub border: Color32,
    pub today_accent: Color32,
}

impl CalendarTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            canvas_background: Color32::WHITE,
            base_text: hex("#212121"),
            note_text: hex("#000000"),
            day_header: hex("#424242"),
            sunday: hex("#e53935"),
            saturday: hex("#5c6bc0"),
            border: hex("#dddddd"),
            today_accent: hex(TODAY_ACCENT),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            canvas_background: Color32::from_rgb(36, 36, 36),
            base_text: hex("#ffffff"),
            note_text: hex("#cccccc"),
            day_header: hex("#dddddd"),
            sunday: hex("#FF003C"),
            saturday: hex("#00FFFF"),
            border: hex("#555555"),
            today_accent: hex(TODAY_ACCENT),
        }
    }

    pub fn for_mode(is_dark: bool) -> Self {
        if is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// The other palette, for the theme toggle.
    pub fn toggled(&self) -> Self {
        Self::for_mode(!self.is_dark)
    }

    pub fn color(&self, role: ColorRole) -> Color32 {
        match role {
            ColorRole::BaseText => self.base_text,
            ColorRole::NoteText => self.note_text,
            ColorRole::DayHeader => self.day_header,
            ColorRole::Sunday => self.sunday,
            ColorRole::Saturday => self.saturday,
            ColorRole::Border => self.border,
            ColorRole::TodayAccent => self.today_accent,
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.extreme_bg_color = self.canvas_background;
        visuals.selection.stroke.color = self.today_accent;

        ctx.set_visuals(visuals);
    }

    /// Parse `#RRGGBB` (leading `#` optional).
    pub fn hex_to_color(hex: &str) -> Result<Color32, String> {
        let hex = hex.trim_start_matches('#');

        if hex.len() != 6 {
            return Err("Hex color must be 6 characters".to_string());
        }

        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| "Invalid hex color")?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| "Invalid hex color")?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| "Invalid hex color")?;

        Ok(Color32::from_rgb(r, g, b))
    }
}

// Malformed literals render magenta.
fn hex(value: &str) -> Color32 {
    CalendarTheme::hex_to_color(value).unwrap_or(Color32::from_rgb(255, 0, 255))
}
