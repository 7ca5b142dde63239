//! Short-lived feedback messages stacked in the bottom-right corner.

use std::time::{Duration, Instant};

use egui::{Color32, Context, Pos2, RichText};

const TOAST_WIDTH: f32 = 280.0;
const TOAST_HEIGHT: f32 = 38.0;
const MARGIN: f32 = 10.0;
const SPACING: f32 = 5.0;
const FADE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastLevel {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastLevel::Success => "✓",
            ToastLevel::Info => "ℹ",
            ToastLevel::Warning => "⚠",
            ToastLevel::Error => "✗",
        }
    }

    pub fn background_color(&self, is_dark_theme: bool) -> Color32 {
        match (self, is_dark_theme) {
            (ToastLevel::Success, true) => Color32::from_rgb(30, 70, 40),
            (ToastLevel::Info, true) => Color32::from_rgb(30, 50, 80),
            (ToastLevel::Warning, true) => Color32::from_rgb(80, 60, 20),
            (ToastLevel::Error, true) => Color32::from_rgb(80, 30, 30),
            (ToastLevel::Success, false) => Color32::from_rgb(220, 255, 220),
            (ToastLevel::Info, false) => Color32::from_rgb(220, 235, 255),
            (ToastLevel::Warning, false) => Color32::from_rgb(255, 245, 200),
            (ToastLevel::Error, false) => Color32::from_rgb(255, 220, 220),
        }
    }

    pub fn text_color(&self, is_dark_theme: bool) -> Color32 {
        match (self, is_dark_theme) {
            (ToastLevel::Success, true) => Color32::from_rgb(100, 220, 120),
            (ToastLevel::Info, true) => Color32::from_rgb(100, 180, 255),
            (ToastLevel::Warning, true) => Color32::from_rgb(255, 200, 80),
            (ToastLevel::Error, true) => Color32::from_rgb(255, 120, 120),
            (ToastLevel::Success, false) => Color32::from_rgb(30, 120, 50),
            (ToastLevel::Info, false) => Color32::from_rgb(30, 80, 150),
            (ToastLevel::Warning, false) => Color32::from_rgb(150, 100, 0),
            (ToastLevel::Error, false) => Color32::from_rgb(180, 40, 40),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: ToastLevel, now: Instant) -> Self {
        let duration = match level {
            ToastLevel::Error => Duration::from_secs(5),
            _ => Duration::from_secs(3),
        };
        Self {
            message: message.into(),
            level,
            created_at: now,
            duration,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }

    /// 1.0 until the last half second, then fading to 0.0.
    pub fn opacity(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.created_at);
        if elapsed >= self.duration {
            return 0.0;
        }
        let remaining = self.duration - elapsed;
        if remaining < FADE {
            (remaining.as_secs_f32() / FADE.as_secs_f32()).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, level: ToastLevel) {
        self.toasts.push(Toast::new(message, level, Instant::now()));
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(message, ToastLevel::Success);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(message, ToastLevel::Info);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(message, ToastLevel::Warning);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(message, ToastLevel::Error);
    }

    pub fn cleanup(&mut self, now: Instant) {
        self.toasts.retain(|t| !t.is_expired(now));
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn render(&mut self, ctx: &Context, is_dark_theme: bool) {
        let now = Instant::now();
        self.cleanup(now);
        if self.toasts.is_empty() {
            return;
        }

        // Keep repainting while something fades
        ctx.request_repaint();

        let screen_rect = ctx.screen_rect();
        for (i, toast) in self.toasts.iter().enumerate() {
            let opacity = toast.opacity(now);
            if opacity <= 0.0 {
                continue;
            }

            let y_offset = i as f32 * (TOAST_HEIGHT + SPACING);
            let pos = Pos2::new(
                screen_rect.right() - TOAST_WIDTH - MARGIN,
                screen_rect.bottom() - TOAST_HEIGHT - MARGIN - y_offset,
            );

            egui::Area::new(egui::Id::new(("toast", i)))
                .fixed_pos(pos)
                .order(egui::Order::Foreground)
                .interactable(false)
                .show(ctx, |ui| {
                    let bg_color = toast.level.background_color(is_dark_theme).gamma_multiply(0.9 * opacity);
                    let text_color = toast.level.text_color(is_dark_theme).gamma_multiply(opacity);

                    egui::Frame::none()
                        .fill(bg_color)
                        .rounding(6.0)
                        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                        .stroke(egui::Stroke::new(1.0, text_color.gamma_multiply(0.3)))
                        .show(ui, |ui| {
                            ui.set_min_width(TOAST_WIDTH - 24.0);
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(toast.level.icon()).color(text_color).strong());
                                ui.label(RichText::new(&toast.message).color(text_color));
                            });
                        });
                });
        }
    }
}
