// Configuration module
// Read-only application settings loaded from config.toml

use crate::models::theme_mode::ThemeMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_width: f32,
    pub window_height: f32,
    /// Palette shown at startup. Toggling is never written back.
    pub initial_theme: ThemeMode,
    /// Distance below the scroll offset used to probe for the active section
    pub scroll_lookahead: f32,
    /// Space left above a section when scrolling to it (navigation bar height)
    pub header_offset: f32,
    pub scroll_duration_ms: u64,
    /// Also show the booking acknowledgement as a desktop notification
    pub desktop_notifications: bool,
    /// Alternative schedule JSON; the bundled schedule is used when unset
    pub schedule_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 1100.0,
            window_height: 800.0,
            initial_theme: ThemeMode::Calm,
            scroll_lookahead: 100.0,
            header_offset: 80.0,
            scroll_duration_ms: 450,
            desktop_notifications: false,
            schedule_path: None,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(format!(
                "Window size must be positive, got {}x{}",
                self.window_width, self.window_height
            ));
        }

        if self.scroll_lookahead < 0.0 || !self.scroll_lookahead.is_finite() {
            return Err(format!(
                "scroll_lookahead must be a non-negative number, got {}",
                self.scroll_lookahead
            ));
        }

        if self.header_offset < 0.0 || !self.header_offset.is_finite() {
            return Err(format!(
                "header_offset must be a non-negative number, got {}",
                self.header_offset
            ));
        }

        if self.scroll_duration_ms == 0 {
            return Err("scroll_duration_ms must be greater than zero".to_string());
        }

        Ok(())
    }
}
