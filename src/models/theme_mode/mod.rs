// Theme mode module
// The two named palettes the page can be shown in

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual palette applied to the whole page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Sky and indigo tones
    #[default]
    Calm,
    /// Amber and orange tones
    Focus,
}

impl ThemeMode {
    /// The other mode. Applying twice returns the original value.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Calm => ThemeMode::Focus,
            ThemeMode::Focus => ThemeMode::Calm,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeMode::Calm => "calm",
            ThemeMode::Focus => "focus",
        }
    }

    /// Label for the menu action that switches away from this mode
    pub fn switch_label(&self) -> &'static str {
        match self {
            ThemeMode::Calm => "Switch to Focus Theme",
            ThemeMode::Focus => "Switch to Calm Theme",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "calm" => Some(ThemeMode::Calm),
            "focus" => Some(ThemeMode::Focus),
            _ => None,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
