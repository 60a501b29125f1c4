//! Palette module for the egui page
//!
//! Maps each [`ThemeMode`] to the colours used across the page and applies
//! them to an egui context.

use egui::Color32;

use crate::models::theme_mode::ThemeMode;

/// All colours used by the page for one theme mode
#[derive(Debug, Clone, PartialEq)]
pub struct YogaPalette {
    pub mode: ThemeMode,

    /// Page background
    pub page_background: Color32,

    /// Background of cards, inputs and the navigation bar
    pub surface: Color32,

    /// Booking modal background
    pub modal_background: Color32,

    /// Headings and body text
    pub text_primary: Color32,

    /// Descriptions and secondary labels
    pub text_secondary: Color32,

    /// Primary buttons, active step, timeline dots
    pub accent: Color32,

    /// Primary buttons on hover
    pub accent_hover: Color32,

    /// Secondary buttons, badges, icon backgrounds
    pub accent_soft: Color32,

    /// Active navigation item highlight
    pub accent_highlight: Color32,

    /// Card borders and timeline line
    pub border: Color32,

    pub footer_background: Color32,
    pub footer_text: Color32,
}

impl YogaPalette {
    /// Sky, blue and indigo tones
    pub fn calm() -> Self {
        Self {
            mode: ThemeMode::Calm,
            page_background: Color32::from_rgb(240, 249, 255),
            surface: Color32::from_rgb(255, 255, 255),
            modal_background: Color32::from_rgb(239, 246, 255),
            text_primary: Color32::from_rgb(49, 46, 129),
            text_secondary: Color32::from_rgb(79, 70, 229),
            accent: Color32::from_rgb(37, 99, 235),
            accent_hover: Color32::from_rgb(29, 78, 216),
            accent_soft: Color32::from_rgb(219, 234, 254),
            accent_highlight: Color32::from_rgb(191, 219, 254),
            border: Color32::from_rgb(191, 219, 254),
            footer_background: Color32::from_rgb(59, 130, 246),
            footer_text: Color32::WHITE,
        }
    }

    /// Amber and orange tones
    pub fn focus() -> Self {
        Self {
            mode: ThemeMode::Focus,
            page_background: Color32::from_rgb(255, 251, 235),
            surface: Color32::from_rgb(255, 255, 255),
            modal_background: Color32::from_rgb(255, 251, 235),
            text_primary: Color32::from_rgb(120, 53, 15),
            text_secondary: Color32::from_rgb(180, 83, 9),
            accent: Color32::from_rgb(217, 119, 6),
            accent_hover: Color32::from_rgb(180, 83, 9),
            accent_soft: Color32::from_rgb(254, 243, 199),
            accent_highlight: Color32::from_rgb(253, 230, 138),
            border: Color32::from_rgb(253, 230, 138),
            footer_background: Color32::from_rgb(245, 158, 11),
            footer_text: Color32::WHITE,
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Calm => Self::calm(),
            ThemeMode::Focus => Self::focus(),
        }
    }

    /// Apply this palette to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::light();

        visuals.window_fill = self.modal_background;
        visuals.panel_fill = self.page_background;
        visuals.extreme_bg_color = self.surface;

        visuals.widgets.noninteractive.bg_fill = self.surface;
        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, self.border);
        visuals.widgets.inactive.bg_fill = self.accent_soft;
        visuals.widgets.inactive.weak_bg_fill = self.accent_soft;
        visuals.widgets.hovered.bg_fill = self.accent_highlight;
        visuals.widgets.hovered.weak_bg_fill = self.accent_highlight;
        visuals.widgets.active.bg_fill = self.accent_highlight;
        visuals.selection.bg_fill = self.accent;
        visuals.selection.stroke = egui::Stroke::new(1.0, self.footer_text);
        visuals.hyperlink_color = self.accent;

        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }

    /// Convert Color32 to hex string for display
    pub fn color_to_hex(color: Color32) -> String {
        format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
    }
}

impl Default for YogaPalette {
    fn default() -> Self {
        Self::calm()
    }
}
