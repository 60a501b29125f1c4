//! Small themed widgets shared by the page sections and the booking modal

use egui::{Margin, Response, RichText, Stroke, Vec2};

use crate::ui_egui::theme::YogaPalette;

pub const PILL_ROUNDING: f32 = 20.0;
pub const CARD_ROUNDING: f32 = 16.0;

/// Filled accent button ("Book a Session", "Next", "Confirm Booking")
pub fn primary_button(ui: &mut egui::Ui, palette: &YogaPalette, text: &str) -> Response {
    let button = egui::Button::new(RichText::new(text).color(palette.footer_text).strong())
        .fill(palette.accent)
        .rounding(PILL_ROUNDING)
        .min_size(Vec2::new(0.0, 38.0));
    let response = ui.add(button);
    if response.hovered() {
        ui.painter().rect_stroke(
            response.rect,
            PILL_ROUNDING,
            Stroke::new(2.0, palette.accent_hover),
        );
    }
    response
}

/// Soft button used for "Back" and the theme toggle
pub fn secondary_button(ui: &mut egui::Ui, palette: &YogaPalette, text: &str) -> Response {
    let button = egui::Button::new(RichText::new(text).color(palette.accent_hover))
        .fill(palette.accent_soft)
        .rounding(PILL_ROUNDING)
        .min_size(Vec2::new(0.0, 38.0));
    ui.add(button)
}

/// Bordered white card
pub fn card_frame(palette: &YogaPalette) -> egui::Frame {
    egui::Frame::none()
        .fill(palette.surface)
        .rounding(CARD_ROUNDING)
        .stroke(Stroke::new(1.0, palette.border))
        .inner_margin(Margin::same(20.0))
}

/// Label above a form input
pub fn field_label(ui: &mut egui::Ui, palette: &YogaPalette, text: &str) {
    ui.label(RichText::new(text).color(palette.text_primary).strong());
}
