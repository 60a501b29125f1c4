mod steps;

use egui::{Align2, Color32, Id, Order, RichText, Sense, Vec2};

use crate::models::booking::BookingStep;
use crate::services::booking::BookingWizard;
use crate::ui_egui::theme::YogaPalette;
use crate::ui_egui::widgets::PILL_ROUNDING;

use self::steps::StepAction;

const MODAL_WIDTH: f32 = 520.0;

/// What the app must do after the modal has been drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingDialogAction {
    None,
    Close,
    Submit,
}

/// Render the booking modal over the page. Step navigation is applied to
/// `wizard` directly; closing and submitting are returned to the caller.
pub fn render_booking_dialog(
    ctx: &egui::Context,
    wizard: &mut BookingWizard,
    palette: &YogaPalette,
) -> BookingDialogAction {
    let mut action = BookingDialogAction::None;
    let screen = ctx.screen_rect();

    // Overlay: dims the page and closes the modal when clicked
    egui::Area::new(Id::new("booking_overlay"))
        .fixed_pos(screen.min)
        .order(Order::Middle)
        .show(ctx, |ui| {
            let response = ui.allocate_response(screen.size(), Sense::click());
            ui.painter()
                .rect_filled(screen, 0.0, Color32::from_black_alpha(128));
            if response.clicked() {
                action = BookingDialogAction::Close;
            }
        });

    let width = MODAL_WIDTH.min(screen.width() - 24.0);
    egui::Area::new(Id::new("booking_modal"))
        .order(Order::Foreground)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            egui::Frame::window(ui.style())
                .fill(palette.modal_background)
                .rounding(24.0)
                .inner_margin(egui::Margin::same(24.0))
                .show(ui, |ui| {
                    ui.set_width(width);

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                        let close = egui::Button::new(RichText::new("✕").color(palette.accent_hover))
                            .fill(palette.accent_soft)
                            .rounding(PILL_ROUNDING);
                        if ui.add(close).on_hover_text("Close modal").clicked() {
                            action = BookingDialogAction::Close;
                        }
                    });

                    render_header(ui, palette);
                    ui.add_space(16.0);
                    render_step_indicator(ui, palette, wizard.step());
                    ui.add_space(20.0);

                    egui::ScrollArea::vertical()
                        .id_source("booking_steps")
                        .max_height(screen.height() * 0.6)
                        .show(ui, |ui| {
                            let step_action = match wizard.step() {
                                BookingStep::Details => steps::render_details(ui, wizard, palette),
                                BookingStep::Schedule => steps::render_schedule(ui, wizard, palette),
                                BookingStep::Confirm => steps::render_confirm(ui, wizard, palette),
                            };

                            match step_action {
                                StepAction::None => {}
                                StepAction::Next => {
                                    wizard.next();
                                }
                                StepAction::Back => {
                                    wizard.back();
                                }
                                StepAction::Submit => action = BookingDialogAction::Submit,
                            }
                        });
                });
        });

    action
}

fn render_header(ui: &mut egui::Ui, palette: &YogaPalette) {
    ui.vertical_centered(|ui| {
        egui::Frame::none()
            .fill(palette.accent_soft)
            .rounding(PILL_ROUNDING * 2.0)
            .inner_margin(egui::Margin::same(12.0))
            .show(ui, |ui| {
                ui.label(RichText::new("📅").size(24.0).color(palette.accent));
            });
        ui.add_space(8.0);
        ui.label(
            RichText::new("Book Your Session")
                .size(26.0)
                .strong()
                .color(palette.text_primary),
        );
        ui.label(RichText::new("Experience personalized yoga with Maya").color(palette.text_secondary));
    });
}

fn render_step_indicator(ui: &mut egui::Ui, palette: &YogaPalette, current: BookingStep) {
    ui.columns(BookingStep::ALL.len(), |columns| {
        for (column, step) in columns.iter_mut().zip(BookingStep::ALL) {
            column.vertical_centered(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::splat(32.0), Sense::hover());
                let painter = ui.painter();
                if step == current {
                    painter.circle_filled(rect.center(), 16.0, palette.accent);
                } else {
                    painter.circle_filled(rect.center(), 16.0, palette.surface);
                    painter.circle_stroke(
                        rect.center(),
                        15.0,
                        egui::Stroke::new(2.0, Color32::from_gray(209)),
                    );
                }
                let number_color = if step == current {
                    palette.footer_text
                } else {
                    palette.text_primary
                };
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    step.number().to_string(),
                    egui::FontId::proportional(14.0),
                    number_color,
                );
                ui.label(RichText::new(step.label()).small().color(palette.text_secondary));
            });
        }
    });
}
