use chrono::{Local, NaiveDate};
use egui::{RichText, Stroke};
use egui_extras::DatePickerButton;

use crate::models::booking::{BookingField, SessionType, TIME_SLOTS};
use crate::services::booking::BookingWizard;
use crate::ui_egui::theme::YogaPalette;
use crate::ui_egui::widgets::{field_label, primary_button, secondary_button, CARD_ROUNDING};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum StepAction {
    None,
    Next,
    Back,
    Submit,
}

pub(super) fn render_details(
    ui: &mut egui::Ui,
    wizard: &mut BookingWizard,
    palette: &YogaPalette,
) -> StepAction {
    let form = wizard.form_mut();

    text_input(ui, palette, "Full Name", form.field_mut(BookingField::Name), "Your name");
    text_input(ui, palette, "Email", form.field_mut(BookingField::Email), "your@email.com");
    text_input(ui, palette, "Phone", form.field_mut(BookingField::Phone), "(123) 456-7890");

    ui.add_space(12.0);
    let mut action = StepAction::None;
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        if primary_button(ui, palette, "  Next: Choose Session  ").clicked() {
            action = StepAction::Next;
        }
    });
    action
}

pub(super) fn render_schedule(
    ui: &mut egui::Ui,
    wizard: &mut BookingWizard,
    palette: &YogaPalette,
) -> StepAction {
    field_label(ui, palette, "Session Type");
    ui.columns(2, |columns| {
        for (index, session_type) in SessionType::ALL.into_iter().enumerate() {
            let column = &mut columns[index % 2];
            let selected = wizard.form().session_type == session_type;
            if session_card(column, palette, session_type, selected) {
                wizard.select_session_type(session_type);
            }
        }
    });
    ui.add_space(8.0);

    let form = wizard.form_mut();
    ui.columns(2, |columns| {
        field_label(&mut columns[0], palette, "Date");
        date_input(&mut columns[0], form.field_mut(BookingField::Date));

        field_label(&mut columns[1], palette, "Time");
        let time = form.field_mut(BookingField::Time);
        let selected_text = if time.is_empty() {
            "Select time".to_string()
        } else {
            time.clone()
        };
        egui::ComboBox::from_id_source("booking_time")
            .selected_text(selected_text)
            .width(columns[1].available_width())
            .show_ui(&mut columns[1], |ui| {
                ui.selectable_value(time, String::new(), "Select time");
                for slot in TIME_SLOTS {
                    ui.selectable_value(time, slot.to_string(), slot);
                }
            });
    });
    ui.add_space(8.0);

    field_label(ui, palette, "Special Requests");
    ui.add(
        egui::TextEdit::multiline(form.field_mut(BookingField::Message))
            .desired_rows(3)
            .desired_width(f32::INFINITY)
            .hint_text("Any special requests or notes..."),
    );

    ui.add_space(12.0);
    navigation_row(ui, palette, "  Next: Confirm  ", StepAction::Next)
}

pub(super) fn render_confirm(
    ui: &mut egui::Ui,
    wizard: &mut BookingWizard,
    palette: &YogaPalette,
) -> StepAction {
    let summary = wizard.summary();

    egui::Frame::none()
        .fill(palette.accent_soft)
        .rounding(CARD_ROUNDING)
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(
                RichText::new("Booking Summary")
                    .size(18.0)
                    .strong()
                    .color(palette.text_primary),
            );
            ui.add_space(8.0);
            egui::Grid::new("booking_summary")
                .num_columns(2)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    for (label, value) in summary.rows() {
                        ui.label(RichText::new(format!("{label}:")).color(palette.text_secondary));
                        ui.label(RichText::new(value).strong().color(palette.text_primary));
                        ui.end_row();
                    }
                });
        });

    ui.add_space(12.0);
    navigation_row(ui, palette, "  Confirm Booking  ", StepAction::Submit)
}

/// "Back" on the left, the forward button on the right
fn navigation_row(
    ui: &mut egui::Ui,
    palette: &YogaPalette,
    forward_label: &str,
    forward: StepAction,
) -> StepAction {
    let mut action = StepAction::None;
    ui.horizontal(|ui| {
        if secondary_button(ui, palette, "  Back  ").clicked() {
            action = StepAction::Back;
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if primary_button(ui, palette, forward_label).clicked() {
                action = forward;
            }
        });
    });
    action
}

fn text_input(ui: &mut egui::Ui, palette: &YogaPalette, label: &str, value: &mut String, hint: &str) {
    field_label(ui, palette, label);
    ui.add(
        egui::TextEdit::singleline(value)
            .desired_width(f32::INFINITY)
            .hint_text(hint),
    );
    ui.add_space(8.0);
}

/// Free-text date with a picker that writes `YYYY-MM-DD`
fn date_input(ui: &mut egui::Ui, date: &mut String) {
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(date)
                .desired_width(ui.available_width() - 40.0)
                .hint_text("YYYY-MM-DD"),
        );

        let mut picked = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .unwrap_or_else(|_| Local::now().date_naive());
        let picker = DatePickerButton::new(&mut picked).id_source("booking_date");
        if ui.add(picker).changed() {
            *date = picked.format(DATE_FORMAT).to_string();
        }
    });
}

/// Radio-style card for one session type. Returns true if clicked.
fn session_card(
    ui: &mut egui::Ui,
    palette: &YogaPalette,
    session_type: SessionType,
    selected: bool,
) -> bool {
    let (fill, stroke) = if selected {
        (palette.modal_background, Stroke::new(2.0, palette.accent))
    } else {
        (palette.surface, Stroke::new(2.0, egui::Color32::from_gray(229)))
    };

    let response = egui::Frame::none()
        .fill(fill)
        .stroke(stroke)
        .rounding(CARD_ROUNDING / 2.0)
        .inner_margin(egui::Margin::same(10.0))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                let mut checked = selected;
                ui.radio_value(&mut checked, true, "");
                ui.label(RichText::new(session_type.icon()).color(palette.accent));
                ui.label(RichText::new(session_type.label()).color(palette.text_primary));
                checked != selected
            })
            .inner
        });

    let clicked_radio = response.inner;
    let clicked_card = response.response.interact(egui::Sense::click()).clicked();
    ui.add_space(6.0);
    clicked_radio || clicked_card
}
