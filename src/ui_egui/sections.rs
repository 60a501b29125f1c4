//! Page sections drawn inside the main scroll area.
//!
//! Every section records its extent in the viewport as it is laid out so the
//! tracker and the scroller can work with real geometry on the next frame.
//! Clicks are not applied here; they are pushed as [`PageRequest`]s and
//! handled by the app once drawing is done.

use chrono::{Datelike, Local};
use egui::{Align, Color32, Layout, RichText, Stroke, Vec2};

use crate::models::offering::ServiceOffering;
use crate::models::schedule::ScheduleEntry;
use crate::models::section::Section;
use crate::services::viewport::SectionExtent;
use crate::ui_egui::theme::YogaPalette;
use crate::ui_egui::viewport::EguiViewport;
use crate::ui_egui::widgets::{card_frame, primary_button, CARD_ROUNDING, PILL_ROUNDING};

const CONTENT_MAX_WIDTH: f32 = 960.0;
const SECTION_PADDING: f32 = 64.0;
/// Below this width service cards stack instead of sitting side by side
const WIDE_LAYOUT_WIDTH: f32 = 720.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    ScrollTo(Section),
    ToggleTheme,
    ToggleMobileMenu,
    OpenBooking,
}

/// Static content shown on the page
pub struct PageContent<'a> {
    pub offerings: &'a [ServiceOffering],
    pub schedule: &'a [ScheduleEntry],
}

/// Draw all sections and the footer. `visible_height` is the height of the
/// scroll area, used so the hero fills the first screen.
pub fn render_page(
    ui: &mut egui::Ui,
    palette: &YogaPalette,
    content: &PageContent<'_>,
    visible_height: f32,
    viewport: &mut EguiViewport,
    requests: &mut Vec<PageRequest>,
) {
    let origin = ui.min_rect().top();
    ui.spacing_mut().item_spacing.y = 0.0;

    record_section(ui, viewport, origin, Section::Hero, |ui| {
        render_hero(ui, palette, visible_height, requests)
    });
    record_section(ui, viewport, origin, Section::Services, |ui| {
        render_services(ui, palette, content.offerings)
    });
    record_section(ui, viewport, origin, Section::Schedule, |ui| {
        render_schedule(ui, palette, content.schedule)
    });

    render_footer(ui, palette);
}

fn record_section(
    ui: &mut egui::Ui,
    viewport: &mut EguiViewport,
    origin: f32,
    section: Section,
    add: impl FnOnce(&mut egui::Ui),
) {
    let rect = ui.scope(add).response.rect;
    viewport.record_section(section, SectionExtent::new(rect.top() - origin, rect.height()));
}

/// Centre a column of at most `CONTENT_MAX_WIDTH` inside the full-width section
fn centered_column(ui: &mut egui::Ui, add: impl FnOnce(&mut egui::Ui)) {
    let width = ui.available_width().min(CONTENT_MAX_WIDTH);
    let side = ((ui.available_width() - width) / 2.0).max(0.0);
    ui.horizontal(|ui| {
        ui.add_space(side);
        ui.vertical(|ui| {
            ui.set_width(width);
            ui.spacing_mut().item_spacing.y = 8.0;
            add(ui);
        });
    });
}

fn section_heading(ui: &mut egui::Ui, palette: &YogaPalette, text: &str) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(text).size(32.0).strong().color(palette.text_primary));
    });
    ui.add_space(32.0);
}

fn render_hero(
    ui: &mut egui::Ui,
    palette: &YogaPalette,
    visible_height: f32,
    requests: &mut Vec<PageRequest>,
) {
    ui.set_min_height(visible_height);
    ui.add_space(visible_height * 0.22);

    ui.vertical_centered(|ui| {
        ui.spacing_mut().item_spacing.y = 12.0;
        ui.label(
            RichText::new("Find Your Inner Peace")
                .size(44.0)
                .strong()
                .color(palette.text_primary),
        );
        ui.label(
            RichText::new("Mindful yoga with Maya: private classes, retreats and online sessions.")
                .size(18.0)
                .color(palette.text_secondary),
        );
        ui.add_space(16.0);

        if primary_button(ui, palette, "  Book a Session  ").clicked() {
            requests.push(PageRequest::OpenBooking);
        }

        ui.add_space(48.0);
        let scroll_down = egui::Button::new(RichText::new("⌄").size(28.0).color(palette.accent))
            .frame(false);
        if ui.add(scroll_down).on_hover_text("Scroll down").clicked() {
            requests.push(PageRequest::ScrollTo(Section::Services));
        }
    });
}

fn render_services(ui: &mut egui::Ui, palette: &YogaPalette, offerings: &[ServiceOffering]) {
    ui.add_space(SECTION_PADDING);
    centered_column(ui, |ui| {
        section_heading(ui, palette, "Our Services");

        if ui.available_width() >= WIDE_LAYOUT_WIDTH && !offerings.is_empty() {
            ui.columns(offerings.len(), |columns| {
                for (column, offering) in columns.iter_mut().zip(offerings) {
                    render_service_card(column, palette, offering);
                }
            });
        } else {
            for offering in offerings {
                render_service_card(ui, palette, offering);
                ui.add_space(16.0);
            }
        }
    });
    ui.add_space(SECTION_PADDING);
}

fn render_service_card(ui: &mut egui::Ui, palette: &YogaPalette, offering: &ServiceOffering) {
    card_frame(palette).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.vertical_centered(|ui| {
            egui::Frame::none()
                .fill(palette.accent_highlight)
                .rounding(PILL_ROUNDING * 2.0)
                .inner_margin(egui::Margin::same(14.0))
                .show(ui, |ui| {
                    ui.label(RichText::new(offering.icon).size(28.0).color(palette.accent));
                });
            ui.add_space(12.0);
            ui.label(
                RichText::new(offering.title)
                    .size(20.0)
                    .strong()
                    .color(palette.text_primary),
            );
            ui.add_space(6.0);
            ui.label(RichText::new(offering.description).color(palette.text_secondary));
        });
    });
}

fn render_schedule(ui: &mut egui::Ui, palette: &YogaPalette, schedule: &[ScheduleEntry]) {
    ui.add_space(SECTION_PADDING);
    centered_column(ui, |ui| {
        section_heading(ui, palette, "Weekly Schedule");

        if schedule.is_empty() {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("No classes scheduled this week.").color(palette.text_secondary));
            });
        }

        for (index, entry) in schedule.iter().enumerate() {
            render_schedule_row(ui, palette, index, entry);
            ui.add_space(16.0);
        }
    });
    ui.add_space(SECTION_PADDING);
}

fn render_schedule_row(ui: &mut egui::Ui, palette: &YogaPalette, index: usize, entry: &ScheduleEntry) {
    ui.horizontal(|ui| {
        // Timeline dot with the class number
        let (dot_rect, _) = ui.allocate_exact_size(Vec2::splat(36.0), egui::Sense::hover());
        let painter = ui.painter();
        painter.line_segment(
            [
                dot_rect.center_top() - Vec2::new(0.0, 16.0),
                dot_rect.center_bottom() + Vec2::new(0.0, 48.0),
            ],
            Stroke::new(2.0, palette.border),
        );
        painter.circle_filled(dot_rect.center(), 16.0, palette.accent);
        painter.text(
            dot_rect.center(),
            egui::Align2::CENTER_CENTER,
            (index + 1).to_string(),
            egui::FontId::proportional(14.0),
            Color32::WHITE,
        );

        ui.add_space(12.0);
        card_frame(palette).show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(&entry.title)
                            .size(18.0)
                            .strong()
                            .color(palette.text_primary),
                    );
                    ui.label(RichText::new(&entry.description).color(palette.text_secondary));
                });
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    egui::Frame::none()
                        .fill(palette.accent_soft)
                        .rounding(CARD_ROUNDING)
                        .inner_margin(egui::Margin::symmetric(12.0, 4.0))
                        .show(ui, |ui| {
                            ui.label(RichText::new(&entry.time).color(palette.accent_hover).strong());
                        });
                });
            });
        });
    });
}

fn render_footer(ui: &mut egui::Ui, palette: &YogaPalette) {
    egui::Frame::none()
        .fill(palette.footer_background)
        .inner_margin(egui::Margin::symmetric(16.0, 32.0))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.spacing_mut().item_spacing.y = 6.0;
                ui.label(
                    RichText::new(format!(
                        "© {} Luna Yoga with Maya. All rights reserved.",
                        Local::now().year()
                    ))
                    .color(palette.footer_text),
                );
                ui.label(
                    RichText::new("Find your center through conscious movement.")
                        .italics()
                        .color(palette.footer_text),
                );
            });
        });
}
