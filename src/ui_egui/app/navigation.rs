use egui::{RichText, Vec2};

use super::LunaYogaApp;
use crate::models::section::Section;
use crate::models::theme_mode::ThemeMode;
use crate::ui_egui::sections::PageRequest;
use crate::ui_egui::widgets::PILL_ROUNDING;

/// Below this window width the nav buttons collapse into the mobile menu
const MOBILE_BREAKPOINT: f32 = 640.0;

/// Navigation bar and mobile menu.
impl LunaYogaApp {
    pub(super) fn render_navigation(&mut self, ctx: &egui::Context, requests: &mut Vec<PageRequest>) {
        let palette = &self.palette;
        let active = self.page.active_section();
        let theme = self.page.theme();
        let menu_open = self.page.is_mobile_menu_open();
        let is_mobile = ctx.screen_rect().width() < MOBILE_BREAKPOINT;

        egui::TopBottomPanel::top("navigation")
            .frame(
                egui::Frame::none()
                    .fill(palette.surface.gamma_multiply(0.92))
                    .inner_margin(egui::Margin::symmetric(20.0, 12.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    egui::Frame::none()
                        .fill(palette.accent_soft)
                        .rounding(PILL_ROUNDING)
                        .inner_margin(egui::Margin::same(6.0))
                        .show(ui, |ui| {
                            ui.label(RichText::new("🌙").size(18.0).color(palette.accent));
                        });
                    ui.label(
                        RichText::new("Luna Yoga")
                            .size(22.0)
                            .strong()
                            .color(palette.text_primary),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if is_mobile {
                            let menu = egui::Button::new(RichText::new("☰").size(20.0)).frame(false);
                            if ui.add(menu).on_hover_text("Menu").clicked() {
                                requests.push(PageRequest::ToggleMobileMenu);
                            }
                            return;
                        }

                        let toggle_icon = match theme {
                            ThemeMode::Calm => "☀",
                            ThemeMode::Focus => "🌙",
                        };
                        let toggle = egui::Button::new(
                            RichText::new(toggle_icon).size(18.0).color(palette.accent_hover),
                        )
                        .fill(palette.accent_soft)
                        .rounding(PILL_ROUNDING)
                        .min_size(Vec2::splat(36.0));
                        if ui.add(toggle).on_hover_text("Toggle theme").clicked() {
                            requests.push(PageRequest::ToggleTheme);
                        }

                        ui.add_space(8.0);
                        // Right-to-left layout: add in reverse so they read left to right
                        for section in Section::NAVIGABLE.iter().rev() {
                            if nav_item(ui, palette, *section, active == *section) {
                                requests.push(PageRequest::ScrollTo(*section));
                            }
                        }
                    });
                });

                if is_mobile && menu_open {
                    ui.add_space(8.0);
                    ui.separator();
                    ui.vertical(|ui| {
                        for section in Section::NAVIGABLE {
                            if nav_item(ui, palette, section, active == section) {
                                requests.push(PageRequest::ScrollTo(section));
                            }
                        }
                        ui.add_space(4.0);
                        let switch = egui::Button::new(
                            RichText::new(theme.switch_label()).color(palette.accent_hover),
                        )
                        .fill(palette.accent_soft)
                        .rounding(PILL_ROUNDING);
                        if ui.add(switch).clicked() {
                            requests.push(PageRequest::ToggleTheme);
                        }
                    });
                }
            });
    }
}

/// Section button, highlighted when it is the active section. Returns true if clicked.
fn nav_item(
    ui: &mut egui::Ui,
    palette: &crate::ui_egui::theme::YogaPalette,
    section: Section,
    active: bool,
) -> bool {
    let fill = if active {
        palette.accent_highlight
    } else {
        egui::Color32::TRANSPARENT
    };
    let button = egui::Button::new(RichText::new(capitalize(section.id())).color(palette.text_primary))
        .fill(fill)
        .rounding(PILL_ROUNDING)
        .min_size(Vec2::new(0.0, 32.0));
    ui.add(button).clicked()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
