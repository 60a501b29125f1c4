mod context;
mod lifecycle;
mod navigation;
mod toast;

use std::time::Instant;

use self::context::AppContext;
use self::toast::ToastManager;
use crate::models::offering::studio_offerings;
use crate::services::page::PageState;
use crate::ui_egui::booking_dialog::{render_booking_dialog, BookingDialogAction};
use crate::ui_egui::sections::{render_page, PageContent, PageRequest};
use crate::ui_egui::theme::YogaPalette;
use crate::ui_egui::viewport::EguiViewport;

pub struct LunaYogaApp {
    /// Loaded content and the booking submission / notification services
    context: AppContext,
    /// Theme, active section, mobile menu and booking wizard
    page: PageState,
    /// Scroll geometry recorded from the main scroll area
    viewport: EguiViewport,
    /// Palette currently applied to the egui context
    palette: YogaPalette,
    toast_manager: ToastManager,
}

impl eframe::App for LunaYogaApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}

impl LunaYogaApp {
    fn render_main_panel(&mut self, ctx: &egui::Context, requests: &mut Vec<PageRequest>) {
        let content = PageContent {
            offerings: studio_offerings(),
            schedule: self.context.schedule(),
        };
        let palette = &self.palette;
        let viewport = &mut self.viewport;

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(palette.page_background))
            .show(ctx, |ui| {
                let visible_height = ui.available_height();

                let mut scroll_area = egui::ScrollArea::vertical()
                    .id_source("page_scroll")
                    .auto_shrink([false; 2])
                    .enable_scrolling(!viewport.is_scroll_locked());
                if let Some(offset) = viewport.animated_offset(Instant::now()) {
                    scroll_area = scroll_area.vertical_scroll_offset(offset);
                }

                let output = scroll_area.show(ui, |ui| {
                    render_page(ui, palette, &content, visible_height, viewport, requests);
                });
                viewport.record_offset(output.state.offset.y);
            });

        if self.viewport.is_animating() {
            ctx.request_repaint();
        }
    }

    fn render_booking_modal(&mut self, ctx: &egui::Context) {
        let Some(wizard) = self.page.booking_mut() else {
            return;
        };

        match render_booking_dialog(ctx, wizard, &self.palette) {
            BookingDialogAction::None => {}
            BookingDialogAction::Close => self.page.close_booking(&mut self.viewport),
            BookingDialogAction::Submit => self.submit_booking(),
        }
    }

    fn submit_booking(&mut self) {
        match self
            .page
            .submit_booking(&mut self.viewport, self.context.submitter())
        {
            Ok(acknowledgement) => {
                self.toast_manager.success(acknowledgement.message.clone());
                if let Err(e) = self
                    .context
                    .notification_service()
                    .show_booking_acknowledgement(&acknowledgement.message)
                {
                    log::warn!("{}", e);
                }
            }
            Err(e) => log::warn!("Booking submission ignored: {}", e),
        }
    }

    fn consume_page_requests(&mut self, requests: Vec<PageRequest>) {
        for request in requests {
            match request {
                PageRequest::ScrollTo(section) => {
                    self.page.scroll_to_section(&mut self.viewport, section);
                }
                PageRequest::ToggleTheme => {
                    self.page.toggle_theme();
                }
                PageRequest::ToggleMobileMenu => self.page.toggle_mobile_menu(),
                PageRequest::OpenBooking => self.page.open_booking(&mut self.viewport),
            }
        }
    }

    /// Re-apply the palette when the theme mode changed since the last frame
    fn sync_palette(&mut self, ctx: &egui::Context) {
        if self.palette.mode != self.page.theme() {
            self.palette = YogaPalette::for_mode(self.page.theme());
            self.palette.apply_to_context(ctx);
        }
    }
}
