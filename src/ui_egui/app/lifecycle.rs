use std::time::Duration;

use super::context::AppContext;
use super::toast::ToastManager;
use super::LunaYogaApp;
use crate::models::config::AppConfig;
use crate::services::content::load_schedule;
use crate::services::notification::NotificationService;
use crate::services::page::PageState;
use crate::services::submission::LocalAcknowledgement;
use crate::ui_egui::sections::PageRequest;
use crate::ui_egui::theme::YogaPalette;
use crate::ui_egui::viewport::EguiViewport;

impl LunaYogaApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let schedule = load_schedule(config.schedule_path.as_deref());
        log::info!("Loaded {} schedule entries", schedule.len());

        let page = PageState::from_config(&config);
        let viewport = EguiViewport::new(Duration::from_millis(config.scroll_duration_ms));
        let palette = YogaPalette::for_mode(page.theme());
        palette.apply_to_context(&cc.egui_ctx);

        let notification_service = NotificationService::new(config.desktop_notifications);
        let context = AppContext::new(
            schedule,
            Box::new(LocalAcknowledgement),
            notification_service,
        );

        Self {
            context,
            page,
            viewport,
            palette,
            toast_manager: ToastManager::new(),
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_palette(ctx);

        let mut page_requests: Vec<PageRequest> = Vec::new();
        self.render_navigation(ctx, &mut page_requests);
        self.render_main_panel(ctx, &mut page_requests);

        if self.page.is_booking_open() {
            self.render_booking_modal(ctx);
        }

        if !page_requests.is_empty() {
            self.consume_page_requests(page_requests);
        }

        // Scroll events come from the offset recorded this frame
        if self.viewport.take_scroll_event() {
            self.page.on_scroll(&self.viewport);
        }

        // Render toast notifications (last, so they appear on top)
        self.toast_manager.render(ctx, &self.palette);
    }
}
