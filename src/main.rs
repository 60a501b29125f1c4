// Luna Yoga Application
// Main entry point

use luna_yoga::services::config::load_config_or_default;
use luna_yoga::ui_egui::LunaYogaApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Luna Yoga");

    let config = load_config_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Luna Yoga with Maya")
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Luna Yoga",
        options,
        Box::new(move |cc| Ok(Box::new(LunaYogaApp::new(cc, config)))),
    )
}
