mod app;
mod booking_dialog;
mod sections;
pub mod theme;
pub mod viewport;
mod widgets;

pub use app::LunaYogaApp;
