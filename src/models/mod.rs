// Module exports for models

pub mod booking;
pub mod config;
pub mod offering;
pub mod schedule;
pub mod section;
pub mod theme_mode;
