// Service module exports

pub mod booking;
pub mod config;
pub mod content;
pub mod notification;
pub mod page;
pub mod scroll;
pub mod section_tracker;
pub mod submission;
pub mod viewport;
