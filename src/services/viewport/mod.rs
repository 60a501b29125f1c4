//! Viewport abstraction used by the section tracker and the smooth scroller.
//!
//! The page logic never talks to egui directly. It reads the scroll offset and
//! section extents through this trait and issues scroll commands back through
//! it, which keeps the tracking and scrolling rules testable without a window.

use crate::models::section::Section;

/// Vertical extent of a section in page (content) coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionExtent {
    pub top: f32,
    pub height: f32,
}

impl SectionExtent {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Half-open containment: `top <= offset < top + height`
    pub fn contains(&self, offset: f32) -> bool {
        offset >= self.top && offset < self.bottom()
    }
}

/// Scroll position, section geometry and scroll commands of the page
#[cfg_attr(test, mockall::automock)]
pub trait Viewport {
    /// Current vertical scroll offset
    fn scroll_offset(&self) -> f32;

    /// Extent of a section, or `None` if it has not been laid out
    fn section_extent(&self, section: Section) -> Option<SectionExtent>;

    /// Start a smooth scroll towards `offset`, replacing any running animation
    fn smooth_scroll_to(&mut self, offset: f32);

    /// Lock or unlock page scrolling (used while the booking modal is open)
    fn set_scroll_locked(&mut self, locked: bool);
}
