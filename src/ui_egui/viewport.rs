//! egui implementation of [`Viewport`].
//!
//! The page is drawn inside one vertical `ScrollArea`. Each frame the renderer
//! records where every section landed (in content coordinates) and the offset
//! the scroll area ended up at. Scroll commands become a [`ScrollAnimation`]
//! that is fed back into the scroll area on the following frames.

use std::time::{Duration, Instant};

use crate::models::section::Section;
use crate::services::scroll::ScrollAnimation;
use crate::services::viewport::{SectionExtent, Viewport};

#[derive(Debug)]
pub struct EguiViewport {
    offset: f32,
    /// Offset seen at the last scroll observation
    observed_offset: Option<f32>,
    extents: [Option<SectionExtent>; 3],
    animation: Option<ScrollAnimation>,
    scroll_duration: Duration,
    locked: bool,
}

impl EguiViewport {
    pub fn new(scroll_duration: Duration) -> Self {
        Self {
            offset: 0.0,
            observed_offset: None,
            extents: [None; 3],
            animation: None,
            scroll_duration,
            locked: false,
        }
    }

    /// Offset the scroll area must be forced to this frame, if animating
    pub fn animated_offset(&mut self, now: Instant) -> Option<f32> {
        let animation = self.animation?;
        let offset = animation.offset_at(now);
        if animation.is_finished(now) {
            self.animation = None;
        }
        Some(offset)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.locked
    }

    pub fn record_section(&mut self, section: Section, extent: SectionExtent) {
        self.extents[section.index()] = Some(extent);
    }

    /// Store the offset reported by the scroll area after drawing
    pub fn record_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    /// True once per change of offset; stands in for a scroll event.
    pub fn take_scroll_event(&mut self) -> bool {
        let changed = self
            .observed_offset
            .map_or(true, |previous| (previous - self.offset).abs() > f32::EPSILON);
        self.observed_offset = Some(self.offset);
        changed
    }
}

impl Viewport for EguiViewport {
    fn scroll_offset(&self) -> f32 {
        self.offset
    }

    fn section_extent(&self, section: Section) -> Option<SectionExtent> {
        self.extents[section.index()]
    }

    fn smooth_scroll_to(&mut self, offset: f32) {
        self.animation = Some(ScrollAnimation::new(
            self.offset,
            offset,
            Instant::now(),
            self.scroll_duration,
        ));
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.locked = locked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecorded_sections_have_no_extent() {
        let viewport = EguiViewport::new(Duration::from_millis(100));
        assert_eq!(viewport.section_extent(Section::Services), None);
    }

    #[test]
    fn test_record_section() {
        let mut viewport = EguiViewport::new(Duration::from_millis(100));
        viewport.record_section(Section::Schedule, SectionExtent::new(1200.0, 400.0));
        assert_eq!(
            viewport.section_extent(Section::Schedule),
            Some(SectionExtent::new(1200.0, 400.0))
        );
    }

    #[test]
    fn test_animation_runs_from_current_offset_and_finishes() {
        let mut viewport = EguiViewport::new(Duration::from_millis(100));
        viewport.record_offset(50.0);
        viewport.smooth_scroll_to(600.0);
        assert!(viewport.is_animating());

        let later = Instant::now() + Duration::from_secs(1);
        assert_eq!(viewport.animated_offset(later), Some(600.0));
        assert!(!viewport.is_animating());
        assert_eq!(viewport.animated_offset(later), None);
    }

    #[test]
    fn test_scroll_events_fire_on_change_only() {
        let mut viewport = EguiViewport::new(Duration::from_millis(100));
        assert!(viewport.take_scroll_event());
        assert!(!viewport.take_scroll_event());
        viewport.record_offset(10.0);
        assert!(viewport.take_scroll_event());
        assert!(!viewport.take_scroll_event());
    }

    #[test]
    fn test_scroll_lock_flag() {
        let mut viewport = EguiViewport::new(Duration::from_millis(100));
        viewport.set_scroll_locked(true);
        assert!(viewport.is_scroll_locked());
        viewport.set_scroll_locked(false);
        assert!(!viewport.is_scroll_locked());
    }
}
