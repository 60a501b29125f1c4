//! Smooth scrolling to page sections.
//!
//! [`SmoothScroller`] turns a section into a target offset, leaving room for the
//! navigation bar. [`ScrollAnimation`] is the per-frame interpolation the egui
//! viewport runs to get there.

use std::time::{Duration, Instant};

use crate::models::section::Section;
use crate::services::viewport::{SectionExtent, Viewport};

#[derive(Debug, Clone)]
pub struct SmoothScroller {
    header_offset: f32,
}

impl SmoothScroller {
    pub const DEFAULT_HEADER_OFFSET: f32 = 80.0;

    pub fn new(header_offset: f32) -> Self {
        Self { header_offset }
    }

    pub fn header_offset(&self) -> f32 {
        self.header_offset
    }

    pub fn target_offset(&self, extent: SectionExtent) -> f32 {
        extent.top - self.header_offset
    }

    /// Scroll to `section`. Returns false (and does nothing) if it has no extent.
    pub fn scroll_to(&self, viewport: &mut dyn Viewport, section: Section) -> bool {
        let Some(extent) = viewport.section_extent(section) else {
            log::debug!("Skipping scroll to '{}': section not laid out", section);
            return false;
        };

        let target = self.target_offset(extent);
        log::debug!("Scrolling to '{}' at offset {:.1}", section, target);
        viewport.smooth_scroll_to(target);
        true
    }
}

impl Default for SmoothScroller {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HEADER_OFFSET)
    }
}

/// Ease-in-out interpolation between two scroll offsets
#[derive(Debug, Clone, Copy)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl ScrollAnimation {
    /// Negative targets are clamped to the top of the page.
    pub fn new(from: f32, to: f32, started_at: Instant, duration: Duration) -> Self {
        Self {
            from,
            to: to.max(0.0),
            started_at,
            duration,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Fraction of the animation completed at `now`, in [0, 1]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn offset_at(&self, now: Instant) -> f32 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * ease_in_out_cubic(t)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
