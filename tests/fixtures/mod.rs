// Test fixtures - reusable test data
// Provides a page layout and an in-memory viewport shared by the test files

#![allow(dead_code)]

use luna_yoga::models::section::Section;
use luna_yoga::services::viewport::{SectionExtent, Viewport};

/// Standard page geometry: hero 0..600, services 600..1300, schedule 1300..2100
pub mod layout {
    use super::*;

    pub const HERO: SectionExtent = SectionExtent {
        top: 0.0,
        height: 600.0,
    };
    pub const SERVICES: SectionExtent = SectionExtent {
        top: 600.0,
        height: 700.0,
    };
    pub const SCHEDULE: SectionExtent = SectionExtent {
        top: 1300.0,
        height: 800.0,
    };

    pub fn page_height() -> f32 {
        SCHEDULE.bottom()
    }
}

/// Viewport that jumps straight to scroll targets and records every command
#[derive(Debug, Clone, Default)]
pub struct FakeViewport {
    pub offset: f32,
    pub extents: Vec<(Section, SectionExtent)>,
    pub scroll_targets: Vec<f32>,
    pub locked: bool,
}

impl FakeViewport {
    /// Viewport over the standard three-section page
    pub fn standard_page() -> Self {
        Self {
            extents: vec![
                (Section::Hero, layout::HERO),
                (Section::Services, layout::SERVICES),
                (Section::Schedule, layout::SCHEDULE),
            ],
            ..Default::default()
        }
    }

    /// Viewport with only the given sections laid out
    pub fn with_sections(extents: Vec<(Section, SectionExtent)>) -> Self {
        Self {
            extents,
            ..Default::default()
        }
    }

    pub fn scroll_by_user(&mut self, offset: f32) {
        self.offset = offset;
    }
}

impl Viewport for FakeViewport {
    fn scroll_offset(&self) -> f32 {
        self.offset
    }

    fn section_extent(&self, section: Section) -> Option<SectionExtent> {
        self.extents
            .iter()
            .find(|(candidate, _)| *candidate == section)
            .map(|(_, extent)| *extent)
    }

    fn smooth_scroll_to(&mut self, offset: f32) {
        self.scroll_targets.push(offset);
        self.offset = offset;
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.locked = locked;
    }
}
