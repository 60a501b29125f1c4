use crate::models::section::Section;
use crate::services::viewport::Viewport;

/// Works out which section is under the top of the viewport.
///
/// On each observation the scroll offset plus a fixed lookahead is tested
/// against every section in page order; the first section containing that
/// probe becomes active. When nothing matches the previous section is kept.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    active: Section,
    lookahead: f32,
}

impl SectionTracker {
    pub const DEFAULT_LOOKAHEAD: f32 = 100.0;

    pub fn new(lookahead: f32) -> Self {
        Self {
            active: Section::Hero,
            lookahead,
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn lookahead(&self) -> f32 {
        self.lookahead
    }

    /// The section containing `scroll_offset + lookahead`, if any
    pub fn locate(&self, viewport: &dyn Viewport) -> Option<Section> {
        let probe = viewport.scroll_offset() + self.lookahead;
        Section::ALL.into_iter().find(|section| {
            viewport
                .section_extent(*section)
                .is_some_and(|extent| extent.contains(probe))
        })
    }

    /// Update the active section from the viewport. Returns true if it changed.
    pub fn observe(&mut self, viewport: &dyn Viewport) -> bool {
        match self.locate(viewport) {
            Some(section) if section != self.active => {
                log::debug!("Active section changed: {} -> {}", self.active, section);
                self.active = section;
                true
            }
            _ => false,
        }
    }
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LOOKAHEAD)
    }
}
