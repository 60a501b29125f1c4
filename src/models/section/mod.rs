// Page section module
// Named, vertically stacked regions of the page

use std::fmt;

/// A named region of the page, in top-to-bottom order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Hero,
    Services,
    Schedule,
}

impl Section {
    /// All sections in the order they appear on the page
    pub const ALL: [Section; 3] = [Section::Hero, Section::Services, Section::Schedule];

    /// Sections reachable from the navigation bar
    pub const NAVIGABLE: [Section; 2] = [Section::Services, Section::Schedule];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Services => "services",
            Section::Schedule => "schedule",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }

    /// Position in the page ordering, starting at 0 for the hero
    pub fn index(&self) -> usize {
        match self {
            Section::Hero => 0,
            Section::Services => 1,
            Section::Schedule => 2,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
