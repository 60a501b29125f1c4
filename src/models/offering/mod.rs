// Service offering module
// The fixed list of services shown on the page

/// A service card in the "Our Services" section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOffering {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

const OFFERINGS: [ServiceOffering; 3] = [
    ServiceOffering {
        title: "Private Classes",
        description: "Personalized one-on-one sessions tailored to your needs and goals.",
        icon: "🔒",
    },
    ServiceOffering {
        title: "Retreats",
        description: "Immersive experiences in serene locations to deepen your practice.",
        icon: "🌍",
    },
    ServiceOffering {
        title: "Online Sessions",
        description: "Flexible classes from the comfort of your home, live or on-demand.",
        icon: "🎥",
    },
];

/// Services offered by the studio, in display order
pub fn studio_offerings() -> &'static [ServiceOffering] {
    &OFFERINGS
}
