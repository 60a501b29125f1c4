use serde::{Deserialize, Serialize};

/// A class in the weekly schedule, read from bundled data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub title: String,
    pub description: String,
    /// Free-form time label, e.g. "Mon & Wed · 7:00 AM"
    pub time: String,
}

impl ScheduleEntry {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            time: time.into(),
        }
    }
}
