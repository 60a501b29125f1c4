// Booking model module
// Form data, steps and session types for the booking wizard

use serde::{Deserialize, Serialize};
use std::fmt;

/// Times offered in the schedule step. An empty time means none was picked.
pub const TIME_SLOTS: [&str; 5] = ["9:00 AM", "11:00 AM", "2:00 PM", "5:00 PM", "7:00 PM"];

/// Kind of session being requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    #[default]
    Private,
    Retreat,
    Online,
    Couple,
}

impl SessionType {
    pub const ALL: [SessionType; 4] = [
        SessionType::Private,
        SessionType::Retreat,
        SessionType::Online,
        SessionType::Couple,
    ];

    /// Identifier shown in the booking summary
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionType::Private => "private",
            SessionType::Retreat => "retreat",
            SessionType::Online => "online",
            SessionType::Couple => "couple",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SessionType::Private => "Private",
            SessionType::Retreat => "Retreat",
            SessionType::Online => "Online",
            SessionType::Couple => "Couple",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SessionType::Private => "🧘",
            SessionType::Retreat => "🌄",
            SessionType::Online => "💻",
            SessionType::Couple => "👥",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-text fields of the booking form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingField {
    Name,
    Email,
    Phone,
    Date,
    Time,
    Message,
}

/// Everything collected across the booking steps
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookingFormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub session_type: SessionType,
    pub date: String,
    pub time: String,
    pub message: String,
}

impl BookingFormData {
    pub fn field(&self, field: BookingField) -> &str {
        match field {
            BookingField::Name => &self.name,
            BookingField::Email => &self.email,
            BookingField::Phone => &self.phone,
            BookingField::Date => &self.date,
            BookingField::Time => &self.time,
            BookingField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: BookingField) -> &mut String {
        match field {
            BookingField::Name => &mut self.name,
            BookingField::Email => &mut self.email,
            BookingField::Phone => &mut self.phone,
            BookingField::Date => &mut self.date,
            BookingField::Time => &mut self.time,
            BookingField::Message => &mut self.message,
        }
    }

    /// True when nothing has been typed and the session type is untouched
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// One of the three wizard pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BookingStep {
    /// Contact details
    #[default]
    Details,
    /// Session type, date, time and requests
    Schedule,
    /// Summary before submitting
    Confirm,
}

impl BookingStep {
    pub const ALL: [BookingStep; 3] = [
        BookingStep::Details,
        BookingStep::Schedule,
        BookingStep::Confirm,
    ];

    /// 1-based step number shown in the step indicator
    pub fn number(&self) -> u8 {
        match self {
            BookingStep::Details => 1,
            BookingStep::Schedule => 2,
            BookingStep::Confirm => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookingStep::Details => "Details",
            BookingStep::Schedule => "Schedule",
            BookingStep::Confirm => "Confirm",
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            BookingStep::Details => Some(BookingStep::Schedule),
            BookingStep::Schedule => Some(BookingStep::Confirm),
            BookingStep::Confirm => None,
        }
    }

    pub fn previous(&self) -> Option<Self> {
        match self {
            BookingStep::Details => None,
            BookingStep::Schedule => Some(BookingStep::Details),
            BookingStep::Confirm => Some(BookingStep::Schedule),
        }
    }
}

impl fmt::Display for BookingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number(), self.label())
    }
}

/// Display lines for the confirmation step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSummary {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub session_type: String,
    pub date_time: String,
    /// Present only when special requests were entered
    pub message: Option<String>,
}

impl BookingSummary {
    pub const NOT_PROVIDED: &'static str = "Not provided";
    pub const NOT_SELECTED: &'static str = "Not selected";

    pub fn from_form(form: &BookingFormData) -> Self {
        let or_not_provided = |value: &str| {
            if value.is_empty() {
                Self::NOT_PROVIDED.to_string()
            } else {
                value.to_string()
            }
        };

        let date_time = if form.date.is_empty() {
            Self::NOT_SELECTED.to_string()
        } else {
            format!("{} at {}", form.date, form.time)
        };

        Self {
            name: or_not_provided(&form.name),
            email: or_not_provided(&form.email),
            phone: or_not_provided(&form.phone),
            session_type: form.session_type.as_str().to_string(),
            date_time,
            message: (!form.message.is_empty()).then(|| form.message.clone()),
        }
    }

    /// Label/value pairs in display order
    pub fn rows(&self) -> Vec<(&'static str, &str)> {
        let mut rows = vec![
            ("Name", self.name.as_str()),
            ("Email", self.email.as_str()),
            ("Phone", self.phone.as_str()),
            ("Session Type", self.session_type.as_str()),
            ("Date & Time", self.date_time.as_str()),
        ];
        if let Some(message) = &self.message {
            rows.push(("Special Requests", message.as_str()));
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_form_defaults_to_private_session() {
        let form = BookingFormData::default();
        assert_eq!(form.session_type, SessionType::Private);
        assert!(form.name.is_empty());
        assert!(form.is_empty());
    }

    #[test]
    fn test_field_mut_targets_matching_field() {
        let mut form = BookingFormData::default();
        form.field_mut(BookingField::Phone).push_str("(123) 456-7890");
        assert_eq!(form.phone, "(123) 456-7890");
        assert_eq!(form.field(BookingField::Phone), "(123) 456-7890");
        assert!(!form.is_empty());
    }

    #[test]
    fn test_session_type_parse() {
        assert_eq!(SessionType::parse("couple"), Some(SessionType::Couple));
        assert_eq!(SessionType::parse("group"), None);
    }

    #[test]
    fn test_step_numbers_stay_in_range() {
        for step in BookingStep::ALL {
            assert!((1..=3).contains(&step.number()));
        }
        assert_eq!(BookingStep::Confirm.next(), None);
        assert_eq!(BookingStep::Details.previous(), None);
    }

    #[test]
    fn test_summary_for_empty_form() {
        let summary = BookingSummary::from_form(&BookingFormData::default());
        assert_eq!(
            summary,
            BookingSummary {
                name: "Not provided".into(),
                email: "Not provided".into(),
                phone: "Not provided".into(),
                session_type: "private".into(),
                date_time: "Not selected".into(),
                message: None,
            }
        );
        assert_eq!(summary.rows().len(), 5);
    }

    #[test]
    fn test_summary_joins_date_and_time() {
        let form = BookingFormData {
            date: "2024-05-01".into(),
            time: "11:00 AM".into(),
            message: "Knee injury".into(),
            ..Default::default()
        };
        let summary = BookingSummary::from_form(&form);
        assert_eq!(summary.date_time, "2024-05-01 at 11:00 AM");
        assert_eq!(summary.rows().last(), Some(&("Special Requests", "Knee injury")));
    }
}
