use crate::services::booking::BookingRequest;

/// Message shown once a booking request has been handed off
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingAcknowledgement {
    pub message: String,
}

/// Receives confirmed booking requests
#[cfg_attr(test, mockall::automock)]
pub trait BookingSubmitter {
    fn submit(&self, request: &BookingRequest) -> BookingAcknowledgement;
}

/// Accepts every request locally; nothing leaves the process.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalAcknowledgement;

impl LocalAcknowledgement {
    pub const MESSAGE: &'static str = "Booking request submitted! We will contact you shortly.";
}

impl BookingSubmitter for LocalAcknowledgement {
    fn submit(&self, request: &BookingRequest) -> BookingAcknowledgement {
        log::info!(
            "Booking request received: session={}, date='{}', time='{}'",
            request.form.session_type,
            request.form.date,
            request.form.time
        );
        BookingAcknowledgement {
            message: Self::MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::booking::BookingFormData;

    #[test]
    fn test_local_acknowledgement_always_succeeds() {
        let request = BookingRequest {
            form: BookingFormData::default(),
        };
        let ack = LocalAcknowledgement.submit(&request);
        assert_eq!(ack.message, LocalAcknowledgement::MESSAGE);
    }
}
