//! Booking wizard state machine.
//!
//! Details → Schedule → Confirm, with `back` walking the same path in reverse.
//! No field is validated before advancing. A wizard only exists while the
//! booking modal is open, so reopening always starts from a fresh form.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::booking::{BookingField, BookingFormData, BookingStep, BookingSummary, SessionType};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("no booking is in progress")]
    NotOpen,
    #[error("booking cannot be submitted from step {step}")]
    NotReadyToSubmit { step: BookingStep },
}

/// The form handed to a submitter once the user confirms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    #[serde(flatten)]
    pub form: BookingFormData,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingWizard {
    step: BookingStep,
    form: BookingFormData,
}

impl BookingWizard {
    /// Starts at the details step with an empty form
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn form(&self) -> &BookingFormData {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut BookingFormData {
        &mut self.form
    }

    pub fn set_field(&mut self, field: BookingField, value: impl Into<String>) {
        *self.form.field_mut(field) = value.into();
    }

    pub fn select_session_type(&mut self, session_type: SessionType) {
        self.form.session_type = session_type;
    }

    /// Advance one step. Returns false at the confirm step, which has no next.
    pub fn next(&mut self) -> bool {
        match self.step.next() {
            Some(step) => {
                log::debug!("Booking step {} -> {}", self.step, step);
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Go back one step. Returns false at the details step.
    pub fn back(&mut self) -> bool {
        match self.step.previous() {
            Some(step) => {
                log::debug!("Booking step {} -> {}", self.step, step);
                self.step = step;
                true
            }
            None => false,
        }
    }

    pub fn can_submit(&self) -> bool {
        self.step == BookingStep::Confirm
    }

    pub fn summary(&self) -> BookingSummary {
        BookingSummary::from_form(&self.form)
    }

    /// Finish the wizard. Only allowed from the confirm step.
    pub fn submit(self) -> Result<BookingRequest, BookingError> {
        if !self.can_submit() {
            return Err(BookingError::NotReadyToSubmit { step: self.step });
        }
        Ok(BookingRequest { form: self.form })
    }
}
