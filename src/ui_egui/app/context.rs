use crate::models::schedule::ScheduleEntry;
use crate::services::notification::NotificationService;
use crate::services::submission::BookingSubmitter;

/// Shared access point for content and services that multiple app modules need.
pub struct AppContext {
    schedule: Vec<ScheduleEntry>,
    submitter: Box<dyn BookingSubmitter>,
    notification_service: NotificationService,
}

impl AppContext {
    pub fn new(
        schedule: Vec<ScheduleEntry>,
        submitter: Box<dyn BookingSubmitter>,
        notification_service: NotificationService,
    ) -> Self {
        Self {
            schedule,
            submitter,
            notification_service,
        }
    }

    pub fn schedule(&self) -> &[ScheduleEntry] {
        &self.schedule
    }

    pub fn submitter(&self) -> &dyn BookingSubmitter {
        self.submitter.as_ref()
    }

    pub fn notification_service(&self) -> &NotificationService {
        &self.notification_service
    }
}
