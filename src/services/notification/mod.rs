use anyhow::Result;
use notify_rust::{Notification, Timeout};

const APP_NAME: &str = "Luna Yoga";

/// Desktop notifications for booking acknowledgements
pub struct NotificationService {
    enabled: bool,
}

impl NotificationService {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Show the acknowledgement for a submitted booking. Does nothing when disabled.
    pub fn show_booking_acknowledgement(&self, message: &str) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        Notification::new()
            .appname(APP_NAME)
            .summary("Booking request sent")
            .body(message)
            .timeout(Timeout::Milliseconds(5000))
            .show()
            .map_err(|e| anyhow::anyhow!("Failed to show notification: {}", e))?;

        Ok(())
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new(false)
    }
}
