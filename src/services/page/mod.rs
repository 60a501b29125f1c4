//! Page-level state owned by the application root.
//!
//! Theme, active section, the mobile menu and the booking wizard all live
//! here. Renderers get a `&mut PageState` for the frame and call the
//! operations below in response to clicks, input and scrolling.

use crate::models::config::AppConfig;
use crate::models::section::Section;
use crate::models::theme_mode::ThemeMode;
use crate::services::booking::{BookingError, BookingWizard};
use crate::services::scroll::SmoothScroller;
use crate::services::section_tracker::SectionTracker;
use crate::services::submission::{BookingAcknowledgement, BookingSubmitter};
use crate::services::viewport::Viewport;

#[derive(Debug, Clone)]
pub struct PageState {
    theme: ThemeMode,
    tracker: SectionTracker,
    scroller: SmoothScroller,
    mobile_menu_open: bool,
    /// Present exactly while the booking modal is open
    booking: Option<BookingWizard>,
}

impl PageState {
    pub fn new(theme: ThemeMode, tracker: SectionTracker, scroller: SmoothScroller) -> Self {
        Self {
            theme,
            tracker,
            scroller,
            mobile_menu_open: false,
            booking: None,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.initial_theme,
            SectionTracker::new(config.scroll_lookahead),
            SmoothScroller::new(config.header_offset),
        )
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggled();
        log::info!("Theme switched to '{}'", self.theme);
        self.theme
    }

    pub fn active_section(&self) -> Section {
        self.tracker.active()
    }

    /// Scroll event handler. Returns true if the active section changed.
    pub fn on_scroll(&mut self, viewport: &dyn Viewport) -> bool {
        self.tracker.observe(viewport)
    }

    /// Close the mobile menu and smooth-scroll to `section` if it is laid out
    pub fn scroll_to_section(&mut self, viewport: &mut dyn Viewport, section: Section) -> bool {
        self.mobile_menu_open = false;
        self.scroller.scroll_to(viewport, section)
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn is_booking_open(&self) -> bool {
        self.booking.is_some()
    }

    pub fn booking(&self) -> Option<&BookingWizard> {
        self.booking.as_ref()
    }

    pub fn booking_mut(&mut self) -> Option<&mut BookingWizard> {
        self.booking.as_mut()
    }

    /// Open the booking modal on a fresh wizard and lock page scrolling.
    ///
    /// Any partially completed booking from an earlier opening is gone by now;
    /// every opening starts again at the details step.
    pub fn open_booking(&mut self, viewport: &mut dyn Viewport) {
        self.booking = Some(BookingWizard::new());
        viewport.set_scroll_locked(true);
        log::info!("Booking modal opened");
    }

    /// Dismiss the modal, discarding the form, and unlock scrolling
    pub fn close_booking(&mut self, viewport: &mut dyn Viewport) {
        if self.booking.take().is_some() {
            log::info!("Booking modal closed");
        }
        viewport.set_scroll_locked(false);
    }

    /// Hand the confirmed form to `submitter` and close the modal.
    ///
    /// Fails without side effects if no booking is open or it is not on the
    /// confirm step.
    pub fn submit_booking(
        &mut self,
        viewport: &mut dyn Viewport,
        submitter: &dyn BookingSubmitter,
    ) -> Result<BookingAcknowledgement, BookingError> {
        let wizard = self.booking.take().ok_or(BookingError::NotOpen)?;
        if !wizard.can_submit() {
            let step = wizard.step();
            self.booking = Some(wizard);
            return Err(BookingError::NotReadyToSubmit { step });
        }

        let request = wizard.submit()?;
        let acknowledgement = submitter.submit(&request);
        viewport.set_scroll_locked(false);
        log::info!("Booking submitted and modal closed");
        Ok(acknowledgement)
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}
