// Property-based tests for the booking wizard, theme toggle and section tracker
// Random inputs check the invariants hold for any sequence of user actions

mod fixtures;

use fixtures::{layout, FakeViewport};
use luna_yoga::models::booking::{BookingField, BookingStep, BookingSummary};
use luna_yoga::models::section::Section;
use luna_yoga::models::theme_mode::ThemeMode;
use luna_yoga::services::booking::BookingWizard;
use luna_yoga::services::section_tracker::SectionTracker;
use proptest::prelude::*;

fn theme_mode() -> impl Strategy<Value = ThemeMode> {
    prop_oneof![Just(ThemeMode::Calm), Just(ThemeMode::Focus)]
}

proptest! {
    /// Property: any sequence of next/back keeps the step in range and
    /// lands on the step given by the net number of moves, clamped
    #[test]
    fn prop_wizard_step_stays_in_bounds(moves in prop::collection::vec(any::<bool>(), 0..40)) {
        let mut wizard = BookingWizard::new();
        let mut expected: i32 = 0;

        for forward in moves {
            let moved = if forward { wizard.next() } else { wizard.back() };
            let target = expected + if forward { 1 } else { -1 };
            prop_assert_eq!(moved, (0..=2).contains(&target));
            expected = target.clamp(0, 2);
        }

        prop_assert_eq!(wizard.step(), BookingStep::ALL[expected as usize]);
    }

    /// Property: stepping never touches the form
    #[test]
    fn prop_navigation_preserves_form(
        name in "[A-Za-z ]{0,20}",
        message in ".{0,40}",
        moves in prop::collection::vec(any::<bool>(), 0..12),
    ) {
        let mut wizard = BookingWizard::new();
        wizard.set_field(BookingField::Name, name.clone());
        wizard.set_field(BookingField::Message, message.clone());

        for forward in moves {
            if forward { wizard.next(); } else { wizard.back(); }
        }

        prop_assert_eq!(&wizard.form().name, &name);
        prop_assert_eq!(&wizard.form().message, &message);
    }

    /// Property: special requests appear in the summary exactly when entered
    #[test]
    fn prop_summary_message_only_when_present(message in ".{0,30}") {
        let mut wizard = BookingWizard::new();
        wizard.set_field(BookingField::Message, message.clone());
        let summary = wizard.summary();

        prop_assert_eq!(summary.message.is_some(), !message.is_empty());
        prop_assert_eq!(summary.rows().len(), if message.is_empty() { 5 } else { 6 });
        prop_assert_eq!(summary.name, BookingSummary::NOT_PROVIDED);
    }

    /// Property: toggling twice is the identity
    #[test]
    fn prop_theme_toggle_is_involution(mode in theme_mode()) {
        prop_assert_ne!(mode.toggled(), mode);
        prop_assert_eq!(mode.toggled().toggled(), mode);
    }

    /// Property: on the standard page the active section is the one
    /// containing offset + lookahead
    #[test]
    fn prop_tracker_matches_probe(offset in 0.0f32..1900.0) {
        let mut viewport = FakeViewport::standard_page();
        viewport.scroll_by_user(offset);
        let mut tracker = SectionTracker::default();
        tracker.observe(&viewport);

        let probe = offset + SectionTracker::DEFAULT_LOOKAHEAD;
        let expected = if layout::HERO.contains(probe) {
            Section::Hero
        } else if layout::SERVICES.contains(probe) {
            Section::Services
        } else {
            Section::Schedule
        };
        prop_assert_eq!(tracker.active(), expected);
    }

    /// Property: offsets past the page never change the active section
    #[test]
    fn prop_tracker_keeps_section_past_page_end(
        start in 0.0f32..1900.0,
        beyond in 0.0f32..5000.0,
    ) {
        let mut viewport = FakeViewport::standard_page();
        let mut tracker = SectionTracker::default();
        viewport.scroll_by_user(start);
        tracker.observe(&viewport);
        let before = tracker.active();

        viewport.scroll_by_user(layout::page_height() + beyond);
        prop_assert!(!tracker.observe(&viewport));
        prop_assert_eq!(tracker.active(), before);
    }
}
