// Integration tests for the page state: navigation, tracking, theme and booking

mod fixtures;

use fixtures::{layout, FakeViewport};
use luna_yoga::models::booking::{BookingField, BookingStep, BookingSummary, SessionType};
use luna_yoga::models::config::AppConfig;
use luna_yoga::models::section::Section;
use luna_yoga::models::theme_mode::ThemeMode;
use luna_yoga::services::booking::BookingError;
use luna_yoga::services::page::PageState;
use luna_yoga::services::submission::LocalAcknowledgement;
use luna_yoga::services::viewport::Viewport;
use luna_yoga::ui_egui::viewport::EguiViewport;
use pretty_assertions::assert_eq;
use std::time::Duration;

#[test]
fn test_full_booking_flow() {
    let mut page = PageState::default();
    let mut viewport = FakeViewport::standard_page();

    page.open_booking(&mut viewport);
    assert!(page.is_booking_open());
    assert!(viewport.locked);

    let wizard = page.booking_mut().expect("booking should be open");
    assert_eq!(wizard.step(), BookingStep::Details);
    wizard.set_field(BookingField::Name, "Ana");
    assert!(wizard.next());

    wizard.select_session_type(SessionType::Retreat);
    wizard.set_field(BookingField::Date, "2024-05-01");
    wizard.set_field(BookingField::Time, "11:00 AM");
    assert!(wizard.next());
    assert_eq!(wizard.step(), BookingStep::Confirm);

    let summary = wizard.summary();
    assert_eq!(summary.name, "Ana");
    assert_eq!(summary.email, BookingSummary::NOT_PROVIDED);
    assert_eq!(summary.phone, BookingSummary::NOT_PROVIDED);
    assert_eq!(summary.session_type, "retreat");
    assert_eq!(summary.date_time, "2024-05-01 at 11:00 AM");
    assert_eq!(summary.message, None);

    let ack = page
        .submit_booking(&mut viewport, &LocalAcknowledgement)
        .expect("submission from the confirm step should succeed");
    assert_eq!(ack.message, LocalAcknowledgement::MESSAGE);
    assert!(!page.is_booking_open());
    assert!(!viewport.locked);
}

#[test]
fn test_submit_before_confirm_keeps_wizard_open() {
    let mut page = PageState::default();
    let mut viewport = FakeViewport::standard_page();

    page.open_booking(&mut viewport);
    page.booking_mut()
        .expect("booking should be open")
        .set_field(BookingField::Email, "ana@example.com");

    let result = page.submit_booking(&mut viewport, &LocalAcknowledgement);
    assert_eq!(
        result,
        Err(BookingError::NotReadyToSubmit {
            step: BookingStep::Details
        })
    );
    assert!(page.is_booking_open());
    assert!(viewport.locked);
    assert_eq!(
        page.booking().map(|wizard| wizard.form().email.clone()),
        Some("ana@example.com".to_string())
    );
}

#[test]
fn test_submit_without_open_booking() {
    let mut page = PageState::default();
    let mut viewport = FakeViewport::standard_page();

    let result = page.submit_booking(&mut viewport, &LocalAcknowledgement);
    assert_eq!(result, Err(BookingError::NotOpen));
}

#[test]
fn test_reopening_booking_starts_fresh() {
    let mut page = PageState::default();
    let mut viewport = FakeViewport::standard_page();

    page.open_booking(&mut viewport);
    let wizard = page.booking_mut().expect("booking should be open");
    wizard.set_field(BookingField::Name, "Ana");
    wizard.next();
    page.close_booking(&mut viewport);
    assert!(!viewport.locked);

    page.open_booking(&mut viewport);
    let wizard = page.booking().expect("booking should be open");
    assert_eq!(wizard.step(), BookingStep::Details);
    assert!(wizard.form().is_empty());
}

#[test]
fn test_theme_toggle_round_trip() {
    let mut page = PageState::default();
    assert_eq!(page.theme(), ThemeMode::Calm);

    assert_eq!(page.toggle_theme(), ThemeMode::Focus);
    assert_eq!(page.toggle_theme(), ThemeMode::Calm);
}

#[test]
fn test_initial_theme_from_config() {
    let config = AppConfig {
        initial_theme: ThemeMode::Focus,
        ..AppConfig::default()
    };
    let page = PageState::from_config(&config);
    assert_eq!(page.theme(), ThemeMode::Focus);
}

#[test]
fn test_scrolling_updates_active_section() {
    let mut page = PageState::default();
    let mut viewport = FakeViewport::standard_page();
    assert_eq!(page.active_section(), Section::Hero);

    viewport.scroll_by_user(550.0);
    assert!(page.on_scroll(&viewport));
    assert_eq!(page.active_section(), Section::Services);

    viewport.scroll_by_user(1250.0);
    page.on_scroll(&viewport);
    assert_eq!(page.active_section(), Section::Schedule);

    // Past the end of the page nothing matches and the last section stays active
    viewport.scroll_by_user(layout::page_height() + 500.0);
    assert!(!page.on_scroll(&viewport));
    assert_eq!(page.active_section(), Section::Schedule);
}

#[test]
fn test_nav_click_scrolls_below_header_and_closes_menu() {
    let mut page = PageState::default();
    let mut viewport = FakeViewport::standard_page();

    page.toggle_mobile_menu();
    assert!(page.is_mobile_menu_open());

    assert!(page.scroll_to_section(&mut viewport, Section::Schedule));
    assert_eq!(viewport.scroll_targets, vec![1220.0]);
    assert!(!page.is_mobile_menu_open());

    // The jump is a scroll event like any other
    page.on_scroll(&viewport);
    assert_eq!(page.active_section(), Section::Schedule);
}

#[test]
fn test_scroll_to_missing_section_is_ignored() {
    let mut page = PageState::default();
    let mut viewport = FakeViewport::with_sections(vec![(Section::Hero, layout::HERO)]);

    assert!(!page.scroll_to_section(&mut viewport, Section::Services));
    assert!(viewport.scroll_targets.is_empty());
}

#[test]
fn test_egui_viewport_drives_page_state() {
    let mut page = PageState::default();
    let mut viewport = EguiViewport::new(Duration::from_millis(450));
    viewport.record_section(Section::Hero, layout::HERO);
    viewport.record_section(Section::Services, layout::SERVICES);
    viewport.record_section(Section::Schedule, layout::SCHEDULE);

    viewport.record_offset(0.0);
    assert!(viewport.take_scroll_event());
    page.on_scroll(&viewport);
    assert_eq!(page.active_section(), Section::Hero);

    page.scroll_to_section(&mut viewport, Section::Services);
    assert!(viewport.is_animating());

    page.open_booking(&mut viewport);
    assert!(viewport.is_scroll_locked());
    page.close_booking(&mut viewport);
    assert!(!viewport.is_scroll_locked());

    viewport.record_offset(700.0);
    assert!(viewport.take_scroll_event());
    assert!(!viewport.take_scroll_event());
    page.on_scroll(&viewport);
    assert_eq!(page.active_section(), Section::Services);
    assert_eq!(viewport.scroll_offset(), 700.0);
}
