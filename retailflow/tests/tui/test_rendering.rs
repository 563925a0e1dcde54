//! Rendering tests against ratatui's TestBackend

use crossterm::event::KeyCode;
use retailflow::app::{BuilderPane, SAVE_SUCCESS_MESSAGE};
use retailflow::ui::EMPTY_SAVED_MESSAGE;

use super::common::*;

const WIDTH: u16 = 120;
const HEIGHT: u16 = 40;

#[test]
fn test_builder_initial_screen() {
    let app = test_app();
    let screen = render_to_text(&app, WIDTH, HEIGHT);

    assert!(screen.contains("RetailFlow"));
    assert!(screen.contains("[1] Workflow Builder"));
    assert!(screen.contains("[2] Saved Workflows (0)"));
    assert!(screen.contains("Choose Trigger App"));
    assert!(screen.contains("Shopify"));
    assert!(screen.contains("Select a connected app to view available triggers"));
    assert!(!screen.contains("Next Step: Configure Action"));
}

#[test]
fn test_builder_shows_events_and_next_step() {
    let mut app = test_app();
    choose(&mut app, BuilderPane::Apps, "Shopify");
    choose(&mut app, BuilderPane::Options, "New Order Created");

    let screen = render_to_text(&app, WIDTH, HEIGHT);
    assert!(screen.contains("Shopify Triggers"));
    assert!(screen.contains("(•) New Order Created"));
    assert!(screen.contains("Next Step: Configure Action"));
}

#[test]
fn test_action_step_screen() {
    let mut app = test_app();
    build_shopify_to_netsuite(&mut app);

    let screen = render_to_text(&app, WIDTH, HEIGHT);
    assert!(screen.contains("Choose Action App"));
    assert!(screen.contains("NetSuite Actions"));
    assert!(screen.contains("[x] Create Sales Order"));
    assert!(screen.contains("[S] Save Workflow"));
}

#[test]
fn test_action_step_placeholder() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('a'));

    let screen = render_to_text(&app, WIDTH, HEIGHT);
    assert!(screen.contains("Select an app to view available actions"));
    assert!(!screen.contains("[S] Save Workflow"));
}

#[test]
fn test_saved_view_empty() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('2'));

    let screen = render_to_text(&app, WIDTH, HEIGHT);
    assert!(screen.contains(EMPTY_SAVED_MESSAGE));
    assert!(!screen.contains("Clear All Workflows"));
}

#[test]
fn test_success_alert_and_saved_list() {
    let mut app = test_app();
    build_shopify_to_netsuite(&mut app);
    press(&mut app, KeyCode::Char('s'));
    wait_for_save(&mut app);

    let screen = render_to_text(&app, WIDTH, HEIGHT);
    assert!(screen.contains(SAVE_SUCCESS_MESSAGE));
    assert!(screen.contains("[2] Saved Workflows (1)"));

    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('2'));
    let screen = render_to_text(&app, WIDTH, HEIGHT);
    assert!(screen.contains("Trigger: New Order Created (Shopify)"));
    assert!(screen.contains("NetSuite: Create Sales Order"));
    assert!(screen.contains("Clear All Workflows"));
}

#[test]
fn test_saving_indicator() {
    let mut app = slow_app();
    build_shopify_to_netsuite(&mut app);
    press(&mut app, KeyCode::Char('s'));

    let screen = render_to_text(&app, WIDTH, HEIGHT);
    assert!(screen.contains("Saving..."));
}

#[test]
fn test_alert_footer_lists_every_dismiss_key() {
    let mut app = test_app();
    build_shopify_to_netsuite(&mut app);
    press(&mut app, KeyCode::Char('s'));
    wait_for_save(&mut app);

    let screen = render_to_text(&app, WIDTH, HEIGHT);
    assert!(screen.contains("[Enter/Esc/Space] Dismiss"));

    press(&mut app, KeyCode::Char(' '));
    assert!(app.alert.is_none());
    let screen = render_to_text(&app, WIDTH, HEIGHT);
    assert!(!screen.contains("Dismiss"));
}
