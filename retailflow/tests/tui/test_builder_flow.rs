//! Tests for builder key handling and the two-step state machine

use crossterm::event::KeyCode;
use retailflow::app::{BuilderPane, View};
use retailflow_sdk::Step;

use super::common::*;

#[test]
fn test_initial_state() {
    let app = test_app();

    assert_eq!(app.current_view, View::Builder);
    assert_eq!(app.builder.step(), Step::Trigger);
    assert_eq!(app.builder.trigger().app(), None);
    assert!(app.builder.actions().is_empty());
    assert!(app.pane_options().is_empty());
    assert!(!app.is_saving());
}

#[test]
fn test_choose_trigger_app_lists_its_events() {
    let mut app = test_app();

    choose(&mut app, BuilderPane::Apps, "Shopify");

    assert_eq!(app.builder.trigger().app(), Some("Shopify"));
    assert_eq!(app.builder.trigger().event(), None);
    assert_eq!(app.builder_pane, BuilderPane::Options);
    assert!(app.pane_options().contains(&"New Order Created"));
}

#[test]
fn test_cursor_movement_is_bounded() {
    let mut app = test_app();

    press(&mut app, KeyCode::Up);
    assert_eq!(app.app_cursor, 0);

    let apps = app.pane_apps().len();
    for _ in 0..apps + 5 {
        press(&mut app, KeyCode::Char('j'));
    }
    assert_eq!(app.app_cursor, apps - 1);
}

#[test]
fn test_options_pane_needs_a_chosen_app() {
    let mut app = test_app();

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.builder_pane, BuilderPane::Apps);
}

#[test]
fn test_switching_trigger_app_clears_event() {
    let mut app = test_app();

    choose(&mut app, BuilderPane::Apps, "Shopify");
    choose(&mut app, BuilderPane::Options, "New Order Created");
    assert_eq!(app.builder.trigger().event(), Some("New Order Created"));

    choose(&mut app, BuilderPane::Apps, "SendGrid");
    assert_eq!(app.builder.trigger().app(), Some("SendGrid"));
    assert_eq!(app.builder.trigger().event(), None);
}

#[test]
fn test_continue_requires_trigger_event() {
    let mut app = test_app();

    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.builder.step(), Step::Trigger);

    choose(&mut app, BuilderPane::Apps, "Shopify");
    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.builder.step(), Step::Trigger);

    choose(&mut app, BuilderPane::Options, "New Order Created");
    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.builder.step(), Step::Action);
    assert_eq!(app.builder_pane, BuilderPane::Apps);
}

#[test]
fn test_toggle_actions_by_key() {
    let mut app = test_app();
    build_shopify_to_netsuite(&mut app);

    assert_eq!(
        app.builder.selected_actions("NetSuite"),
        &["Create Sales Order".to_string()][..]
    );

    // Enter again unchecks; the app key goes away with its last action
    press(&mut app, KeyCode::Enter);
    assert!(app.builder.selected_actions("NetSuite").is_empty());
    assert!(app.builder.actions().is_empty());
}

#[test]
fn test_actions_survive_action_app_switch() {
    let mut app = test_app();
    build_shopify_to_netsuite(&mut app);

    choose(&mut app, BuilderPane::Apps, "Slack");
    choose(&mut app, BuilderPane::Options, "Send Channel Message");

    assert_eq!(app.builder.action_app(), Some("Slack"));
    assert_eq!(app.builder.actions().len(), 2);
    assert!(app.builder.is_action_selected("NetSuite", "Create Sales Order"));
    assert!(app.builder.is_action_selected("Slack", "Send Channel Message"));
}

#[test]
fn test_manual_step_toggle_keeps_selections() {
    let mut app = test_app();
    build_shopify_to_netsuite(&mut app);

    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.builder.step(), Step::Trigger);
    assert_eq!(app.builder.trigger().event(), Some("New Order Created"));
    // Cursor lands on the chosen trigger app
    assert_eq!(app.pane_apps()[app.app_cursor], "Shopify");

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.builder.step(), Step::Action);
    assert_eq!(app.pane_apps()[app.app_cursor], "NetSuite");
    assert!(app.builder.is_action_selected("NetSuite", "Create Sales Order"));
}

#[test]
fn test_action_step_reachable_without_trigger() {
    let mut app = test_app();

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.builder.step(), Step::Action);
    assert!(!app.builder.can_save());

    choose(&mut app, BuilderPane::Apps, "Slack");
    assert!(app.builder.can_save());
}

#[test]
fn test_quit_key() {
    let mut app = test_app();

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}
