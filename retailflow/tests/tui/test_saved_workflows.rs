//! Tests for the saved list: clearing and persistence across restarts

use crossterm::event::KeyCode;
use std::sync::Arc;
use std::time::Duration;

use retailflow::app::{App, View};
use retailflow::database::Database;
use retailflow::sink::SimulatedSink;
use retailflow_sdk::{KeyValueStorage, MemoryStorage, SavedWorkflows, SAVED_WORKFLOWS_KEY};

use super::common::*;

fn save_one(app: &mut App) {
    press(app, KeyCode::Char('s'));
    wait_for_save(app);
    press(app, KeyCode::Enter);
}

#[test]
fn test_save_persists_full_list() {
    let mut app = test_app();
    build_shopify_to_netsuite(&mut app);

    save_one(&mut app);
    save_one(&mut app);

    assert_eq!(app.saved.len(), 2);
    let stored = app
        .saved
        .storage()
        .get_item(SAVED_WORKFLOWS_KEY)
        .unwrap()
        .expect("slot written");
    let value: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(value.as_array().map(|a| a.len()), Some(2));
    assert_eq!(value[0]["trigger"]["app"], "Shopify");
    assert_eq!(value[0]["actions"]["NetSuite"][0], "Create Sales Order");
}

#[test]
fn test_clear_all_removes_slot() {
    let mut app = test_app();
    build_shopify_to_netsuite(&mut app);
    save_one(&mut app);

    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.current_view, View::Saved);
    press(&mut app, KeyCode::Char('x'));

    assert!(app.saved.is_empty());
    assert_eq!(app.saved.storage().get_item(SAVED_WORKFLOWS_KEY).unwrap(), None);
    assert_eq!(
        app.notifications.latest().map(|n| n.title.as_str()),
        Some("Workflows Cleared")
    );
}

#[test]
fn test_clear_on_empty_list_is_noop() {
    let mut app = test_app();

    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('x'));

    assert!(app.saved.is_empty());
    assert!(app.notifications.is_empty());
}

#[test]
fn test_saved_selection_is_bounded() {
    let mut app = test_app();
    build_shopify_to_netsuite(&mut app);
    save_one(&mut app);
    save_one(&mut app);

    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.saved_selected, 1);
    press(&mut app, KeyCode::Char('k'));
    press(&mut app, KeyCode::Char('k'));
    assert_eq!(app.saved_selected, 0);
}

#[test]
fn test_saved_workflows_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());

    {
        let mut app = App::from_config(&config).unwrap();
        build_shopify_to_netsuite(&mut app);
        save_one(&mut app);
        assert_eq!(app.saved.len(), 1);
    }

    let app = App::from_config(&config).unwrap();
    assert_eq!(app.saved.len(), 1);
    assert_eq!(app.saved.records()[0].trigger.event, "New Order Created");
    // Builder state is never persisted
    assert_eq!(app.builder.trigger().app(), None);
}

#[test]
fn test_clear_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());

    {
        let mut app = App::from_config(&config).unwrap();
        build_shopify_to_netsuite(&mut app);
        save_one(&mut app);
        app.clear_saved_workflows();
    }

    let db = Database::open(config.db_path()).unwrap();
    assert_eq!(db.get_item(SAVED_WORKFLOWS_KEY).unwrap(), None);
    let app = App::from_config(&config).unwrap();
    assert!(app.saved.is_empty());
}

#[test]
fn test_corrupt_slot_starts_empty_with_warning() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    {
        let mut db = Database::open(config.db_path()).unwrap();
        db.set_item(SAVED_WORKFLOWS_KEY, "{not json").unwrap();
    }

    let app = App::from_config(&config).unwrap();
    assert!(app.saved.is_empty());
    assert_eq!(
        app.notifications.latest().map(|n| n.title.as_str()),
        Some("Saved Workflows Unreadable")
    );

    // The unreadable slot is left for inspection
    let db = Database::open(config.db_path()).unwrap();
    assert_eq!(
        db.get_item(SAVED_WORKFLOWS_KEY).unwrap().as_deref(),
        Some("{not json")
    );
}

#[test]
fn test_preloaded_list_is_shown() {
    let mut storage = MemoryStorage::new();
    storage
        .set_item(
            SAVED_WORKFLOWS_KEY,
            r#"[{"trigger":{"app":"SendGrid","event":"Email Opened"},"actions":{"Slack":["Send Direct Message"]}}]"#,
        )
        .unwrap();
    let saved = SavedWorkflows::load(Box::new(storage) as Box<dyn KeyValueStorage>).unwrap();
    let app = App::new(saved, Arc::new(SimulatedSink::new(Duration::ZERO))).unwrap();

    assert_eq!(app.saved.len(), 1);
    assert_eq!(app.saved.records()[0].trigger.app, "SendGrid");
}
