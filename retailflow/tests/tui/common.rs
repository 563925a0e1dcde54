//! Common test utilities for TUI tests
#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use retailflow::app::{App, BuilderPane};
use retailflow::config::Config;
use retailflow::sink::SimulatedSink;
use retailflow::ui::ui;
use retailflow_sdk::{
    async_trait, KeyValueStorage, MemoryStorage, SaveError, SavedWorkflows, WorkflowRecord,
    WorkflowSink,
};

/// Sink that always fails with a server error
pub struct FailingSink;

#[async_trait]
impl WorkflowSink for FailingSink {
    async fn submit(&self, _record: &WorkflowRecord) -> Result<(), SaveError> {
        Err(SaveError::Rejected("503 Service Unavailable".to_string()))
    }
}

pub fn app_with(storage: Box<dyn KeyValueStorage>, sink: Arc<dyn WorkflowSink>) -> App {
    let saved = SavedWorkflows::load(storage).unwrap();
    App::new(saved, sink).unwrap()
}

/// App over memory storage whose saves finish immediately
pub fn test_app() -> App {
    app_with(
        Box::new(MemoryStorage::new()),
        Arc::new(SimulatedSink::new(Duration::ZERO)),
    )
}

/// App whose saves take long enough to be cancelled
pub fn slow_app() -> App {
    app_with(
        Box::new(MemoryStorage::new()),
        Arc::new(SimulatedSink::new(Duration::from_secs(30))),
    )
}

pub fn test_config(data_dir: &Path) -> Config {
    Config {
        data_dir: data_dir.to_path_buf(),
        backend_url: None,
        save_delay: Duration::ZERO,
        log_level: "info".to_string(),
    }
}

pub fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

/// Move the cursor onto `name` in `pane` and press Enter
pub fn choose(app: &mut App, pane: BuilderPane, name: &str) {
    assert!(app.focus_entry(pane, name), "{} not listed", name);
    press(app, KeyCode::Enter);
}

/// Shopify "New Order Created" -> NetSuite "Create Sales Order", ready to save
pub fn build_shopify_to_netsuite(app: &mut App) {
    choose(app, BuilderPane::Apps, "Shopify");
    choose(app, BuilderPane::Options, "New Order Created");
    press(app, KeyCode::Char('c'));
    choose(app, BuilderPane::Apps, "NetSuite");
    choose(app, BuilderPane::Options, "Create Sales Order");
}

/// Pump the command channel until the pending save reports back
pub fn wait_for_save(app: &mut App) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while app.is_saving() {
        assert!(Instant::now() < deadline, "save did not finish in time");
        std::thread::sleep(Duration::from_millis(5));
        app.poll_commands();
    }
}

/// Render one frame and return the screen as text, one line per row
pub fn render_to_text(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for row in buffer.content.chunks(buffer.area.width as usize) {
        for cell in row {
            text.push_str(cell.symbol());
        }
        text.push('\n');
    }
    text
}
