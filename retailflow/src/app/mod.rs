//! Application state and module organization
//!
//! This module contains the main App struct and re-exports all functionality
//! organized by domain.

use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;

use retailflow_sdk::{KeyValueStorage, SavedWorkflows, WorkflowBuilder, WorkflowSink};

mod models;
pub use models::*;

mod commands;
pub use commands::*;

mod notifications;
pub use notifications::*;

// Declare submodules
mod command_handlers;
pub use command_handlers::{SAVE_FAILURE_MESSAGE, SAVE_SUCCESS_MESSAGE};

mod navigation;
mod workflow_ops;

use crate::config::Config;
use crate::database::Database;

impl App {
    pub fn new(saved: SavedList, sink: Arc<dyn WorkflowSink>) -> Result<Self> {
        // Create tokio runtime for async operations
        let tokio_runtime = tokio::runtime::Runtime::new()?;
        let (command_tx, command_rx) = mpsc::unbounded_channel();

        Ok(Self {
            current_view: View::Builder,
            should_quit: false,
            builder: WorkflowBuilder::new(),
            builder_pane: BuilderPane::Apps,
            app_cursor: 0,
            option_cursor: 0,
            saved,
            saved_selected: 0,
            notifications: NotificationManager::new(),
            alert: None,
            pending_save: None,
            next_save_ticket: 0,
            sink,
            command_tx,
            command_rx,
            tokio_runtime,
        })
    }

    /// Open the on-disk store and pick the save sink described by `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        let db = Database::open(config.db_path())?;
        let schema_version = db.get_schema_version()?;
        let storage: Box<dyn KeyValueStorage> = Box::new(db);
        let (saved, corrupt) = SavedWorkflows::load_or_default(storage)?;
        let sink = crate::sink::build_sink(config)?;

        let mut app = Self::new(saved, sink)?;
        tracing::info!(
            db = %config.db_path().display(),
            schema_version,
            saved = app.saved.len(),
            backend = config.backend_url.as_deref().unwrap_or("simulated"),
            "app started"
        );

        if let Some(err) = corrupt {
            app.notifications.warning(
                "Saved Workflows Unreadable",
                format!("Starting with an empty list: {}", err),
            );
        }

        Ok(app)
    }

    pub fn is_saving(&self) -> bool {
        self.pending_save.is_some()
    }

    pub fn quit(&mut self) {
        self.cancel_pending_save();
        self.should_quit = true;
    }
}
