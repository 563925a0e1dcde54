//! Main application state

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use retailflow_sdk::{KeyValueStorage, SavedWorkflows, WorkflowBuilder, WorkflowSink};

use super::{BuilderPane, View};
use crate::app::{Alert, AppCommand, NotificationManager};

/// Saved list backed by whichever storage the app was opened with
pub type SavedList = SavedWorkflows<Box<dyn KeyValueStorage>>;

/// A save task that has not reported back yet
#[derive(Debug)]
pub struct PendingSave {
    pub ticket: u64,
    pub handle: JoinHandle<()>,
    /// "Saving" toast, dismissed once the save settles
    pub toast: usize,
}

/// Main application state
pub struct App {
    pub current_view: View,
    pub should_quit: bool,

    // Builder state
    pub builder: WorkflowBuilder,
    pub builder_pane: BuilderPane,
    pub app_cursor: usize,
    pub option_cursor: usize,

    // Saved workflows
    pub saved: SavedList,
    pub saved_selected: usize,

    // User feedback
    pub notifications: NotificationManager,
    pub alert: Option<Alert>,

    // Save in flight
    pub pending_save: Option<PendingSave>,
    pub next_save_ticket: u64,
    pub sink: Arc<dyn WorkflowSink>,

    // Results from async tasks
    pub command_tx: mpsc::UnboundedSender<AppCommand>,
    pub command_rx: mpsc::UnboundedReceiver<AppCommand>,

    // Tokio runtime for async operations
    pub tokio_runtime: tokio::runtime::Runtime,
}
