//! Save and clear operations

use std::sync::Arc;
use tracing::{error, info, warn};

use retailflow_sdk::save_workflow;

use super::*;

impl App {
    /// Start saving the builder's current selections in the background.
    ///
    /// Only one save runs at a time. The outcome arrives as
    /// [`AppCommand::SaveFinished`] and is applied by `poll_commands`.
    pub fn start_save(&mut self) {
        if self.pending_save.is_some() {
            self.notifications
                .warning("Save In Progress", "Wait for the current save to finish");
            return;
        }

        if !self.builder.can_save() {
            return;
        }

        let ticket = self.next_save_ticket;
        self.next_save_ticket += 1;

        let builder = self.builder.clone();
        let sink = Arc::clone(&self.sink);
        let tx = self.command_tx.clone();

        let handle = self.tokio_runtime.spawn(async move {
            let result = save_workflow(&builder, sink.as_ref()).await;
            // Receiver is gone only when the app is shutting down
            let _ = tx.send(AppCommand::SaveFinished { ticket, result });
        });

        let toast = self.notifications.info("Saving Workflow", "Saving...");
        self.pending_save = Some(PendingSave {
            ticket,
            handle,
            toast,
        });
    }

    /// Abort the save in flight, if any. Returns whether one was aborted.
    ///
    /// A save whose result is already queued is applied instead of dropped.
    pub fn cancel_pending_save(&mut self) -> bool {
        self.poll_commands();
        if self
            .pending_save
            .as_ref()
            .is_some_and(|pending| pending.handle.is_finished())
        {
            // Finished after the first drain; its result is queued by now
            self.poll_commands();
        }

        match self.pending_save.take() {
            Some(pending) => {
                pending.handle.abort();
                self.notifications.dismiss(pending.toast);
                warn!(ticket = pending.ticket, "save cancelled");
                self.notifications
                    .warning("Save Cancelled", "The workflow was not saved");
                true
            }
            None => false,
        }
    }

    /// Empty the saved list and remove its storage slot
    pub fn clear_saved_workflows(&mut self) {
        let count = self.saved.len();
        match self.saved.clear() {
            Ok(()) => {
                info!(count, "cleared saved workflows");
                self.notifications
                    .success("Workflows Cleared", format!("Removed {} workflow(s)", count));
            }
            Err(e) => {
                error!(error = %e, "failed to clear saved workflows");
                self.notifications.error("Clear Failed", e.to_string());
            }
        }
        self.saved_selected = 0;
    }
}
