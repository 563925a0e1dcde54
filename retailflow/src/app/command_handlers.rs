//! Command handler implementations for App
//!
//! This module implements the handle_command method and all related
//! command processing logic.

use anyhow::{anyhow, Result};
use tracing::{debug, error, info};

use retailflow_sdk::{SaveError, WorkflowRecord};

use super::{Alert, App, AppCommand};

pub const SAVE_SUCCESS_MESSAGE: &str = "Workflow saved successfully!";
pub const SAVE_FAILURE_MESSAGE: &str = "An error occurred.";

impl App {
    /// Drain every command that async tasks have queued so far
    pub fn poll_commands(&mut self) {
        while let Ok(cmd) = self.command_rx.try_recv() {
            if let Err(e) = self.handle_command(cmd) {
                debug!(error = %e, "command dropped");
            }
        }
    }

    /// Process a single command
    pub fn handle_command(&mut self, cmd: AppCommand) -> Result<()> {
        match cmd {
            AppCommand::SaveFinished { ticket, result } => {
                self.handle_save_finished(ticket, result)?;
            }
        }

        Ok(())
    }

    /// Apply the outcome of a save task
    fn handle_save_finished(
        &mut self,
        ticket: u64,
        result: Result<WorkflowRecord, SaveError>,
    ) -> Result<()> {
        // A cancelled or superseded save must not touch the list
        match self.pending_save.take() {
            Some(pending) if pending.ticket == ticket => {
                self.notifications.dismiss(pending.toast);
            }
            other => {
                self.pending_save = other;
                return Err(anyhow!("Save ticket {} is no longer pending", ticket));
            }
        }

        match result {
            Ok(record) => {
                info!(
                    app = %record.trigger.app,
                    event = %record.trigger.event,
                    "workflow saved"
                );

                if let Err(e) = self.saved.append(record) {
                    error!(error = %e, "failed to persist saved workflows");
                    self.notifications.error(
                        "Not Persisted",
                        format!("Workflow kept for this session only: {}", e),
                    );
                }

                self.alert = Some(Alert::success("Workflow Saved", SAVE_SUCCESS_MESSAGE));
            }
            Err(e) => {
                error!(error = %e, "error saving workflow");
                self.alert = Some(Alert::error(
                    "Save Failed",
                    SAVE_FAILURE_MESSAGE,
                    e.to_string(),
                ));
            }
        }

        Ok(())
    }
}
