//! Command pattern for App communication
//!
//! This module defines the AppCommand enum which represents everything that
//! async tasks can send back to the App.

use retailflow_sdk::{SaveError, WorkflowRecord};

/// Commands that can be sent to the App from async tasks
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// A save task finished
    SaveFinished {
        ticket: u64,
        result: Result<WorkflowRecord, SaveError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}
