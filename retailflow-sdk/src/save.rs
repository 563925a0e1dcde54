//! Save contract
//!
//! Saving is a single fallible call. Building the record happens before the
//! sink is touched, so an incomplete trigger fails without suspending.

use async_trait::async_trait;

use crate::builder::WorkflowBuilder;
use crate::error::SaveError;
use crate::record::WorkflowRecord;

/// Destination for newly built workflow records
#[async_trait]
pub trait WorkflowSink: Send + Sync {
    async fn submit(&self, record: &WorkflowRecord) -> Result<(), SaveError>;
}

/// Build a record from the builder's selections and submit it. The caller is
/// responsible for appending the returned record to its saved list and for
/// telling the user.
pub async fn save_workflow(
    builder: &WorkflowBuilder,
    sink: &dyn WorkflowSink,
) -> Result<WorkflowRecord, SaveError> {
    let record = builder.build_record()?;
    tracing::info!(
        app = %record.trigger.app,
        event = %record.trigger.event,
        action_apps = record.actions.len(),
        "saving workflow"
    );
    sink.submit(&record).await?;
    Ok(record)
}
