//! Error types shared by the builder, the store and the save path

use thiserror::Error;

/// Errors raised by [`crate::WorkflowBuilder`] operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    #[error("no trigger app is selected")]
    NoTriggerApp,

    #[error("no action app is selected")]
    NoActionApp,

    #[error("a trigger app and event must both be selected")]
    IncompleteTrigger,
}

/// Errors raised by a [`crate::KeyValueStorage`] backend.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StorageError {
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        StorageError::Backend(Box::new(err))
    }
}

/// Errors raised by [`crate::SavedWorkflows`].
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("persisted slot '{key}' does not hold a workflow list: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize saved workflows: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors raised while saving a workflow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SaveError {
    #[error("workflow is incomplete: {0}")]
    Incomplete(#[from] BuilderError),

    #[error("backend rejected workflow: {0}")]
    Rejected(String),

    #[error("could not reach backend: {0}")]
    Transport(String),
}
