//! Core types for RetailFlow workflows
//!
//! This crate holds everything that is not presentation: the workflow record
//! and its wire shape, the two-step builder state machine, the key-value
//! storage abstraction, the saved-workflows store and the save contract.

pub mod builder;
pub mod catalog;
pub mod error;
pub mod record;
pub mod save;
pub mod storage;
pub mod store;

// Re-export async trait for sink implementors
pub use async_trait::async_trait;

pub use builder::{Step, TriggerSelection, WorkflowBuilder};
pub use error::{BuilderError, SaveError, StorageError, StoreError};
pub use record::{ActionMap, Trigger, WorkflowRecord};
pub use save::{save_workflow, WorkflowSink};
pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::{SavedWorkflows, SAVED_WORKFLOWS_KEY};
