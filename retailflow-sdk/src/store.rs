//! Saved-workflows store
//!
//! Owns the ordered list of saved records and mirrors it into a single
//! storage slot. Every mutation rewrites the whole slot; clearing removes it.

use tracing::{debug, warn};

use crate::error::StoreError;
use crate::record::WorkflowRecord;
use crate::storage::KeyValueStorage;

/// Storage key of the persisted list
pub const SAVED_WORKFLOWS_KEY: &str = "savedWorkflows";

#[derive(Debug)]
pub struct SavedWorkflows<S> {
    storage: S,
    records: Vec<WorkflowRecord>,
}

impl<S: KeyValueStorage> SavedWorkflows<S> {
    /// Load the list from the `savedWorkflows` slot. A missing or blank slot is an
    /// empty list; a slot that does not parse is an error.
    pub fn load(storage: S) -> Result<Self, StoreError> {
        let records = read_slot(&storage)?;
        debug!(count = records.len(), "loaded saved workflows");
        Ok(Self { storage, records })
    }

    /// Like [`SavedWorkflows::load`], but a corrupt slot yields an empty list.
    /// The error is returned alongside so the caller can tell the user. The
    /// slot itself is left as is until the next mutation.
    pub fn load_or_default(storage: S) -> Result<(Self, Option<StoreError>), StoreError> {
        match read_slot(&storage) {
            Ok(records) => Ok((Self { storage, records }, None)),
            Err(err @ StoreError::Corrupt { .. }) => {
                warn!(error = %err, "ignoring corrupt saved workflows");
                Ok((
                    Self {
                        storage,
                        records: Vec::new(),
                    },
                    Some(err),
                ))
            }
            Err(err) => Err(err),
        }
    }

    pub fn records(&self) -> &[WorkflowRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Append a record and rewrite the slot. The record stays in memory even
    /// if the write fails.
    pub fn append(&mut self, record: WorkflowRecord) -> Result<(), StoreError> {
        self.records.push(record);
        self.persist()
    }

    /// Drop every record and remove the slot.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.records.clear();
        self.storage.remove_item(SAVED_WORKFLOWS_KEY)?;
        debug!("cleared saved workflows");
        Ok(())
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.records).map_err(StoreError::Serialize)?;
        self.storage.set_item(SAVED_WORKFLOWS_KEY, &json)?;
        debug!(count = self.records.len(), "persisted saved workflows");
        Ok(())
    }
}

fn read_slot<S: KeyValueStorage>(storage: &S) -> Result<Vec<WorkflowRecord>, StoreError> {
    match storage.get_item(SAVED_WORKFLOWS_KEY)? {
        Some(json) if !json.trim().is_empty() => {
            serde_json::from_str(&json).map_err(|source| StoreError::Corrupt {
                key: SAVED_WORKFLOWS_KEY.to_string(),
                source,
            })
        }
        _ => Ok(Vec::new()),
    }
}
