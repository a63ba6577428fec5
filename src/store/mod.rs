//! The material record store.
//!
//! Every operation is a full read-modify-write of one JSON blob held under
//! a single storage key. There is no locking: one writer per storage scope
//! is assumed, and concurrent writers overwrite each other (last write wins).

pub mod config;

use thiserror::Error;

use crate::material::{MaterialCollection, MaterialRecord};
use crate::storage::{StorageBackend, StorageError};
use crate::types::identifiers::{MaterialId, SubjectId};
pub use config::{StoreConfig, DEFAULT_STORAGE_KEY};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Stored materials are corrupted: {0}")]
    Corrupted(#[source] serde_json::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),
}

/// Result of reading the persisted collection without hiding failures.
#[derive(Debug)]
pub enum LoadOutcome {
    /// A blob was stored and parsed. It may still hold zero records.
    Loaded(MaterialCollection),
    /// Nothing stored under the key.
    Empty,
    /// Reading failed or the blob did not parse.
    Failed(StoreError),
}

impl LoadOutcome {
    /// Collapse to a collection, treating both `Empty` and `Failed` as no records.
    pub fn into_collection(self) -> MaterialCollection {
        match self {
            LoadOutcome::Loaded(c) => c,
            LoadOutcome::Empty | LoadOutcome::Failed(_) => MaterialCollection::new(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadOutcome::Failed(_))
    }
}

/// Record store over an injected [`StorageBackend`].
///
/// `list_all`, `list_by_subject`, `add` and `remove` never fail: storage and
/// parse errors are logged and swallowed. The `load`/`try_*` variants report
/// them instead.
#[derive(Debug)]
pub struct MaterialStore<B> {
    backend: B,
    config: StoreConfig,
}

impl<B: StorageBackend> MaterialStore<B> {
    pub fn new(backend: B, config: StoreConfig) -> Self {
        Self { backend, config }
    }

    /// Store under the default key.
    pub fn with_backend(backend: B) -> Self {
        Self::new(backend, StoreConfig::v0())
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    pub fn load(&self) -> LoadOutcome {
        let raw = match self.backend.get_item(&self.config.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return LoadOutcome::Empty,
            Err(e) => return LoadOutcome::Failed(e.into()),
        };
        // An empty string reads the same as an absent key.
        if raw.is_empty() {
            return LoadOutcome::Empty;
        }
        match serde_json::from_str::<MaterialCollection>(&raw) {
            Ok(collection) => LoadOutcome::Loaded(collection),
            Err(e) => LoadOutcome::Failed(StoreError::Corrupted(e)),
        }
    }

    /// All records in insertion order. Unreadable data yields an empty list.
    pub fn list_all(&self) -> MaterialCollection {
        match self.load() {
            LoadOutcome::Failed(e) => {
                tracing::warn!(
                    key = %self.config.storage_key,
                    error = %e,
                    "failed to read stored materials, treating as empty"
                );
                MaterialCollection::new()
            }
            outcome => outcome.into_collection(),
        }
    }

    pub fn list_by_subject(&self, subject_id: &SubjectId) -> MaterialCollection {
        self.list_all().by_subject(subject_id)
    }

    /// Append `record` and persist. A failed write is logged and the record is dropped.
    pub fn add(&self, record: MaterialRecord) {
        let id = record.id.clone();
        let mut collection = self.list_all();
        collection.push(record);
        if let Err(e) = self.write(&collection) {
            tracing::error!(
                key = %self.config.storage_key,
                material_id = %id,
                error = %e,
                "failed to persist added material"
            );
        }
    }

    /// Drop every record with `id` and persist. Unknown ids leave the data unchanged.
    pub fn remove(&self, id: &MaterialId) {
        let mut collection = self.list_all();
        collection.remove_id(id);
        if let Err(e) = self.write(&collection) {
            tracing::error!(
                key = %self.config.storage_key,
                material_id = %id,
                error = %e,
                "failed to persist material removal"
            );
        }
    }

    /// Like [`add`](Self::add) but reports failures. Refuses to overwrite a
    /// blob that does not parse.
    pub fn try_add(&self, record: MaterialRecord) -> Result<(), StoreError> {
        let mut collection = self.read()?;
        collection.push(record);
        self.write(&collection)
    }

    /// Like [`remove`](Self::remove) but reports failures and returns how many
    /// records were dropped. Nothing is written when no record matched.
    pub fn try_remove(&self, id: &MaterialId) -> Result<usize, StoreError> {
        let mut collection = self.read()?;
        let removed = collection.remove_id(id);
        if removed > 0 {
            self.write(&collection)?;
        }
        Ok(removed)
    }

    /// Delete the whole collection from storage.
    pub fn clear(&self) {
        if let Err(e) = self.backend.remove_item(&self.config.storage_key) {
            tracing::error!(
                key = %self.config.storage_key,
                error = %e,
                "failed to clear stored materials"
            );
        }
    }

    fn read(&self) -> Result<MaterialCollection, StoreError> {
        match self.load() {
            LoadOutcome::Failed(e) => Err(e),
            outcome => Ok(outcome.into_collection()),
        }
    }

    fn write(&self, collection: &MaterialCollection) -> Result<(), StoreError> {
        let json = serde_json::to_string(collection).map_err(StoreError::Serialization)?;
        self.backend.set_item(&self.config.storage_key, &json)?;
        tracing::debug!(
            key = %self.config.storage_key,
            count = collection.len(),
            "persisted materials"
        );
        Ok(())
    }
}
