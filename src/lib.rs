//! Key-value backed store for PDF material metadata.
//!
//! `material-store` keeps a list of material records (file name, size, MIME
//! type, upload time, subject) as one JSON blob under a single storage key.
//! File content is never stored. The storage backend is injected, so the
//! same store runs over an in-memory map or a directory on disk.

pub mod material;
pub mod storage;
pub mod store;
pub mod types;

pub use material::{MaterialCollection, MaterialRecord, UploadedAt};
pub use storage::{FileStorage, MemoryStorage, StorageBackend, StorageError};
pub use store::{LoadOutcome, MaterialStore, StoreConfig, StoreError};
pub use types::identifiers::{MaterialId, SubjectId};
