pub mod file;
pub mod memory;

use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Storage quota exceeded: need {needed} bytes, limit is {limit}")]
    QuotaExceeded { needed: usize, limit: usize },
}

/// String key-value slots, shaped after a browser's local storage.
///
/// Implementations are synchronous. Nothing coordinates two writers
/// sharing the same underlying slots.
pub trait StorageBackend {
    /// `Ok(None)` when nothing is stored under `key`.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing an absent key succeeds.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: StorageBackend + ?Sized> StorageBackend for &T {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}
