use std::cell::RefCell;
use std::collections::BTreeMap;

use super::{StorageBackend, StorageError};

/// In-process storage. Optional byte quota (keys + values) to reproduce
/// capacity failures.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<BTreeMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(limit: usize) -> Self {
        Self {
            items: RefCell::new(BTreeMap::new()),
            quota: Some(limit),
        }
    }

    /// Total bytes currently held, counting keys and values.
    pub fn used_bytes(&self) -> usize {
        self.items
            .borrow()
            .iter()
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(limit) = self.quota {
            let current = self
                .items
                .borrow()
                .get(key)
                .map(|old| key.len() + old.len())
                .unwrap_or(0);
            let needed = self.used_bytes() - current + key.len() + value.len();
            if needed > limit {
                return Err(StorageError::QuotaExceeded { needed, limit });
            }
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}
