//! In-memory storage area (for development/testing).

use std::collections::HashMap;
use std::sync::Mutex;

use crate::{StorageArea, StorageError};

/// Mutex-guarded map implementing [`StorageArea`].
///
/// An optional quota bounds the total stored bytes (keys plus values),
/// surfacing [`StorageError::QuotaExceeded`] the way a real web-storage
/// area does when full.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryStorage {
    /// Create an unbounded area.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an area holding at most `quota_bytes` of keys plus values.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// Whether the area holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageArea for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Backend("poisoned lock".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Backend("poisoned lock".to_string()))?;

        if let Some(quota) = self.quota_bytes {
            // The entry being replaced does not count against the quota.
            let occupied: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            if occupied + key.len() + value.len() > quota {
                return Err(StorageError::QuotaExceeded);
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
