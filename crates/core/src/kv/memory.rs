//! In-memory key-value backend.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::{KeyValueStore, StoreError, Update};

/// Process-local store backed by a `HashMap`.
///
/// With [`MemoryStore::with_capacity`] the store behaves like a browser's
/// origin storage: once the total size of keys and values would exceed the
/// limit, writes fail with [`StoreError::QuotaExceeded`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
    capacity: Option<usize>,
}

impl MemoryStore {
    /// Create an unbounded store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that holds at most `bytes` of keys plus values.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            capacity: Some(bytes),
        }
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_capacity(
        &self,
        entries: &HashMap<String, String>,
        key: &str,
        value: &str,
    ) -> Result<(), StoreError> {
        let Some(capacity) = self.capacity else {
            return Ok(());
        };
        let used: usize = entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum();
        let needed = key.len() + value.len();
        let available = capacity.saturating_sub(used);
        if needed > available {
            return Err(StoreError::QuotaExceeded {
                key: key.to_string(),
                needed,
                available,
            });
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        self.check_capacity(&entries, key, value)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }

    fn update(&self, key: &str, apply: &mut Update<'_>) -> Result<(), StoreError> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let Some(next) = apply(entries.get(key).cloned()) else {
            return Ok(());
        };
        self.check_capacity(&entries, key, &next)?;
        entries.insert(key.to_string(), next);
        Ok(())
    }
}
