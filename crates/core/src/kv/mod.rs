//! Key-value persistence seam.
//!
//! Everything the storefront remembers between requests (a visitor's cart,
//! language and cookie decision, and the merchant's order list) goes through
//! the small [`KeyValueStore`] interface. Values are JSON strings, one per key,
//! and a failing or missing value always degrades to that key's default.
//!
//! # Backends
//!
//! - [`MemoryStore`] - process-local map, optionally capacity-limited
//! - [`FileStore`] - one JSON file per key in a data directory
//! - [`ScopedStore`] - prefixes keys so each visitor gets its own namespace

mod file;
mod memory;
mod scoped;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use scoped::ScopedStore;

/// Storage keys shared by the storefront, dashboard and CLI.
pub mod keys {
    /// A visitor's cart snapshot (array of line items).
    pub const CART: &str = "farah-cart";

    /// A visitor's display language.
    pub const LOCALE: &str = "farah-lang";

    /// A visitor's cookie-notice decision.
    pub const COOKIE_CONSENT: &str = "farah-cookie-consent";

    /// The merchant's list of submitted orders.
    pub const ORDERS: &str = "farah-orders";
}

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not be read or written.
    #[error("storage unavailable: {0}")]
    Unavailable(#[from] std::io::Error),

    /// Writing the value would exceed the backend's capacity.
    #[error("storage quota exceeded writing {key} ({needed} bytes, {available} available)")]
    QuotaExceeded {
        key: String,
        needed: usize,
        available: usize,
    },

    /// A value could not be serialized.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A synchronous string-keyed store with get/set/remove.
///
/// Implementations must be safe to share between request handlers. Callers
/// treat every error as recoverable: reads fall back to defaults and failed
/// writes leave the in-memory state authoritative.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written or is full.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete the value under `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Replace the value under `key` with `apply(current)` as one atomic
    /// step. No other writer of the same backend runs between the read and
    /// the write. When `apply` returns `None` nothing is written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read, written or locked.
    fn update(&self, key: &str, apply: &mut Update<'_>) -> Result<(), StoreError>;
}

/// Read-modify-write step passed to [`KeyValueStore::update`].
pub type Update<'a> = dyn FnMut(Option<String>) -> Option<String> + 'a;

/// A shareable, type-erased store handle.
pub type SharedStore = Arc<dyn KeyValueStore>;

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }

    fn update(&self, key: &str, apply: &mut Update<'_>) -> Result<(), StoreError> {
        (**self).update(key, apply)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }

    fn update(&self, key: &str, apply: &mut Update<'_>) -> Result<(), StoreError> {
        (**self).update(key, apply)
    }
}

/// Load and decode a JSON value, degrading to `None` on any failure.
///
/// Missing keys, unreadable backends and malformed JSON are all treated the
/// same way; the latter two are logged.
pub fn load_json<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read from store");
            return None;
        }
    };

    decode(key, &raw)
}

fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Option<T> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "Discarding malformed stored value");
            None
        }
    }
}

/// Encode a value as JSON and store it.
///
/// # Errors
///
/// Returns an error if serialization or the backend write fails.
pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// Decode, modify and re-store a JSON value in one atomic step.
///
/// A missing or malformed value starts from `T::default()`. `modify`
/// returns whether it changed anything; unchanged values are not written.
/// Returns what `modify` returned.
///
/// # Errors
///
/// Returns an error if serialization or the backend update fails.
pub fn update_json<T, S, F>(store: &S, key: &str, modify: F) -> Result<bool, StoreError>
where
    T: Serialize + DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
    F: FnOnce(&mut T) -> bool,
{
    let mut modify = Some(modify);
    let mut outcome = Ok(false);

    store.update(key, &mut |current| {
        let modify = modify.take()?;
        let mut value: T = current
            .as_deref()
            .and_then(|raw| decode(key, raw))
            .unwrap_or_default();
        if !modify(&mut value) {
            return None;
        }
        match serde_json::to_string(&value) {
            Ok(raw) => {
                outcome = Ok(true);
                Some(raw)
            }
            Err(e) => {
                outcome = Err(StoreError::Serialize(e));
                None
            }
        }
    })?;

    outcome
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_load_json_missing_key_is_none() {
        let store = MemoryStore::new();
        let value: Option<Vec<u32>> = load_json(&store, "absent");
        assert!(value.is_none());
    }

    #[test]
    fn test_load_json_malformed_is_none() {
        let store = MemoryStore::new();
        store.set("broken", "{not json").unwrap();
        let value: Option<Vec<u32>> = load_json(&store, "broken");
        assert!(value.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        save_json(&store, "numbers", &vec![1_u32, 2, 3]).unwrap();
        let value: Option<Vec<u32>> = load_json(&store, "numbers");
        assert_eq!(value, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_update_json_skips_unchanged() {
        let store = MemoryStore::new();
        assert!(!update_json(&store, "numbers", |_: &mut Vec<u32>| false).unwrap());
        assert_eq!(store.get("numbers").unwrap(), None);

        assert!(update_json(&store, "numbers", |v: &mut Vec<u32>| {
            v.push(7);
            true
        })
        .unwrap());
        store.set("numbers", "{broken").unwrap();
        update_json(&store, "numbers", |v: &mut Vec<u32>| {
            v.push(8);
            true
        })
        .unwrap();
        let value: Option<Vec<u32>> = load_json(&store, "numbers");
        assert_eq!(value, Some(vec![8]));
    }

    #[test]
    fn test_shared_store_is_object_safe() {
        let shared: SharedStore = Arc::new(MemoryStore::new());
        shared.set("k", "\"v\"").unwrap();
        let value: Option<String> = load_json(&shared, "k");
        assert_eq!(value.as_deref(), Some("v"));
    }
}
