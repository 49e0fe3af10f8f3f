//! Key namespacing.

use super::{KeyValueStore, StoreError, Update};

/// Wraps another store and prefixes every key.
///
/// The storefront gives each visitor a scope (`visitor.<id>.`) so carts and
/// preferences never collide, much like browser storage is scoped per origin.
#[derive(Debug, Clone)]
pub struct ScopedStore<S> {
    inner: S,
    prefix: String,
}

impl<S: KeyValueStore> ScopedStore<S> {
    /// Scope `inner` under `namespace`.
    pub fn new(inner: S, namespace: &str) -> Self {
        Self {
            inner,
            prefix: format!("{namespace}."),
        }
    }

    fn scoped(&self, key: &str) -> String {
        format!("{}{key}", self.prefix)
    }
}

impl<S: KeyValueStore> KeyValueStore for ScopedStore<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(&self.scoped(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.inner.set(&self.scoped(key), value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.inner.remove(&self.scoped(key))
    }

    fn update(&self, key: &str, apply: &mut Update<'_>) -> Result<(), StoreError> {
        self.inner.update(&self.scoped(key), apply)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::kv::MemoryStore;

    #[test]
    fn test_scopes_do_not_collide() {
        let backend = Arc::new(MemoryStore::new());
        let alice = ScopedStore::new(Arc::clone(&backend), "visitor.alice");
        let bob = ScopedStore::new(Arc::clone(&backend), "visitor.bob");

        alice.set("farah-cart", "[1]").unwrap();
        bob.set("farah-cart", "[2]").unwrap();

        assert_eq!(alice.get("farah-cart").unwrap().as_deref(), Some("[1]"));
        assert_eq!(bob.get("farah-cart").unwrap().as_deref(), Some("[2]"));
        assert_eq!(
            backend.get("visitor.alice.farah-cart").unwrap().as_deref(),
            Some("[1]")
        );
    }
}
