//! Session middleware configuration.
//!
//! Sessions only carry the anonymous visitor id. The session records live in
//! the same key-value store as the carts and preferences they point to, so a
//! restart keeps every visitor's cookie, id and cart together.

use std::fmt;

use async_trait::async_trait;
use farah_core::kv::SharedStore;
use tower_sessions::cookie::time::{Duration, OffsetDateTime};
use tower_sessions::session::{Id, Record};
use tower_sessions::session_store::{self, SessionStore};
use tower_sessions::{Expiry, SessionManagerLayer};

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "farah_session";

/// Session expiry time in seconds (30 days).
const SESSION_EXPIRY_SECONDS: i64 = 30 * 24 * 60 * 60;

/// Session records kept in the storefront's key-value store under
/// `session.<id>`.
#[derive(Clone)]
pub struct KvSessionStore {
    store: SharedStore,
}

impl KvSessionStore {
    #[must_use]
    pub const fn new(store: SharedStore) -> Self {
        Self { store }
    }

    fn key(id: &Id) -> String {
        format!("session.{id}")
    }
}

impl fmt::Debug for KvSessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KvSessionStore").finish_non_exhaustive()
    }
}

fn backend(e: impl fmt::Display) -> session_store::Error {
    session_store::Error::Backend(e.to_string())
}

#[async_trait]
impl SessionStore for KvSessionStore {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        while self.store.get(&Self::key(&record.id)).map_err(backend)?.is_some() {
            // Id collision
            record.id = Id::default();
        }
        self.save(record).await
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        let raw = serde_json::to_string(record)
            .map_err(|e| session_store::Error::Encode(e.to_string()))?;
        self.store
            .set(&Self::key(&record.id), &raw)
            .map_err(backend)
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        let key = Self::key(session_id);
        let Some(raw) = self.store.get(&key).map_err(backend)? else {
            return Ok(None);
        };

        let record = match serde_json::from_str::<Record>(&raw) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding malformed session record");
                self.store.remove(&key).map_err(backend)?;
                return Ok(None);
            }
        };

        if record.expiry_date <= OffsetDateTime::now_utc() {
            self.store.remove(&key).map_err(backend)?;
            return Ok(None);
        }
        Ok(Some(record))
    }

    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        self.store.remove(&Self::key(session_id)).map_err(backend)
    }
}

/// Create the session layer over the storefront's key-value store.
#[must_use]
pub fn create_session_layer(
    config: &StorefrontConfig,
    store: SharedStore,
) -> SessionManagerLayer<KvSessionStore> {
    SessionManagerLayer::new(KvSessionStore::new(store))
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(Duration::seconds(SESSION_EXPIRY_SECONDS)))
        .with_secure(config.is_https())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use farah_core::kv::{KeyValueStore, MemoryStore};

    use super::*;

    fn record(expires_in: Duration) -> Record {
        let mut data = std::collections::HashMap::new();
        data.insert("visitor_id".to_string(), serde_json::json!("abc"));
        Record {
            id: Id::default(),
            data,
            expiry_date: OffsetDateTime::now_utc() + expires_in,
        }
    }

    #[tokio::test]
    async fn test_records_survive_a_new_store_handle() {
        let backend: SharedStore = Arc::new(MemoryStore::new());
        let mut saved = record(Duration::hours(1));
        KvSessionStore::new(Arc::clone(&backend))
            .create(&mut saved)
            .await
            .unwrap();

        let loaded = KvSessionStore::new(backend).load(&saved.id).await.unwrap();
        assert_eq!(loaded.unwrap().data["visitor_id"], "abc");
    }

    #[tokio::test]
    async fn test_expired_and_malformed_records_are_dropped() {
        let backend: SharedStore = Arc::new(MemoryStore::new());
        let sessions = KvSessionStore::new(Arc::clone(&backend));

        let expired = record(Duration::seconds(-5));
        sessions.save(&expired).await.unwrap();
        assert!(sessions.load(&expired.id).await.unwrap().is_none());
        assert!(backend.get(&KvSessionStore::key(&expired.id)).unwrap().is_none());

        let broken = Id::default();
        backend.set(&KvSessionStore::key(&broken), "{oops").unwrap();
        assert!(sessions.load(&broken).await.unwrap().is_none());
    }
}
