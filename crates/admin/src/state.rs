//! Application state shared across handlers.

use std::sync::Arc;

use farah_core::i18n::Translator;
use farah_core::kv::{FileStore, SharedStore, StoreError};
use farah_core::orders::OrderLedger;

use crate::config::AdminConfig;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    store: SharedStore,
    ledger: OrderLedger<SharedStore>,
}

impl AppState {
    /// Open the file store in the configured data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn new(config: AdminConfig) -> Result<Self, StoreError> {
        let store: SharedStore = Arc::new(FileStore::open(&config.data_dir)?);
        Ok(Self::with_store(config, store))
    }

    /// Create application state over an existing store.
    #[must_use]
    pub fn with_store(config: AdminConfig, store: SharedStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                ledger: OrderLedger::new(Arc::clone(&store)),
                config,
                store,
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn store(&self) -> &SharedStore {
        &self.inner.store
    }

    #[must_use]
    pub fn ledger(&self) -> &OrderLedger<SharedStore> {
        &self.inner.ledger
    }

    /// Translator for the configured dashboard language.
    #[must_use]
    pub fn translator(&self) -> Translator {
        Translator::new(self.inner.config.locale)
    }
}
