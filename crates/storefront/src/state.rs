//! Application state shared across handlers.

use std::sync::Arc;
use std::time::Duration;

use farah_core::cart::CartStore;
use farah_core::checkout::CheckoutPipeline;
use farah_core::i18n::Translator;
use farah_core::kv::{FileStore, MemoryStore, ScopedStore, SharedStore, StoreError};
use farah_core::orders::{OrderLedger, StubOrderService};
use farah_core::preferences::Preferences;
use farah_core::whatsapp::WhatsAppLink;
use moka::future::Cache;
use tokio::sync::Mutex;

use crate::config::{StoreBackend, StorefrontConfig};
use crate::services::{CatalogClient, HttpOrderService, OrderBackend, http_client};

/// How long an idle visitor's state stays in memory. It is reloaded from the
/// store on the next request after eviction.
const VISITOR_IDLE: Duration = Duration::from_secs(30 * 60);

/// Error building application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// The key-value scope a visitor's data lives in.
pub type VisitorStore = ScopedStore<SharedStore>;

/// Everything the storefront remembers about one visitor.
pub struct VisitorSession {
    pub cart: CartStore<VisitorStore>,
    pub preferences: Preferences<VisitorStore>,
    pub checkout: CheckoutPipeline,
    /// One-shot message key shown on the next rendered page.
    pub flash: Option<&'static str>,
}

impl VisitorSession {
    fn load(store: &SharedStore, visitor_id: &str) -> Self {
        let scoped = ScopedStore::new(Arc::clone(store), &format!("visitor.{visitor_id}"));
        Self {
            cart: CartStore::load(scoped.clone()),
            preferences: Preferences::load(scoped),
            checkout: CheckoutPipeline::new(),
            flash: None,
        }
    }

    #[must_use]
    pub const fn translator(&self) -> Translator {
        Translator::new(self.preferences.locale())
    }

    /// Take the pending flash message, if any.
    pub fn take_flash(&mut self) -> Option<&'static str> {
        self.flash.take()
    }
}

/// A visitor's state behind its single-writer lock.
pub type SharedVisitor = Arc<Mutex<VisitorSession>>;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the store, catalog and order service.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: SharedStore,
    catalog: CatalogClient,
    orders: OrderBackend,
    ledger: OrderLedger<SharedStore>,
    whatsapp: WhatsAppLink,
    visitors: Cache<String, SharedVisitor>,
}

impl AppState {
    /// Create application state, opening the configured store.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created or the HTTP
    /// client fails to build.
    pub fn new(config: StorefrontConfig) -> Result<Self, StateError> {
        let store: SharedStore = match &config.store {
            StoreBackend::File(dir) => Arc::new(FileStore::open(dir)?),
            StoreBackend::Memory => Arc::new(MemoryStore::new()),
        };
        Self::with_store(config, store)
    }

    /// Create application state over an existing store.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn with_store(config: StorefrontConfig, store: SharedStore) -> Result<Self, StateError> {
        let (catalog, orders) = match &config.api {
            Some(api) => {
                let client = http_client(api)?;
                (
                    CatalogClient::remote(api, client.clone()),
                    OrderBackend::Http(HttpOrderService::new(api, client)),
                )
            }
            None => (
                CatalogClient::offline(),
                OrderBackend::Stub(StubOrderService::new()),
            ),
        };

        // Idle expiry only: a size bound could evict a visitor whose lock is
        // still held and let a second copy of the same session load.
        let visitors = Cache::builder().time_to_idle(VISITOR_IDLE).build();

        Ok(Self {
            inner: Arc::new(AppStateInner {
                whatsapp: WhatsAppLink::new(&config.whatsapp_number),
                ledger: OrderLedger::new(Arc::clone(&store)),
                config,
                store,
                catalog,
                orders,
                visitors,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the key-value store.
    #[must_use]
    pub fn store(&self) -> &SharedStore {
        &self.inner.store
    }

    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    #[must_use]
    pub fn orders(&self) -> &OrderBackend {
        &self.inner.orders
    }

    /// The merchant's order ledger.
    #[must_use]
    pub fn ledger(&self) -> &OrderLedger<SharedStore> {
        &self.inner.ledger
    }

    #[must_use]
    pub fn whatsapp(&self) -> &WhatsAppLink {
        &self.inner.whatsapp
    }

    /// The state of `visitor_id`, loading it from the store on first use.
    pub async fn visitor(&self, visitor_id: &str) -> SharedVisitor {
        let store = &self.inner.store;
        self.inner
            .visitors
            .get_with(visitor_id.to_string(), async {
                Arc::new(Mutex::new(VisitorSession::load(store, visitor_id)))
            })
            .await
    }
}
