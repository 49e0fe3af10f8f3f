//! Catalog client with fallback to the built-in product list.
//!
//! Caches the remote product list using `moka` (5-minute TTL).

use std::sync::Arc;
use std::time::Duration;

use farah_core::ProductId;
use farah_core::catalog::{Product, extract_product_list, fallback_products, normalize_product};
use moka::future::Cache;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::config::ApiConfig;

/// Why the remote catalog could not be used.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API {status}: {reason}")]
    Status { status: u16, reason: String },

    /// The API answered with no usable products.
    #[error("catalog is empty")]
    Empty,
}

/// Source of product data for the storefront.
///
/// Never fails: without a remote API, or when the API errors or returns
/// nothing, the built-in list is served instead.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    remote: Option<Remote>,
    cache: Cache<(), Arc<Vec<Product>>>,
}

struct Remote {
    client: reqwest::Client,
    endpoint: String,
}

impl CatalogClient {
    /// Client that only ever serves the built-in list.
    #[must_use]
    pub fn offline() -> Self {
        Self::build(None)
    }

    /// Client backed by the remote API at `api`.
    #[must_use]
    pub fn remote(api: &ApiConfig, client: reqwest::Client) -> Self {
        Self::build(Some(Remote {
            client,
            endpoint: api.endpoint("/products"),
        }))
    }

    fn build(remote: Option<Remote>) -> Self {
        let cache = Cache::builder()
            .max_capacity(1)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            inner: Arc::new(CatalogClientInner { remote, cache }),
        }
    }

    /// All products, normalized.
    #[instrument(skip(self))]
    pub async fn fetch_all(&self) -> Vec<Product> {
        let Some(remote) = &self.inner.remote else {
            return fallback_products();
        };

        // Concurrent misses share one request; failures are not cached.
        match self
            .inner
            .cache
            .try_get_with((), fetch_remote(remote))
            .await
        {
            Ok(products) => products.as_ref().clone(),
            Err(e) => {
                warn!(error = %e, "Remote catalog unavailable, serving built-in products");
                fallback_products()
            }
        }
    }

    /// The product with this slug, if any.
    pub async fn fetch_by_slug(&self, slug: &str) -> Option<Product> {
        self.fetch_all().await.into_iter().find(|p| p.slug == slug)
    }

    /// The product with this id, if any.
    pub async fn fetch_by_id(&self, id: &ProductId) -> Option<Product> {
        self.fetch_all().await.into_iter().find(|p| &p.id == id)
    }
}

async fn fetch_remote(remote: &Remote) -> Result<Arc<Vec<Product>>, CatalogError> {
    let response = remote.client.get(&remote.endpoint).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        });
    }

    let body: serde_json::Value = response.json().await?;
    let products: Vec<Product> = extract_product_list(body)
        .iter()
        .filter_map(normalize_product)
        .collect();

    if products.is_empty() {
        return Err(CatalogError::Empty);
    }

    debug!(count = products.len(), "Fetched remote catalog");
    Ok(Arc::new(products))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::Router;
    use axum::routing::get;
    use serde_json::json;

    use super::*;
    use crate::services::http_client;
    use crate::services::tests::serve;

    #[tokio::test]
    async fn test_offline_serves_fallback() {
        let client = CatalogClient::offline();
        assert_eq!(client.fetch_all().await.len(), 7);

        let product = client.fetch_by_slug("dumplings-meat").await.unwrap();
        assert_eq!(product.id.as_str(), "2");
        assert!(client.fetch_by_slug("nope").await.is_none());
        assert!(client.fetch_by_id(&ProductId::new("7")).await.is_some());
    }

    #[tokio::test]
    async fn test_unreachable_remote_falls_back() {
        let mut api = ApiConfig::new("http://127.0.0.1:9").unwrap();
        api.timeout = Duration::from_millis(200);
        let client = CatalogClient::remote(&api, crate::services::http_client(&api).unwrap());

        let products = client.fetch_all().await;
        assert_eq!(products.len(), 7);
        assert_eq!(products[0].slug, "dumplings-chicken");
    }

    #[tokio::test]
    async fn test_remote_products_are_normalized() {
        let api = serve(Router::new().route(
            "/products",
            get(|| async {
                axum::Json(json!({
                    "results": [
                        { "id": 11, "slug": "kubbeh", "name_en": "Kubbeh", "price": "30" },
                        { "name": "No slug", "price": 5 }
                    ]
                }))
            }),
        ))
        .await;
        let client = CatalogClient::remote(&api, http_client(&api).unwrap());

        let products = client.fetch_all().await;
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id.as_str(), "11");
        assert_eq!(products[0].name, "Kubbeh");
        assert_eq!(products[0].price.to_string(), "30");
        assert!(client.fetch_by_slug("dumplings-chicken").await.is_none());
    }

    #[tokio::test]
    async fn test_empty_remote_list_falls_back() {
        let api = serve(Router::new().route(
            "/products",
            get(|| async { axum::Json(json!({ "products": [] })) }),
        ))
        .await;
        let client = CatalogClient::remote(&api, http_client(&api).unwrap());

        let products = client.fetch_all().await;
        assert_eq!(products.len(), 7);
        assert_eq!(products[0].slug, "dumplings-chicken");
    }
}
