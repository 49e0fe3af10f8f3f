//! Clients for the remote storefront API.
//!
//! Both clients work without a remote API: the catalog falls back to the
//! built-in product list and orders go to the local stub.

pub mod catalog;
pub mod orders;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;

use crate::config::ApiConfig;

pub use catalog::{CatalogClient, CatalogError};
pub use orders::{HttpOrderService, OrderBackend};

/// Build the HTTP client shared by the catalog and order clients.
///
/// # Errors
///
/// Returns an error if the client cannot be built (e.g. TLS backend failure).
pub fn http_client(api: &ApiConfig) -> Result<reqwest::Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    if let Some(token) = &api.token
        && let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
    {
        headers.insert(AUTHORIZATION, value);
    }

    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(api.timeout)
        .build()
}

#[cfg(test)]
pub(crate) mod tests {
    use axum::Router;

    use crate::config::ApiConfig;

    /// Serve `app` on an ephemeral local port and point an API config at it.
    #[allow(clippy::unwrap_used)]
    pub(crate) async fn serve(app: Router) -> ApiConfig {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        ApiConfig::new(&format!("http://{addr}")).unwrap()
    }
}
