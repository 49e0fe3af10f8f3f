//! Integration tests for Chef Farah Ammar.
//!
//! The storefront and the merchant dashboard run in-process over one shared
//! memory store, the same way both binaries share a data directory in
//! production. Requests go through the full routers, middleware included.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p farah-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `checkout_flow` - Cart to order to dashboard
//! - `preferences` - Language and cookie decisions across requests
//! - `restart` - Sessions and carts surviving a new process on the same data directory

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use farah_core::kv::{FileStore, MemoryStore, SharedStore};
use tower::ServiceExt;

/// Both apps over one store.
pub struct TestContext {
    pub store: SharedStore,
    pub storefront: Router,
    pub admin: Router,
}

impl TestContext {
    /// Build both routers over a fresh memory store.
    ///
    /// # Panics
    ///
    /// Panics if the storefront state cannot be built.
    #[must_use]
    pub fn new() -> Self {
        Self::over(Arc::new(MemoryStore::new()))
    }

    /// Build both routers over a file store in `dir`, as a freshly started
    /// process would.
    ///
    /// # Panics
    ///
    /// Panics if the directory cannot be opened or the state cannot be built.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn on_disk(dir: &Path) -> Self {
        Self::over(Arc::new(FileStore::open(dir).expect("data directory")))
    }

    #[allow(clippy::expect_used)]
    fn over(store: SharedStore) -> Self {
        let storefront_state = farah_storefront::state::AppState::with_store(
            farah_storefront::config::StorefrontConfig::local("http://localhost:3000"),
            Arc::clone(&store),
        )
        .expect("storefront state");
        let admin_state = farah_admin::state::AppState::with_store(
            farah_admin::config::AdminConfig::local("data"),
            Arc::clone(&store),
        );

        Self {
            storefront: farah_storefront::router(storefront_state),
            admin: farah_admin::router(admin_state),
            store,
        }
    }

    /// A browser against the storefront, carrying its session cookie.
    #[must_use]
    pub fn browser(&self) -> Browser {
        Browser {
            app: self.storefront.clone(),
            cookie: None,
        }
    }

    /// Point an existing browser at this storefront, keeping its cookie.
    #[must_use]
    pub fn resume(&self, browser: Browser) -> Browser {
        Browser {
            app: self.storefront.clone(),
            cookie: browser.cookie,
        }
    }

    /// A browser against the dashboard.
    #[must_use]
    pub fn merchant(&self) -> Browser {
        Browser {
            app: self.admin.clone(),
            cookie: None,
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A response with its body read.
pub struct Page {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

/// Minimal cookie-carrying client over a router.
pub struct Browser {
    app: Router,
    cookie: Option<String>,
}

impl Browser {
    /// `GET path`.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body is not UTF-8.
    pub async fn get(&mut self, path: &str) -> Page {
        let request = self.request("GET", path).body(Body::empty());
        self.send(request).await
    }

    /// `POST path` with a urlencoded form body.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body is not UTF-8.
    pub async fn post_form(&mut self, path: &str, form: &[(&str, &str)]) -> Page {
        let body = form
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        let request = self
            .request("POST", path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body));
        self.send(request).await
    }

    fn request(&self, method: &str, path: &str) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(path);
        match &self.cookie {
            Some(cookie) => builder.header(header::COOKIE, cookie),
            None => builder,
        }
    }

    #[allow(clippy::expect_used)]
    async fn send(&mut self, request: Result<Request<Body>, axum::http::Error>) -> Page {
        let response = self
            .app
            .clone()
            .oneshot(request.expect("request"))
            .await
            .expect("infallible");

        if let Some(set_cookie) = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
        {
            // Only the name=value pair goes back
            if let Some(pair) = set_cookie.split(';').next() {
                self.cookie = Some(pair.to_string());
            }
        }

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");

        Page {
            status,
            location,
            body: String::from_utf8(bytes.to_vec()).expect("utf-8 body"),
        }
    }
}
