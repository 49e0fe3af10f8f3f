//! Chef Farah Ammar merchant dashboard library.
//!
//! This crate provides the dashboard as a library, allowing it to be tested
//! and reused by the CLI.
//!
//! # Security
//!
//! The dashboard shows customer names, phone numbers and addresses and has
//! no login. Bind it to localhost or a private network only.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod views;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Router, routing::get};
use farah_core::kv::keys;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use state::AppState;

/// Static assets, relative to the workspace root.
pub const STATIC_DIR: &str = "crates/admin/static";

/// Build the admin router with its middleware stack.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable if the order ledger cannot be read.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.store().get(keys::ORDERS) {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Store not ready");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use chrono::Utc;
    use farah_core::kv::{MemoryStore, SharedStore};
    use farah_core::orders::{Customer, Order, OrderLine};
    use farah_core::{OrderId, OrderStatus};
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    use super::*;
    use crate::config::AdminConfig;

    fn state_with_order() -> AppState {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let state = AppState::with_store(AdminConfig::local("unused"), store);
        state.ledger().record(Order {
            id: OrderId::new("ord-1"),
            date: Utc::now(),
            customer: Customer {
                name: "Rami".to_string(),
                phone: "0529876543".to_string(),
                address: "Acre".to_string(),
            },
            notes: Some("Ring twice".to_string()),
            items: vec![OrderLine {
                name: "Teriyaki Sauce".to_string(),
                price: Decimal::from(15),
                quantity: 2,
            }],
            total: Decimal::from(30),
            status: OrderStatus::Pending,
        });
        state
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_dashboard_lists_orders() {
        let response = router(state_with_order())
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("ord-1"));
        assert!(html.contains("Rami"));
        assert!(html.contains("dir=\"rtl\""));
        assert!(html.contains("/orders/ord-1/done"));
    }

    #[tokio::test]
    async fn test_mark_done_redirects_and_persists() {
        let state = state_with_order();
        let response = router(state.clone())
            .oneshot(
                Request::post("/orders/ord-1/done")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(state.ledger().stats().done, 1);

        let response = router(state.clone())
            .oneshot(
                Request::post("/orders/ord-404/done")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(state.ledger().orders().len(), 1);
    }

    #[tokio::test]
    async fn test_invoice() {
        let state = state_with_order();
        let response = router(state.clone())
            .oneshot(
                Request::get("/orders/ord-1/invoice")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Teriyaki Sauce"));
        assert!(html.contains("30 ₪"));
        assert!(html.contains("Ring twice"));
        assert!(html.contains("/static/js/print.js"));

        let response = router(state)
            .oneshot(
                Request::get("/orders/ord-404/invoice")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
