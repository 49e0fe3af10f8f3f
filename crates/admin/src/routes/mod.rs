//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//! GET  /                       - Order dashboard (stats, recent first)
//! POST /orders/{id}/done       - Mark an order delivered
//! GET  /orders/{id}/invoice    - Printable invoice
//! ```

pub mod dashboard;
pub mod orders;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/{id}/done", post(orders::mark_done))
        .route("/{id}/invoice", get(orders::invoice))
}

/// Create all routes for the admin panel.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::index))
        .nest("/orders", order_routes())
}
