//! Anonymous visitor identification.
//!
//! Every browser gets a random visitor id stored in its session. The id keys
//! the visitor's cart and preferences in the key-value store.

use axum::{extract::FromRequestParts, http::request::Parts};
use tokio::sync::MutexGuard;
use tower_sessions::Session;
use uuid::Uuid;

use crate::error::{AppError, set_sentry_visitor};
use crate::state::{AppState, SharedVisitor, VisitorSession};

/// Session key holding the visitor id.
pub const VISITOR_ID_KEY: &str = "visitor_id";

/// Extractor for the current visitor's state.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(visitor: Visitor) -> impl IntoResponse {
///     let session = visitor.lock().await;
///     format!("{} items", session.cart.item_count())
/// }
/// ```
pub struct Visitor {
    pub id: String,
    state: SharedVisitor,
}

impl Visitor {
    /// Lock this visitor's state. Hold the guard only while reading or
    /// mutating; never across a network call.
    pub async fn lock(&self) -> MutexGuard<'_, VisitorSession> {
        self.state.lock().await
    }

    /// A second handle to the same state, for work that must outlive the
    /// request.
    #[must_use]
    pub fn shared(&self) -> SharedVisitor {
        std::sync::Arc::clone(&self.state)
    }
}

impl FromRequestParts<AppState> for Visitor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Set by SessionManagerLayer
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Internal("session layer missing".to_string()))?;

        let id = match session.get::<String>(VISITOR_ID_KEY).await? {
            Some(id) => id,
            None => {
                let id = Uuid::new_v4().simple().to_string();
                session.insert(VISITOR_ID_KEY, &id).await?;
                tracing::debug!(visitor_id = %id, "New visitor");
                id
            }
        };

        set_sentry_visitor(&id);
        let visitor_state = state.visitor(&id).await;

        Ok(Self {
            id,
            state: visitor_state,
        })
    }
}
