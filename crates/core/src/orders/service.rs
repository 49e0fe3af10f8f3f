//! The order submission contract and its local stand-in.

use std::future::Future;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::checkout::OrderPayload;
use crate::types::OrderId;

/// Successful submission result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_id: OrderId,
}

/// Why an order could not be submitted.
///
/// The `Display` text is shown to the visitor as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderServiceError {
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status from the order API.
    #[error("API {status}: {reason}")]
    Status { status: u16, reason: String },

    #[error("Unexpected response from order service: {0}")]
    MalformedResponse(String),
}

/// Accepts an order payload and returns the id the backend assigned.
pub trait OrderService: Send + Sync {
    /// Submit one order. Implementations perform at most one request.
    fn submit(
        &self,
        payload: &OrderPayload,
    ) -> impl Future<Output = Result<OrderConfirmation, OrderServiceError>> + Send;
}

/// Order service that performs no I/O and always succeeds.
///
/// Ids have the form `ord-<unix millis>` and strictly increase within the
/// process, so two orders in the same millisecond still get distinct ids.
#[derive(Debug, Default)]
pub struct StubOrderService {
    last_issued: AtomicI64,
}

impl StubOrderService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next local order id without submitting anything.
    #[must_use]
    pub fn next_id(&self) -> OrderId {
        let now = Utc::now().timestamp_millis();
        let mut previous = self.last_issued.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(previous + 1);
            match self.last_issued.compare_exchange_weak(
                previous,
                candidate,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return OrderId::new(format!("ord-{candidate}")),
                Err(actual) => previous = actual,
            }
        }
    }
}

impl OrderService for StubOrderService {
    fn submit(
        &self,
        payload: &OrderPayload,
    ) -> impl Future<Output = Result<OrderConfirmation, OrderServiceError>> + Send {
        let order_id = self.next_id();
        tracing::info!(order_id = %order_id, items = payload.items.len(), "Accepted order locally");
        async move { Ok(OrderConfirmation { order_id }) }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::checkout::OrderPayload;

    #[tokio::test]
    async fn test_stub_ids_are_unique_and_prefixed() {
        let service = StubOrderService::new();
        let payload = OrderPayload::default();

        let mut seen = HashSet::new();
        for _ in 0..50 {
            let confirmation = service.submit(&payload).await.unwrap();
            assert!(confirmation.order_id.as_str().starts_with("ord-"));
            assert!(seen.insert(confirmation.order_id));
        }
    }

    #[test]
    fn test_error_messages() {
        let err = OrderServiceError::Status {
            status: 503,
            reason: "Service Unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "API 503: Service Unavailable");
    }
}
