//! Order submission over HTTP, and the backend selector.

use std::future::Future;
use std::sync::Arc;

use farah_core::OrderId;
use farah_core::checkout::OrderPayload;
use farah_core::orders::{OrderConfirmation, OrderService, OrderServiceError, StubOrderService};
use serde_json::Value;
use tracing::{instrument, warn};

use crate::config::ApiConfig;

/// Response fields that may carry the new order's id, in priority order.
const ORDER_ID_FIELDS: [&str; 4] = ["orderId", "order_id", "public_id", "id"];

/// Posts orders to `{api}/orders`.
///
/// An accepted order whose response names no id gets a locally issued
/// `ord-<millis>` id, so the visitor still sees a confirmation.
#[derive(Clone)]
pub struct HttpOrderService {
    client: reqwest::Client,
    endpoint: String,
    local_ids: Arc<StubOrderService>,
}

impl HttpOrderService {
    #[must_use]
    pub fn new(api: &ApiConfig, client: reqwest::Client) -> Self {
        Self {
            client,
            endpoint: api.endpoint("/orders"),
            local_ids: Arc::new(StubOrderService::new()),
        }
    }

    #[instrument(skip(self, payload), fields(items = payload.items.len()))]
    async fn post(&self, payload: &OrderPayload) -> Result<OrderConfirmation, OrderServiceError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| OrderServiceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(OrderServiceError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| OrderServiceError::MalformedResponse(e.to_string()))?;

        let order_id = extract_order_id(&body).unwrap_or_else(|| {
            let local = self.local_ids.next_id();
            warn!(order_id = %local, "Order accepted without an id, using a local one");
            local
        });

        Ok(OrderConfirmation { order_id })
    }
}

/// Pull the order id out of a submission response.
fn extract_order_id(body: &Value) -> Option<OrderId> {
    ORDER_ID_FIELDS.iter().find_map(|field| match body.get(*field) {
        Some(Value::String(s)) if !s.is_empty() => Some(OrderId::new(s.as_str())),
        Some(Value::Number(n)) => Some(OrderId::new(n.to_string())),
        _ => None,
    })
}

impl OrderService for HttpOrderService {
    fn submit(
        &self,
        payload: &OrderPayload,
    ) -> impl Future<Output = Result<OrderConfirmation, OrderServiceError>> + Send {
        self.post(payload)
    }
}

/// The order service in use: the remote API when configured, else the stub.
pub enum OrderBackend {
    Http(HttpOrderService),
    Stub(StubOrderService),
}

impl OrderService for OrderBackend {
    fn submit(
        &self,
        payload: &OrderPayload,
    ) -> impl Future<Output = Result<OrderConfirmation, OrderServiceError>> + Send {
        async move {
            match self {
                Self::Http(service) => service.submit(payload).await,
                Self::Stub(service) => service.submit(payload).await,
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::post;
    use serde_json::json;

    use super::*;
    use crate::services::http_client;
    use crate::services::tests::serve;

    fn service_for(api: &ApiConfig) -> HttpOrderService {
        HttpOrderService::new(api, http_client(api).unwrap())
    }

    #[test]
    fn test_extract_order_id_variants() {
        assert_eq!(
            extract_order_id(&json!({ "orderId": "ord-1" })).unwrap().as_str(),
            "ord-1"
        );
        assert_eq!(
            extract_order_id(&json!({ "order_id": 42 })).unwrap().as_str(),
            "42"
        );
        assert_eq!(
            extract_order_id(&json!({ "public_id": "A7F3", "id": 9 }))
                .unwrap()
                .as_str(),
            "A7F3"
        );
        assert!(extract_order_id(&json!({ "ok": true })).is_none());
    }

    #[tokio::test]
    async fn test_accepted_order_returns_remote_id() {
        let api = serve(Router::new().route(
            "/orders",
            post(|| async { axum::Json(json!({ "orderId": "ord-9" })) }),
        ))
        .await;

        let confirmation = service_for(&api)
            .submit(&OrderPayload::default())
            .await
            .unwrap();
        assert_eq!(confirmation.order_id.as_str(), "ord-9");
    }

    #[tokio::test]
    async fn test_accepted_order_without_id_gets_local_id() {
        let api = serve(Router::new().route(
            "/orders",
            post(|| async { axum::Json(json!({ "ok": true })) }),
        ))
        .await;

        let confirmation = service_for(&api)
            .submit(&OrderPayload::default())
            .await
            .unwrap();
        assert!(confirmation.order_id.as_str().starts_with("ord-"));
    }

    #[tokio::test]
    async fn test_rejected_order_reports_status() {
        let api = serve(Router::new().route(
            "/orders",
            post(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        ))
        .await;

        let err = service_for(&api)
            .submit(&OrderPayload::default())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            OrderServiceError::Status {
                status: 503,
                reason: "Service Unavailable".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_network_failure_is_reported() {
        let mut api = ApiConfig::new("http://127.0.0.1:9").unwrap();
        api.timeout = Duration::from_millis(200);

        let err = service_for(&api)
            .submit(&OrderPayload::default())
            .await
            .unwrap_err();
        assert!(matches!(err, OrderServiceError::Network(_)));
    }

    #[tokio::test]
    async fn test_stub_backend() {
        let backend = OrderBackend::Stub(StubOrderService::new());
        let confirmation = backend.submit(&OrderPayload::default()).await.unwrap();
        assert!(confirmation.order_id.as_str().starts_with("ord-"));
    }
}
