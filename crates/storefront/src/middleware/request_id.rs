//! Request ID middleware for request tracing and correlation.
//!
//! An upstream proxy may supply `x-request-id`; anything else gets a fresh
//! UUID. The id is tagged on the Sentry scope and echoed in the response.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_UPSTREAM_ID_LEN: usize = 128;

/// Accept an upstream id only if it is short printable ASCII.
fn upstream_id(value: &HeaderValue) -> Option<String> {
    let id = value.to_str().ok()?.trim();
    let printable = id.chars().all(|c| c.is_ascii_graphic());
    (!id.is_empty() && id.len() <= MAX_UPSTREAM_ID_LEN && printable).then(|| id.to_string())
}

/// Middleware that ensures every request has a request ID.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(upstream_id)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    Span::current().record("request_id", &request_id);

    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id);
    });

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_id_validation() {
        let ok = HeaderValue::from_static("cf-8a1b2c3d");
        assert_eq!(upstream_id(&ok).as_deref(), Some("cf-8a1b2c3d"));

        let spaced = HeaderValue::from_static("two words");
        assert_eq!(upstream_id(&spaced), None);

        let long = HeaderValue::from_str(&"a".repeat(200)).unwrap_or_else(|_| ok.clone());
        assert_eq!(upstream_id(&long), None);
    }
}
