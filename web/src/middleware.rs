//! Axum middleware for request tracking.
//!
//! # Flow
//!
//! 1. **Extract** correlation ID from `X-Correlation-ID` header (or generate new UUID)
//! 2. **Store** it in request extensions as [`CorrelationId`]
//! 3. **Run** the request inside an `http_request` tracing span carrying it
//! 4. **Echo** it back in the response `X-Correlation-ID` header
//!
//! Handlers take [`CorrelationId`] as an extractor to tag their own events.

use axum::{
    async_trait,
    extract::{FromRequestParts, Request},
    http::{request::Parts, HeaderMap, HeaderValue},
    response::Response,
};
use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::{Layer, Service};
use tracing::Instrument;
use uuid::Uuid;

/// Header name for correlation ID.
pub const CORRELATION_ID_HEADER: &str = "X-Correlation-ID";

/// Correlation ID of the current request.
///
/// As an extractor it returns the id the layer stored, so handler events and
/// the response header agree. Without the layer it falls back to the header,
/// or a fresh UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrelationId(pub Uuid);

impl CorrelationId {
    /// Reads a UUID from the request headers, or generates a new one.
    fn from_headers(headers: &HeaderMap) -> Self {
        let id = headers
            .get(CORRELATION_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| Uuid::parse_str(s).ok())
            .unwrap_or_else(Uuid::new_v4);
        Self(id)
    }
}

impl std::fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CorrelationId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<Self>()
            .copied()
            .unwrap_or_else(|| Self::from_headers(&parts.headers)))
    }
}

/// Create a layer that adds correlation ID tracking to all requests.
///
/// # Example
///
/// ```ignore
/// let app = Router::new()
///     .route("/api/reserva", get(list_bookings))
///     .layer(correlation_id_layer());
/// ```
#[must_use]
pub const fn correlation_id_layer() -> CorrelationIdLayer {
    CorrelationIdLayer
}

/// Layer for correlation ID tracking.
#[derive(Clone, Copy, Debug)]
pub struct CorrelationIdLayer;

impl<S> Layer<S> for CorrelationIdLayer {
    type Service = CorrelationIdMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CorrelationIdMiddleware { inner }
    }
}

/// Middleware service for correlation ID tracking.
#[derive(Clone, Debug)]
pub struct CorrelationIdMiddleware<S> {
    inner: S,
}

impl<S> Service<Request> for CorrelationIdMiddleware<S>
where
    S: Service<Request, Response = Response> + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        let correlation_id = CorrelationId::from_headers(req.headers());
        req.extensions_mut().insert(correlation_id);

        let span = tracing::info_span!(
            "http_request",
            correlation_id = %correlation_id.0,
            method = %req.method(),
            uri = %req.uri(),
        );

        let fut = self.inner.call(req);

        Box::pin(async move {
            let mut response = fut.instrument(span).await?;

            if let Ok(header_value) = HeaderValue::from_str(&correlation_id.0.to_string()) {
                response
                    .headers_mut()
                    .insert(CORRELATION_ID_HEADER, header_value);
            }

            Ok(response)
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/test", get(|id: CorrelationId| async move { id.to_string() }))
            .layer(correlation_id_layer())
    }

    fn response_id(response: &Response) -> String {
        response
            .headers()
            .get(CORRELATION_ID_HEADER)
            .expect("Correlation ID header should be present")
            .to_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_correlation_id_generated_if_missing() {
        let request = Request::builder().uri("/test").body(Body::empty()).unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert!(Uuid::parse_str(&response_id(&response)).is_ok());
    }

    #[tokio::test]
    async fn test_correlation_id_preserved_and_visible_to_handler() {
        let request_uuid = Uuid::new_v4();
        let request = Request::builder()
            .uri("/test")
            .header(CORRELATION_ID_HEADER, request_uuid.to_string())
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response_id(&response), request_uuid.to_string());

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(body, request_uuid.to_string().as_bytes());
    }

    #[tokio::test]
    async fn test_generated_id_matches_what_handler_saw() {
        let request = Request::builder().uri("/test").body(Body::empty()).unwrap();

        let response = app().oneshot(request).await.unwrap();
        let header = response_id(&response);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(body, header.as_bytes());
    }

    #[tokio::test]
    async fn test_extractor_without_layer_reads_header() {
        let request_uuid = Uuid::new_v4();
        let (mut parts, ()) = Request::builder()
            .uri("/test")
            .header(CORRELATION_ID_HEADER, request_uuid.to_string())
            .body(())
            .unwrap()
            .into_parts();

        let id = CorrelationId::from_request_parts(&mut parts, &()).await.unwrap();

        assert_eq!(id, CorrelationId(request_uuid));
    }

    #[tokio::test]
    async fn test_invalid_uuid_generates_new() {
        let request = Request::builder()
            .uri("/test")
            .header(CORRELATION_ID_HEADER, "not-a-uuid")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        let id = response_id(&response);
        assert!(Uuid::parse_str(&id).is_ok());
        assert_ne!(id, "not-a-uuid");
    }
}
