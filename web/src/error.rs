//! Error types for web handlers.
//!
//! [`ApiError`] bridges [`BookingError`] and HTTP responses. It is the only
//! place where handlers' status codes are chosen.

use crate::dto::SuggestionDto;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use room_booking_core::{BookingError, ErrorKind};
use serde::Serialize;
use std::fmt;

/// Application error type for web handlers.
///
/// # Examples
///
/// ```ignore
/// async fn handler(State(state): State<AppState>) -> Result<Json<Body>, ApiError> {
///     let booking = state.bookings.cancel_booking(&id)?;
///     Ok(Json(body))
/// }
/// ```
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code
    status: StatusCode,
    /// Error message (user-facing)
    message: String,
    /// Alternative windows for conflicts; `Some` only on 409 responses
    suggestions: Option<Option<Vec<SuggestionDto>>>,
}

impl ApiError {
    /// Create a new application error.
    #[must_use]
    pub const fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            suggestions: None,
        }
    }

    /// Create a 400 Bad Request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message.into())
    }

    /// Create a 404 Not Found error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message.into())
    }

    /// Create a 409 Conflict error carrying the `sugestao` field.
    #[must_use]
    pub fn conflict(message: impl Into<String>, suggestions: Option<Vec<SuggestionDto>>) -> Self {
        Self {
            suggestions: Some(suggestions),
            ..Self::new(StatusCode::CONFLICT, message.into())
        }
    }

    /// HTTP status of the response.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// User-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status.as_u16(), self.message)
    }
}

impl std::error::Error for ApiError {}

/// Error response body (JSON).
#[derive(Debug, Serialize)]
struct ErrorResponse {
    /// Human-readable error message.
    error: String,
    /// Present on conflicts only; `null` when no alternatives are known.
    #[serde(skip_serializing_if = "Option::is_none")]
    sugestao: Option<Option<Vec<SuggestionDto>>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(status = %self.status, message = %self.message, "Request rejected");

        let body = ErrorResponse {
            error: self.message,
            sugestao: self.suggestions,
        };

        (self.status, Json(body)).into_response()
    }
}

impl From<BookingError> for ApiError {
    fn from(err: BookingError) -> Self {
        let message = err.to_string();
        match err.kind() {
            ErrorKind::Validation | ErrorKind::InvalidWindow => Self::bad_request(message),
            ErrorKind::Conflict => {
                let suggestions = err
                    .suggestions()
                    .map(|windows| windows.iter().map(SuggestionDto::from).collect());
                Self::conflict(message, suggestions)
            }
            ErrorKind::NotFound => Self::not_found(message),
        }
    }
}

/// Malformed or non-JSON bodies.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use room_booking_core::{BookingId, TimeWindow, ValidationError};

    async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::bad_request("invalid room");
        assert_eq!(err.to_string(), "[400] invalid room");
    }

    #[test]
    fn test_booking_error_status_mapping() {
        let validation: ApiError = BookingError::from(ValidationError::InvalidStart).into();
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);
        assert_eq!(validation.message(), "invalid start");

        let now = chrono::Utc::now();
        let window: ApiError = BookingError::InvalidWindow { start: now, end: now }.into();
        assert_eq!(window.status(), StatusCode::BAD_REQUEST);

        let missing: ApiError = BookingError::NotFound(BookingId::from("RES-9")).into();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_plain_error_body() {
        let (status, body) = body_json(ApiError::bad_request("requester required")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "error": "requester required" }));
    }

    #[tokio::test]
    async fn test_conflict_body_carries_sugestao() {
        let err: ApiError = BookingError::Conflict {
            message: "time conflict".to_string(),
            suggestions: None,
        }
        .into();
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(
            body,
            serde_json::json!({ "error": "time conflict", "sugestao": null })
        );
    }

    #[tokio::test]
    async fn test_conflict_suggestions_serialized() {
        let start = chrono::Utc::now();
        let window = TimeWindow::new(start, start + chrono::Duration::hours(1)).unwrap();
        let err: ApiError = BookingError::Conflict {
            message: "taken".to_string(),
            suggestions: Some(vec![window]),
        }
        .into();
        let (_, body) = body_json(err).await;
        assert_eq!(body["sugestao"].as_array().map(Vec::len), Some(1));
        assert!(body["sugestao"][0]["dataInicio"].is_string());
    }
}
