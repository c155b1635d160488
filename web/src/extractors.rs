//! Custom Axum extractors.
//!
//! - `ApiJson`: JSON body extractor whose rejection is an [`ApiError`]
//!
//! # Examples
//!
//! ```ignore
//! use room_booking_web::extractors::ApiJson;
//!
//! async fn handler(ApiJson(body): ApiJson<BookingIdBody>) -> Result<Json<Response>, ApiError> {
//!     // Malformed JSON never reaches this point; the client got `400 {"error": ...}`.
//!     Ok(Json(response))
//! }
//! ```

use crate::error::ApiError;
use axum::extract::FromRequest;

/// JSON body extractor.
///
/// Behaves like [`axum::Json`], but a missing content type, a syntax error
/// or a body of the wrong shape is answered with `400 {"error": ...}`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
