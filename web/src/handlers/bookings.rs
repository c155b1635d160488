//! Booking endpoints.
//!
//! - `GET /api/reserva` - list every booking in creation order
//! - `POST /api/reserva/add` - create a booking
//! - `POST /api/reserva/remove` - cancel a booking by id
//! - `POST /api/reserva/` - look a booking up by id
//!
//! Handlers only translate between wire types and the booking service;
//! every rejection goes through [`ApiError`]. Writes log their outcome with
//! the request's [`CorrelationId`].

#![allow(clippy::unused_async)] // Axum handlers must be async

use crate::dto::{
    BookingDto, BookingIdBody, CancelledResponse, CreateBookingBody, CreatedResponse,
    LookupResponse,
};
use crate::error::ApiError;
use crate::extractors::ApiJson;
use crate::middleware::CorrelationId;
use crate::state::AppState;
use crate::WebResult;
use axum::{extract::State, http::StatusCode, Json};
use room_booking_core::{BookingId, BookingRequest};

/// Confirmation message of a successful cancellation.
pub const CANCELLED_MESSAGE: &str = "booking cancelled successfully";

/// Message for a lookup body without a usable `id`.
pub const ID_REQUIRED_MESSAGE: &str = "id is required";

/// List all bookings.
///
/// # Response
///
/// `200` with an array of bookings, cancelled ones included.
pub async fn list_bookings(State(state): State<AppState>) -> Json<Vec<BookingDto>> {
    let bookings = state
        .bookings
        .list_bookings()
        .iter()
        .map(BookingDto::from)
        .collect();
    Json(bookings)
}

/// Create a booking.
///
/// # Request
///
/// ```json
/// {
///   "sala": { "nome": "Sala 101", "capacidade": 6 },
///   "dataInicio": "2025-12-10T14:00",
///   "dataFim": "2025-12-10T16:00",
///   "usuario": "João Silva",
///   "numeroPessoas": 4
/// }
/// ```
///
/// # Errors
///
/// - `400 {error}` for validation failures and inverted windows
/// - `409 {error, sugestao}` when the slot is taken
pub async fn create_booking(
    State(state): State<AppState>,
    correlation_id: CorrelationId,
    ApiJson(body): ApiJson<CreateBookingBody>,
) -> WebResult<(StatusCode, Json<CreatedResponse>)> {
    let confirmation = state
        .bookings
        .create_booking(BookingRequest::from(body))
        .inspect_err(|e| {
            tracing::info!(%correlation_id, kind = ?e.kind(), error = %e, "Booking rejected");
        })?;
    tracing::info!(
        %correlation_id,
        booking_id = %confirmation.booking.id,
        room = confirmation.booking.room.name(),
        "Booking created"
    );
    Ok((StatusCode::CREATED, Json(confirmation.into())))
}

/// Cancel a booking.
///
/// # Errors
///
/// - `404 {error}` when `id` is missing or unknown
pub async fn cancel_booking(
    State(state): State<AppState>,
    correlation_id: CorrelationId,
    ApiJson(body): ApiJson<BookingIdBody>,
) -> WebResult<Json<CancelledResponse>> {
    let Some(id) = body.id().map(BookingId::from) else {
        tracing::info!(%correlation_id, "Cancel without id");
        return Err(ApiError::not_found("booking not found"));
    };
    let booking = state.bookings.cancel_booking(&id).inspect_err(|e| {
        tracing::info!(%correlation_id, booking_id = %id, error = %e, "Cancel rejected");
    })?;
    tracing::info!(%correlation_id, booking_id = %booking.id, "Booking cancelled");
    Ok(Json(CancelledResponse {
        message: CANCELLED_MESSAGE,
        reserva: booking.into(),
    }))
}

/// Look a booking up by id.
///
/// # Response
///
/// `200 {reserva}`, with `reserva: null` for unknown ids.
///
/// # Errors
///
/// - `400 {error}` when the body has no string `id`
pub async fn find_booking(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<BookingIdBody>,
) -> WebResult<Json<LookupResponse>> {
    let id = body
        .id()
        .map(BookingId::from)
        .ok_or_else(|| ApiError::bad_request(ID_REQUIRED_MESSAGE))?;
    let reserva = state.bookings.find_booking_by_id(&id).map(BookingDto::from);
    Ok(Json(LookupResponse { reserva }))
}
