//! Wire types for the `/api/reserva` endpoints.
//!
//! Request bodies are read as loose JSON and converted field by field: a
//! field that is missing or has the wrong shape becomes `None`, and the
//! booking service reports it in its own validation order. Responses use the
//! Portuguese field names clients already depend on.

use chrono::{DateTime, NaiveDateTime, Utc};
use room_booking_core::{
    Booking, BookingConfirmation, BookingRequest, BookingStatus, Room, TimeWindow,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Naive formats accepted for `dataInicio`/`dataFim`; read as UTC.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

// ============================================================================
// Requests
// ============================================================================

/// Body of `POST /api/reserva/add`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingBody {
    /// `{ "nome": ..., "capacidade": ... }`
    #[serde(default)]
    pub sala: Option<Value>,
    /// Start instant.
    #[serde(default)]
    pub data_inicio: Option<Value>,
    /// End instant.
    #[serde(default)]
    pub data_fim: Option<Value>,
    /// Requester.
    #[serde(default)]
    pub usuario: Option<Value>,
    /// Party size; any whole JSON number counts.
    #[serde(default)]
    pub numero_pessoas: Option<Value>,
}

impl From<CreateBookingBody> for BookingRequest {
    fn from(body: CreateBookingBody) -> Self {
        Self {
            room: body.sala.and_then(room_from_json),
            start: body.data_inicio.as_ref().and_then(parse_instant),
            end: body.data_fim.as_ref().and_then(parse_instant),
            requester: body
                .usuario
                .as_ref()
                .and_then(Value::as_str)
                .map(str::to_string),
            party_size: body.numero_pessoas.as_ref().and_then(party_size_from_json),
        }
    }
}

/// Body of `POST /api/reserva/remove` and `POST /api/reserva/`.
#[derive(Debug, Default, Deserialize)]
pub struct BookingIdBody {
    /// Booking id; only strings count.
    #[serde(default)]
    pub id: Option<Value>,
}

impl BookingIdBody {
    /// The id, when present as a string.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_ref().and_then(Value::as_str)
    }
}

/// Wire shape of a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDto {
    /// Room name.
    pub nome: String,
    /// Maximum party size.
    pub capacidade: u32,
}

impl From<&Room> for RoomDto {
    fn from(room: &Room) -> Self {
        Self {
            nome: room.name().to_string(),
            capacidade: room.capacity(),
        }
    }
}

/// Whole numbers, `4.0` included, saturate into `i64`; fractions and
/// non-numbers yield `None`.
#[allow(clippy::cast_possible_truncation)] // `as` saturates; only whole values get here
fn party_size_from_json(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_u64().map(|_| i64::MAX))
        .or_else(|| {
            value
                .as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        })
}

/// Any shape error or invalid room yields `None`.
fn room_from_json(value: Value) -> Option<Room> {
    let dto: RoomDto = serde_json::from_value(value).ok()?;
    Room::new(dto.nome, dto.capacidade).ok()
}

/// RFC 3339, or a naive `YYYY-MM-DDTHH:MM[:SS[.fff]]` read as UTC.
#[must_use]
pub fn parse_instant(value: &Value) -> Option<DateTime<Utc>> {
    let text = value.as_str()?.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|naive| naive.and_utc())
}

// ============================================================================
// Responses
// ============================================================================

/// Wire shape of a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    /// Booking id.
    pub id: String,
    /// Booked room.
    pub sala: RoomDto,
    /// Start instant.
    pub data_inicio: DateTime<Utc>,
    /// End instant.
    pub data_fim: DateTime<Utc>,
    /// Requester.
    pub usuario: String,
    /// Party size.
    pub numero_pessoas: u32,
    /// `ATIVA` or `CANCELADA`.
    pub status: &'static str,
    /// Creation time.
    pub criado_em: DateTime<Utc>,
    /// First cancellation time.
    pub cancelado_em: Option<DateTime<Utc>>,
}

/// Wire name of a status.
#[must_use]
pub const fn status_label(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Active => "ATIVA",
        BookingStatus::Cancelled => "CANCELADA",
    }
}

impl From<&Booking> for BookingDto {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id.to_string(),
            sala: RoomDto::from(&booking.room),
            data_inicio: booking.start(),
            data_fim: booking.end(),
            usuario: booking.requester.clone(),
            numero_pessoas: booking.party_size,
            status: status_label(booking.status),
            criado_em: booking.created_at,
            cancelado_em: booking.cancelled_at,
        }
    }
}

impl From<Booking> for BookingDto {
    fn from(booking: Booking) -> Self {
        Self::from(&booking)
    }
}

/// `201` body of `POST /api/reserva/add`.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    /// The new booking.
    pub reserva: BookingDto,
    /// Confirmation message.
    pub mensagem: String,
}

impl From<BookingConfirmation> for CreatedResponse {
    fn from(confirmation: BookingConfirmation) -> Self {
        Self {
            reserva: BookingDto::from(&confirmation.booking),
            mensagem: confirmation.message,
        }
    }
}

/// `200` body of `POST /api/reserva/remove`.
#[derive(Debug, Serialize)]
pub struct CancelledResponse {
    /// Fixed confirmation message.
    pub message: &'static str,
    /// The cancelled booking.
    pub reserva: BookingDto,
}

/// `200` body of `POST /api/reserva/`.
#[derive(Debug, Serialize)]
pub struct LookupResponse {
    /// The booking, or `null`.
    pub reserva: Option<BookingDto>,
}

/// Wire shape of a suggested alternative window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionDto {
    /// Start instant.
    pub data_inicio: DateTime<Utc>,
    /// End instant.
    pub data_fim: DateTime<Utc>,
}

impl From<&TimeWindow> for SuggestionDto {
    fn from(window: &TimeWindow) -> Self {
        Self {
            data_inicio: window.start(),
            data_fim: window.end(),
        }
    }
}
