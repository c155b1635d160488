//! Bookings and the inputs used to create them.

use crate::room::Room;
use crate::window::TimeWindow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Confirmation text returned with every successful booking.
pub const CONFIRMATION_MESSAGE: &str = "booking created successfully";

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for a booking, assigned by the service.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(String);

impl BookingId {
    /// Wraps an already-formatted id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookingId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for BookingId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl FromStr for BookingId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

// ============================================================================
// Lifecycle
// ============================================================================

/// Lifecycle status. Transitions only go from `Active` to `Cancelled`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    /// Holding the room.
    Active,
    /// Cancelled by the service; kept in the repository.
    Cancelled,
}

impl BookingStatus {
    /// Stable uppercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Entities
// ============================================================================

/// A time-bounded claim on a room.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Service-assigned id.
    pub id: BookingId,
    /// Claimed room.
    pub room: Room,
    /// Claimed window.
    pub window: TimeWindow,
    /// Who asked for the room. Never blank.
    pub requester: String,
    /// Number of people; at most `room.capacity()`.
    pub party_size: u32,
    /// Lifecycle status.
    pub status: BookingStatus,
    /// When the booking was created.
    pub created_at: DateTime<Utc>,
    /// When the booking was first cancelled.
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl Booking {
    /// Builds an active booking.
    #[must_use]
    pub const fn new(
        id: BookingId,
        room: Room,
        window: TimeWindow,
        requester: String,
        party_size: u32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            room,
            window,
            requester,
            party_size,
            status: BookingStatus::Active,
            created_at,
            cancelled_at: None,
        }
    }

    /// Inclusive start of the booked window.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.window.start()
    }

    /// Exclusive end of the booked window.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.window.end()
    }

    /// Whether the booking still holds the room.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == BookingStatus::Active
    }

    /// Whether this booking clashes with `window` on `room`.
    ///
    /// Status is ignored, so cancelled bookings still block their slot.
    #[must_use]
    pub fn conflicts_with(&self, room: &Room, window: &TimeWindow) -> bool {
        self.room.same_resource(room) && self.window.overlaps(window)
    }

    /// Marks the booking cancelled. A second call keeps the first timestamp.
    pub fn cancel(&mut self, at: DateTime<Utc>) -> &mut Self {
        self.status = BookingStatus::Cancelled;
        if self.cancelled_at.is_none() {
            self.cancelled_at = Some(at);
        }
        self
    }
}

/// Inputs of a booking request, as handed over by an adapter.
///
/// `None` stands for a value that was absent or could not be converted
/// (e.g. an unparseable date). The service reports the first such field in
/// its fixed validation order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingRequest {
    /// Room to book.
    pub room: Option<Room>,
    /// Requested start.
    pub start: Option<DateTime<Utc>>,
    /// Requested end.
    pub end: Option<DateTime<Utc>>,
    /// Who is booking.
    pub requester: Option<String>,
    /// Number of people, before the positivity check.
    pub party_size: Option<i64>,
}

impl BookingRequest {
    /// Request with every field present.
    #[must_use]
    pub fn new(
        room: Room,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        requester: impl Into<String>,
        party_size: i64,
    ) -> Self {
        Self {
            room: Some(room),
            start: Some(start),
            end: Some(end),
            requester: Some(requester.into()),
            party_size: Some(party_size),
        }
    }
}

/// Successful outcome of `create_booking`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BookingConfirmation {
    /// The stored booking.
    pub booking: Booking,
    /// Human-readable confirmation.
    pub message: String,
}

impl BookingConfirmation {
    /// Confirmation with the standard message.
    #[must_use]
    pub fn new(booking: Booking) -> Self {
        Self {
            booking,
            message: CONFIRMATION_MESSAGE.to_string(),
        }
    }
}
