//! Error taxonomy for booking operations.
//!
//! Every failure is raised synchronously by the [`BookingService`](crate::BookingService)
//! and is terminal for that call. Adapters dispatch on [`BookingError::kind`] to choose
//! their own status codes; nothing in this crate knows about transports.

use crate::booking::BookingId;
use crate::window::TimeWindow;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Field-level input errors.
///
/// The messages are stable and surface verbatim to API callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Room is missing, has an empty name, or has zero capacity.
    #[error("invalid room")]
    InvalidRoom,

    /// Start instant is missing or could not be parsed.
    #[error("invalid start")]
    InvalidStart,

    /// End instant is missing or could not be parsed.
    #[error("invalid end")]
    InvalidEnd,

    /// Requester is missing or blank.
    #[error("requester required")]
    RequesterRequired,

    /// Party size is missing, zero, negative, or not an integer.
    #[error("party size must be a positive integer")]
    InvalidPartySize,

    /// Party does not fit in the room.
    #[error("party size exceeds capacity")]
    CapacityExceeded {
        /// Requested party size.
        party_size: u32,
        /// Capacity of the room.
        capacity: u32,
    },
}

/// Errors returned by the booking service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// Malformed, missing or out-of-range input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Start is not strictly before end.
    #[error("start must precede end")]
    InvalidWindow {
        /// Requested start.
        start: DateTime<Utc>,
        /// Requested end.
        end: DateTime<Utc>,
    },

    /// The window overlaps an existing booking on the same room.
    #[error("{message}")]
    Conflict {
        /// Human-readable description of the clash.
        message: String,
        /// Alternative windows. Reserved; the service does not populate it yet.
        suggestions: Option<Vec<TimeWindow>>,
    },

    /// No booking with the given id.
    #[error("booking not found")]
    NotFound(BookingId),
}

/// Fieldless discriminant of [`BookingError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`BookingError::Validation`].
    Validation,
    /// See [`BookingError::InvalidWindow`].
    InvalidWindow,
    /// See [`BookingError::Conflict`].
    Conflict,
    /// See [`BookingError::NotFound`].
    NotFound,
}

impl BookingError {
    /// Returns the error's kind.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::InvalidWindow { .. } => ErrorKind::InvalidWindow,
            Self::Conflict { .. } => ErrorKind::Conflict,
            Self::NotFound(_) => ErrorKind::NotFound,
        }
    }

    /// Suggested alternative windows carried by a conflict, if any.
    #[must_use]
    pub fn suggestions(&self) -> Option<&[TimeWindow]> {
        match self {
            Self::Conflict {
                suggestions: Some(windows),
                ..
            } => Some(windows),
            _ => None,
        }
    }
}

/// Result type alias for booking operations.
pub type BookingResult<T> = Result<T, BookingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::InvalidRoom.to_string(), "invalid room");
        assert_eq!(ValidationError::InvalidStart.to_string(), "invalid start");
        assert_eq!(ValidationError::InvalidEnd.to_string(), "invalid end");
        assert_eq!(
            ValidationError::RequesterRequired.to_string(),
            "requester required"
        );
        assert_eq!(
            ValidationError::InvalidPartySize.to_string(),
            "party size must be a positive integer"
        );
        assert_eq!(
            ValidationError::CapacityExceeded {
                party_size: 10,
                capacity: 6
            }
            .to_string(),
            "party size exceeds capacity"
        );
    }

    #[test]
    fn test_validation_is_transparent() {
        let err = BookingError::from(ValidationError::RequesterRequired);
        assert_eq!(err.to_string(), "requester required");
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_kind_dispatch() {
        let conflict = BookingError::Conflict {
            message: "clash".to_string(),
            suggestions: None,
        };
        assert_eq!(conflict.kind(), ErrorKind::Conflict);
        assert_eq!(conflict.to_string(), "clash");
        assert!(conflict.suggestions().is_none());

        let missing = BookingError::NotFound(BookingId::from("RES-000042"));
        assert_eq!(missing.kind(), ErrorKind::NotFound);
        assert_eq!(missing.to_string(), "booking not found");
    }
}
