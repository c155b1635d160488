//! The booking service.
//!
//! Sole authority over creation, cancellation, lookup and listing of bookings.
//!
//! # Validation order
//!
//! `create_booking` runs its checks in a fixed order and reports only the first
//! failure:
//!
//! 1. Room present and valid
//! 2. Start and end present, start strictly before end
//! 3. Requester present and not blank
//! 4. Party size a positive integer
//! 5. No overlapping booking on the same room
//! 6. Party size within the room's capacity
//!
//! # Concurrency
//!
//! Checks 1-4 only look at the request. Checks 5-6, id allocation and the insert
//! run under a single write guard, so concurrent callers can never both pass the
//! conflict scan for the same slot. Reads take a shared guard and only ever see
//! fully inserted bookings.

use crate::booking::{Booking, BookingConfirmation, BookingId, BookingRequest};
use crate::environment::{Clock, IdGenerator, SequentialIdGenerator, SystemClock};
use crate::error::{BookingError, BookingResult, ValidationError};
use crate::repository::{BookingRepository, InMemoryBookingRepository};
use crate::room::Room;
use crate::window::TimeWindow;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Validated request fields, ready for the conflict and capacity checks.
struct Candidate {
    room: Room,
    window: TimeWindow,
    requester: String,
    party_size: u32,
}

/// Booking service over a repository `R`.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use room_booking_core::{BookingError, BookingRequest, BookingService, Room};
///
/// let service = BookingService::new();
/// let room = Room::new("Sala 101", 6).unwrap();
/// let at = |h| Utc.with_ymd_and_hms(2025, 12, 10, h, 0, 0).unwrap();
///
/// service
///     .create_booking(BookingRequest::new(room.clone(), at(14), at(16), "João Silva", 4))
///     .unwrap();
///
/// let clash = service.create_booking(BookingRequest::new(room, at(15), at(17), "Ana", 2));
/// assert!(matches!(clash, Err(BookingError::Conflict { .. })));
/// ```
pub struct BookingService<R = InMemoryBookingRepository>
where
    R: BookingRepository,
{
    repository: RwLock<R>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl BookingService<InMemoryBookingRepository> {
    /// In-memory service with the system clock and sequential ids.
    #[must_use]
    pub fn new() -> Self {
        Self::with_environment(
            InMemoryBookingRepository::new(),
            Arc::new(SystemClock),
            Arc::new(SequentialIdGenerator::new()),
        )
    }
}

impl Default for BookingService<InMemoryBookingRepository> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> BookingService<R>
where
    R: BookingRepository,
{
    /// Service over an injected repository, clock and id generator.
    #[must_use]
    pub fn with_environment(
        repository: R,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            repository: RwLock::new(repository),
            clock,
            ids,
        }
    }

    /// Creates a booking.
    ///
    /// # Errors
    ///
    /// - [`BookingError::Validation`] for an invalid room, missing instants,
    ///   blank requester, non-positive party size, or a party above capacity
    /// - [`BookingError::InvalidWindow`] when start is not before end
    /// - [`BookingError::Conflict`] when the window overlaps any stored booking
    ///   on a room with the same name, cancelled ones included
    pub fn create_booking(&self, request: BookingRequest) -> BookingResult<BookingConfirmation> {
        let candidate = match validate(request) {
            Ok(candidate) => candidate,
            Err(error) => {
                tracing::warn!(error = %error, "Booking request rejected");
                return Err(error);
            }
        };

        tracing::debug!(
            room = %candidate.room.name(),
            window = %candidate.window,
            party_size = candidate.party_size,
            "Checking booking request against stored bookings"
        );

        let mut repository = self.write();

        if let Some(existing) = repository
            .for_room(candidate.room.name())
            .into_iter()
            .find(|b| b.conflicts_with(&candidate.room, &candidate.window))
        {
            tracing::warn!(
                room = %candidate.room.name(),
                requested = %candidate.window,
                existing_id = %existing.id,
                existing = %existing.window,
                "Booking conflict"
            );
            return Err(conflict(&candidate.room, &existing));
        }

        if !candidate.room.fits(candidate.party_size) {
            tracing::warn!(
                room = %candidate.room.name(),
                party_size = candidate.party_size,
                capacity = candidate.room.capacity(),
                "Party size exceeds capacity"
            );
            return Err(ValidationError::CapacityExceeded {
                party_size: candidate.party_size,
                capacity: candidate.room.capacity(),
            }
            .into());
        }

        let booking = Booking::new(
            self.ids.next_id(),
            candidate.room,
            candidate.window,
            candidate.requester,
            candidate.party_size,
            self.clock.now(),
        );
        repository.insert(booking.clone());

        tracing::info!(
            booking_id = %booking.id,
            room = %booking.room.name(),
            window = %booking.window,
            total = repository.len(),
            "Booking created"
        );

        Ok(BookingConfirmation::new(booking))
    }

    /// Cancels a booking in place.
    ///
    /// Cancelling an already cancelled booking succeeds and returns it as is.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] if no booking has `id`.
    pub fn cancel_booking(&self, id: &BookingId) -> BookingResult<Booking> {
        let now = self.clock.now();
        let mut repository = self.write();

        let Some(booking) = repository.update(id, &mut |b| {
            b.cancel(now);
        }) else {
            tracing::warn!(booking_id = %id, "Cancel requested for unknown booking");
            return Err(BookingError::NotFound(id.clone()));
        };

        tracing::info!(booking_id = %id, room = %booking.room.name(), "Booking cancelled");
        Ok(booking)
    }

    /// Every booking in creation order, active and cancelled alike.
    #[must_use]
    pub fn list_bookings(&self) -> Vec<Booking> {
        self.read().all()
    }

    /// Looks up a booking; absence is a normal outcome, not an error.
    #[must_use]
    pub fn find_booking_by_id(&self, id: &BookingId) -> Option<Booking> {
        self.read().find(id)
    }

    /// Bookings on the room named `room_name`, in creation order.
    #[must_use]
    pub fn bookings_for_room(&self, room_name: &str) -> Vec<Booking> {
        self.read().for_room(room_name)
    }

    fn read(&self) -> RwLockReadGuard<'_, R> {
        self.repository
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, R> {
        self.repository
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Checks 1-4, in order.
fn validate(request: BookingRequest) -> BookingResult<Candidate> {
    let room = request
        .room
        .filter(Room::is_valid)
        .ok_or(ValidationError::InvalidRoom)?;

    let start = request.start.ok_or(ValidationError::InvalidStart)?;
    let end = request.end.ok_or(ValidationError::InvalidEnd)?;
    let window = TimeWindow::new(start, end)?;

    let requester = request
        .requester
        .filter(|r| !r.trim().is_empty())
        .ok_or(ValidationError::RequesterRequired)?;

    let party_size = match request.party_size {
        // Anything above u32::MAX is still a positive integer; it fails on capacity.
        Some(n) if n > 0 => u32::try_from(n).unwrap_or(u32::MAX),
        _ => return Err(ValidationError::InvalidPartySize.into()),
    };

    Ok(Candidate {
        room,
        window,
        requester,
        party_size,
    })
}

fn conflict(room: &Room, existing: &Booking) -> BookingError {
    BookingError::Conflict {
        message: format!(
            "time conflict: room {} is already booked from {} to {}",
            room.name(),
            existing.start().to_rfc3339(),
            existing.end().to_rfc3339(),
        ),
        suggestions: None,
    }
}
