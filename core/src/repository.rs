//! Booking storage.
//!
//! The repository is owned by the [`BookingService`](crate::BookingService),
//! which serializes all writes. Implementations therefore take `&mut self` for
//! mutations and need no interior locking of their own.
//!
//! # Implementations
//!
//! - [`InMemoryBookingRepository`]: `Vec` in insertion order plus an id index
//!
//! Methods return owned values so a persistent store can implement the trait
//! without handing out references into its own buffers.

use crate::booking::{Booking, BookingId};
use std::collections::HashMap;

/// Ordered collection of bookings.
pub trait BookingRepository: Send + Sync {
    /// Appends a booking. Ids are unique; the service guarantees it.
    fn insert(&mut self, booking: Booking);

    /// Looks up a booking by id.
    fn find(&self, id: &BookingId) -> Option<Booking>;

    /// Applies `f` to the stored booking and returns the updated copy.
    ///
    /// Returns `None` when the id is unknown.
    fn update(&mut self, id: &BookingId, f: &mut dyn FnMut(&mut Booking)) -> Option<Booking>;

    /// Every booking, in insertion order, regardless of status.
    fn all(&self) -> Vec<Booking>;

    /// Bookings whose room has `room_name`, in insertion order.
    fn for_room(&self, room_name: &str) -> Vec<Booking>;

    /// Number of stored bookings.
    fn len(&self) -> usize;

    /// Returns `true` if nothing has been stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory repository.
#[derive(Debug, Default)]
pub struct InMemoryBookingRepository {
    bookings: Vec<Booking>,
    index: HashMap<BookingId, usize>,
}

impl InMemoryBookingRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookingRepository for InMemoryBookingRepository {
    fn insert(&mut self, booking: Booking) {
        self.index.insert(booking.id.clone(), self.bookings.len());
        self.bookings.push(booking);
    }

    fn find(&self, id: &BookingId) -> Option<Booking> {
        self.index
            .get(id)
            .and_then(|&i| self.bookings.get(i))
            .cloned()
    }

    fn update(&mut self, id: &BookingId, f: &mut dyn FnMut(&mut Booking)) -> Option<Booking> {
        let i = *self.index.get(id)?;
        let booking = self.bookings.get_mut(i)?;
        f(booking);
        Some(booking.clone())
    }

    fn all(&self) -> Vec<Booking> {
        self.bookings.clone()
    }

    fn for_room(&self, room_name: &str) -> Vec<Booking> {
        self.bookings
            .iter()
            .filter(|b| b.room.name() == room_name)
            .cloned()
            .collect()
    }

    fn len(&self) -> usize {
        self.bookings.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::booking::BookingStatus;
    use crate::room::Room;
    use crate::window::TimeWindow;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, 10, hour, 0, 0).unwrap()
    }

    fn booking(id: &str, room: &str) -> Booking {
        Booking::new(
            BookingId::from(id),
            Room::new(room, 6).unwrap(),
            TimeWindow::new(at(14), at(16)).unwrap(),
            "Ana".to_string(),
            2,
            at(8),
        )
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut repo = InMemoryBookingRepository::new();
        assert!(repo.is_empty());
        repo.insert(booking("RES-3", "A"));
        repo.insert(booking("RES-1", "B"));
        repo.insert(booking("RES-2", "A"));

        let ids: Vec<_> = repo.all().into_iter().map(|b| b.id.to_string()).collect();
        assert_eq!(ids, vec!["RES-3", "RES-1", "RES-2"]);
        assert_eq!(repo.len(), 3);
    }

    #[test]
    fn test_find() {
        let mut repo = InMemoryBookingRepository::new();
        repo.insert(booking("RES-1", "A"));
        assert_eq!(repo.find(&BookingId::from("RES-1")).unwrap().room.name(), "A");
        assert!(repo.find(&BookingId::from("RES-9")).is_none());
    }

    #[test]
    fn test_update_in_place() {
        let mut repo = InMemoryBookingRepository::new();
        repo.insert(booking("RES-1", "A"));

        let updated = repo
            .update(&BookingId::from("RES-1"), &mut |b| {
                b.cancel(at(9));
            })
            .unwrap();
        assert_eq!(updated.status, BookingStatus::Cancelled);
        assert_eq!(
            repo.find(&BookingId::from("RES-1")).unwrap().status,
            BookingStatus::Cancelled
        );
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_update_unknown_id() {
        let mut repo = InMemoryBookingRepository::new();
        assert!(repo.update(&BookingId::from("RES-1"), &mut |_| {}).is_none());
    }

    #[test]
    fn test_for_room() {
        let mut repo = InMemoryBookingRepository::new();
        repo.insert(booking("RES-1", "A"));
        repo.insert(booking("RES-2", "B"));
        repo.insert(booking("RES-3", "A"));
        let ids: Vec<_> = repo.for_room("A").into_iter().map(|b| b.id.to_string()).collect();
        assert_eq!(ids, vec!["RES-1", "RES-3"]);
    }
}
