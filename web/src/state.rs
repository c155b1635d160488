//! Application state for Axum handlers.

use crate::config::{Config, IdScheme};
use room_booking_core::{
    BookingService, IdGenerator, InMemoryBookingRepository, SequentialIdGenerator, SystemClock,
    UuidIdGenerator,
};
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
///
/// Cloning is cheap; every clone points at the same booking service.
#[derive(Clone)]
pub struct AppState {
    /// The booking service behind `/api/reserva`.
    pub bookings: Arc<BookingService>,
}

impl AppState {
    /// Wrap an existing service.
    #[must_use]
    pub fn new(bookings: BookingService) -> Self {
        Self {
            bookings: Arc::new(bookings),
        }
    }

    /// Build an empty in-memory service from configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let ids: Arc<dyn IdGenerator> = match config.bookings.id_scheme {
            IdScheme::Sequential => Arc::new(SequentialIdGenerator::new()),
            IdScheme::Uuid => Arc::new(UuidIdGenerator),
        };
        Self::new(BookingService::with_environment(
            InMemoryBookingRepository::new(),
            Arc::new(SystemClock),
            ids,
        ))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(BookingService::new())
    }
}
