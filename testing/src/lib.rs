//! # Room Booking Testing
//!
//! Testing utilities and fixtures for the room booking service.
//!
//! This crate provides:
//! - Deterministic implementations of the service environment (clock, ids)
//! - Fixtures for the rooms and instants used across the test suites
//! - A Given-When-Then scenario runner for the booking service
//! - Property-based testing strategies
//!
//! ## Example
//!
//! ```
//! use room_booking_testing::{at, fixtures::sala_101, BookingScenario};
//! use room_booking_core::{BookingRequest, ErrorKind};
//!
//! let existing = BookingRequest::new(
//!     sala_101(),
//!     at("2025-12-10T14:00"),
//!     at("2025-12-10T16:00"),
//!     "João Silva",
//!     4,
//! );
//! let overlapping = BookingRequest::new(
//!     sala_101(),
//!     at("2025-12-10T15:00"),
//!     at("2025-12-10T17:00"),
//!     "Ana",
//!     2,
//! );
//!
//! BookingScenario::new()
//!     .given_booking(existing)
//!     .when_creating(overlapping)
//!     .then_fails_with(ErrorKind::Conflict)
//!     .then_bookings(|bookings| assert_eq!(bookings.len(), 1))
//!     .run();
//! ```

pub mod scenario;

use chrono::{DateTime, Utc};
use room_booking_core::environment::Clock;

pub use scenario::BookingScenario;

/// Mock implementations of the service environment.
pub mod mocks {
    use super::{Clock, DateTime, Utc};
    use std::sync::Mutex;
    use std::sync::PoisonError;

    pub use room_booking_core::SequentialIdGenerator;

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use room_booking_testing::mocks::FixedClock;
    /// use room_booking_core::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Clock whose time only moves when the test says so.
    #[derive(Debug)]
    pub struct ManualClock {
        time: Mutex<DateTime<Utc>>,
    }

    impl ManualClock {
        /// Starts at `time`.
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self {
                time: Mutex::new(time),
            }
        }

        /// Moves the clock forward.
        pub fn advance(&self, by: chrono::Duration) {
            let mut time = self.time.lock().unwrap_or_else(PoisonError::into_inner);
            *time += by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            *self.time.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

/// Rooms, services and instants shared by the test suites.
pub mod fixtures {
    use super::mocks::{test_clock, SequentialIdGenerator};
    use room_booking_core::{BookingService, InMemoryBookingRepository, Room};
    use std::sync::Arc;

    /// `Sala 101`, capacity 6.
    ///
    /// # Panics
    ///
    /// Never; the room is valid.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn sala_101() -> Room {
        Room::new("Sala 101", 6).expect("Sala 101 is a valid room")
    }

    /// A valid room with the given name and capacity.
    ///
    /// # Panics
    ///
    /// Panics if the room is invalid.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn room(name: &str, capacity: u32) -> Room {
        Room::new(name, capacity).expect("fixture room must be valid")
    }

    /// Fresh in-memory service with the fixed test clock and sequential ids.
    #[must_use]
    pub fn test_service() -> BookingService<InMemoryBookingRepository> {
        BookingService::with_environment(
            InMemoryBookingRepository::new(),
            Arc::new(test_clock()),
            Arc::new(SequentialIdGenerator::new()),
        )
    }
}

/// Property-based testing strategies.
pub mod properties {
    use super::{DateTime, Utc};
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    /// Start of the day the strategies draw from.
    ///
    /// # Panics
    ///
    /// Never; the date is valid.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn base_day() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, 10, 0, 0, 0)
            .single()
            .expect("valid date")
    }

    /// `(start, end)` with `start < end`, on a 15-minute grid within one day.
    pub fn valid_window() -> impl Strategy<Value = (DateTime<Utc>, DateTime<Utc>)> {
        (0i64..88, 1i64..8).prop_map(|(slot, len)| {
            let start = base_day() + Duration::minutes(slot * 15);
            (start, start + Duration::minutes(len * 15))
        })
    }

    /// `(start, end)` with `start >= end`.
    pub fn inverted_window() -> impl Strategy<Value = (DateTime<Utc>, DateTime<Utc>)> {
        (0i64..96, 0i64..8).prop_map(|(slot, back)| {
            let start = base_day() + Duration::minutes(slot * 15);
            (start, start - Duration::minutes(back * 15))
        })
    }

    /// Non-blank requester names.
    pub fn requester() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z ]{0,20}"
    }
}

/// Parses `YYYY-MM-DDTHH:MM` (UTC) for terse test instants.
///
/// # Panics
///
/// Panics if `s` is not in that format.
#[must_use]
#[allow(clippy::expect_used)]
pub fn at(s: &str) -> DateTime<Utc> {
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .expect("test instants use YYYY-MM-DDTHH:MM")
        .and_utc()
}

/// Installs a test-friendly tracing subscriber once per process.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .try_init();
}

// Re-export commonly used items
pub use mocks::{test_clock, FixedClock, ManualClock};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_fixed_clock() {
        let clock = test_clock();
        let time1 = clock.now();
        let time2 = clock.now();
        assert_eq!(time1, time2);
    }

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::new(at("2025-12-10T08:00"));
        clock.advance(Duration::minutes(30));
        assert_eq!(clock.now(), at("2025-12-10T08:30"));
    }

    #[test]
    fn test_at_parses_utc() {
        assert_eq!(at("2025-12-10T14:00").to_rfc3339(), "2025-12-10T14:00:00+00:00");
    }
}
