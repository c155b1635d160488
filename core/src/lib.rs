//! # Room Booking Core
//!
//! Domain types and the booking service for a shared, capacity-bounded room.
//!
//! The crate guarantees that no two bookings for the same room overlap in time
//! and that every booking fits the room's capacity. Transport concerns live in
//! `room-booking-web`; this crate only sees typed values.
//!
//! ## Core Concepts
//!
//! - **Room**: immutable descriptor with a name (the de facto key) and a capacity
//! - **Booking**: a claim on a room for a half-open time window, `ACTIVE` or `CANCELLED`
//! - **Repository**: ordered booking storage owned by the service
//! - **Environment**: injected clock and id generator
//! - **Service**: validation, conflict detection, identity and lifecycle
//!
//! ## Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use room_booking_core::{BookingRequest, BookingService, BookingStatus, Room};
//!
//! let service = BookingService::new();
//! let room = Room::new("Sala 101", 6).expect("valid room");
//!
//! let confirmation = service
//!     .create_booking(BookingRequest::new(
//!         room,
//!         Utc.with_ymd_and_hms(2025, 12, 10, 14, 0, 0).unwrap(),
//!         Utc.with_ymd_and_hms(2025, 12, 10, 16, 0, 0).unwrap(),
//!         "João Silva",
//!         4,
//!     ))
//!     .expect("no conflict");
//!
//! assert_eq!(confirmation.booking.status, BookingStatus::Active);
//! assert_eq!(service.list_bookings().len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod booking;
pub mod environment;
pub mod error;
pub mod repository;
pub mod room;
pub mod service;
pub mod window;

// Re-export commonly used types
pub use booking::{
    Booking, BookingConfirmation, BookingId, BookingRequest, BookingStatus, CONFIRMATION_MESSAGE,
};
pub use chrono::{DateTime, Utc};
pub use environment::{Clock, IdGenerator, SequentialIdGenerator, SystemClock, UuidIdGenerator};
pub use error::{BookingError, BookingResult, ErrorKind, ValidationError};
pub use repository::{BookingRepository, InMemoryBookingRepository};
pub use room::Room;
pub use service::BookingService;
pub use window::TimeWindow;
