//! Injected collaborators of the booking service.
//!
//! Time and identity are abstracted behind traits so tests can pin them and
//! production can swap schemes without touching the service.

use crate::booking::BookingId;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Prefix shared by every generated booking id.
pub const ID_PREFIX: &str = "RES-";

/// Clock trait - abstracts time operations for testability
///
/// # Examples
///
/// ```ignore
/// // Test - fixed time for deterministic tests
/// struct FixedClock { time: DateTime<Utc> }
/// impl Clock for FixedClock {
///     fn now(&self) -> DateTime<Utc> {
///         self.time
///     }
/// }
/// ```
pub trait Clock: Send + Sync {
    /// Get the current time
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Allocates booking ids.
///
/// The service calls `next_id` while holding its write lock, right before
/// inserting, so ids are handed out in insertion order.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh id, never returned before by this generator.
    fn next_id(&self) -> BookingId;
}

/// Strictly monotonic counter: `RES-000001`, `RES-000002`, ...
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Starts counting at 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> BookingId {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        BookingId::new(format!("{ID_PREFIX}{n:06}"))
    }
}

/// Random v4 UUIDs: `RES-<uuid>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> BookingId {
        BookingId::new(format!("{ID_PREFIX}{}", Uuid::new_v4()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequential_ids_are_monotonic() {
        let ids = SequentialIdGenerator::new();
        assert_eq!(ids.next_id().as_str(), "RES-000001");
        assert_eq!(ids.next_id().as_str(), "RES-000002");
        assert_eq!(ids.next_id().as_str(), "RES-000003");
    }

    #[test]
    fn test_uuid_ids_are_prefixed_and_unique() {
        let ids = UuidIdGenerator;
        let seen: HashSet<_> = (0..100).map(|_| ids.next_id()).collect();
        assert_eq!(seen.len(), 100);
        assert!(seen.iter().all(|id| id.as_str().starts_with(ID_PREFIX)));
    }

    #[test]
    fn test_system_clock_advances() {
        let clock = SystemClock;
        let t1 = clock.now();
        let t2 = clock.now();
        assert!(t2 >= t1);
    }
}
