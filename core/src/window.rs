//! Half-open time windows.

use crate::error::{BookingError, BookingResult};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open window `[start, end)` in UTC.
///
/// # Invariants
///
/// `start` is strictly before `end`. Windows that share a boundary point do not
/// overlap, so back-to-back bookings are allowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeWindow {
    /// Creates a window, rejecting empty or inverted ranges.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::InvalidWindow`] when `start >= end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> BookingResult<Self> {
        if start >= end {
            return Err(BookingError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Inclusive start.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Exclusive end.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Length of the window.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Returns `true` if the windows share any instant.
    ///
    /// ```
    /// # use chrono::{TimeZone, Utc};
    /// # use room_booking_core::TimeWindow;
    /// let at = |h| Utc.with_ymd_and_hms(2025, 12, 10, h, 0, 0).unwrap();
    /// let a = TimeWindow::new(at(10), at(12)).unwrap();
    /// assert!(a.overlaps(&TimeWindow::new(at(11), at(13)).unwrap()));
    /// assert!(!a.overlaps(&TimeWindow::new(at(12), at(14)).unwrap())); // adjacent
    /// ```
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns `true` if the windows touch at a boundary without overlapping.
    #[must_use]
    pub fn is_adjacent(&self, other: &Self) -> bool {
        self.end == other.start || other.end == self.start
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start.to_rfc3339(), self.end.to_rfc3339())
    }
}
