//! Given-When-Then scenarios for the booking service.
//!
//! Each scenario runs against a fresh service built by
//! [`fixtures::test_service`](crate::fixtures::test_service), so scenarios never
//! share state.

#![allow(clippy::module_name_repetitions)] // BookingScenario is the natural name

use crate::fixtures::test_service;
use room_booking_core::{
    Booking, BookingConfirmation, BookingError, BookingId, BookingRequest, BookingResult,
    BookingService, ErrorKind,
};

/// Type alias for assertions over the stored bookings
type BookingsAssertion = Box<dyn FnOnce(&[Booking])>;

/// Type alias for assertions over the outcome of the `when` step
type OutcomeAssertion = Box<dyn FnOnce(&Outcome)>;

/// The operation exercised by a scenario.
enum Step {
    Create(BookingRequest),
    /// Cancel the n-th booking created in the `given` steps.
    CancelGiven(usize),
    Cancel(BookingId),
}

/// Result of the `when` step.
#[derive(Debug)]
pub enum Outcome {
    /// `create_booking` result.
    Created(BookingResult<BookingConfirmation>),
    /// `cancel_booking` result.
    Cancelled(BookingResult<Booking>),
}

impl Outcome {
    /// The error, if the step failed.
    #[must_use]
    pub fn error(&self) -> Option<&BookingError> {
        match self {
            Self::Created(Err(e)) | Self::Cancelled(Err(e)) => Some(e),
            _ => None,
        }
    }

    /// The booking produced by a successful step.
    #[must_use]
    pub fn booking(&self) -> Option<&Booking> {
        match self {
            Self::Created(Ok(confirmation)) => Some(&confirmation.booking),
            Self::Cancelled(Ok(booking)) => Some(booking),
            _ => None,
        }
    }
}

/// Fluent API for booking scenarios with Given-When-Then syntax
///
/// # Example
///
/// ```ignore
/// BookingScenario::new()
///     .given_booking(first)
///     .given_cancelled(0)
///     .when_creating(second)
///     .then_fails_with(ErrorKind::Conflict)
///     .run();
/// ```
#[derive(Default)]
pub struct BookingScenario {
    given: Vec<BookingRequest>,
    given_cancelled: Vec<usize>,
    step: Option<Step>,
    outcome_assertions: Vec<OutcomeAssertion>,
    bookings_assertions: Vec<BookingsAssertion>,
}

impl BookingScenario {
    /// Create an empty scenario
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A booking that must be created before the step (Given)
    #[must_use]
    pub fn given_booking(mut self, request: BookingRequest) -> Self {
        self.given.push(request);
        self
    }

    /// Cancel the `index`-th given booking before the step (Given)
    #[must_use]
    pub fn given_cancelled(mut self, index: usize) -> Self {
        self.given_cancelled.push(index);
        self
    }

    /// Create a booking (When)
    #[must_use]
    pub fn when_creating(mut self, request: BookingRequest) -> Self {
        self.step = Some(Step::Create(request));
        self
    }

    /// Cancel the `index`-th given booking (When)
    #[must_use]
    pub fn when_cancelling_given(mut self, index: usize) -> Self {
        self.step = Some(Step::CancelGiven(index));
        self
    }

    /// Cancel an arbitrary id (When)
    #[must_use]
    pub fn when_cancelling(mut self, id: impl Into<BookingId>) -> Self {
        self.step = Some(Step::Cancel(id.into()));
        self
    }

    /// Assert the step succeeded (Then)
    #[must_use]
    pub fn then_succeeds(self) -> Self {
        self.then_outcome(|outcome| {
            assert!(
                outcome.error().is_none(),
                "Expected success, got {outcome:?}"
            );
        })
    }

    /// Assert the step failed with `kind` (Then)
    #[must_use]
    pub fn then_fails_with(self, kind: ErrorKind) -> Self {
        self.then_outcome(move |outcome| {
            let actual = outcome.error().map(BookingError::kind);
            assert_eq!(actual, Some(kind), "Unexpected outcome {outcome:?}");
        })
    }

    /// Assert the step failed with exactly `message` (Then)
    #[must_use]
    pub fn then_fails_with_message(self, message: &'static str) -> Self {
        self.then_outcome(move |outcome| {
            let actual = outcome.error().map(ToString::to_string);
            assert_eq!(actual.as_deref(), Some(message), "Unexpected outcome {outcome:?}");
        })
    }

    /// Add an assertion about the outcome (Then)
    #[must_use]
    pub fn then_outcome<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&Outcome) + 'static,
    {
        self.outcome_assertions.push(Box::new(assertion));
        self
    }

    /// Add an assertion about `list_bookings()` after the step (Then)
    #[must_use]
    pub fn then_bookings<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&[Booking]) + 'static,
    {
        self.bookings_assertions.push(Box::new(assertion));
        self
    }

    /// Run the scenario and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if a given booking is rejected, if no step was set,
    /// or if any assertion fails.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let service = test_service();
        let ids = Self::apply_given(&service, self.given, &self.given_cancelled);

        let step = self
            .step
            .expect("Step must be set with when_creating() or when_cancelling()");

        let outcome = match step {
            Step::Create(request) => Outcome::Created(service.create_booking(request)),
            Step::CancelGiven(index) => {
                let id = ids
                    .get(index)
                    .unwrap_or_else(|| panic!("No given booking at index {index}"));
                Outcome::Cancelled(service.cancel_booking(id))
            }
            Step::Cancel(id) => Outcome::Cancelled(service.cancel_booking(&id)),
        };

        for assertion in self.outcome_assertions {
            assertion(&outcome);
        }

        let bookings = service.list_bookings();
        for assertion in self.bookings_assertions {
            assertion(&bookings);
        }
    }

    #[allow(clippy::panic)] // Test code can panic
    fn apply_given(
        service: &BookingService,
        given: Vec<BookingRequest>,
        cancelled: &[usize],
    ) -> Vec<BookingId> {
        let ids: Vec<BookingId> = given
            .into_iter()
            .enumerate()
            .map(|(i, request)| match service.create_booking(request) {
                Ok(confirmation) => confirmation.booking.id,
                Err(e) => panic!("Given booking #{i} was rejected: {e}"),
            })
            .collect();

        for &index in cancelled {
            let id = ids
                .get(index)
                .unwrap_or_else(|| panic!("No given booking at index {index}"));
            if let Err(e) = service.cancel_booking(id) {
                panic!("Given cancellation #{index} failed: {e}");
            }
        }

        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{at, fixtures::sala_101};
    use room_booking_core::BookingStatus;

    fn request(start: &str, end: &str) -> BookingRequest {
        BookingRequest::new(sala_101(), at(start), at(end), "João Silva", 4)
    }

    #[test]
    fn test_scenario_create() {
        BookingScenario::new()
            .when_creating(request("2025-12-10T14:00", "2025-12-10T16:00"))
            .then_succeeds()
            .then_bookings(|bookings| {
                assert_eq!(bookings.len(), 1);
                assert_eq!(bookings[0].status, BookingStatus::Active);
            })
            .run();
    }

    #[test]
    fn test_scenario_cancel_given() {
        BookingScenario::new()
            .given_booking(request("2025-12-10T14:00", "2025-12-10T16:00"))
            .when_cancelling_given(0)
            .then_outcome(|outcome| {
                assert_eq!(
                    outcome.booking().map(|b| b.status),
                    Some(BookingStatus::Cancelled)
                );
            })
            .run();
    }

    #[test]
    fn test_scenario_unknown_cancel() {
        BookingScenario::new()
            .when_cancelling("RES-404")
            .then_fails_with(ErrorKind::NotFound)
            .then_fails_with_message("booking not found")
            .run();
    }
}
