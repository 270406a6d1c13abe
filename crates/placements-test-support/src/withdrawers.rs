//! Test collaborators — recording implementations of the withdrawal ports.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use placements_core::error::DomainError;
use placements_withdrawal::application::ports::{
    BookingService, PlacementApplicationWithdrawer, PlacementRequestWithdrawer, WithdrawalOutcome,
};
use placements_withdrawal::domain::context::{UserRef, WithdrawalContext, WithdrawalReason};
use placements_withdrawal::domain::entities::{
    Booking, BookingCancellation, PlacementApplication, PlacementRequest,
};
use uuid::Uuid;

/// Arguments of one recorded withdrawal call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedWithdrawal {
    /// The entity the call targeted.
    pub entity_id: Uuid,
    /// The actor passed in.
    pub actor: Option<UserRef>,
    /// The user-provided reason passed in.
    pub user_provided_reason: Option<WithdrawalReason>,
    /// The context passed in.
    pub context: WithdrawalContext,
}

/// Arguments of one recorded `cancel_booking` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCancellation {
    /// The booking that was cancelled.
    pub booking_id: Uuid,
    /// The cancellation details passed in.
    pub cancellation: BookingCancellation,
    /// The context passed in.
    pub context: WithdrawalContext,
}

/// A placement request withdrawer that records every call. Succeeds unless
/// an outcome or an infrastructure error has been configured for the id.
#[derive(Debug, Default)]
pub struct RecordingPlacementRequestWithdrawer {
    outcomes: HashMap<Uuid, WithdrawalOutcome<PlacementRequest>>,
    errors: HashMap<Uuid, String>,
    calls: Mutex<Vec<RecordedWithdrawal>>,
}

impl RecordingPlacementRequestWithdrawer {
    /// Creates a withdrawer that always succeeds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `outcome` for `id` instead of success.
    #[must_use]
    pub fn with_outcome(mut self, id: Uuid, outcome: WithdrawalOutcome<PlacementRequest>) -> Self {
        self.outcomes.insert(id, outcome);
        self
    }

    /// Fails with `DomainError::Infrastructure(message)` for `id`.
    #[must_use]
    pub fn with_error(mut self, id: Uuid, message: &str) -> Self {
        self.errors.insert(id, message.to_owned());
        self
    }

    /// Returns a snapshot of all calls.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<RecordedWithdrawal> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlacementRequestWithdrawer for RecordingPlacementRequestWithdrawer {
    async fn withdraw_placement_request(
        &self,
        placement_request_id: Uuid,
        actor: Option<&UserRef>,
        user_provided_reason: Option<WithdrawalReason>,
        context: &WithdrawalContext,
    ) -> Result<WithdrawalOutcome<PlacementRequest>, DomainError> {
        self.calls.lock().unwrap().push(RecordedWithdrawal {
            entity_id: placement_request_id,
            actor: actor.cloned(),
            user_provided_reason,
            context: context.clone(),
        });
        if let Some(message) = self.errors.get(&placement_request_id) {
            return Err(DomainError::Infrastructure(message.clone()));
        }
        Ok(self
            .outcomes
            .get(&placement_request_id)
            .cloned()
            .unwrap_or(WithdrawalOutcome::Success(PlacementRequest {
                id: placement_request_id,
                is_withdrawn: true,
            })))
    }
}

/// A placement application withdrawer that records every call. Succeeds
/// unless an outcome has been configured for the id.
#[derive(Debug, Default)]
pub struct RecordingPlacementApplicationWithdrawer {
    outcomes: HashMap<Uuid, WithdrawalOutcome<PlacementApplication>>,
    calls: Mutex<Vec<RecordedWithdrawal>>,
}

impl RecordingPlacementApplicationWithdrawer {
    /// Creates a withdrawer that always succeeds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `outcome` for `id` instead of success.
    #[must_use]
    pub fn with_outcome(
        mut self,
        id: Uuid,
        outcome: WithdrawalOutcome<PlacementApplication>,
    ) -> Self {
        self.outcomes.insert(id, outcome);
        self
    }

    /// Returns a snapshot of all calls.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<RecordedWithdrawal> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlacementApplicationWithdrawer for RecordingPlacementApplicationWithdrawer {
    async fn withdraw_placement_application(
        &self,
        placement_application_id: Uuid,
        actor: Option<&UserRef>,
        user_provided_reason: Option<WithdrawalReason>,
        context: &WithdrawalContext,
    ) -> Result<WithdrawalOutcome<PlacementApplication>, DomainError> {
        self.calls.lock().unwrap().push(RecordedWithdrawal {
            entity_id: placement_application_id,
            actor: actor.cloned(),
            user_provided_reason,
            context: context.clone(),
        });
        Ok(self
            .outcomes
            .get(&placement_application_id)
            .cloned()
            .unwrap_or(WithdrawalOutcome::Success(PlacementApplication {
                id: placement_application_id,
                is_withdrawn: true,
            })))
    }
}

/// A booking service over an in-memory set of bookings. Records lookups and
/// cancellations; cancellation succeeds unless an outcome is configured.
#[derive(Debug, Default)]
pub struct RecordingBookingService {
    bookings: HashMap<Uuid, Booking>,
    cancel_outcomes: HashMap<Uuid, WithdrawalOutcome<Booking>>,
    lookups: Mutex<Vec<Uuid>>,
    cancellations: Mutex<Vec<RecordedCancellation>>,
}

impl RecordingBookingService {
    /// Creates a service that knows no bookings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes an uncancelled booking with `id` resolvable.
    #[must_use]
    pub fn with_booking(mut self, id: Uuid) -> Self {
        self.bookings.insert(
            id,
            Booking {
                id,
                premises_id: Uuid::new_v4(),
                cancelled_at: None,
            },
        );
        self
    }

    /// Returns `outcome` when cancelling `id` instead of success.
    #[must_use]
    pub fn with_cancel_outcome(mut self, id: Uuid, outcome: WithdrawalOutcome<Booking>) -> Self {
        self.cancel_outcomes.insert(id, outcome);
        self
    }

    /// Returns a snapshot of all looked-up booking ids.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn lookups(&self) -> Vec<Uuid> {
        self.lookups.lock().unwrap().clone()
    }

    /// Returns a snapshot of all cancellations.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn cancellations(&self) -> Vec<RecordedCancellation> {
        self.cancellations.lock().unwrap().clone()
    }
}

#[async_trait]
impl BookingService for RecordingBookingService {
    async fn find_booking_by_id(&self, booking_id: Uuid) -> Result<Option<Booking>, DomainError> {
        self.lookups.lock().unwrap().push(booking_id);
        Ok(self.bookings.get(&booking_id).cloned())
    }

    async fn cancel_booking(
        &self,
        booking: &Booking,
        cancellation: BookingCancellation,
        context: &WithdrawalContext,
    ) -> Result<WithdrawalOutcome<Booking>, DomainError> {
        let cancelled_at = cancellation.cancelled_at;
        self.cancellations.lock().unwrap().push(RecordedCancellation {
            booking_id: booking.id,
            cancellation,
            context: context.clone(),
        });
        Ok(self
            .cancel_outcomes
            .get(&booking.id)
            .cloned()
            .unwrap_or_else(|| {
                WithdrawalOutcome::Success(Booking {
                    cancelled_at: Some(cancelled_at),
                    ..booking.clone()
                })
            }))
    }
}

/// A booking service whose backing store is unreachable. Every call fails
/// with `DomainError::Infrastructure`.
#[derive(Debug)]
pub struct UnavailableBookingService;

#[async_trait]
impl BookingService for UnavailableBookingService {
    async fn find_booking_by_id(&self, _booking_id: Uuid) -> Result<Option<Booking>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn cancel_booking(
        &self,
        _booking: &Booking,
        _cancellation: BookingCancellation,
        _context: &WithdrawalContext,
    ) -> Result<WithdrawalOutcome<Booking>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}
