//! Collaborator ports the cascade withdraws entities through.
//!
//! A collaborator answers `Ok(WithdrawalOutcome::..)` for every business
//! outcome and reserves `Err(DomainError)` for failures to answer at all.

use async_trait::async_trait;
use placements_core::error::DomainError;
use uuid::Uuid;

use super::failure_reporter::FailureKind;
use crate::domain::context::{UserRef, WithdrawalContext, WithdrawalReason};
use crate::domain::entities::{Booking, BookingCancellation, PlacementApplication, PlacementRequest};

/// Business outcome of a single withdrawal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WithdrawalOutcome<T> {
    /// The entity was withdrawn.
    Success(T),
    /// The actor may not withdraw the entity.
    Unauthorised,
    /// The entity does not exist.
    NotFound,
    /// The entity cannot be withdrawn in its current state.
    ValidationError(String),
}

impl<T> WithdrawalOutcome<T> {
    /// Whether this is a `Success`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The failure to report, or `None` on success.
    #[must_use]
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Success(_) => None,
            Self::Unauthorised => Some(FailureKind::Unauthorised),
            Self::NotFound => Some(FailureKind::NotFound),
            Self::ValidationError(message) => Some(FailureKind::ValidationError(message.clone())),
        }
    }
}

/// Withdraws placement requests.
///
/// `actor == None` marks a cascaded withdrawal: implementations skip
/// authorisation and use the automatic-withdrawal notification copy.
#[async_trait]
pub trait PlacementRequestWithdrawer: Send + Sync {
    /// Withdraw the placement request `placement_request_id`.
    async fn withdraw_placement_request(
        &self,
        placement_request_id: Uuid,
        actor: Option<&UserRef>,
        user_provided_reason: Option<WithdrawalReason>,
        context: &WithdrawalContext,
    ) -> Result<WithdrawalOutcome<PlacementRequest>, DomainError>;
}

/// Withdraws placement applications. Same `actor` convention as
/// [`PlacementRequestWithdrawer`].
#[async_trait]
pub trait PlacementApplicationWithdrawer: Send + Sync {
    /// Withdraw the placement application `placement_application_id`.
    async fn withdraw_placement_application(
        &self,
        placement_application_id: Uuid,
        actor: Option<&UserRef>,
        user_provided_reason: Option<WithdrawalReason>,
        context: &WithdrawalContext,
    ) -> Result<WithdrawalOutcome<PlacementApplication>, DomainError>;
}

/// Looks up and cancels bookings.
#[async_trait]
pub trait BookingService: Send + Sync {
    /// Load a booking by id.
    async fn find_booking_by_id(&self, booking_id: Uuid) -> Result<Option<Booking>, DomainError>;

    /// Cancel `booking`.
    async fn cancel_booking(
        &self,
        booking: &Booking,
        cancellation: BookingCancellation,
        context: &WithdrawalContext,
    ) -> Result<WithdrawalOutcome<Booking>, DomainError>;
}

/// The collaborators a cascade dispatches to.
#[derive(Clone, Copy)]
pub struct CascadeCollaborators<'a> {
    /// Placement request withdrawals.
    pub placement_requests: &'a dyn PlacementRequestWithdrawer,
    /// Placement application withdrawals.
    pub placement_applications: &'a dyn PlacementApplicationWithdrawer,
    /// Booking lookup and cancellation.
    pub bookings: &'a dyn BookingService,
}

impl std::fmt::Debug for CascadeCollaborators<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CascadeCollaborators").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_kind_maps_each_variant() {
        assert_eq!(WithdrawalOutcome::Success(()).failure_kind(), None);
        assert_eq!(
            WithdrawalOutcome::<()>::Unauthorised.failure_kind(),
            Some(FailureKind::Unauthorised)
        );
        assert_eq!(
            WithdrawalOutcome::<()>::NotFound.failure_kind(),
            Some(FailureKind::NotFound)
        );
        assert_eq!(
            WithdrawalOutcome::<()>::ValidationError("already withdrawn".into()).failure_kind(),
            Some(FailureKind::ValidationError("already withdrawn".into()))
        );
    }

    #[test]
    fn test_is_success_only_for_success() {
        assert!(WithdrawalOutcome::Success(1).is_success());
        assert!(!WithdrawalOutcome::<i32>::NotFound.is_success());
    }
}
