//! Who and what triggered a withdrawal.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::status::WithdrawableEntityType;

/// Reference to the user acting on an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    /// The user identifier.
    pub id: Uuid,
    /// The user's login name.
    pub username: String,
}

/// Why a withdrawal happened, passed unchanged to every collaborator so
/// downstream records can explain a cascaded withdrawal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalContext {
    /// The user who withdrew the root entity, if a user did.
    pub triggering_user: Option<UserRef>,
    /// Kind of the entity whose withdrawal started the cascade.
    pub triggering_entity_type: WithdrawableEntityType,
    /// Identifier of the entity whose withdrawal started the cascade.
    pub triggering_entity_id: Uuid,
}

impl WithdrawalContext {
    /// Context for a withdrawal requested by `user`.
    #[must_use]
    pub fn triggered_by_user(
        user: UserRef,
        triggering_entity_type: WithdrawableEntityType,
        triggering_entity_id: Uuid,
    ) -> Self {
        Self {
            triggering_user: Some(user),
            triggering_entity_type,
            triggering_entity_id,
        }
    }

    /// Context for a withdrawal started by the system (e.g. an expiry job).
    #[must_use]
    pub fn triggered_by_system(
        triggering_entity_type: WithdrawableEntityType,
        triggering_entity_id: Uuid,
    ) -> Self {
        Self {
            triggering_user: None,
            triggering_entity_type,
            triggering_entity_id,
        }
    }
}

/// Reason a user gives when withdrawing a request for placement directly.
///
/// Cascaded withdrawals never carry one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WithdrawalReason {
    /// The request duplicates another one.
    DuplicatePlacementRequest,
    /// Accommodation has been found elsewhere.
    AlternativeProvisionIdentified,
    /// The person's circumstances changed.
    ChangeInCircumstances,
    /// The release decision changed.
    ChangeInReleaseDecision,
    /// The request was raised in error.
    ErrorInPlacementRequest,
    /// Withdrawn by the probation practitioner.
    WithdrawnByPp,
}
