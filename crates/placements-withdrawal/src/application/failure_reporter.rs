//! Reporting of descendants the cascade could not withdraw.
//!
//! Failures go to an observability sink only; they never change the
//! outcome of the cascade.

use std::fmt;

use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use crate::domain::context::WithdrawalContext;
use crate::domain::status::WithdrawableEntityType;
use crate::domain::tree::WithdrawableTreeNode;

/// Tracing target for cascade diagnostics.
pub const CASCADE_LOG_TARGET: &str = "placements_withdrawal::cascade";

/// Why a descendant could not be withdrawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FailureKind {
    /// The collaborator refused the withdrawal.
    Unauthorised,
    /// The collaborator could not find the entity.
    NotFound,
    /// The collaborator rejected the withdrawal with a message.
    ValidationError(String),
    /// The collaborator could not be reached or failed to answer.
    Infrastructure(String),
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthorised => f.write_str("Unauthorised"),
            Self::NotFound => f.write_str("NotFound"),
            Self::ValidationError(message) | Self::Infrastructure(message) => {
                f.write_str(message)
            }
        }
    }
}

/// One failed descendant withdrawal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WithdrawalFailure {
    /// Kind of the entity that could not be withdrawn.
    pub entity_type: WithdrawableEntityType,
    /// Identifier of the entity that could not be withdrawn.
    pub entity_id: Uuid,
    /// Kind of the entity whose withdrawal started the cascade.
    pub triggering_entity_type: WithdrawableEntityType,
    /// Identifier of the entity whose withdrawal started the cascade.
    pub triggering_entity_id: Uuid,
    /// What went wrong.
    pub kind: FailureKind,
}

impl WithdrawalFailure {
    /// Builds the record for `node`.
    #[must_use]
    pub fn new(
        node: &WithdrawableTreeNode,
        context: &WithdrawalContext,
        kind: FailureKind,
    ) -> Self {
        Self {
            entity_type: node.entity_type,
            entity_id: node.entity_id,
            triggering_entity_type: context.triggering_entity_type,
            triggering_entity_id: context.triggering_entity_id,
            kind,
        }
    }
}

/// Sink for failed descendant withdrawals. Must tolerate concurrent calls.
pub trait WithdrawalFailureReporter: Send + Sync {
    /// Record `failure`.
    fn report(&self, failure: &WithdrawalFailure);
}

/// Reports failures as structured `tracing` warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFailureReporter;

impl WithdrawalFailureReporter for TracingFailureReporter {
    fn report(&self, failure: &WithdrawalFailure) {
        warn!(
            target: CASCADE_LOG_TARGET,
            entity_type = %failure.entity_type,
            entity_id = %failure.entity_id,
            triggering_entity_type = %failure.triggering_entity_type,
            triggering_entity_id = %failure.triggering_entity_id,
            failure = %failure.kind,
            "failed to withdraw descendant"
        );
    }
}
