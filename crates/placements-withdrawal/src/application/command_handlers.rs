//! Command handlers for the Withdrawal context.
//!
//! The cascade runs after the root entity has already been withdrawn and
//! committed. Descendants are visited one at a time: a failure on one node
//! is reported and the next node is tried, and nothing already withdrawn is
//! undone.

use placements_core::clock::Clock;
use placements_core::command::Command;
use placements_core::error::DomainError;
use tracing::{debug, error, info, instrument};

use super::config::{CascadeConfig, MissingBookingPolicy};
use super::failure_reporter::{
    CASCADE_LOG_TARGET, FailureKind, WithdrawalFailure, WithdrawalFailureReporter,
};
use super::ports::{CascadeCollaborators, WithdrawalOutcome};
use crate::domain::commands::CascadeWithdrawal;
use crate::domain::context::WithdrawalContext;
use crate::domain::eligibility::{Eligibility, assess_descendants};
use crate::domain::entities::BookingCancellation;
use crate::domain::status::WithdrawableEntityType;
use crate::domain::tree::{WithdrawableTree, WithdrawableTreeNode};

/// Notes stored on a booking cancelled by the cascade.
#[must_use]
pub fn automatic_cancellation_notes(context: &WithdrawalContext) -> String {
    format!(
        "Automatically withdrawn as {} was withdrawn",
        context.triggering_entity_type.label()
    )
}

#[derive(Debug, Default)]
struct CascadeTally {
    attempted: usize,
    completed: usize,
    failed: usize,
    skipped: usize,
}

/// Handles the `CascadeWithdrawal` command.
///
/// # Errors
///
/// See [`withdraw_descendants`].
#[instrument(
    skip_all,
    fields(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id(),
        triggering_entity_id = %command.context.triggering_entity_id,
    )
)]
pub async fn handle_cascade_withdrawal(
    command: &CascadeWithdrawal,
    collaborators: &CascadeCollaborators<'_>,
    clock: &dyn Clock,
    reporter: &dyn WithdrawalFailureReporter,
    config: &CascadeConfig,
) -> Result<(), DomainError> {
    withdraw_descendants(
        &command.tree,
        &command.context,
        collaborators,
        clock,
        reporter,
        config,
    )
    .await
}

/// Withdraws every eligible proper descendant of `tree`'s root.
///
/// Individual `Unauthorised`, `NotFound` and `ValidationError` outcomes, and
/// collaborator errors, are handed to `reporter` and do not affect the result.
///
/// # Errors
///
/// Returns `DomainError::EntityNotFound` if a booking in the tree cannot be
/// loaded and `config` says to abort; no further nodes are visited.
pub async fn withdraw_descendants(
    tree: &WithdrawableTree,
    context: &WithdrawalContext,
    collaborators: &CascadeCollaborators<'_>,
    clock: &dyn Clock,
    reporter: &dyn WithdrawalFailureReporter,
    config: &CascadeConfig,
) -> Result<(), DomainError> {
    debug!(target: CASCADE_LOG_TARGET, tree = %tree.render(), "withdrawable tree");

    let assessed = assess_descendants(tree.root(), tree.blocking());
    let eligible = assessed
        .iter()
        .filter(|(_, e)| *e == Eligibility::Eligible)
        .count();
    info!(
        target: CASCADE_LOG_TARGET,
        triggering_entity_type = %context.triggering_entity_type,
        triggering_entity_id = %context.triggering_entity_id,
        nodes = tree.node_count(),
        eligible,
        "cascading withdrawal to descendants"
    );

    let mut tally = CascadeTally::default();
    for (node, eligibility) in assessed {
        if eligibility != Eligibility::Eligible {
            tally.skipped += 1;
            debug!(
                target: CASCADE_LOG_TARGET,
                entity_type = %node.entity_type,
                entity_id = %node.entity_id,
                reason = eligibility.as_str(),
                "skipping descendant"
            );
            continue;
        }

        tally.attempted += 1;
        match withdraw_node(node, context, collaborators, clock, config).await? {
            None => tally.completed += 1,
            Some(kind) => {
                tally.failed += 1;
                reporter.report(&WithdrawalFailure::new(node, context, kind));
            }
        }
    }

    info!(
        target: CASCADE_LOG_TARGET,
        attempted = tally.attempted,
        completed = tally.completed,
        failed = tally.failed,
        skipped = tally.skipped,
        "cascade complete"
    );
    Ok(())
}

/// Reportable failure for a collaborator call, if any. A collaborator that
/// cannot answer at all is reported like any other failed node.
fn failure_of<T>(result: Result<WithdrawalOutcome<T>, DomainError>) -> Option<FailureKind> {
    match result {
        Ok(outcome) => outcome.failure_kind(),
        Err(err) => Some(FailureKind::Infrastructure(err.to_string())),
    }
}

/// Dispatches one eligible node to its collaborator. `Ok(Some(_))` is a
/// reportable failure; `Err` is only returned for a missing booking under
/// [`MissingBookingPolicy::Abort`].
async fn withdraw_node(
    node: &WithdrawableTreeNode,
    context: &WithdrawalContext,
    collaborators: &CascadeCollaborators<'_>,
    clock: &dyn Clock,
    config: &CascadeConfig,
) -> Result<Option<FailureKind>, DomainError> {
    debug!(
        target: CASCADE_LOG_TARGET,
        entity_type = %node.entity_type,
        entity_id = %node.entity_id,
        "withdrawing descendant"
    );

    let failure = match node.entity_type {
        // Only ever a root in a well-formed tree.
        WithdrawableEntityType::Application => None,
        WithdrawableEntityType::PlacementRequest => failure_of(
            collaborators
                .placement_requests
                .withdraw_placement_request(node.entity_id, None, None, context)
                .await,
        ),
        WithdrawableEntityType::PlacementApplication => failure_of(
            collaborators
                .placement_applications
                .withdraw_placement_application(node.entity_id, None, None, context)
                .await,
        ),
        WithdrawableEntityType::Booking => {
            let booking = match collaborators.bookings.find_booking_by_id(node.entity_id).await {
                Ok(Some(booking)) => booking,
                Ok(None) => {
                    return match config.on_missing_booking {
                        MissingBookingPolicy::Abort => {
                            error!(
                                target: CASCADE_LOG_TARGET,
                                booking_id = %node.entity_id,
                                "withdrawable tree references a booking that does not exist"
                            );
                            Err(DomainError::EntityNotFound {
                                entity: "booking",
                                id: node.entity_id,
                            })
                        }
                        MissingBookingPolicy::Skip => Ok(Some(FailureKind::NotFound)),
                    };
                }
                Err(err) => return Ok(Some(FailureKind::Infrastructure(err.to_string()))),
            };

            let cancellation = BookingCancellation {
                cancelled_at: clock.now(),
                user_provided_reason: None,
                notes: automatic_cancellation_notes(context),
            };
            failure_of(
                collaborators
                    .bookings
                    .cancel_booking(&booking, cancellation, context)
                    .await,
            )
        }
    };
    Ok(failure)
}
