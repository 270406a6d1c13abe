//! Builders for withdrawable trees in tests.

use placements_withdrawal::domain::context::WithdrawalContext;
use placements_withdrawal::domain::status::{
    BlockingReason, WithdrawableEntityType, WithdrawableState,
};
use placements_withdrawal::domain::tree::WithdrawableTreeNode;
use uuid::Uuid;

/// A non-blocking node with a fresh id. `withdrawable` sets both the
/// withdrawable and the may-directly-withdraw flags.
#[must_use]
pub fn node(
    entity_type: WithdrawableEntityType,
    withdrawable: bool,
    children: Vec<WithdrawableTreeNode>,
) -> WithdrawableTreeNode {
    WithdrawableTreeNode::new(
        entity_type,
        Uuid::new_v4(),
        WithdrawableState::new(withdrawable, withdrawable),
        children,
    )
}

/// A withdrawable node that blocks ancestor withdrawals (an arrival has been
/// recorded), with a fresh id.
#[must_use]
pub fn blocking_node(
    entity_type: WithdrawableEntityType,
    children: Vec<WithdrawableTreeNode>,
) -> WithdrawableTreeNode {
    WithdrawableTreeNode::new(
        entity_type,
        Uuid::new_v4(),
        WithdrawableState::new(true, false).blocking(BlockingReason::ArrivalRecordedInCas1),
        children,
    )
}

/// A system-triggered context for withdrawing `root`.
#[must_use]
pub fn system_context(root: &WithdrawableTreeNode) -> WithdrawalContext {
    WithdrawalContext::triggered_by_system(root.entity_type, root.entity_id)
}
