//! Selection of the descendants that may be withdrawn automatically.

use super::blocking::BlockingAnnotations;
use super::tree::WithdrawableTreeNode;

/// Whether a descendant will be withdrawn by the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    /// Withdrawable and nothing in its subtree blocks.
    Eligible,
    /// The tree builder classified the entity as not withdrawable.
    NotWithdrawable,
    /// The entity, or one of its descendants, blocks ancestor withdrawals.
    Blocked,
}

impl Eligibility {
    /// Short name used as a structured log field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Eligible => "eligible",
            Self::NotWithdrawable => "not_withdrawable",
            Self::Blocked => "blocked",
        }
    }
}

/// Classifies a single node.
#[must_use]
pub fn eligibility(node: &WithdrawableTreeNode, blocking: &BlockingAnnotations) -> Eligibility {
    if !node.status.withdrawable {
        Eligibility::NotWithdrawable
    } else if blocking.is_subtree_blocked(node.entity_id) {
        Eligibility::Blocked
    } else {
        Eligibility::Eligible
    }
}

/// Classifies every proper descendant of `root`, in pre-order.
#[must_use]
pub fn assess_descendants<'t>(
    root: &'t WithdrawableTreeNode,
    blocking: &BlockingAnnotations,
) -> Vec<(&'t WithdrawableTreeNode, Eligibility)> {
    root.descendants()
        .into_iter()
        .map(|node| (node, eligibility(node, blocking)))
        .collect()
}

/// The proper descendants of `root` that the cascade will withdraw.
#[must_use]
pub fn eligible_descendants<'t>(
    root: &'t WithdrawableTreeNode,
    blocking: &BlockingAnnotations,
) -> Vec<&'t WithdrawableTreeNode> {
    assess_descendants(root, blocking)
        .into_iter()
        .filter(|(_, e)| *e == Eligibility::Eligible)
        .map(|(node, _)| node)
        .collect()
}
