//! Blocking computation.
//!
//! `subtree_blocked(n)` holds when `n` itself blocks ancestor withdrawals or
//! any of its descendants does. It is computed in one post-order pass and
//! kept in a side table, so the tree nodes are never modified.

use std::collections::HashMap;

use uuid::Uuid;

use super::tree::WithdrawableTreeNode;

/// `subtree_blocked` flag for every node of one tree, keyed by entity id.
#[derive(Debug, Clone, Default)]
pub struct BlockingAnnotations {
    subtree_blocked: HashMap<Uuid, bool>,
}

impl BlockingAnnotations {
    /// Annotates every node under (and including) `root`.
    #[must_use]
    pub fn compute(root: &WithdrawableTreeNode) -> Self {
        let mut annotations = Self::default();
        annotations.visit(root);
        annotations
    }

    fn visit(&mut self, node: &WithdrawableTreeNode) -> bool {
        // Every child is visited even once the answer is known: each one
        // needs its own entry.
        let mut blocked = node.status.block_ancestor_withdrawals;
        for child in &node.children {
            blocked |= self.visit(child);
        }
        self.subtree_blocked.insert(node.entity_id, blocked);
        blocked
    }

    /// Whether the subtree rooted at `entity_id` contains a blocking entity.
    ///
    /// Ids that were not part of the annotated tree count as blocked.
    #[must_use]
    pub fn is_subtree_blocked(&self, entity_id: Uuid) -> bool {
        self.subtree_blocked.get(&entity_id).copied().unwrap_or(true)
    }
}
