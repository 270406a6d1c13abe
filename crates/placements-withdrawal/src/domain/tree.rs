//! The withdrawable tree handed to the cascade by the tree builder.

use std::collections::HashSet;
use std::fmt;

use placements_core::error::DomainError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::blocking::BlockingAnnotations;
use super::status::{WithdrawableEntityType, WithdrawableState};

/// A single entity in the withdrawable tree together with its dependants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawableTreeNode {
    /// The kind of entity this node represents.
    pub entity_type: WithdrawableEntityType,
    /// The entity identifier.
    pub entity_id: Uuid,
    /// Withdrawable state computed by the tree builder.
    pub status: WithdrawableState,
    /// Dependent entities, in builder order.
    #[serde(default)]
    pub children: Vec<WithdrawableTreeNode>,
}

impl WithdrawableTreeNode {
    /// Creates a node.
    #[must_use]
    pub fn new(
        entity_type: WithdrawableEntityType,
        entity_id: Uuid,
        status: WithdrawableState,
        children: Vec<WithdrawableTreeNode>,
    ) -> Self {
        Self {
            entity_type,
            entity_id,
            status,
            children,
        }
    }

    /// Returns every proper descendant of this node in pre-order.
    #[must_use]
    pub fn descendants(&self) -> Vec<&WithdrawableTreeNode> {
        let mut out = Vec::new();
        let mut stack: Vec<&WithdrawableTreeNode> = self.children.iter().rev().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children.iter().rev());
        }
        out
    }
}

/// An immutable withdrawable tree with its blocking annotations.
///
/// The root is the entity the user chose to withdraw. Blocking is computed
/// once on construction and never changes afterwards.
#[derive(Debug, Clone)]
pub struct WithdrawableTree {
    root: WithdrawableTreeNode,
    blocking: BlockingAnnotations,
}

impl WithdrawableTree {
    /// Wraps `root`, checking that entity ids are unique across the tree.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if an entity id appears twice.
    pub fn new(root: WithdrawableTreeNode) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        seen.insert(root.entity_id);
        for node in root.descendants() {
            if !seen.insert(node.entity_id) {
                return Err(DomainError::Validation(format!(
                    "entity id {} appears more than once in withdrawable tree",
                    node.entity_id
                )));
            }
        }

        let blocking = BlockingAnnotations::compute(&root);
        Ok(Self { root, blocking })
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> &WithdrawableTreeNode {
        &self.root
    }

    /// The blocking side table for this tree.
    #[must_use]
    pub fn blocking(&self) -> &BlockingAnnotations {
        &self.blocking
    }

    /// Whether anything in the tree blocks withdrawal of the root itself.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.blocking.is_subtree_blocked(self.root.entity_id)
    }

    /// Total number of nodes, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.root.descendants().len()
    }

    /// Nodes (root included) the user may withdraw themselves right now: the
    /// entity is withdrawable, the user may act on it, and nothing beneath it
    /// blocks.
    #[must_use]
    pub fn directly_withdrawable(&self) -> Vec<&WithdrawableTreeNode> {
        std::iter::once(&self.root)
            .chain(self.root.descendants())
            .filter(|node| {
                node.status.withdrawable
                    && node.status.user_may_directly_withdraw
                    && !self.blocking.is_subtree_blocked(node.entity_id)
            })
            .collect()
    }

    /// Indented text rendering, one node per line, for diagnostics.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WithdrawableTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_node(&self.root, 0, f)
    }
}

fn yes_no(value: bool) -> char {
    if value { 'Y' } else { 'N' }
}

fn fmt_node(
    node: &WithdrawableTreeNode,
    depth: usize,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let status = &node.status;
    write!(
        f,
        "{}{} {}, withdrawable:{}, mayDirectlyWithdraw:{}",
        "  ".repeat(depth),
        node.entity_type,
        node.entity_id,
        yes_no(status.withdrawable),
        yes_no(status.user_may_directly_withdraw),
    )?;
    if status.block_ancestor_withdrawals {
        f.write_str(", BLOCKING")?;
        if let Some(reason) = status.blocking_reason {
            write!(f, " ({reason:?})")?;
        }
    }
    writeln!(f)?;
    for child in &node.children {
        fmt_node(child, depth + 1, f)?;
    }
    Ok(())
}
