//! Commands for the Withdrawal context.

use placements_core::command::Command;
use uuid::Uuid;

use super::context::WithdrawalContext;
use super::tree::WithdrawableTree;

/// Command to withdraw every eligible descendant of an already withdrawn root.
#[derive(Debug, Clone)]
pub struct CascadeWithdrawal {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Tree rooted at the entity that has just been withdrawn.
    pub tree: WithdrawableTree,
    /// Why the root was withdrawn.
    pub context: WithdrawalContext,
}

impl Command for CascadeWithdrawal {
    fn command_type(&self) -> &'static str {
        "withdrawal.cascade"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
