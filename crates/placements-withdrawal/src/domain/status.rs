//! Entity kinds and per-node withdrawable state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kinds of entity that can take part in a withdrawal cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WithdrawableEntityType {
    /// An application for supported accommodation.
    Application,
    /// A request for placement raised from an assessed application.
    PlacementRequest,
    /// A further request for placement made against an application.
    PlacementApplication,
    /// A booking into a premises.
    Booking,
}

impl WithdrawableEntityType {
    /// Label used in user-facing copy such as booking cancellation notes.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Application => "Application",
            Self::PlacementRequest | Self::PlacementApplication => "Request for Placement",
            Self::Booking => "Placement",
        }
    }
}

impl fmt::Display for WithdrawableEntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Application => "Application",
            Self::PlacementRequest => "PlacementRequest",
            Self::PlacementApplication => "PlacementApplication",
            Self::Booking => "Booking",
        };
        f.write_str(name)
    }
}

/// Why an entity blocks the withdrawal of its ancestors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockingReason {
    /// An arrival has been recorded in the accommodation system.
    ArrivalRecordedInCas1,
    /// An arrival has been recorded in the probation case management system.
    ArrivalRecordedInDelius,
}

/// Withdrawable state of a single tree node, as classified by the tree builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawableState {
    /// Whether the entity is in a state that can be withdrawn at all.
    pub withdrawable: bool,
    /// Whether the requesting user may withdraw this entity directly.
    pub user_may_directly_withdraw: bool,
    /// Whether this entity prevents the automatic withdrawal of itself and
    /// every one of its ancestors.
    #[serde(default)]
    pub block_ancestor_withdrawals: bool,
    /// Informational reason for `block_ancestor_withdrawals`.
    #[serde(default)]
    pub blocking_reason: Option<BlockingReason>,
}

impl WithdrawableState {
    /// Creates a non-blocking state.
    #[must_use]
    pub fn new(withdrawable: bool, user_may_directly_withdraw: bool) -> Self {
        Self {
            withdrawable,
            user_may_directly_withdraw,
            block_ancestor_withdrawals: false,
            blocking_reason: None,
        }
    }

    /// Marks this state as blocking ancestor withdrawals.
    #[must_use]
    pub fn blocking(mut self, reason: BlockingReason) -> Self {
        self.block_ancestor_withdrawals = true;
        self.blocking_reason = Some(reason);
        self
    }
}
