//! Minimal views of the entities the collaborators withdraw.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A placement request as returned by its withdrawer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementRequest {
    /// The placement request identifier.
    pub id: Uuid,
    /// Whether the request is now withdrawn.
    pub is_withdrawn: bool,
}

/// A placement application as returned by its withdrawer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementApplication {
    /// The placement application identifier.
    pub id: Uuid,
    /// Whether the application is now withdrawn.
    pub is_withdrawn: bool,
}

/// A booking as loaded from, and returned by, the booking service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    /// The booking identifier.
    pub id: Uuid,
    /// The premises the booking is for.
    pub premises_id: Uuid,
    /// When the booking was cancelled, if it has been.
    pub cancelled_at: Option<DateTime<Utc>>,
}

/// Details recorded when a booking is cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingCancellation {
    /// When the cancellation takes effect.
    pub cancelled_at: DateTime<Utc>,
    /// Cancellation reason chosen by a user; `None` for automatic cancellations.
    pub user_provided_reason: Option<Uuid>,
    /// Free-text notes stored with the cancellation.
    pub notes: String,
}
