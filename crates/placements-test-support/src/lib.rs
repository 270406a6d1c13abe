//! Shared test fakes and utilities for the placements service.

mod clock;
mod logs;
mod reporter;
mod tree;
mod withdrawers;

pub use clock::FixedClock;
pub use logs::{LogCapture, capture_json_logs};
pub use reporter::RecordingFailureReporter;
pub use tree::{blocking_node, node, system_context};
pub use withdrawers::{
    RecordedCancellation, RecordedWithdrawal, RecordingBookingService,
    RecordingPlacementApplicationWithdrawer, RecordingPlacementRequestWithdrawer,
    UnavailableBookingService,
};
