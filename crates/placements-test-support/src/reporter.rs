//! Test reporter — records every reported withdrawal failure.

use std::sync::Mutex;

use placements_withdrawal::application::failure_reporter::{
    WithdrawalFailure, WithdrawalFailureReporter,
};

/// A failure reporter that keeps every reported failure in memory.
#[derive(Debug, Default)]
pub struct RecordingFailureReporter {
    failures: Mutex<Vec<WithdrawalFailure>>,
}

impl RecordingFailureReporter {
    /// Creates an empty reporter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all reported failures.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn failures(&self) -> Vec<WithdrawalFailure> {
        self.failures.lock().unwrap().clone()
    }
}

impl WithdrawalFailureReporter for RecordingFailureReporter {
    fn report(&self, failure: &WithdrawalFailure) {
        self.failures.lock().unwrap().push(failure.clone());
    }
}
