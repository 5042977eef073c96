//! Fire-and-forget failure reporting
//!
//! Store operations that fail submit a [`FailureReport`] to a [`FailureSink`]
//! before re-raising the original error. Submission never blocks the caller
//! and delivery is best effort: the caller never observes whether the report
//! was processed, and pending reports may be dropped at process exit.

use std::fmt;

use serde::Serialize;
use tokio::sync::mpsc;
use tracing::error;
use uuid::Uuid;

/// Description of one failed store operation
#[derive(Debug, Clone, Serialize)]
pub struct FailureReport {
    /// Report ID for log correlation
    pub id: Uuid,
    /// Name of the store operation that failed
    pub operation: String,
    /// Rendered error message
    pub error: String,
    /// When the failure was observed
    pub at: chrono::DateTime<chrono::Utc>,
}

/// Best-effort asynchronous notification channel for store failures
///
/// Backed by an unbounded channel so that [`report`](Self::report) never
/// blocks. A send to a closed channel is silently discarded.
#[derive(Debug, Clone)]
pub struct FailureSink {
    sender: mpsc::UnboundedSender<FailureReport>,
}

impl FailureSink {
    /// Create a sink whose reports are drained by a background task and
    /// written to the log
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn_logging() -> Self {
        let (sender, mut receiver) = mpsc::unbounded_channel::<FailureReport>();

        tokio::spawn(async move {
            while let Some(report) = receiver.recv().await {
                error!(
                    id = %report.id,
                    operation = %report.operation,
                    at = %report.at,
                    "store operation failed: {}",
                    report.error
                );
            }
        });

        Self { sender }
    }

    /// Create a sink together with the receiving end of its channel
    ///
    /// The caller owns draining; useful for tests asserting notification
    /// delivery.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<FailureReport>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// Submit a failure report; never blocks, never fails
    pub fn report(&self, operation: &str, error: impl fmt::Display) {
        let report = FailureReport {
            id: Uuid::new_v4(),
            operation: operation.to_string(),
            error: error.to_string(),
            at: chrono::Utc::now(),
        };
        let _ = self.sender.send(report);
    }
}
