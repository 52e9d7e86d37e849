//! Transfer state machine errors.

use chrono::{DateTime, Utc};
use thiserror::Error;

use finch_shared::AppError;

use super::types::TransferStatus;

/// Errors raised by transfer status transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    /// The requested transition does not move the transfer forward.
    #[error("invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// Status the transfer is currently in.
        from: TransferStatus,
        /// Requested target status.
        to: TransferStatus,
    },

    /// Recording the status would make the timestamp history go backward.
    #[error("timestamp for {status} at {at} precedes latest recorded instant {latest}")]
    TimestampRegression {
        /// Status being recorded.
        status: TransferStatus,
        /// Instant supplied for the status.
        at: DateTime<Utc>,
        /// Latest instant already recorded.
        latest: DateTime<Utc>,
    },
}

impl From<TransferError> for AppError {
    fn from(err: TransferError) -> Self {
        Self::BusinessRule(err.to_string())
    }
}
