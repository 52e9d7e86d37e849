//! Transfer domain types.
//!
//! A transfer moves through an ordered sequence of statuses from
//! submission to arrival. The flagged/cleared pair is a conditional
//! detour taken only when compliance review actually flags the transfer.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use finch_shared::types::{AccountId, Money, TransferId};

use super::error::TransferError;

/// Status of a transfer in its delivery lifecycle.
///
/// Statuses are ordered; a transfer only ever moves forward:
/// Submitted → Processing → Converting → [FlaggedAwaitingClearance →
/// Cleared] → InTransit → FundsArrived / PendingDeposit.
///
/// `FundsArrived` and `PendingDeposit` are alternative terminals: a
/// transfer reaches exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferStatus {
    /// The transfer has been submitted.
    Submitted,
    /// Funds are being processed.
    Processing,
    /// Currency conversion is underway.
    Converting,
    /// Compliance review flagged the transfer; awaiting clearance.
    FlaggedAwaitingClearance,
    /// The flagged transfer has been cleared for delivery.
    Cleared,
    /// Funds are in transit to the recipient.
    InTransit,
    /// Funds arrived in the recipient's account.
    FundsArrived,
    /// Funds are awaiting pickup/deposit by the recipient.
    PendingDeposit,
}

impl TransferStatus {
    /// Position of this status in the canonical forward order.
    ///
    /// The two terminal statuses share an ordinal: they are alternatives,
    /// not a sequence.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Submitted => 0,
            Self::Processing => 1,
            Self::Converting => 2,
            Self::FlaggedAwaitingClearance => 3,
            Self::Cleared => 4,
            Self::InTransit => 5,
            Self::FundsArrived | Self::PendingDeposit => 6,
        }
    }

    /// Returns true if this status ends the transfer lifecycle.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::FundsArrived | Self::PendingDeposit)
    }

    /// Returns true if this status belongs to the conditional
    /// flagged/cleared detour.
    #[must_use]
    pub const fn is_clearance_step(self) -> bool {
        matches!(self, Self::FlaggedAwaitingClearance | Self::Cleared)
    }

    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::Processing => "processing",
            Self::Converting => "converting",
            Self::FlaggedAwaitingClearance => "flagged_awaiting_clearance",
            Self::Cleared => "cleared",
            Self::InTransit => "in_transit",
            Self::FundsArrived => "funds_arrived",
            Self::PendingDeposit => "pending_deposit",
        }
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rendered state of a single step in a transfer's timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    /// The step has been passed.
    Completed,
    /// The transfer is currently at this step.
    Current,
    /// The step has not been reached yet.
    Pending,
}

/// Mapping from each reached status to the instant it was reached.
///
/// Invariant: timestamps are monotonically non-decreasing in status
/// order. A status that was never reached has no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTimestamps(BTreeMap<TransferStatus, DateTime<Utc>>);

impl StatusTimestamps {
    /// Creates an empty timestamp map.
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns the instant the given status was reached, if it was.
    #[must_use]
    pub fn get(&self, status: TransferStatus) -> Option<DateTime<Utc>> {
        self.0.get(&status).copied()
    }

    /// Returns true if the given status was reached.
    #[must_use]
    pub fn reached(&self, status: TransferStatus) -> bool {
        self.0.contains_key(&status)
    }

    /// Latest recorded instant across all reached statuses.
    #[must_use]
    pub fn latest(&self) -> Option<DateTime<Utc>> {
        self.0.values().max().copied()
    }

    /// Records the instant a status was reached.
    ///
    /// # Errors
    ///
    /// Returns `TransferError::TimestampRegression` if `at` precedes the
    /// latest already-recorded instant, which would break the
    /// monotonicity invariant.
    pub fn record(&mut self, status: TransferStatus, at: DateTime<Utc>) -> Result<(), TransferError> {
        if let Some(latest) = self.latest() {
            if at < latest {
                return Err(TransferError::TimestampRegression { status, at, latest });
            }
        }
        self.0.insert(status, at);
        Ok(())
    }
}

/// A money transfer with its delivery status history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transfer {
    /// Transfer ID.
    pub id: TransferId,
    /// Account the transfer was funded from.
    pub from_account: AccountId,
    /// Display name of the recipient.
    pub recipient: String,
    /// Amount debited from the sender.
    pub send: Money,
    /// Amount delivered to the recipient.
    pub receive: Money,
    /// Current status.
    pub status: TransferStatus,
    /// Instants each reached status was entered.
    pub timestamps: StatusTimestamps,
}

impl Transfer {
    /// Creates a transfer at `Submitted` with its first timestamp.
    #[must_use]
    pub fn submitted(
        id: TransferId,
        from_account: AccountId,
        recipient: String,
        send: Money,
        receive: Money,
        at: DateTime<Utc>,
    ) -> Self {
        let mut timestamps = StatusTimestamps::new();
        // A fresh map cannot regress.
        let _ = timestamps.record(TransferStatus::Submitted, at);
        Self {
            id,
            from_account,
            recipient,
            send,
            receive,
            status: TransferStatus::Submitted,
            timestamps,
        }
    }

    /// Returns true if this transfer took the flagged/cleared detour.
    #[must_use]
    pub fn was_flagged(&self) -> bool {
        self.timestamps
            .reached(TransferStatus::FlaggedAwaitingClearance)
    }

    /// Advances the transfer to a later status, recording when.
    ///
    /// Status only moves forward: the target must strictly follow the
    /// current status in the canonical order. `Cleared` additionally
    /// requires that the transfer was actually flagged.
    ///
    /// # Errors
    ///
    /// Returns `TransferError::InvalidTransition` for backward, repeated,
    /// or detour-skipping targets, and `TransferError::TimestampRegression`
    /// if `at` precedes the latest recorded instant.
    pub fn advance(&mut self, to: TransferStatus, at: DateTime<Utc>) -> Result<(), TransferError> {
        if to.ordinal() <= self.status.ordinal() {
            return Err(TransferError::InvalidTransition {
                from: self.status,
                to,
            });
        }
        if to == TransferStatus::Cleared && !self.was_flagged() {
            return Err(TransferError::InvalidTransition {
                from: self.status,
                to,
            });
        }
        // A flagged transfer must clear before anything else happens.
        if self.status == TransferStatus::FlaggedAwaitingClearance && to != TransferStatus::Cleared
        {
            return Err(TransferError::InvalidTransition {
                from: self.status,
                to,
            });
        }
        self.timestamps.record(to, at)?;
        self.status = to;
        Ok(())
    }
}
