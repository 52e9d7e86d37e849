//! Step timeline computation for transfer status rendering.
//!
//! Given a transfer's timestamp history and current status, computes the
//! list of steps a status screen should render and the state of each.
//! The flagged/cleared pair appears only for transfers that were
//! actually flagged; for everyone else the flow omits it entirely.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::{StepState, StatusTimestamps, Transfer, TransferStatus};

/// One rendered step of a transfer's status flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineStep {
    /// The status this step represents.
    pub status: TransferStatus,
    /// Rendered state of the step.
    pub state: StepState,
    /// When the step was reached, if it was.
    pub reached_at: Option<DateTime<Utc>>,
}

/// Stateless timeline computation over a transfer's status history.
pub struct StatusTimeline;

impl StatusTimeline {
    /// The ordered flow applicable to a transfer.
    ///
    /// * `flagged` - include the flagged/cleared detour
    /// * `terminal` - which terminal status ends the flow
    #[must_use]
    pub fn flow(flagged: bool, terminal: TransferStatus) -> Vec<TransferStatus> {
        let terminal = if terminal.is_terminal() {
            terminal
        } else {
            TransferStatus::FundsArrived
        };
        let mut steps = vec![
            TransferStatus::Submitted,
            TransferStatus::Processing,
            TransferStatus::Converting,
        ];
        if flagged {
            steps.push(TransferStatus::FlaggedAwaitingClearance);
            steps.push(TransferStatus::Cleared);
        }
        steps.push(TransferStatus::InTransit);
        steps.push(terminal);
        steps
    }

    /// Computes the rendered step list for a timestamp history and a
    /// current status.
    ///
    /// Steps before the current status render `Completed`, the current
    /// status renders `Current`, later steps render `Pending`. A
    /// transfer that reached a terminal status renders every step
    /// `Completed`.
    #[must_use]
    pub fn steps(timestamps: &StatusTimestamps, current: TransferStatus) -> Vec<TimelineStep> {
        let flagged = timestamps.reached(TransferStatus::FlaggedAwaitingClearance);
        let terminal = if timestamps.reached(TransferStatus::PendingDeposit)
            || current == TransferStatus::PendingDeposit
        {
            TransferStatus::PendingDeposit
        } else {
            TransferStatus::FundsArrived
        };

        Self::flow(flagged, terminal)
            .into_iter()
            .map(|status| {
                let state = if current.is_terminal() || status.ordinal() < current.ordinal() {
                    StepState::Completed
                } else if status.ordinal() == current.ordinal() {
                    StepState::Current
                } else {
                    StepState::Pending
                };
                TimelineStep {
                    status,
                    state,
                    reached_at: timestamps.get(status),
                }
            })
            .collect()
    }

    /// Convenience wrapper over [`Self::steps`] for a whole transfer.
    #[must_use]
    pub fn for_transfer(transfer: &Transfer) -> Vec<TimelineStep> {
        Self::steps(&transfer.timestamps, transfer.status)
    }
}
