//! Unit tests for the transfer state machine and timeline.

use chrono::{Duration, TimeZone, Utc};
use rust_decimal_macros::dec;

use finch_shared::types::{AccountId, Currency, Money, TransferId};

use super::error::TransferError;
use super::timeline::StatusTimeline;
use super::types::{StepState, Transfer, TransferStatus};

fn test_transfer() -> Transfer {
    Transfer::submitted(
        TransferId::new(),
        AccountId::new(),
        "Maria Lopez".to_string(),
        Money::new(dec!(200.00), Currency::Usd),
        Money::new(dec!(3400.00), Currency::Mxn),
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
    )
}

#[test]
fn test_new_transfer_starts_submitted() {
    let transfer = test_transfer();
    assert_eq!(transfer.status, TransferStatus::Submitted);
    assert!(transfer.timestamps.reached(TransferStatus::Submitted));
    assert!(!transfer.timestamps.reached(TransferStatus::Processing));
}

#[test]
fn test_advance_moves_forward() {
    let mut transfer = test_transfer();
    let t1 = Utc.with_ymd_and_hms(2024, 3, 1, 9, 5, 0).unwrap();
    transfer.advance(TransferStatus::Processing, t1).unwrap();
    assert_eq!(transfer.status, TransferStatus::Processing);
    assert_eq!(transfer.timestamps.get(TransferStatus::Processing), Some(t1));
}

#[test]
fn test_advance_backward_fails() {
    let mut transfer = test_transfer();
    let now = Utc::now();
    transfer.advance(TransferStatus::Converting, now).unwrap();
    let result = transfer.advance(TransferStatus::Processing, now);
    assert!(matches!(
        result,
        Err(TransferError::InvalidTransition {
            from: TransferStatus::Converting,
            to: TransferStatus::Processing,
        })
    ));
}

#[test]
fn test_advance_to_same_status_fails() {
    let mut transfer = test_transfer();
    let result = transfer.advance(TransferStatus::Submitted, Utc::now());
    assert!(matches!(
        result,
        Err(TransferError::InvalidTransition { .. })
    ));
}

#[test]
fn test_cleared_requires_flag() {
    let mut transfer = test_transfer();
    let now = Utc::now();
    transfer.advance(TransferStatus::Converting, now).unwrap();
    let result = transfer.advance(TransferStatus::Cleared, now);
    assert!(matches!(
        result,
        Err(TransferError::InvalidTransition { .. })
    ));
}

#[test]
fn test_flagged_must_clear_before_transit() {
    let mut transfer = test_transfer();
    let now = Utc::now();
    transfer
        .advance(TransferStatus::FlaggedAwaitingClearance, now)
        .unwrap();
    let result = transfer.advance(TransferStatus::InTransit, now);
    assert!(matches!(
        result,
        Err(TransferError::InvalidTransition { .. })
    ));

    transfer.advance(TransferStatus::Cleared, now).unwrap();
    transfer.advance(TransferStatus::InTransit, now).unwrap();
    assert_eq!(transfer.status, TransferStatus::InTransit);
}

#[test]
fn test_terminal_statuses_are_alternatives() {
    let mut transfer = test_transfer();
    let now = Utc::now();
    transfer.advance(TransferStatus::InTransit, now).unwrap();
    transfer.advance(TransferStatus::FundsArrived, now).unwrap();
    // The other terminal shares an ordinal; no further movement.
    let result = transfer.advance(TransferStatus::PendingDeposit, now);
    assert!(matches!(
        result,
        Err(TransferError::InvalidTransition { .. })
    ));
}

#[test]
fn test_timestamp_regression_rejected() {
    let mut transfer = test_transfer();
    let earlier = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
    let result = transfer.advance(TransferStatus::Processing, earlier);
    assert!(matches!(
        result,
        Err(TransferError::TimestampRegression { .. })
    ));
    // The failed advance must not move the status.
    assert_eq!(transfer.status, TransferStatus::Submitted);
}

#[test]
fn test_unflagged_in_transit_renders_five_steps() {
    let mut transfer = test_transfer();
    let mut at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    for status in [
        TransferStatus::Processing,
        TransferStatus::Converting,
        TransferStatus::InTransit,
    ] {
        at += Duration::minutes(5);
        transfer.advance(status, at).unwrap();
    }

    let steps = StatusTimeline::for_transfer(&transfer);
    let statuses: Vec<_> = steps.iter().map(|s| s.status).collect();
    assert_eq!(
        statuses,
        vec![
            TransferStatus::Submitted,
            TransferStatus::Processing,
            TransferStatus::Converting,
            TransferStatus::InTransit,
            TransferStatus::FundsArrived,
        ]
    );

    let states: Vec<_> = steps.iter().map(|s| s.state).collect();
    assert_eq!(
        states,
        vec![
            StepState::Completed,
            StepState::Completed,
            StepState::Completed,
            StepState::Current,
            StepState::Pending,
        ]
    );
}

#[test]
fn test_flagged_transfer_renders_detour() {
    let mut transfer = test_transfer();
    let mut at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    for status in [
        TransferStatus::Processing,
        TransferStatus::Converting,
        TransferStatus::FlaggedAwaitingClearance,
    ] {
        at += Duration::minutes(5);
        transfer.advance(status, at).unwrap();
    }

    let steps = StatusTimeline::for_transfer(&transfer);
    let statuses: Vec<_> = steps.iter().map(|s| s.status).collect();
    assert_eq!(
        statuses,
        vec![
            TransferStatus::Submitted,
            TransferStatus::Processing,
            TransferStatus::Converting,
            TransferStatus::FlaggedAwaitingClearance,
            TransferStatus::Cleared,
            TransferStatus::InTransit,
            TransferStatus::FundsArrived,
        ]
    );
    assert_eq!(steps[3].state, StepState::Current);
    assert_eq!(steps[4].state, StepState::Pending);
}

#[test]
fn test_terminal_transfer_renders_all_completed() {
    let mut transfer = test_transfer();
    let mut at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    for status in [
        TransferStatus::Processing,
        TransferStatus::Converting,
        TransferStatus::InTransit,
        TransferStatus::FundsArrived,
    ] {
        at += Duration::minutes(5);
        transfer.advance(status, at).unwrap();
    }

    let steps = StatusTimeline::for_transfer(&transfer);
    assert!(steps.iter().all(|s| s.state == StepState::Completed));
}

#[test]
fn test_pending_deposit_terminal_rendered() {
    let mut transfer = test_transfer();
    let now = Utc::now();
    transfer.advance(TransferStatus::InTransit, now).unwrap();
    transfer
        .advance(TransferStatus::PendingDeposit, now)
        .unwrap();

    let steps = StatusTimeline::for_transfer(&transfer);
    assert_eq!(
        steps.last().map(|s| s.status),
        Some(TransferStatus::PendingDeposit)
    );
}

#[test]
fn test_steps_carry_reached_instants() {
    let mut transfer = test_transfer();
    let t1 = Utc.with_ymd_and_hms(2024, 3, 1, 9, 10, 0).unwrap();
    transfer.advance(TransferStatus::Processing, t1).unwrap();

    let steps = StatusTimeline::for_transfer(&transfer);
    assert!(steps[0].reached_at.is_some());
    assert_eq!(steps[1].reached_at, Some(t1));
    assert_eq!(steps[2].reached_at, None);
}
