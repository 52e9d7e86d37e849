//! Property-based tests for the transfer timeline.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal_macros::dec;

use finch_shared::types::{AccountId, Currency, Money, TransferId};

use super::timeline::StatusTimeline;
use super::types::{StepState, Transfer, TransferStatus};

/// Strategy for generating any status.
fn arb_status() -> impl Strategy<Value = TransferStatus> {
    prop_oneof![
        Just(TransferStatus::Submitted),
        Just(TransferStatus::Processing),
        Just(TransferStatus::Converting),
        Just(TransferStatus::FlaggedAwaitingClearance),
        Just(TransferStatus::Cleared),
        Just(TransferStatus::InTransit),
        Just(TransferStatus::FundsArrived),
        Just(TransferStatus::PendingDeposit),
    ]
}

/// Builds a transfer and walks it forward through a prefix of the given
/// flow, advancing by `advance_count` steps with increasing timestamps.
fn walked_transfer(flow: &[TransferStatus], advance_count: usize) -> Transfer {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut transfer = Transfer::submitted(
        TransferId::new(),
        AccountId::new(),
        "Recipient".to_string(),
        Money::new(dec!(50.00), Currency::Usd),
        Money::new(dec!(45.00), Currency::Eur),
        start,
    );
    for (i, status) in flow.iter().skip(1).take(advance_count).enumerate() {
        let at = start + Duration::minutes((i as i64 + 1) * 3);
        transfer.advance(*status, at).expect("forward walk is valid");
    }
    transfer
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The rendered step list never contains the flagged/cleared pair
    /// unless the flagged timestamp is present.
    #[test]
    fn prop_clearance_pair_only_when_flagged(
        flagged in any::<bool>(),
        advance_count in 0usize..7,
    ) {
        let flow = StatusTimeline::flow(flagged, TransferStatus::FundsArrived);
        let advance_count = advance_count.min(flow.len() - 1);
        let transfer = walked_transfer(&flow, advance_count);

        let steps = StatusTimeline::for_transfer(&transfer);
        let has_pair = steps.iter().any(|s| s.status.is_clearance_step());
        let was_flagged = transfer
            .timestamps
            .reached(TransferStatus::FlaggedAwaitingClearance);
        prop_assert_eq!(has_pair, was_flagged);
    }

    /// Exactly one step is `Current` unless the transfer is terminal,
    /// and completed steps always precede it.
    #[test]
    fn prop_step_states_are_ordered(
        flagged in any::<bool>(),
        advance_count in 0usize..7,
    ) {
        let flow = StatusTimeline::flow(flagged, TransferStatus::FundsArrived);
        let advance_count = advance_count.min(flow.len() - 1);
        let transfer = walked_transfer(&flow, advance_count);

        let steps = StatusTimeline::for_transfer(&transfer);
        if transfer.status.is_terminal() {
            prop_assert!(steps.iter().all(|s| s.state == StepState::Completed));
        } else {
            let current_count = steps
                .iter()
                .filter(|s| s.state == StepState::Current)
                .count();
            prop_assert_eq!(current_count, 1);

            // Completed / Current / Pending appear in that order.
            let mut seen_current = false;
            let mut seen_pending = false;
            for step in &steps {
                match step.state {
                    StepState::Completed => {
                        prop_assert!(!seen_current && !seen_pending);
                    }
                    StepState::Current => {
                        prop_assert!(!seen_pending);
                        seen_current = true;
                    }
                    StepState::Pending => seen_pending = true,
                }
            }
        }
    }

    /// Every accepted advance preserves timestamp monotonicity in
    /// status order.
    #[test]
    fn prop_timestamps_monotone_after_walk(
        flagged in any::<bool>(),
        advance_count in 0usize..7,
    ) {
        let flow = StatusTimeline::flow(flagged, TransferStatus::FundsArrived);
        let advance_count = advance_count.min(flow.len() - 1);
        let transfer = walked_transfer(&flow, advance_count);

        let mut last = None;
        for status in &flow {
            if let Some(at) = transfer.timestamps.get(*status) {
                if let Some(prev) = last {
                    prop_assert!(at >= prev);
                }
                last = Some(at);
            }
        }
    }

    /// Advancing to a status that does not strictly follow the current
    /// one always fails and leaves the transfer untouched.
    #[test]
    fn prop_forward_only(target in arb_status()) {
        let flow = StatusTimeline::flow(true, TransferStatus::FundsArrived);
        // Walk to InTransit on the flagged flow.
        let mut transfer = walked_transfer(&flow, 5);
        prop_assume!(target.ordinal() <= transfer.status.ordinal());

        let before = transfer.clone();
        let result = transfer.advance(target, Utc::now());
        prop_assert!(result.is_err());
        prop_assert_eq!(transfer.status, before.status);
        prop_assert_eq!(transfer.timestamps, before.timestamps);
    }
}
