//! Property-based tests for usage calculation.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::LimitsService;
use super::types::{
    EntryDirection, LimitCeiling, LimitPeriod, SpendRecord, TransferLimits, UsageSeverity,
};

fn arb_direction() -> impl Strategy<Value = EntryDirection> {
    prop_oneof![Just(EntryDirection::Debit), Just(EntryDirection::Credit)]
}

fn arb_record() -> impl Strategy<Value = SpendRecord> {
    (1u64..100_000, arb_direction(), 0i64..60).prop_map(|(cents, direction, days_ago)| {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        SpendRecord {
            amount: Decimal::new(i64::try_from(cents).unwrap_or(0), 2),
            direction,
            submitted_at: now - Duration::days(days_ago),
        }
    })
}

fn arb_limits() -> impl Strategy<Value = TransferLimits> {
    (1u32..1_000_000, 1u32..100).prop_map(|(amount, count)| {
        let ceiling = LimitCeiling {
            amount: Decimal::from(amount),
            count,
        };
        TransferLimits {
            daily: ceiling,
            weekly: ceiling,
            monthly: ceiling,
        }
    })
}

fn arb_period() -> impl Strategy<Value = LimitPeriod> {
    prop_oneof![
        Just(LimitPeriod::Daily),
        Just(LimitPeriod::Weekly),
        Just(LimitPeriod::Monthly),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(150))]

    /// Percentages never exceed 100, whatever the spend.
    #[test]
    fn prop_percent_clamped(
        records in prop::collection::vec(arb_record(), 0..40),
        limits in arb_limits(),
        period in arb_period(),
    ) {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let report = LimitsService::usage(&records, period, &limits, now);
        prop_assert!(report.amount.percent <= Decimal::ONE_HUNDRED);
        prop_assert!(report.count.percent <= Decimal::ONE_HUNDRED);
        prop_assert!(report.amount.percent >= Decimal::ZERO);
        prop_assert!(report.count.percent >= Decimal::ZERO);
    }

    /// Used amount only counts debit entries inside the window.
    #[test]
    fn prop_used_matches_manual_sum(
        records in prop::collection::vec(arb_record(), 0..40),
        limits in arb_limits(),
        period in arb_period(),
    ) {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let window_start = now - Duration::days(period.lookback_days());

        let expected: Decimal = records
            .iter()
            .filter(|r| r.direction == EntryDirection::Debit)
            .filter(|r| r.submitted_at >= window_start && r.submitted_at <= now)
            .map(|r| r.amount)
            .sum();

        let report = LimitsService::usage(&records, period, &limits, now);
        prop_assert_eq!(report.amount.used, expected);
    }

    /// A wider window never reports less usage.
    #[test]
    fn prop_window_monotone(
        records in prop::collection::vec(arb_record(), 0..40),
        limits in arb_limits(),
    ) {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let daily = LimitsService::usage(&records, LimitPeriod::Daily, &limits, now);
        let weekly = LimitsService::usage(&records, LimitPeriod::Weekly, &limits, now);
        let monthly = LimitsService::usage(&records, LimitPeriod::Monthly, &limits, now);
        prop_assert!(daily.amount.used <= weekly.amount.used);
        prop_assert!(weekly.amount.used <= monthly.amount.used);
        prop_assert!(daily.count.used <= weekly.count.used);
        prop_assert!(weekly.count.used <= monthly.count.used);
    }

    /// Severity agrees with the percent thresholds.
    #[test]
    fn prop_severity_matches_percent(
        records in prop::collection::vec(arb_record(), 0..40),
        limits in arb_limits(),
        period in arb_period(),
    ) {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let report = LimitsService::usage(&records, period, &limits, now);
        let expected = if report.amount.percent > Decimal::from(90) {
            UsageSeverity::Critical
        } else if report.amount.percent > Decimal::from(75) {
            UsageSeverity::Elevated
        } else {
            UsageSeverity::Normal
        };
        prop_assert_eq!(report.amount.severity, expected);
    }
}
