//! Usage-against-limit calculation.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use super::types::{
    CountMeter, EntryDirection, LimitPeriod, SpendRecord, TransferLimits, UsageMeter, UsageReport,
    UsageSeverity,
};

/// Stateless usage calculation over the full transaction log.
///
/// Recomputed synchronously on every call; there is no incremental or
/// streaming aggregation.
pub struct LimitsService;

impl LimitsService {
    /// Computes usage against the configured ceilings for one period.
    ///
    /// Filters the log to debit entries submitted within
    /// `[now - lookback, now]`, sums amounts and counts entries, and
    /// derives a clamped percentage and severity tier per ceiling.
    #[must_use]
    pub fn usage(
        records: &[SpendRecord],
        period: LimitPeriod,
        limits: &TransferLimits,
        now: DateTime<Utc>,
    ) -> UsageReport {
        let window_start = now - Duration::days(period.lookback_days());
        let ceiling = limits.ceiling(period);

        let mut used_amount = Decimal::ZERO;
        let mut used_count: u32 = 0;
        for record in records {
            if record.direction == EntryDirection::Debit
                && record.submitted_at >= window_start
                && record.submitted_at <= now
            {
                used_amount += record.amount;
                used_count += 1;
            }
        }

        let amount_percent = Self::percent_of(used_amount, ceiling.amount);
        let count_percent = Self::percent_of(Decimal::from(used_count), Decimal::from(ceiling.count));

        UsageReport {
            period,
            amount: UsageMeter {
                used: used_amount,
                limit: ceiling.amount,
                percent: amount_percent,
                severity: Self::severity(amount_percent),
            },
            count: CountMeter {
                used: used_count,
                limit: ceiling.count,
                percent: count_percent,
                severity: Self::severity(count_percent),
            },
        }
    }

    /// Usage reports for all three periods.
    #[must_use]
    pub fn usage_all(
        records: &[SpendRecord],
        limits: &TransferLimits,
        now: DateTime<Utc>,
    ) -> Vec<UsageReport> {
        [LimitPeriod::Daily, LimitPeriod::Weekly, LimitPeriod::Monthly]
            .into_iter()
            .map(|period| Self::usage(records, period, limits, now))
            .collect()
    }

    /// Percent of `limit` consumed by `used`, rounded to 2dp and capped
    /// at 100. A zero ceiling counts as fully consumed.
    #[must_use]
    pub fn percent_of(used: Decimal, limit: Decimal) -> Decimal {
        if limit <= Decimal::ZERO {
            return Decimal::ONE_HUNDRED;
        }
        (used / limit * Decimal::ONE_HUNDRED)
            .round_dp(2)
            .min(Decimal::ONE_HUNDRED)
    }

    /// Severity tier: >90% Critical, >75% Elevated, else Normal.
    #[must_use]
    pub fn severity(percent: Decimal) -> UsageSeverity {
        if percent > Decimal::from(90) {
            UsageSeverity::Critical
        } else if percent > Decimal::from(75) {
            UsageSeverity::Elevated
        } else {
            UsageSeverity::Normal
        }
    }
}
