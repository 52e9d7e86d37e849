//! Limit and usage data types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lookback period a limit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitPeriod {
    /// Rolling 1-day window.
    Daily,
    /// Rolling 7-day window.
    Weekly,
    /// Rolling 30-day window.
    Monthly,
}

impl LimitPeriod {
    /// Number of lookback days for this period.
    #[must_use]
    pub const fn lookback_days(self) -> i64 {
        match self {
            Self::Daily => 1,
            Self::Weekly => 7,
            Self::Monthly => 30,
        }
    }
}

/// Ceilings for a single period: total amount and entry count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitCeiling {
    /// Maximum total amount in the window.
    pub amount: Decimal,
    /// Maximum number of transfers in the window.
    pub count: u32,
}

/// Configured transfer limits, one ceiling pair per period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferLimits {
    /// Daily ceilings.
    pub daily: LimitCeiling,
    /// Weekly ceilings.
    pub weekly: LimitCeiling,
    /// Monthly ceilings.
    pub monthly: LimitCeiling,
}

impl TransferLimits {
    /// The ceiling pair for a period.
    #[must_use]
    pub const fn ceiling(&self, period: LimitPeriod) -> LimitCeiling {
        match period {
            LimitPeriod::Daily => self.daily,
            LimitPeriod::Weekly => self.weekly,
            LimitPeriod::Monthly => self.monthly,
        }
    }
}

/// Direction of a ledger entry from the customer's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryDirection {
    /// Money leaving the account.
    Debit,
    /// Money entering the account.
    Credit,
}

/// Minimal view of a transaction the usage calculator needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendRecord {
    /// Amount moved.
    pub amount: Decimal,
    /// Debit or credit.
    pub direction: EntryDirection,
    /// When the transaction was submitted.
    pub submitted_at: DateTime<Utc>,
}

/// Severity tier for a usage meter, drives the progress-bar color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageSeverity {
    /// Over 90% of the ceiling.
    Critical,
    /// Over 75% of the ceiling.
    Elevated,
    /// Everything else.
    Normal,
}

/// Usage of the amount ceiling within a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageMeter {
    /// Amount spent in the window.
    pub used: Decimal,
    /// Configured ceiling.
    pub limit: Decimal,
    /// Percent of the ceiling consumed, 2dp, capped at 100.
    pub percent: Decimal,
    /// Severity tier for rendering.
    pub severity: UsageSeverity,
}

/// Usage of the count ceiling within a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountMeter {
    /// Number of debit entries in the window.
    pub used: u32,
    /// Configured ceiling.
    pub limit: u32,
    /// Percent of the ceiling consumed, 2dp, capped at 100.
    pub percent: Decimal,
    /// Severity tier for rendering.
    pub severity: UsageSeverity,
}

/// Usage report for one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageReport {
    /// The period the report covers.
    pub period: LimitPeriod,
    /// Amount-ceiling meter.
    pub amount: UsageMeter,
    /// Count-ceiling meter.
    pub count: CountMeter,
}
