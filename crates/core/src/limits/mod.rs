//! Usage-against-limit calculation over the transfer log.

pub mod service;
pub mod types;


#[cfg(test)]
mod usage_props;

pub use service::LimitsService;
pub use types::{
    CountMeter, EntryDirection, LimitCeiling, LimitPeriod, SpendRecord, TransferLimits,
    UsageMeter, UsageReport, UsageSeverity,
};
