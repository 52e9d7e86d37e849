//! Application-level data types owned by the store.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use finch_core::security::SecuritySettings;
use finch_shared::types::{AccountId, CauseId, Money, SubscriptionId};

/// A deposit account with its current balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account ID.
    pub id: AccountId,
    /// Display name (e.g., "Everyday Checking").
    pub name: String,
    /// Last four digits of the account number.
    pub number_suffix: String,
    /// Current balance.
    pub balance: Money,
}

/// A donation cause from the static reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cause {
    /// Cause ID.
    pub id: CauseId,
    /// Cause name.
    pub name: String,
    /// Category (e.g., "Disaster relief").
    pub category: String,
    /// Short description for the donation screen.
    pub description: String,
    /// Amount raised so far.
    pub raised: Decimal,
    /// Fundraising goal.
    pub goal: Decimal,
}

/// Status of a recurring subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// Billing normally.
    Active,
    /// Temporarily paused; can be resumed.
    Paused,
    /// Canceled; terminal.
    Canceled,
}

/// A recurring merchant subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// Subscription ID.
    pub id: SubscriptionId,
    /// Merchant name.
    pub merchant: String,
    /// Monthly charge.
    pub monthly_amount: Money,
    /// Next billing date.
    pub next_billing: DateTime<Utc>,
    /// Current status.
    pub status: SubscriptionStatus,
}

/// Privacy preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacySettings {
    /// Share anonymized usage data.
    pub data_sharing: bool,
    /// Personalize offers and ads.
    pub ad_personalization: bool,
}

/// Push notification preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushSettings {
    /// Notify on every transaction.
    pub transactions: bool,
    /// Marketing and product updates.
    pub marketing: bool,
    /// Security alerts (new device, password change).
    pub security_alerts: bool,
}

impl Default for PushSettings {
    fn default() -> Self {
        Self {
            transactions: true,
            marketing: false,
            security_alerts: true,
        }
    }
}

/// The settings bundle the settings screens render from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsBundle {
    /// Security settings (MFA, biometrics).
    pub security: SecuritySettings,
    /// Privacy settings.
    pub privacy: PrivacySettings,
    /// Push notification settings.
    pub push: PushSettings,
}
