//! Security posture data types.

use serde::{Deserialize, Serialize};

/// Second-factor delivery method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MfaMethod {
    /// One-time codes over SMS.
    Sms,
    /// Time-based codes from an authenticator app.
    Authenticator,
    /// One-time codes over email.
    Email,
}

/// Customer-controlled security settings.
///
/// These flags are independent; the posture score treats each as a
/// separate input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecuritySettings {
    /// Whether multi-factor authentication is required at sign-in.
    pub mfa_enabled: bool,
    /// Which second factor is used when MFA is enabled.
    pub mfa_method: MfaMethod,
    /// Whether biometric unlock is enabled.
    pub biometrics_enabled: bool,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            mfa_enabled: false,
            mfa_method: MfaMethod::Sms,
            biometrics_enabled: false,
        }
    }
}

/// Identity verification tier, ordered from none to fully verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationLevel {
    /// No identity verification completed.
    Unverified,
    /// Basic identity details confirmed.
    Level1,
    /// Government ID verified.
    Level2,
    /// Full KYC including proof of address.
    Level3,
}

impl VerificationLevel {
    /// Score bonus contributed by this tier.
    #[must_use]
    pub const fn score_bonus(self) -> u8 {
        match self {
            Self::Unverified => 0,
            Self::Level1 => 10,
            Self::Level2 => 15,
            Self::Level3 => 25,
        }
    }
}

/// Qualitative label for a posture score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostureLabel {
    /// Score above 80.
    Excellent,
    /// Score above 60.
    Good,
    /// Everything else.
    Fair,
}

/// One line of the security-center checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Display label for the item.
    pub label: String,
    /// Whether the item is satisfied.
    pub satisfied: bool,
}

/// Aggregated security posture for the progress-ring display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostureReport {
    /// Score in [25, 100].
    pub score: u8,
    /// Qualitative label derived from the score.
    pub label: PostureLabel,
    /// Checklist of individual posture inputs.
    pub checklist: Vec<ChecklistItem>,
}
