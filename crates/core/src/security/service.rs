//! Security posture aggregation.

use super::types::{
    ChecklistItem, PostureLabel, PostureReport, SecuritySettings, VerificationLevel,
};

/// Base score every customer starts from.
const BASE_SCORE: u8 = 25;
/// Bonus for enabling multi-factor authentication.
const MFA_BONUS: u8 = 25;
/// Bonus for enabling biometric unlock.
const BIOMETRICS_BONUS: u8 = 25;
/// Ceiling for the displayed score.
const MAX_SCORE: u8 = 100;

/// Stateless security posture aggregation.
pub struct SecurityService;

impl SecurityService {
    /// Computes the posture score from independent inputs.
    ///
    /// Base 25, +25 for MFA, +25 for biometrics, plus the verification
    /// tier bonus, clamped to 100. The result always lies in [25, 100].
    #[must_use]
    pub fn score(settings: SecuritySettings, verification: VerificationLevel) -> u8 {
        let mut score = BASE_SCORE;
        if settings.mfa_enabled {
            score += MFA_BONUS;
        }
        if settings.biometrics_enabled {
            score += BIOMETRICS_BONUS;
        }
        score += verification.score_bonus();
        score.min(MAX_SCORE)
    }

    /// Qualitative label for a score: >80 Excellent, >60 Good, else Fair.
    #[must_use]
    pub const fn label(score: u8) -> PostureLabel {
        if score > 80 {
            PostureLabel::Excellent
        } else if score > 60 {
            PostureLabel::Good
        } else {
            PostureLabel::Fair
        }
    }

    /// Full posture report: score, label, and checklist.
    #[must_use]
    pub fn assess(settings: SecuritySettings, verification: VerificationLevel) -> PostureReport {
        let score = Self::score(settings, verification);
        let checklist = vec![
            ChecklistItem {
                label: "Multi-factor authentication enabled".to_string(),
                satisfied: settings.mfa_enabled,
            },
            ChecklistItem {
                label: "Biometric unlock enabled".to_string(),
                satisfied: settings.biometrics_enabled,
            },
            ChecklistItem {
                label: "Identity verification started".to_string(),
                satisfied: verification >= VerificationLevel::Level1,
            },
            ChecklistItem {
                label: "Identity fully verified".to_string(),
                satisfied: verification == VerificationLevel::Level3,
            },
        ];
        PostureReport {
            score,
            label: Self::label(score),
            checklist,
        }
    }
}
