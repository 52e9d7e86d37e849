//! Property-based tests for the posture score.

use proptest::prelude::*;

use super::service::SecurityService;
use super::types::{MfaMethod, SecuritySettings, VerificationLevel};

fn arb_method() -> impl Strategy<Value = MfaMethod> {
    prop_oneof![
        Just(MfaMethod::Sms),
        Just(MfaMethod::Authenticator),
        Just(MfaMethod::Email),
    ]
}

fn arb_settings() -> impl Strategy<Value = SecuritySettings> {
    (any::<bool>(), arb_method(), any::<bool>()).prop_map(|(mfa, method, bio)| SecuritySettings {
        mfa_enabled: mfa,
        mfa_method: method,
        biometrics_enabled: bio,
    })
}

fn arb_level() -> impl Strategy<Value = VerificationLevel> {
    prop_oneof![
        Just(VerificationLevel::Unverified),
        Just(VerificationLevel::Level1),
        Just(VerificationLevel::Level2),
        Just(VerificationLevel::Level3),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The score always lies in [25, 100].
    #[test]
    fn prop_score_bounds(settings in arb_settings(), level in arb_level()) {
        let score = SecurityService::score(settings, level);
        prop_assert!((25..=100).contains(&score));
    }

    /// Enabling MFA never lowers the score.
    #[test]
    fn prop_mfa_monotone(settings in arb_settings(), level in arb_level()) {
        let off = SecuritySettings { mfa_enabled: false, ..settings };
        let on = SecuritySettings { mfa_enabled: true, ..settings };
        prop_assert!(
            SecurityService::score(on, level) >= SecurityService::score(off, level)
        );
    }

    /// Enabling biometrics never lowers the score.
    #[test]
    fn prop_biometrics_monotone(settings in arb_settings(), level in arb_level()) {
        let off = SecuritySettings { biometrics_enabled: false, ..settings };
        let on = SecuritySettings { biometrics_enabled: true, ..settings };
        prop_assert!(
            SecurityService::score(on, level) >= SecurityService::score(off, level)
        );
    }

    /// Raising the verification tier never lowers the score.
    #[test]
    fn prop_verification_monotone(settings in arb_settings()) {
        let levels = [
            VerificationLevel::Unverified,
            VerificationLevel::Level1,
            VerificationLevel::Level2,
            VerificationLevel::Level3,
        ];
        let scores: Vec<_> = levels
            .iter()
            .map(|level| SecurityService::score(settings, *level))
            .collect();
        prop_assert!(scores.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    /// The MFA delivery method never changes the score.
    #[test]
    fn prop_method_is_score_neutral(
        settings in arb_settings(),
        method in arb_method(),
        level in arb_level(),
    ) {
        let swapped = SecuritySettings { mfa_method: method, ..settings };
        prop_assert_eq!(
            SecurityService::score(settings, level),
            SecurityService::score(swapped, level)
        );
    }
}
