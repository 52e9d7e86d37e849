//! Deterministic seed data for development and tests.
//!
//! Stands in for "the server": every screen renders from this state
//! until real providers exist. IDs are fixed so tests and the demo can
//! reference entities directly.

use std::collections::HashSet;

use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use finch_core::card::{CardControls, PaymentCard, PhysicalCard, VirtualCard};
use finch_core::geo::{AtmLocation, AtmNetwork, AtmService, Coordinates};
use finch_core::limits::{LimitCeiling, TransferLimits};
use finch_core::security::VerificationLevel;
use finch_core::transfer::{Transfer, TransferStatus};
use finch_shared::types::{
    AccountId, AtmId, CardId, CauseId, Currency, Money, SubscriptionId, TransferId,
};

use crate::state::AppState;
use crate::types::{Account, Cause, SettingsBundle, Subscription, SubscriptionStatus};

/// Well-known checking account.
#[must_use]
pub const fn checking_account_id() -> AccountId {
    AccountId::from_uuid(Uuid::from_u128(0x0000_0000_0000_0000_0000_0000_0000_0101))
}

/// Well-known savings account.
#[must_use]
pub const fn savings_account_id() -> AccountId {
    AccountId::from_uuid(Uuid::from_u128(0x0000_0000_0000_0000_0000_0000_0000_0102))
}

/// Well-known physical card.
#[must_use]
pub const fn physical_card_id() -> CardId {
    CardId::from_uuid(Uuid::from_u128(0x0000_0000_0000_0000_0000_0000_0000_0201))
}

/// Well-known virtual card.
#[must_use]
pub const fn virtual_card_id() -> CardId {
    CardId::from_uuid(Uuid::from_u128(0x0000_0000_0000_0000_0000_0000_0000_0202))
}

/// Well-known in-flight transfer.
#[must_use]
pub const fn in_transit_transfer_id() -> TransferId {
    TransferId::from_uuid(Uuid::from_u128(0x0000_0000_0000_0000_0000_0000_0000_0301))
}

/// Well-known flagged transfer.
#[must_use]
pub const fn flagged_transfer_id() -> TransferId {
    TransferId::from_uuid(Uuid::from_u128(0x0000_0000_0000_0000_0000_0000_0000_0302))
}

/// Well-known disaster-relief cause.
#[must_use]
pub const fn relief_cause_id() -> CauseId {
    CauseId::from_uuid(Uuid::from_u128(0x0000_0000_0000_0000_0000_0000_0000_0401))
}

/// Well-known paused subscription.
#[must_use]
pub const fn paused_subscription_id() -> SubscriptionId {
    SubscriptionId::from_uuid(Uuid::from_u128(0x0000_0000_0000_0000_0000_0000_0000_0501))
}

fn usd(cents: i64) -> Money {
    Money::new(Decimal::new(cents, 2), Currency::Usd)
}

/// Builds the fully seeded application state.
///
/// `now` anchors the relative timestamps (transfer history, billing
/// dates) so the derived views are stable in tests.
#[must_use]
pub fn app_state(now: DateTime<Utc>) -> AppState {
    AppState {
        accounts: accounts(),
        cards: cards(now),
        transfers: transfers(now),
        settings: SettingsBundle::default(),
        verification: VerificationLevel::Level1,
        limits: limits(),
        atms: atm_locations(),
        causes: causes(),
        subscriptions: subscriptions(now),
    }
}

/// Seeded state anchored at a fixed instant, for tests.
#[must_use]
pub fn app_state_fixed() -> AppState {
    app_state(Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap())
}

fn accounts() -> Vec<Account> {
    vec![
        Account {
            id: checking_account_id(),
            name: "Everyday Checking".to_string(),
            number_suffix: "4821".to_string(),
            balance: usd(534_250), // 5342.50
        },
        Account {
            id: savings_account_id(),
            name: "Rainy Day Savings".to_string(),
            number_suffix: "9034".to_string(),
            balance: usd(1_280_000), // 12800.00
        },
    ]
}

fn cards(now: DateTime<Utc>) -> Vec<PaymentCard> {
    vec![
        PaymentCard::Physical(PhysicalCard {
            id: physical_card_id(),
            holder: "Jordan Reyes".to_string(),
            masked_pan: "\u{2022}\u{2022}\u{2022}\u{2022} 4821".to_string(),
            expiry_month: 9,
            expiry_year: 2027,
            controls: CardControls::default(),
        }),
        PaymentCard::Virtual(VirtualCard {
            id: virtual_card_id(),
            nickname: "Streaming".to_string(),
            masked_pan: "\u{2022}\u{2022}\u{2022}\u{2022} 0193".to_string(),
            created_at: now - Duration::days(90),
            controls: CardControls::default(),
        }),
    ]
}

fn transfers(now: DateTime<Utc>) -> Vec<Transfer> {
    // Walks are over fixed forward sequences; they cannot fail.
    let mut in_transit = Transfer::submitted(
        in_transit_transfer_id(),
        checking_account_id(),
        "Maria Lopez".to_string(),
        usd(20_000),
        Money::new(Decimal::new(340_000, 2), Currency::Mxn),
        now - Duration::hours(6),
    );
    for (status, hours_ago) in [
        (TransferStatus::Processing, 5),
        (TransferStatus::Converting, 4),
        (TransferStatus::InTransit, 3),
    ] {
        in_transit
            .advance(status, now - Duration::hours(hours_ago))
            .unwrap();
    }

    let mut flagged = Transfer::submitted(
        flagged_transfer_id(),
        checking_account_id(),
        "Dela Cruz Family".to_string(),
        usd(95_000),
        Money::new(Decimal::new(5_300_000, 2), Currency::Php),
        now - Duration::days(2),
    );
    for (status, hours_ago) in [
        (TransferStatus::Processing, 47),
        (TransferStatus::Converting, 46),
        (TransferStatus::FlaggedAwaitingClearance, 45),
    ] {
        flagged
            .advance(status, now - Duration::hours(hours_ago))
            .unwrap();
    }

    let mut arrived = Transfer::submitted(
        TransferId::new(),
        checking_account_id(),
        "Sam Okafor".to_string(),
        usd(7_500),
        Money::new(Decimal::new(6_900, 2), Currency::Eur),
        now - Duration::days(12),
    );
    for (status, days_ago) in [
        (TransferStatus::Processing, 12),
        (TransferStatus::Converting, 12),
        (TransferStatus::InTransit, 11),
        (TransferStatus::FundsArrived, 10),
    ] {
        arrived
            .advance(status, now - Duration::days(days_ago) + Duration::hours(2))
            .unwrap();
    }

    vec![in_transit, flagged, arrived]
}

fn limits() -> TransferLimits {
    TransferLimits {
        daily: LimitCeiling {
            amount: Decimal::new(250_000, 2), // 2500.00
            count: 5,
        },
        weekly: LimitCeiling {
            amount: Decimal::new(1_000_000, 2), // 10000.00
            count: 20,
        },
        monthly: LimitCeiling {
            amount: Decimal::new(2_500_000, 2), // 25000.00
            count: 60,
        },
    }
}

fn atm_locations() -> Vec<AtmLocation> {
    let full_service = HashSet::from([
        AtmService::CashWithdrawal,
        AtmService::CashDeposit,
        AtmService::CheckDeposit,
        AtmService::BalanceInquiry,
        AtmService::Transfers,
    ]);
    let withdrawal_only =
        HashSet::from([AtmService::CashWithdrawal, AtmService::BalanceInquiry]);

    vec![
        AtmLocation {
            id: AtmId::from_uuid(Uuid::from_u128(0x0601)),
            name: "Midtown Pharmacy".to_string(),
            address: "875 6th Ave".to_string(),
            city: "New York".to_string(),
            zip: "10001".to_string(),
            position: Coordinates::new(40.7484, -73.9890),
            network: AtmNetwork::Allpoint,
            services: withdrawal_only.clone(),
        },
        AtmLocation {
            id: AtmId::from_uuid(Uuid::from_u128(0x0602)),
            name: "Union Square Branch".to_string(),
            address: "4 Union Sq E".to_string(),
            city: "New York".to_string(),
            zip: "10003".to_string(),
            position: Coordinates::new(40.7359, -73.9901),
            network: AtmNetwork::MoneyPass,
            services: full_service.clone(),
        },
        AtmLocation {
            id: AtmId::from_uuid(Uuid::from_u128(0x0603)),
            name: "Grand Central Kiosk".to_string(),
            address: "89 E 42nd St".to_string(),
            city: "New York".to_string(),
            zip: "10017".to_string(),
            position: Coordinates::new(40.7527, -73.9772),
            network: AtmNetwork::Allpoint,
            services: withdrawal_only,
        },
        AtmLocation {
            id: AtmId::from_uuid(Uuid::from_u128(0x0604)),
            name: "Williamsburg Market".to_string(),
            address: "184 Bedford Ave".to_string(),
            city: "Brooklyn".to_string(),
            zip: "11249".to_string(),
            position: Coordinates::new(40.7174, -73.9566),
            network: AtmNetwork::VisaPlus,
            services: full_service,
        },
        AtmLocation {
            id: AtmId::from_uuid(Uuid::from_u128(0x0605)),
            name: "Astoria Deli".to_string(),
            address: "30-02 Steinway St".to_string(),
            city: "Queens".to_string(),
            zip: "11103".to_string(),
            position: Coordinates::new(40.7644, -73.9198),
            network: AtmNetwork::Cirrus,
            services: HashSet::from([AtmService::CashWithdrawal]),
        },
    ]
}

fn causes() -> Vec<Cause> {
    vec![
        Cause {
            id: relief_cause_id(),
            name: "Typhoon Relief Fund".to_string(),
            category: "Disaster relief".to_string(),
            description: "Emergency shelter and supplies for affected families".to_string(),
            raised: Decimal::new(4_823_500, 2),
            goal: Decimal::new(10_000_000, 2),
        },
        Cause {
            id: CauseId::from_uuid(Uuid::from_u128(0x0402)),
            name: "Community Food Bank".to_string(),
            category: "Hunger".to_string(),
            description: "Weekly groceries for neighbors in need".to_string(),
            raised: Decimal::new(1_210_000, 2),
            goal: Decimal::new(2_500_000, 2),
        },
        Cause {
            id: CauseId::from_uuid(Uuid::from_u128(0x0403)),
            name: "First-Gen Scholars".to_string(),
            category: "Education".to_string(),
            description: "Scholarships for first-generation college students".to_string(),
            raised: Decimal::new(768_000, 2),
            goal: Decimal::new(5_000_000, 2),
        },
    ]
}

fn subscriptions(now: DateTime<Utc>) -> Vec<Subscription> {
    vec![
        Subscription {
            id: SubscriptionId::from_uuid(Uuid::from_u128(0x0502)),
            merchant: "Streamflix".to_string(),
            monthly_amount: usd(1_599),
            next_billing: now + Duration::days(11),
            status: SubscriptionStatus::Active,
        },
        Subscription {
            id: paused_subscription_id(),
            merchant: "GymPass".to_string(),
            monthly_amount: usd(4_500),
            next_billing: now + Duration::days(20),
            status: SubscriptionStatus::Paused,
        },
        Subscription {
            id: SubscriptionId::from_uuid(Uuid::from_u128(0x0503)),
            merchant: "CloudNotes Pro".to_string(),
            monthly_amount: usd(899),
            next_billing: now + Duration::days(3),
            status: SubscriptionStatus::Active,
        },
    ]
}
