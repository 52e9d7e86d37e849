//! Finch demo walkthrough.
//!
//! Seeds the in-memory application state and drives it through the
//! screens' main flows: a transfer with its status timeline, the
//! security center, limit meters, the ATM locator, a donation, and the
//! subscription manager.
//!
//! Usage: cargo run --bin demo

use anyhow::Result;
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use finch_core::geo::AtmFilter;
use finch_core::security::{MfaMethod, SecuritySettings};
use finch_core::transfer::TransferStatus;
use finch_shared::types::{Currency, Money};
use finch_shared::AppConfig;
use finch_store::gateway::{MockGateway, PaymentGateway};
use finch_store::location::{LocationProvider, MockLocationProvider};
use finch_store::{seed, Action};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finch=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    let gateway = MockGateway::new(&config.gateway);
    let locator = MockLocationProvider::new(&config.location);

    let now = Utc::now();
    let mut state = seed::app_state(now);
    info!(
        accounts = state.accounts.len(),
        atms = state.atms.len(),
        "state seeded"
    );

    // --- Send a transfer through the gateway ---------------------------
    let send = Money::new(Decimal::new(12_500, 2), Currency::Usd);
    let receipt = gateway.submit_transfer(send).await?;
    state.apply(Action::SubmitTransfer {
        from_account: seed::checking_account_id(),
        recipient: "Ana Silva".to_string(),
        send: receipt.amount,
        receive: Money::new(Decimal::new(11_400, 2), Currency::Eur),
        at: now,
    })?;
    println!("Transfer of {send} submitted");

    // --- Render a status timeline --------------------------------------
    let steps = state.transfer_timeline(seed::in_transit_transfer_id())?;
    println!("\nTransfer to Maria Lopez:");
    for step in steps {
        println!("  [{:?}] {}", step.state, step.status);
    }

    // --- Security center ------------------------------------------------
    state.apply(Action::UpdateSecurity(SecuritySettings {
        mfa_enabled: true,
        mfa_method: MfaMethod::Authenticator,
        biometrics_enabled: false,
    }))?;
    let posture = state.security_posture();
    println!("\nSecurity score: {} ({:?})", posture.score, posture.label);
    for item in &posture.checklist {
        let mark = if item.satisfied { "x" } else { " " };
        println!("  [{mark}] {}", item.label);
    }

    // --- Limit meters ---------------------------------------------------
    println!("\nTransfer limits:");
    for report in state.limit_usage(now) {
        println!(
            "  {:?}: {} of {} ({}%, {:?})",
            report.period,
            report.amount.used,
            report.amount.limit,
            report.amount.percent,
            report.amount.severity,
        );
    }

    // --- ATM locator ----------------------------------------------------
    let origin = locator.current_location().await?;
    println!("\nNearest ATMs:");
    for ranked in state.nearby_atms(origin, &AtmFilter::default()).iter().take(3) {
        println!(
            "  {:.1} mi  {} ({})",
            ranked.distance_miles, ranked.atm.name, ranked.atm.city
        );
    }

    // --- Donation -------------------------------------------------------
    let donation = Money::new(Decimal::new(2_500, 2), Currency::Usd);
    gateway.donate(donation).await?;
    state.apply(Action::Donate {
        from_account: seed::checking_account_id(),
        cause_id: seed::relief_cause_id(),
        amount: donation,
    })?;
    println!("\nDonated {donation} to {}", state.causes[0].name);

    // --- Subscriptions --------------------------------------------------
    println!("\nSubscriptions:");
    for sub in &state.subscriptions {
        println!(
            "  {} {} / month ({:?})",
            sub.merchant, sub.monthly_amount, sub.status
        );
    }

    // Advance the seeded transfer to arrival for a clean finish.
    state.apply(Action::AdvanceTransfer {
        id: seed::in_transit_transfer_id(),
        to: TransferStatus::FundsArrived,
        at: Utc::now(),
    })?;
    info!("walkthrough complete");

    Ok(())
}
