//! The simulated payment gateway.
//!
//! Screens submit money movement through [`PaymentGateway`] so a real
//! network client can replace the mock without changing call sites. The
//! mock stands in for the original product's timed spinner: it sleeps
//! for a configured latency and then applies a deterministic decline
//! rule.

use std::time::Duration;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use finch_shared::config::GatewayConfig;
use finch_shared::types::Money;
use finch_shared::{AppError, AppResult};

/// Outcome of a gateway call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatewayReceipt {
    /// Amount the gateway accepted.
    pub amount: Money,
}

/// Async seam between the screens and whatever moves the money.
pub trait PaymentGateway {
    /// Submits a transfer for processing.
    fn submit_transfer(
        &self,
        amount: Money,
    ) -> impl std::future::Future<Output = AppResult<GatewayReceipt>> + Send;

    /// Submits a donation for processing.
    fn donate(
        &self,
        amount: Money,
    ) -> impl std::future::Future<Output = AppResult<GatewayReceipt>> + Send;
}

/// Latency-simulating mock gateway.
///
/// Declines any amount whose cent component is exactly 13; every other
/// amount succeeds after the configured latency. The rule replaces the
/// original's random failure branch so tests are reproducible.
#[derive(Debug, Clone)]
pub struct MockGateway {
    latency: Duration,
}

impl MockGateway {
    /// Creates a mock gateway from configuration.
    #[must_use]
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            latency: Duration::from_millis(config.latency_ms),
        }
    }

    /// Creates a mock gateway with no latency, for tests.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            latency: Duration::ZERO,
        }
    }

    /// The deterministic decline rule.
    #[must_use]
    pub fn declines(amount: &Money) -> bool {
        let cents = (amount.amount * Decimal::ONE_HUNDRED) % Decimal::ONE_HUNDRED;
        cents == Decimal::from(13)
    }

    async fn process(&self, kind: &str, amount: Money) -> AppResult<GatewayReceipt> {
        debug!(%amount, kind, "gateway request");
        tokio::time::sleep(self.latency).await;
        if Self::declines(&amount) {
            warn!(%amount, kind, "gateway declined");
            return Err(AppError::GatewayDeclined(format!(
                "{kind} of {amount} was declined"
            )));
        }
        Ok(GatewayReceipt { amount })
    }
}

impl PaymentGateway for MockGateway {
    async fn submit_transfer(&self, amount: Money) -> AppResult<GatewayReceipt> {
        self.process("transfer", amount).await
    }

    async fn donate(&self, amount: Money) -> AppResult<GatewayReceipt> {
        self.process("donation", amount).await
    }
}
