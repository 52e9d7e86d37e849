//! The application state object.
//!
//! One `AppState` holds everything the screens render from. Mutation
//! goes through [`AppState::apply`]; everything else is a read-only
//! view over the snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use finch_core::card::PaymentCard;
use finch_core::geo::{AtmFilter, AtmLocation, Coordinates, GeoService, RankedAtm};
use finch_core::limits::{
    EntryDirection, LimitsService, SpendRecord, TransferLimits, UsageReport,
};
use finch_core::security::{PostureReport, SecurityService, VerificationLevel};
use finch_core::transfer::{StatusTimeline, TimelineStep, Transfer, TransferStatus};
use finch_shared::types::{AccountId, CardId, TransferId};
use finch_shared::{AppError, AppResult};

use crate::types::{Account, Cause, SettingsBundle, Subscription};

/// Everything the simulated banking app knows, in one owned object.
///
/// Reference tables (`atms`, `causes`, `subscriptions`) are seeded once;
/// the rest mutates through [`AppState::apply`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppState {
    /// Deposit accounts with balances.
    pub accounts: Vec<Account>,
    /// Physical and virtual cards.
    pub cards: Vec<PaymentCard>,
    /// Transfer log, newest last.
    pub transfers: Vec<Transfer>,
    /// Security/privacy/push settings bundle.
    pub settings: SettingsBundle,
    /// Externally supplied identity verification tier.
    pub verification: VerificationLevel,
    /// Configured transfer limits.
    pub limits: TransferLimits,
    /// Static ATM reference table.
    pub atms: Vec<AtmLocation>,
    /// Static donation cause table.
    pub causes: Vec<Cause>,
    /// Subscription manager entries.
    pub subscriptions: Vec<Subscription>,
}

impl AppState {
    /// Looks up an account by ID.
    pub fn account(&self, id: AccountId) -> AppResult<&Account> {
        self.accounts
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::NotFound(format!("account {id}")))
    }

    pub(crate) fn account_mut(&mut self, id: AccountId) -> AppResult<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::NotFound(format!("account {id}")))
    }

    /// Looks up a card by ID.
    pub fn card(&self, id: CardId) -> AppResult<&PaymentCard> {
        self.cards
            .iter()
            .find(|c| c.id() == id)
            .ok_or_else(|| AppError::NotFound(format!("card {id}")))
    }

    pub(crate) fn card_mut(&mut self, id: CardId) -> AppResult<&mut PaymentCard> {
        self.cards
            .iter_mut()
            .find(|c| c.id() == id)
            .ok_or_else(|| AppError::NotFound(format!("card {id}")))
    }

    /// Looks up a transfer by ID.
    pub fn transfer(&self, id: TransferId) -> AppResult<&Transfer> {
        self.transfers
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::NotFound(format!("transfer {id}")))
    }

    pub(crate) fn transfer_mut(&mut self, id: TransferId) -> AppResult<&mut Transfer> {
        self.transfers
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::NotFound(format!("transfer {id}")))
    }

    /// Rendered status timeline for one transfer.
    pub fn transfer_timeline(&self, id: TransferId) -> AppResult<Vec<TimelineStep>> {
        Ok(StatusTimeline::for_transfer(self.transfer(id)?))
    }

    /// Security posture for the security-center screen.
    #[must_use]
    pub fn security_posture(&self) -> PostureReport {
        SecurityService::assess(self.settings.security, self.verification)
    }

    /// Usage against every configured limit window.
    #[must_use]
    pub fn limit_usage(&self, now: DateTime<Utc>) -> Vec<UsageReport> {
        let records: Vec<SpendRecord> = self
            .transfers
            .iter()
            .filter_map(|t| {
                let submitted_at = t.timestamps.get(TransferStatus::Submitted)?;
                Some(SpendRecord {
                    amount: t.send.amount,
                    direction: EntryDirection::Debit,
                    submitted_at,
                })
            })
            .collect();
        LimitsService::usage_all(&records, &self.limits, now)
    }

    /// ATM locator search: conjunctive filter plus distance ranking.
    #[must_use]
    pub fn nearby_atms(&self, origin: Coordinates, filter: &AtmFilter) -> Vec<RankedAtm> {
        GeoService::search(origin, &self.atms, filter)
    }
}
