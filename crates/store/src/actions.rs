//! Reducer-style actions over the application state.
//!
//! Every mutation the screens can trigger is an [`Action`] variant;
//! [`AppState::apply`] is the only mutation entry point. Ad hoc field
//! writes from views are not part of the contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use finch_core::card::{CardService, PaymentCard, PurchaseChannel};
use finch_core::security::SecuritySettings;
use finch_core::transfer::{Transfer, TransferStatus};
use finch_shared::types::{AccountId, CardId, CauseId, Money, SubscriptionId, TransferId};
use finch_shared::{AppError, AppResult};

use crate::state::AppState;
use crate::types::{PrivacySettings, PushSettings, SubscriptionStatus};

/// A state mutation triggered by a user action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Action {
    /// Submit a new transfer from an account.
    SubmitTransfer {
        /// Funding account.
        from_account: AccountId,
        /// Recipient display name.
        recipient: String,
        /// Amount debited from the sender.
        send: Money,
        /// Amount delivered to the recipient.
        receive: Money,
        /// Submission instant.
        at: DateTime<Utc>,
    },
    /// Move an existing transfer forward in its lifecycle.
    AdvanceTransfer {
        /// Transfer to advance.
        id: TransferId,
        /// Target status.
        to: TransferStatus,
        /// Instant the status was reached.
        at: DateTime<Utc>,
    },
    /// Freeze or unfreeze a card.
    SetCardFrozen {
        /// Card to update.
        id: CardId,
        /// New frozen state.
        frozen: bool,
    },
    /// Toggle a purchase channel on a card.
    SetCardPermission {
        /// Card to update.
        id: CardId,
        /// Channel to toggle.
        channel: PurchaseChannel,
        /// New toggle value.
        enabled: bool,
    },
    /// Issue a new virtual card.
    IssueVirtualCard {
        /// Customer-chosen nickname.
        nickname: String,
        /// Last four digits of the generated PAN.
        last_four: String,
        /// Issuance instant.
        at: DateTime<Utc>,
    },
    /// Change a card PIN (validation only; nothing is stored).
    ChangePin {
        /// Card whose PIN changes.
        card_id: CardId,
        /// New PIN.
        new_pin: String,
        /// Confirmation entry.
        confirm_pin: String,
    },
    /// Replace the security settings.
    UpdateSecurity(SecuritySettings),
    /// Replace the privacy settings.
    UpdatePrivacy(PrivacySettings),
    /// Replace the push notification settings.
    UpdatePush(PushSettings),
    /// Donate to a cause from an account.
    Donate {
        /// Funding account.
        from_account: AccountId,
        /// Cause receiving the donation.
        cause_id: CauseId,
        /// Donation amount.
        amount: Money,
    },
    /// Pause, resume, or cancel a subscription.
    SetSubscriptionStatus {
        /// Subscription to update.
        id: SubscriptionId,
        /// Target status.
        status: SubscriptionStatus,
    },
}

impl AppState {
    /// Applies one action, validating first and mutating only on success.
    ///
    /// # Errors
    ///
    /// `AppError::Validation` for rejected input, `AppError::NotFound`
    /// for unknown IDs, `AppError::BusinessRule` for state-machine
    /// violations.
    pub fn apply(&mut self, action: Action) -> AppResult<()> {
        match action {
            Action::SubmitTransfer {
                from_account,
                recipient,
                send,
                receive,
                at,
            } => self.submit_transfer(from_account, recipient, send, receive, at),
            Action::AdvanceTransfer { id, to, at } => {
                self.transfer_mut(id)?.advance(to, at)?;
                info!(transfer = %id, status = %to, "transfer advanced");
                Ok(())
            }
            Action::SetCardFrozen { id, frozen } => {
                self.card_mut(id)?.controls_mut().frozen = frozen;
                info!(card = %id, frozen, "card freeze updated");
                Ok(())
            }
            Action::SetCardPermission {
                id,
                channel,
                enabled,
            } => {
                self.card_mut(id)?
                    .controls_mut()
                    .set_toggle(channel, enabled);
                info!(card = %id, ?channel, enabled, "card permission updated");
                Ok(())
            }
            Action::IssueVirtualCard {
                nickname,
                last_four,
                at,
            } => {
                let card = CardService::issue_virtual(&nickname, &last_four, at)?;
                info!(card = %card.id, nickname = %card.nickname, "virtual card issued");
                self.cards.push(PaymentCard::Virtual(card));
                Ok(())
            }
            Action::ChangePin {
                card_id,
                new_pin,
                confirm_pin,
            } => {
                // Validate the card exists even though the PIN itself
                // is never stored.
                self.card(card_id)?;
                CardService::validate_pin_change(&new_pin, &confirm_pin)?;
                info!(card = %card_id, "PIN change accepted");
                Ok(())
            }
            Action::UpdateSecurity(security) => {
                self.settings.security = security;
                info!(
                    mfa = security.mfa_enabled,
                    biometrics = security.biometrics_enabled,
                    "security settings updated"
                );
                Ok(())
            }
            Action::UpdatePrivacy(privacy) => {
                self.settings.privacy = privacy;
                info!("privacy settings updated");
                Ok(())
            }
            Action::UpdatePush(push) => {
                self.settings.push = push;
                info!("push settings updated");
                Ok(())
            }
            Action::Donate {
                from_account,
                cause_id,
                amount,
            } => self.donate(from_account, cause_id, amount),
            Action::SetSubscriptionStatus { id, status } => {
                self.set_subscription_status(id, status)
            }
        }
    }

    fn submit_transfer(
        &mut self,
        from_account: AccountId,
        recipient: String,
        send: Money,
        receive: Money,
        at: DateTime<Utc>,
    ) -> AppResult<()> {
        if recipient.trim().is_empty() {
            return Err(AppError::Validation("recipient is required".to_string()));
        }
        if !send.is_positive() {
            return Err(AppError::Validation(
                "transfer amount must be positive".to_string(),
            ));
        }
        let account = self.account_mut(from_account)?;
        if account.balance.amount < send.amount {
            return Err(AppError::BusinessRule(
                "insufficient balance for transfer".to_string(),
            ));
        }
        account.balance.amount -= send.amount;

        let transfer = Transfer::submitted(
            TransferId::new(),
            from_account,
            recipient,
            send,
            receive,
            at,
        );
        info!(transfer = %transfer.id, %send, "transfer submitted");
        self.transfers.push(transfer);
        Ok(())
    }

    fn donate(
        &mut self,
        from_account: AccountId,
        cause_id: CauseId,
        amount: Money,
    ) -> AppResult<()> {
        if !amount.is_positive() {
            return Err(AppError::Validation(
                "donation amount must be positive".to_string(),
            ));
        }
        // Validate the cause before touching the balance.
        let cause_pos = self
            .causes
            .iter()
            .position(|c| c.id == cause_id)
            .ok_or_else(|| AppError::NotFound(format!("cause {cause_id}")))?;
        let account = self.account_mut(from_account)?;
        if account.balance.amount < amount.amount {
            return Err(AppError::BusinessRule(
                "insufficient balance for donation".to_string(),
            ));
        }
        account.balance.amount -= amount.amount;
        self.causes[cause_pos].raised += amount.amount;
        info!(cause = %cause_id, %amount, "donation recorded");
        Ok(())
    }

    fn set_subscription_status(
        &mut self,
        id: SubscriptionId,
        status: SubscriptionStatus,
    ) -> AppResult<()> {
        let subscription = self
            .subscriptions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::NotFound(format!("subscription {id}")))?;

        // Canceling is terminal.
        if subscription.status == SubscriptionStatus::Canceled
            && status != SubscriptionStatus::Canceled
        {
            return Err(AppError::BusinessRule(
                "a canceled subscription cannot be reactivated".to_string(),
            ));
        }
        subscription.status = status;
        info!(subscription = %id, ?status, "subscription status updated");
        Ok(())
    }
}
