//! Payment card data types.
//!
//! Physical and virtual cards are an explicit tagged union; code must
//! match on the variant rather than probe for field presence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use finch_shared::types::CardId;

/// Spending channel a card control can toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseChannel {
    /// Online and in-app purchases.
    Online,
    /// Purchases made outside the home country.
    International,
    /// Tap-to-pay purchases.
    Contactless,
    /// ATM withdrawals.
    AtmWithdrawal,
}

/// Per-card control set, mutated only by explicit toggle actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardControls {
    /// Master freeze: blocks every channel while set.
    pub frozen: bool,
    /// Online purchases allowed.
    pub online: bool,
    /// International purchases allowed.
    pub international: bool,
    /// Contactless purchases allowed.
    pub contactless: bool,
    /// ATM withdrawals allowed.
    pub atm_withdrawal: bool,
}

impl Default for CardControls {
    fn default() -> Self {
        Self {
            frozen: false,
            online: true,
            international: false,
            contactless: true,
            atm_withdrawal: true,
        }
    }
}

impl CardControls {
    /// The stored toggle value for a channel, ignoring the freeze.
    #[must_use]
    pub const fn toggle(&self, channel: PurchaseChannel) -> bool {
        match channel {
            PurchaseChannel::Online => self.online,
            PurchaseChannel::International => self.international,
            PurchaseChannel::Contactless => self.contactless,
            PurchaseChannel::AtmWithdrawal => self.atm_withdrawal,
        }
    }

    /// Sets the stored toggle value for a channel.
    pub fn set_toggle(&mut self, channel: PurchaseChannel, enabled: bool) {
        match channel {
            PurchaseChannel::Online => self.online = enabled,
            PurchaseChannel::International => self.international = enabled,
            PurchaseChannel::Contactless => self.contactless = enabled,
            PurchaseChannel::AtmWithdrawal => self.atm_withdrawal = enabled,
        }
    }

    /// Whether a channel is usable right now.
    ///
    /// A frozen card reports every channel unavailable while keeping the
    /// stored toggle values intact.
    #[must_use]
    pub const fn is_available(&self, channel: PurchaseChannel) -> bool {
        !self.frozen && self.toggle(channel)
    }
}

/// Discriminant for the card union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    /// A plastic card.
    Physical,
    /// A numbered card that exists only in the app.
    Virtual,
}

/// A plastic card tied to the customer's account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalCard {
    /// Card ID.
    pub id: CardId,
    /// Cardholder display name.
    pub holder: String,
    /// Masked PAN, last four digits only (e.g., "•••• 4821").
    pub masked_pan: String,
    /// Expiry month (1-12).
    pub expiry_month: u8,
    /// Expiry year (four digits).
    pub expiry_year: u16,
    /// Control toggles.
    pub controls: CardControls,
}

/// A virtual card issued in-app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualCard {
    /// Card ID.
    pub id: CardId,
    /// Customer-chosen nickname.
    pub nickname: String,
    /// Masked PAN, last four digits only.
    pub masked_pan: String,
    /// When the card was issued.
    pub created_at: DateTime<Utc>,
    /// Control toggles.
    pub controls: CardControls,
}

/// A payment card: explicitly physical or virtual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaymentCard {
    /// A plastic card.
    Physical(PhysicalCard),
    /// An app-issued virtual card.
    Virtual(VirtualCard),
}

impl PaymentCard {
    /// The explicit discriminant.
    #[must_use]
    pub const fn kind(&self) -> CardKind {
        match self {
            Self::Physical(_) => CardKind::Physical,
            Self::Virtual(_) => CardKind::Virtual,
        }
    }

    /// Card ID regardless of variant.
    #[must_use]
    pub const fn id(&self) -> CardId {
        match self {
            Self::Physical(card) => card.id,
            Self::Virtual(card) => card.id,
        }
    }

    /// Shared read access to the control set.
    #[must_use]
    pub const fn controls(&self) -> &CardControls {
        match self {
            Self::Physical(card) => &card.controls,
            Self::Virtual(card) => &card.controls,
        }
    }

    /// Mutable access to the control set.
    pub fn controls_mut(&mut self) -> &mut CardControls {
        match self {
            Self::Physical(card) => &mut card.controls,
            Self::Virtual(card) => &mut card.controls,
        }
    }

    /// Display label: holder name for physical cards, nickname for
    /// virtual ones.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Physical(card) => &card.holder,
            Self::Virtual(card) => &card.nickname,
        }
    }
}
