//! Card issuance and validation.

use chrono::{DateTime, Utc};

use finch_shared::types::CardId;

use super::error::CardError;
use super::types::{CardControls, VirtualCard};

/// Stateless card operations.
pub struct CardService;

impl CardService {
    /// Issues a new virtual card with default controls.
    ///
    /// # Errors
    ///
    /// Returns `CardError::MissingNickname` if the nickname is empty
    /// after trimming.
    pub fn issue_virtual(
        nickname: &str,
        last_four: &str,
        now: DateTime<Utc>,
    ) -> Result<VirtualCard, CardError> {
        let nickname = nickname.trim();
        if nickname.is_empty() {
            return Err(CardError::MissingNickname);
        }
        Ok(VirtualCard {
            id: CardId::new(),
            nickname: nickname.to_string(),
            masked_pan: format!("\u{2022}\u{2022}\u{2022}\u{2022} {last_four}"),
            created_at: now,
            controls: CardControls::default(),
        })
    }

    /// Validates a PIN change request.
    ///
    /// # Errors
    ///
    /// Returns `CardError::InvalidPin` unless the new PIN is exactly
    /// four ASCII digits, and `CardError::PinMismatch` if the
    /// confirmation differs.
    pub fn validate_pin_change(new_pin: &str, confirm_pin: &str) -> Result<(), CardError> {
        if new_pin.len() != 4 || !new_pin.chars().all(|c| c.is_ascii_digit()) {
            return Err(CardError::InvalidPin);
        }
        if new_pin != confirm_pin {
            return Err(CardError::PinMismatch);
        }
        Ok(())
    }
}
