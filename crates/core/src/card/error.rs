//! Card operation errors.

use thiserror::Error;

use finch_shared::AppError;

/// Errors raised by card operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// Virtual card issuance requires a nickname.
    #[error("virtual card nickname is required")]
    MissingNickname,

    /// The PIN is not exactly four digits.
    #[error("PIN must be exactly 4 digits")]
    InvalidPin,

    /// The PIN confirmation does not match.
    #[error("PIN confirmation does not match")]
    PinMismatch,
}

impl From<CardError> for AppError {
    fn from(err: CardError) -> Self {
        Self::Validation(err.to_string())
    }
}
