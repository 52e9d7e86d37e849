//! Physical/virtual card variants and control toggles.

pub mod error;
pub mod service;
pub mod types;


pub use error::CardError;
pub use service::CardService;
pub use types::{
    CardControls, CardKind, PaymentCard, PhysicalCard, PurchaseChannel, VirtualCard,
};
