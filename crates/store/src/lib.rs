//! In-memory application state for Finch.
//!
//! The whole "backend" of the simulated banking app lives here: an
//! explicit [`AppState`] owned by the caller, mutated only through
//! reducer-style [`Action`]s, plus the async seams a real backend would
//! sit behind (payment gateway, geolocation).
//!
//! Views take `&AppState` snapshots; there is no shared-memory
//! concurrency.

pub mod actions;
pub mod gateway;
pub mod location;
pub mod seed;
pub mod state;
pub mod types;


pub use actions::Action;
pub use gateway::{GatewayReceipt, MockGateway, PaymentGateway};
pub use location::{LocationProvider, MockLocationProvider};
pub use state::AppState;
pub use types::{
    Account, Cause, PrivacySettings, PushSettings, SettingsBundle, Subscription,
    SubscriptionStatus,
};
