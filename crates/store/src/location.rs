//! Geolocation seam for the ATM locator.
//!
//! A single fire-and-forget lookup with success/error outcomes; no
//! retry or timeout policy. The mock stands in for the device location
//! API.

use finch_core::geo::Coordinates;
use finch_shared::config::LocationConfig;
use finch_shared::{AppError, AppResult};

/// Async seam over the device location facility.
pub trait LocationProvider {
    /// Resolves the user's current coordinates.
    fn current_location(&self) -> impl std::future::Future<Output = AppResult<Coordinates>> + Send;
}

/// Fixed-coordinate mock provider.
#[derive(Debug, Clone)]
pub struct MockLocationProvider {
    position: Option<Coordinates>,
}

impl MockLocationProvider {
    /// Provider that always resolves to the configured fallback position.
    #[must_use]
    pub fn new(config: &LocationConfig) -> Self {
        Self {
            position: Some(Coordinates::new(
                config.default_latitude,
                config.default_longitude,
            )),
        }
    }

    /// Provider that always resolves to the given position.
    #[must_use]
    pub const fn at(position: Coordinates) -> Self {
        Self {
            position: Some(position),
        }
    }

    /// Provider that always fails, simulating a denied permission.
    #[must_use]
    pub const fn unavailable() -> Self {
        Self { position: None }
    }
}

impl LocationProvider for MockLocationProvider {
    async fn current_location(&self) -> AppResult<Coordinates> {
        self.position.ok_or_else(|| {
            AppError::LocationUnavailable("location permission denied".to_string())
        })
    }
}
