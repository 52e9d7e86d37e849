//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Simulated gateway configuration.
    #[serde(default)]
    pub gateway: GatewayConfig,
    /// Geolocation provider configuration.
    #[serde(default)]
    pub location: LocationConfig,
}

/// Simulated payment-gateway configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Simulated network latency in milliseconds.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
        }
    }
}

fn default_latency_ms() -> u64 {
    800
}

/// Geolocation provider configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationConfig {
    /// Fallback latitude when no device location is available.
    #[serde(default = "default_latitude")]
    pub default_latitude: f64,
    /// Fallback longitude when no device location is available.
    #[serde(default = "default_longitude")]
    pub default_longitude: f64,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            default_latitude: default_latitude(),
            default_longitude: default_longitude(),
        }
    }
}

fn default_latitude() -> f64 {
    40.7128 // New York City
}

fn default_longitude() -> f64 {
    -74.0060
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FINCH").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
