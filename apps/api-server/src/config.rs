//! Application configuration loaded from environment variables.

use std::env;

use crate::telemetry::TelemetryConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Load the sample posts and content ideas at start-up.
    pub seed_sample_data: bool,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            seed_sample_data: lookup("SEED_SAMPLE_DATA")
                .map(|v| flag(&v))
                .unwrap_or(true),
            telemetry: TelemetryConfig::from_lookup(&lookup),
        }
    }
}

/// Anything but `false`/`0` counts as enabled.
fn flag(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    value != "false" && value != "0"
}
