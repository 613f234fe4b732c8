//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Engine configuration.
    #[serde(default)]
    pub engine: EngineConfig,
    /// Telemetry configuration.
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Tunable windows for the statistics engine.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Days reconstructed/projected on each side of today in the balance trend.
    #[serde(default = "default_trend_half_window_days")]
    pub trend_half_window_days: u64,
    /// Horizon for upcoming payments, in days after today.
    #[serde(default = "default_upcoming_horizon_days")]
    pub upcoming_horizon_days: u64,
    /// Maximum number of upcoming payments returned.
    #[serde(default = "default_upcoming_limit")]
    pub upcoming_limit: usize,
}

fn default_trend_half_window_days() -> u64 {
    14
}

fn default_upcoming_horizon_days() -> u64 {
    30
}

fn default_upcoming_limit() -> usize {
    10
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            trend_half_window_days: default_trend_half_window_days(),
            upcoming_horizon_days: default_upcoming_horizon_days(),
            upcoming_limit: default_upcoming_limit(),
        }
    }
}

/// Telemetry configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// Default tracing filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "beehive=debug".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
        }
    }
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
            .add_source(config::Environment::with_prefix("BEEHIVE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
