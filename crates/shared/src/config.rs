//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Bank configuration.
    #[serde(default)]
    pub bank: BankConfig,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// Bank configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BankConfig {
    /// Pivot currency the bank is set up with.
    #[serde(default = "default_pivot_currency")]
    pub pivot_currency: Currency,
    /// Exchange rates registered against the pivot currency at startup.
    #[serde(default)]
    pub exchange_rates: Vec<ExchangeRateConfig>,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            pivot_currency: default_pivot_currency(),
            exchange_rates: Vec::new(),
        }
    }
}

fn default_pivot_currency() -> Currency {
    Currency::Eur
}

/// A single configured exchange rate (1 pivot = `rate` units of `currency`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExchangeRateConfig {
    /// Currency the rate is expressed in.
    pub currency: Currency,
    /// Units of `currency` per unit of pivot.
    pub rate: Decimal,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "fxbank=info,seeder=info".to_string()
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
            .add_source(config::Environment::with_prefix("FXBANK").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
