//! Configuration types for flip-scout

use crate::valuation::Condition;
use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub listing: ListingConfig,
    pub decoder: DecoderConfig,
    pub catalog: CatalogConfig,
    pub valuation: ValuationConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    pub telemetry: TelemetryConfig,
}

/// Listing provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ListingConfig {
    pub timeout_secs: u64,
    /// Override the browser-like default User-Agent
    pub user_agent: Option<String>,
}

/// VIN decoder configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DecoderConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

/// Make/model reference table configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub path: PathBuf,
}

/// Valuation provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ValuationConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: Option<String>,
}

/// Analysis policy configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Condition assumed when pricing the wholesale (buy) side
    #[serde(default = "default_trade_in_condition")]
    pub trade_in_condition: Condition,

    /// Condition assumed when pricing the retail (sell) side
    #[serde(default = "default_private_party_condition")]
    pub private_party_condition: Condition,

    /// Mileage substituted when the listing does not state one
    #[serde(default = "default_assumed_mileage")]
    pub assumed_mileage: i64,
}

fn default_trade_in_condition() -> Condition {
    Condition::Fair
}
fn default_private_party_condition() -> Condition {
    Condition::Good
}
fn default_assumed_mileage() -> i64 {
    100_000
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            trade_in_condition: Condition::Fair,
            private_party_condition: Condition::Good,
            assumed_mileage: 100_000,
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    pub metrics_port: u16,
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
    pub otlp_endpoint: Option<String>,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format
    #[default]
    Pretty,
    /// JSON format for log aggregation
    Json,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
