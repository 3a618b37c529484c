//! Application configuration management.

use std::path::Path;

use serde::Deserialize;

use crate::error::AppResult;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Denomination sets available in the till.
    #[serde(default)]
    pub denominations: DenominationConfig,
    /// Output configuration.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Denomination configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DenominationConfig {
    /// Note face values in whole units.
    #[serde(default = "default_notes")]
    pub notes: Vec<u32>,
    /// Coin face values in minor units (1 = 0.01).
    #[serde(default = "default_coins")]
    pub coins: Vec<u32>,
}

fn default_notes() -> Vec<u32> {
    vec![100, 50, 20, 10, 5, 2, 1]
}

fn default_coins() -> Vec<u32> {
    vec![100, 50, 25, 10, 5, 1]
}

impl Default for DenominationConfig {
    fn default() -> Self {
        Self {
            notes: default_notes(),
            coins: default_coins(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DisplayConfig {
    /// Symbol printed before every amount (e.g. "$").
    #[serde(default)]
    pub currency_symbol: String,
    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,
}

/// How a change breakdown is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable listing.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl AppConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// Sources, lowest precedence first: `config/default`,
    /// `config/{RUN_MODE}`, the explicit `path` (required when given),
    /// then `CHANGEMAKER__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false));

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("CHANGEMAKER")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("denominations.notes")
                    .with_list_parse_key("denominations.coins")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Parses a TOML document on top of the built-in defaults.
    pub fn from_toml_str(toml: &str) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
