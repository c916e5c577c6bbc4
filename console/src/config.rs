//! Configuration management for the SITTA console
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with SITTA_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Seed dataset
    pub seed: SeedConfig,

    /// Logging configuration
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    /// Path of the seed JSON (regions, categories, shippers, packages, stock, tracking)
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    /// `EnvFilter` directives used when RUST_LOG is not set
    pub filter: String,

    /// Emit JSON log lines instead of the human-readable format
    pub json: bool,
}

pub const DEFAULT_LOG_FILTER: &str = "sitta=info,bahan_ajar_console=info,shared=info,alert=info";

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("SITTA_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("seed.path", "data/bahan_ajar.json")?
            .set_default("log.filter", DEFAULT_LOG_FILTER)?
            .set_default("log.json", false)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (SITTA_ prefix)
            .add_source(
                Environment::with_prefix("SITTA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
