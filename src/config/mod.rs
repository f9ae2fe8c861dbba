//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `WELFARE_DIAGNOSIS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use welfare_diagnosis::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod error;
mod server;
mod survey;

pub use error::{ConfigError, ValidationError};
pub use server::{LogFormat, ServerConfig};
pub use survey::SurveyConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// development server on the standard catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Listener, logging and request handling
    #[serde(default)]
    pub server: ServerConfig,

    /// Catalog selection and classification threshold
    #[serde(default)]
    pub survey: SurveyConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `WELFARE_DIAGNOSIS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `WELFARE_DIAGNOSIS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `WELFARE_DIAGNOSIS__SURVEY__CATALOG=extended` -> `survey.catalog = extended`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("WELFARE_DIAGNOSIS")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.survey.validate()?;
        Ok(())
    }
}
