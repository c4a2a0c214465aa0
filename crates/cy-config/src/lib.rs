//! # cy-config
//!
//! Layered configuration loading for the cyoda client tools using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CYODA_*` prefix, `__` as separator)
//! 2. Project-level `.cyoda/config.toml`
//! 3. User-level `~/.config/cyoda/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CYODA_CONNECTION__API_URL` -> `connection.api_url`,
//! `CYODA_SEARCH__TIMEOUT_SECS` -> `search.timeout_secs`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use cy_config::CyodaConfig;
//!
//! let config = CyodaConfig::load_with_dotenv().expect("config");
//! println!("API: {:?}", config.connection.base_url());
//! ```

mod connection;
mod error;
mod search;
mod transfer;

pub use connection::ConnectionConfig;
pub use error::ConfigError;
pub use search::SearchConfig;
pub use transfer::TransferConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CyodaConfig {
    #[serde(default)]
    pub connection: ConnectionConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub transfer: TransferConfig,
}

impl CyodaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".cyoda/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("CYODA_").split("__"))
    }

    /// Reject values that would make the client loop or fail in odd ways.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self
            .connection
            .api_url
            .as_deref()
            .is_some_and(|url| url.trim().is_empty())
        {
            return Err(ConfigError::InvalidValue {
                field: "connection.api_url".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.search.interval_millis == 0 {
            return Err(ConfigError::InvalidValue {
                field: "search.interval_millis".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.search.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "search.page_size".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cyoda").join("config.toml"))
    }
}
