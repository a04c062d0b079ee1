//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::formatting::CurrencyFormat;

use super::types::{CalculatorConfig, ServerConfig};

/// The largest number of decimal places a currency format may request.
pub const MAX_DECIMAL_PLACES: u32 = 10;

/// Loads, validates and provides access to the engine configuration.
///
/// # File Layout
///
/// ```text
/// currency:
///   symbol: "$"
///   symbol_position: prefix   # or suffix
///   decimal_places: 2
///   thousands_separator: ","
///   decimal_separator: "."
/// server:
///   bind_address: "127.0.0.1:3000"
/// ```
///
/// # Example
///
/// ```no_run
/// use overtime_control::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/overtime_control.yaml")?;
/// println!("Currency symbol: {}", loader.currency().symbol);
/// # Ok::<(), overtime_control::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalculatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML
    /// - A value fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let config = Self::load_yaml::<CalculatorConfig>(path)?;
        debug!(path = %path.display(), "Loaded configuration");
        Self::from_config(config)
    }

    /// Wraps an in-memory configuration after validating it.
    ///
    /// # Example
    ///
    /// ```
    /// use overtime_control::config::{CalculatorConfig, ConfigLoader};
    ///
    /// let loader = ConfigLoader::from_config(CalculatorConfig::default()).unwrap();
    /// assert_eq!(loader.currency().decimal_places, 2);
    /// ```
    pub fn from_config(config: CalculatorConfig) -> EngineResult<Self> {
        Self::validate(&config)?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate(config: &CalculatorConfig) -> EngineResult<()> {
        let currency = &config.currency;

        if currency.decimal_places > MAX_DECIMAL_PLACES {
            return Err(EngineError::InvalidConfig {
                field: "currency.decimal_places".to_string(),
                message: format!("must be at most {}", MAX_DECIMAL_PLACES),
            });
        }

        if currency.decimal_separator.is_empty() {
            return Err(EngineError::InvalidConfig {
                field: "currency.decimal_separator".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        if currency.decimal_separator == currency.thousands_separator {
            return Err(EngineError::InvalidConfig {
                field: "currency.thousands_separator".to_string(),
                message: "must differ from the decimal separator".to_string(),
            });
        }

        Self::parse_bind_address(&config.server)?;

        Ok(())
    }

    fn parse_bind_address(server: &ServerConfig) -> EngineResult<SocketAddr> {
        server
            .bind_address
            .parse()
            .map_err(|_| EngineError::InvalidConfig {
                field: "server.bind_address".to_string(),
                message: format!("'{}' is not a socket address", server.bind_address),
            })
    }

    /// Returns the currency display format.
    pub fn currency(&self) -> &CurrencyFormat {
        &self.config.currency
    }

    /// Returns the HTTP server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }

    /// Returns the validated bind address.
    pub fn bind_address(&self) -> EngineResult<SocketAddr> {
        Self::parse_bind_address(self.server())
    }
}
