//! Configuration types for the overtime control engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field has a
//! default, so a partial file is enough.

use serde::{Deserialize, Serialize};

use crate::formatting::CurrencyFormat;

/// The address the HTTP server listens on when none is configured.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to bind, e.g. `0.0.0.0:8080`.
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        }
    }
}

/// The complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// How amounts are formatted for display.
    pub currency: CurrencyFormat,
    /// HTTP server settings.
    pub server: ServerConfig,
}
