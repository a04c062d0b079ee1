//! Configuration loading and management for the overtime control engine.
//!
//! This module loads currency display and server settings from a YAML
//! file. Every setting has a default, so running without a file is fine.
//!
//! # Example
//!
//! ```no_run
//! use overtime_control::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/overtime_control.yaml").unwrap();
//! println!("Listening on {}", config.server().bind_address);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, MAX_DECIMAL_PLACES};
pub use types::{CalculatorConfig, DEFAULT_BIND_ADDRESS, ServerConfig};
