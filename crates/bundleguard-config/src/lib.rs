//! bundleguard configuration system.
//!
//! TOML-based configuration with validation. All sections use defaults so
//! partial configs (or none at all) work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use bundleguard_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config.paths.readable_path().display());
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use schema::{BundleguardConfig, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{create_default_config, default_config_toml, PROJECT_CONFIG_NAME};

use bundleguard_common::ConfigError;
use std::path::Path;

/// Load and validate config.
///
/// Uses `explicit` when given; otherwise `./bundleguard.toml`, then the
/// per-user config file, then built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<BundleguardConfig, ConfigError> {
    let config = toml_loader::load_resolved(explicit)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a TOML string.
pub fn config_to_toml(config: &BundleguardConfig) -> Result<String, ConfigError> {
    toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config: {e}")))
}
