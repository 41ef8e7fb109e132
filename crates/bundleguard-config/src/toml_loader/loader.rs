//! Core TOML config loading: read from an explicit path or the resolved default.

use crate::schema::BundleguardConfig;
use bundleguard_common::ConfigError;
use std::path::Path;
use tracing::{debug, info};

use super::paths::resolve_config_path;

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// Validation is left to the caller.
pub fn load_from_path(path: &Path) -> Result<BundleguardConfig, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: BundleguardConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from `explicit` if given, otherwise from the first file found
/// by [`resolve_config_path`]. With no file anywhere the defaults are used.
pub fn load_resolved(explicit: Option<&Path>) -> Result<BundleguardConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_from_path(path);
    }

    match resolve_config_path(Path::new(".")) {
        Some(path) => load_from_path(&path),
        None => {
            debug!("no config file found, using defaults");
            Ok(BundleguardConfig::default())
        }
    }
}
