//! Config path resolution and default file creation.

use bundleguard_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;

/// Name of the per-project config file, looked up in the working directory.
pub const PROJECT_CONFIG_NAME: &str = "bundleguard.toml";

/// Per-user fallback config: `<config dir>/bundleguard/config.toml`.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bundleguard").join("config.toml"))
}

/// Find the config file to use for a run started in `project_dir`.
///
/// The project file wins over the per-user file.
pub fn resolve_config_path(project_dir: &Path) -> Option<PathBuf> {
    let project = project_dir.join(PROJECT_CONFIG_NAME);
    if project.is_file() {
        return Some(project);
    }
    user_config_path().filter(|p| p.is_file())
}

/// Write the documented default config to `path`.
///
/// Refuses to overwrite an existing file.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::ValidationError(format!(
            "refusing to overwrite existing config at {}",
            path.display()
        )));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}
