//! Full configuration validation.
//!
//! Each section has its own checks; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod helpers;
mod misc;
mod paths;


use crate::schema::BundleguardConfig;
use bundleguard_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &BundleguardConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    paths::validate_paths(&mut errors, config);
    misc::validate_verify(&mut errors, config);
    misc::validate_css(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
