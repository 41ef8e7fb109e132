use bundleguard_common::{Result, SanitizeMode};
use bundleguard_config::BundleguardConfig;
use std::path::PathBuf;

pub(super) fn run(
    config: &BundleguardConfig,
    mode: Option<SanitizeMode>,
    files: &[PathBuf],
) -> Result<()> {
    let mode = mode.unwrap_or(config.sanitize.standalone_mode);
    for path in super::targets_or_readable(config, files) {
        bundleguard_core::sanitize_file(&path, mode)?;
    }
    Ok(())
}
