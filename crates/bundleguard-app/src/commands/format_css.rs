use bundleguard_common::Result;
use bundleguard_config::BundleguardConfig;
use std::path::PathBuf;

pub(super) fn run(config: &BundleguardConfig, files: &[PathBuf]) -> Result<()> {
    for path in super::targets_or_readable(config, files) {
        bundleguard_core::css::format_file(&path, &config.css.indent)?;
    }
    Ok(())
}
