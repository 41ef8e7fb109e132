use bundleguard_common::Result;
use bundleguard_config::BundleguardConfig;

pub(super) fn run(config: &BundleguardConfig) -> Result<()> {
    bundleguard_core::css::compare_files(
        &config.paths.readable_path(),
        &config.paths.minified_path(),
    )?;
    Ok(())
}
