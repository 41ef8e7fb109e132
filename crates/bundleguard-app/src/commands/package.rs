//! The whole packaging pipeline in one invocation.

use bundleguard_common::Result;
use bundleguard_config::BundleguardConfig;
use tracing::info;

use super::in_step;

/// assemble, then format-css and sanitize on the readable distributable,
/// then verify. Stops at the first failing step.
pub(super) fn run(config: &BundleguardConfig, minify_only: bool) -> Result<()> {
    in_step("assemble", || super::assemble::run(config, minify_only))?;

    if !minify_only {
        in_step("format-css", || super::format_css::run(config, &[]))?;
        in_step("sanitize", || super::sanitize::run(config, None, &[]))?;
    }

    in_step("verify", || super::verify::run(config, false, &[]))?;

    info!("package complete");
    Ok(())
}
