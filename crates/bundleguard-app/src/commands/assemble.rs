use bundleguard_common::Result;
use bundleguard_config::BundleguardConfig;
use tracing::info;

pub(super) fn run(config: &BundleguardConfig, minify_only: bool) -> Result<()> {
    let outcome = bundleguard_core::assemble(
        &config.paths,
        config.sanitize.assemble_mode,
        minify_only,
    )?;

    match &outcome.readable {
        Some(readable) => info!(
            "distributables ready: {} and {}",
            readable.display(),
            outcome.minified.display()
        ),
        None => info!("minified distributable ready: {}", outcome.minified.display()),
    }
    Ok(())
}
