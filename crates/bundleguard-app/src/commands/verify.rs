use bundleguard_common::{BundleguardError, PipelineError, Result};
use bundleguard_config::BundleguardConfig;
use std::path::PathBuf;
use tracing::{info, warn};

pub(super) fn run(config: &BundleguardConfig, json: bool, files: &[PathBuf]) -> Result<()> {
    let max_samples = config.verify.max_samples as usize;
    let reports = verify_targets(config, files)?
        .iter()
        .map(|path| bundleguard_core::verify_file(path, max_samples))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    if json {
        let rendered = serde_json::to_string_pretty(&reports)
            .map_err(|e| BundleguardError::Other(format!("failed to render report: {e}")))?;
        println!("{rendered}");
    }

    let checked = reports.len();
    for report in reports {
        report.into_result()?;
    }

    info!("verification passed ({checked} file(s))");
    Ok(())
}

/// Explicit files, or whichever distributables exist.
///
/// With no explicit files at least one distributable must be present.
pub(super) fn verify_targets(config: &BundleguardConfig, files: &[PathBuf]) -> Result<Vec<PathBuf>> {
    if !files.is_empty() {
        return Ok(files.to_vec());
    }

    let defaults = [config.paths.readable_path(), config.paths.minified_path()];
    let (present, absent): (Vec<_>, Vec<_>) = defaults.into_iter().partition(|p| p.is_file());
    for path in &absent {
        warn!("skipping {}: not present", path.display());
    }
    if present.is_empty() {
        return Err(PipelineError::MissingInputFile(config.paths.readable_path()).into());
    }
    Ok(present)
}
