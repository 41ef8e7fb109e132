//! Assembler: turn the staged minified build and the readable build into
//! the final distributable pair.

mod prune;


pub use prune::prune_except;

use bundleguard_common::{PipelineError, SanitizeMode};
use bundleguard_config::schema::PathsConfig;
use std::path::PathBuf;
use tracing::info;

use crate::fsio;
use crate::sanitize::sanitize_with_outcome;

/// What one assembly run wrote and removed.
#[derive(Debug, Clone, Default)]
pub struct AssembleOutcome {
    /// The minified distributable written into the output directory.
    pub minified: PathBuf,
    /// The readable distributable, when it was processed.
    pub readable: Option<PathBuf>,
    /// Whether the staging directory existed and was removed.
    pub staging_removed: bool,
    /// Output directory entries deleted by the final prune.
    pub pruned: Vec<PathBuf>,
}

/// Refuse a layout where removing the staging directory would also remove
/// the output directory. Checked lexically, then on the resolved paths
/// when both exist, which catches symlinks and mixed relative/absolute
/// spellings.
fn ensure_staging_is_disposable(paths: &PathsConfig) -> Result<(), PipelineError> {
    let resolved_encloses = match (
        std::fs::canonicalize(&paths.staging_dir),
        std::fs::canonicalize(&paths.out_dir),
    ) {
        (Ok(staging), Ok(out)) => out.starts_with(staging),
        _ => false,
    };

    if paths.staging_encloses_out_dir() || resolved_encloses {
        return Err(PipelineError::StagingEnclosesOutput {
            staging_dir: paths.staging_dir.clone(),
            out_dir: paths.out_dir.clone(),
        });
    }
    Ok(())
}

/// Assemble the distributables described by `paths`.
///
/// Every required input is checked before anything is written or deleted,
/// so a failed precondition leaves the filesystem untouched. With
/// `minify_only` the readable artifact is neither required nor processed,
/// but the prune still keeps only the two distributable names.
pub fn assemble(
    paths: &PathsConfig,
    mode: SanitizeMode,
    minify_only: bool,
) -> Result<AssembleOutcome, PipelineError> {
    let staging = paths.staging_path();
    let readable = paths.readable_path();
    let minified = paths.minified_path();

    fsio::require_file(&staging)?;
    if !minify_only {
        fsio::require_file(&readable)?;
    }
    ensure_staging_is_disposable(paths)?;

    let source = fsio::read_document(&staging)?;
    let (clean, outcome) = sanitize_with_outcome(&source, mode);
    fsio::write_document(&minified, &clean)?;
    info!(
        "wrote {} from {} ({mode}: {} replacement(s))",
        minified.display(),
        staging.display(),
        outcome.total()
    );

    let staging_removed = fsio::remove_dir_if_present(&paths.staging_dir)?;
    if staging_removed {
        info!("removed {}", paths.staging_dir.display());
    }

    let readable_done = if minify_only {
        None
    } else {
        let original = fsio::read_document(&readable)?;
        let (clean, outcome) = sanitize_with_outcome(&original, mode);
        if fsio::write_if_changed(&readable, &original, &clean)? {
            info!(
                "sanitized {} ({mode}: {} replacement(s))",
                readable.display(),
                outcome.total()
            );
        }
        Some(readable)
    };

    let pruned = prune_except(
        &paths.out_dir,
        &[paths.readable_name.as_str(), paths.minified_name.as_str()],
    )?;
    if !pruned.is_empty() {
        info!(
            "pruned {} entr{} from {}",
            pruned.len(),
            if pruned.len() == 1 { "y" } else { "ies" },
            paths.out_dir.display()
        );
    }

    Ok(AssembleOutcome {
        minified,
        readable: readable_done,
        staging_removed,
        pruned,
    })
}
