//! Output directory pruning.

use bundleguard_common::PipelineError;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::fsio;

/// Delete every entry of `dir` whose file name is not in `keep`.
///
/// Returns the removed paths, sorted.
pub fn prune_except(dir: &Path, keep: &[&str]) -> Result<Vec<PathBuf>, PipelineError> {
    let entries = std::fs::read_dir(dir).map_err(|source| PipelineError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut doomed = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| PipelineError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let name = entry.file_name();
        if !keep.iter().any(|k| name == *k) {
            doomed.push(entry.path());
        }
    }
    doomed.sort();

    for path in &doomed {
        debug!("pruning {}", path.display());
        fsio::remove_entry(path)?;
    }
    Ok(doomed)
}
