//! Whole-file document I/O with pipeline error mapping.

use bundleguard_common::PipelineError;
use std::path::Path;
use tracing::debug;

fn io_error(path: &Path, source: std::io::Error) -> PipelineError {
    PipelineError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Fail with `MissingInputFile` unless `path` is an existing file.
pub fn require_file(path: &Path) -> Result<(), PipelineError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(PipelineError::MissingInputFile(path.to_path_buf()))
    }
}

/// Read a whole document. A missing file is `MissingInputFile`.
pub fn read_document(path: &Path) -> Result<String, PipelineError> {
    require_file(path)?;
    std::fs::read_to_string(path).map_err(|e| io_error(path, e))
}

/// Write a whole document, creating parent directories as needed.
pub fn write_document(path: &Path, contents: &str) -> Result<(), PipelineError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }
    std::fs::write(path, contents).map_err(|e| io_error(path, e))?;
    debug!("wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}

/// Overwrite `path` only when `updated` differs from `original`.
///
/// Returns whether the file was written.
pub fn write_if_changed(path: &Path, original: &str, updated: &str) -> Result<bool, PipelineError> {
    if original == updated {
        debug!("{} unchanged", path.display());
        return Ok(false);
    }
    write_document(path, updated)?;
    Ok(true)
}

/// Remove a directory tree. Already absent is not an error.
pub fn remove_dir_if_present(path: &Path) -> Result<bool, PipelineError> {
    match std::fs::remove_dir_all(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(io_error(path, e)),
    }
}

/// Remove a file or directory entry.
pub fn remove_entry(path: &Path) -> Result<(), PipelineError> {
    let meta = std::fs::symlink_metadata(path).map_err(|e| io_error(path, e))?;
    let result = if meta.is_dir() {
        std::fs::remove_dir_all(path)
    } else {
        std::fs::remove_file(path)
    };
    result.map_err(|e| io_error(path, e))
}
