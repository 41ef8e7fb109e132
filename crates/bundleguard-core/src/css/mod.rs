//! CSS reformatter for the readable artifact's inline styles.

mod blocks;
mod compare;
mod normalize;
mod reformat;

#[cfg(test)]
mod tests;

pub use blocks::{format_style_blocks, style_blocks};
pub use compare::{compare_styles, normalized_styles};
pub use normalize::{normalize, strip_comments};
pub use reformat::{reformat, reformat_with_indent, DEFAULT_INDENT};

use bundleguard_common::PipelineError;
use std::path::Path;
use tracing::info;

use crate::fsio;

/// Reformat the inline styles of a file in place.
///
/// Returns the number of `<style>` blocks reformatted. The file is only
/// rewritten if its content changed.
pub fn format_file(path: &Path, indent: &str) -> Result<usize, PipelineError> {
    let original = fsio::read_document(path)?;
    let (updated, blocks) = format_style_blocks(&original, indent);

    if fsio::write_if_changed(path, &original, &updated)? {
        info!("reformatted {blocks} style block(s) in {}", path.display());
    } else {
        info!("{} styles already formatted", path.display());
    }
    Ok(blocks)
}

/// Compare the inline styles of two files.
pub fn compare_files(readable: &Path, minified: &Path) -> Result<(), PipelineError> {
    let left = fsio::read_document(readable)?;
    let right = fsio::read_document(minified)?;
    compare_styles(&left, &right)?;
    info!(
        "inline styles of {} match {}",
        readable.display(),
        minified.display()
    );
    Ok(())
}
