//! Cross-check that two documents carry the same inline styles.

use bundleguard_common::PipelineError;

use super::blocks::style_blocks;
use super::normalize::normalize;

const CONTEXT: usize = 20;

/// Normalized inline CSS of a document, one line per block.
pub fn normalized_styles(document: &str) -> String {
    style_blocks(document)
        .into_iter()
        .map(normalize)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fail with `StyleMismatch` unless both documents' inline styles
/// normalize to the same text.
pub fn compare_styles(readable: &str, minified: &str) -> Result<(), PipelineError> {
    let left: Vec<char> = normalized_styles(readable).chars().collect();
    let right: Vec<char> = normalized_styles(minified).chars().collect();

    let Some(offset) = first_difference(&left, &right) else {
        return Ok(());
    };

    Err(PipelineError::StyleMismatch {
        offset,
        readable: window(&left, offset),
        minified: window(&right, offset),
    })
}

fn first_difference(left: &[char], right: &[char]) -> Option<usize> {
    if let Some(i) = left.iter().zip(right).position(|(a, b)| a != b) {
        return Some(i);
    }
    (left.len() != right.len()).then(|| left.len().min(right.len()))
}

fn window(chars: &[char], offset: usize) -> String {
    let start = offset.saturating_sub(CONTEXT).min(chars.len());
    let end = (offset + CONTEXT).min(chars.len());
    chars[start..end].iter().collect()
}
