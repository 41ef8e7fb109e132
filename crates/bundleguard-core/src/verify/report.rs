//! Verifier findings and per-file reports.

use bundleguard_common::PipelineError;
use serde::Serialize;
use std::path::PathBuf;

/// One forbidden pattern that still matches.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Finding {
    pub pattern: &'static str,
    /// Total number of matches in the document.
    pub count: usize,
    /// Character offsets of the first few matches.
    pub samples: Vec<usize>,
    /// Text surrounding the first match, newlines flattened.
    pub excerpt: String,
}

/// Verification result for one document.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    pub path: PathBuf,
    pub findings: Vec<Finding>,
}

impl VerifyReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Turn a dirty report into `VerificationFailed`.
    pub fn into_result(self) -> Result<(), PipelineError> {
        if self.is_clean() {
            return Ok(());
        }
        Err(PipelineError::VerificationFailed {
            path: self.path,
            patterns: self.findings.iter().map(|f| f.pattern.to_string()).collect(),
        })
    }
}

/// Convert ascending byte offsets into character offsets in one pass.
pub(crate) fn char_offsets(text: &str, byte_offsets: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(byte_offsets.len());
    let mut last_byte = 0;
    let mut last_char = 0;
    for &byte in byte_offsets {
        last_char += text[last_byte..byte].chars().count();
        last_byte = byte;
        out.push(last_char);
    }
    out
}

const EXCERPT_RADIUS: usize = 24;

/// Up to `EXCERPT_RADIUS` bytes either side of `byte`, on char boundaries.
pub(crate) fn excerpt(text: &str, byte: usize) -> String {
    let mut start = byte.saturating_sub(EXCERPT_RADIUS);
    while !text.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = (byte + EXCERPT_RADIUS).min(text.len());
    while !text.is_char_boundary(end) {
        end += 1;
    }
    text[start..end].replace(['\n', '\r', '\t'], " ")
}
