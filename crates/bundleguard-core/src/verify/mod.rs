//! Verifier: read-only check that no forbidden pattern survives.
//!
//! Any finding is a hard failure of the packaging step.

mod report;

pub use report::{Finding, VerifyReport};

use bundleguard_common::PipelineError;
use std::path::Path;
use tracing::{error, info};

use crate::fsio;
use crate::patterns::forbidden_patterns;

/// Scan `text` for every forbidden pattern.
///
/// Returns one finding per pattern that matched, each with up to
/// `max_samples` character offsets.
pub fn scan(text: &str, max_samples: usize) -> Vec<Finding> {
    forbidden_patterns()
        .iter()
        .filter_map(|pattern| {
            let offsets = pattern.match_offsets(text);
            let first = *offsets.first()?;
            let sampled = &offsets[..offsets.len().min(max_samples)];
            Some(Finding {
                pattern: pattern.name,
                count: offsets.len(),
                samples: report::char_offsets(text, sampled),
                excerpt: report::excerpt(text, first),
            })
        })
        .collect()
}

/// Verify one file and log the outcome.
///
/// A dirty file is not an `Err` here; callers decide via
/// [`VerifyReport::into_result`].
pub fn verify_file(path: &Path, max_samples: usize) -> Result<VerifyReport, PipelineError> {
    let text = fsio::read_document(path)?;
    let report = VerifyReport {
        path: path.to_path_buf(),
        findings: scan(&text, max_samples),
    };

    if report.is_clean() {
        info!("{} is clean", path.display());
    } else {
        for finding in &report.findings {
            error!(
                "{}: '{}' matched {} time(s) at offsets {:?} near \"{}\"",
                path.display(),
                finding.pattern,
                finding.count,
                finding.samples,
                finding.excerpt
            );
        }
    }
    Ok(report)
}
