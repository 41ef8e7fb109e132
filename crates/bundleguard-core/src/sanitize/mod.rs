//! Sanitizer: rewrite forbidden patterns into escaped or mangled forms.
//!
//! Both modes keep the document valid HTML/CSS/JS and leave nothing the
//! verifier would match. Applying either mode to the output of either mode
//! is a no-op.

mod rules;


pub use rules::{sanitize_rules, SanitizeRule};

use bundleguard_common::{PipelineError, SanitizeMode};
use std::path::Path;
use tracing::{debug, info};

use crate::fsio;

/// Replacement counts from one sanitize pass, per rule, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanitizeOutcome {
    pub replacements: Vec<(&'static str, usize)>,
}

impl SanitizeOutcome {
    pub fn total(&self) -> usize {
        self.replacements.iter().map(|(_, n)| n).sum()
    }

    pub fn is_unchanged(&self) -> bool {
        self.total() == 0
    }

    /// `name=count` pairs for the rules that fired.
    pub fn summary(&self) -> String {
        self.replacements
            .iter()
            .filter(|(_, n)| *n > 0)
            .map(|(name, n)| format!("{name}={n}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Sanitize `text`, returning the rewritten document and what changed.
pub fn sanitize_with_outcome(text: &str, mode: SanitizeMode) -> (String, SanitizeOutcome) {
    let mut current = text.to_string();
    let mut outcome = SanitizeOutcome::default();

    for rule in sanitize_rules() {
        let (next, count) = rule.apply(&current, mode);
        if count > 0 {
            debug!(rule = rule.name, count, "rewrote matches");
            current = next;
        }
        outcome.replacements.push((rule.name, count));
    }

    (current, outcome)
}

/// Sanitize `text` with the given replacement table.
pub fn sanitize(text: &str, mode: SanitizeMode) -> String {
    sanitize_with_outcome(text, mode).0
}

/// Sanitize a file in place. The file is only rewritten if its content changed.
pub fn sanitize_file(path: &Path, mode: SanitizeMode) -> Result<SanitizeOutcome, PipelineError> {
    let original = fsio::read_document(path)?;
    let (updated, outcome) = sanitize_with_outcome(&original, mode);

    if fsio::write_if_changed(path, &original, &updated)? {
        info!(
            "sanitized {} ({mode}): {}",
            path.display(),
            outcome.summary()
        );
    } else {
        info!("{} already clean", path.display());
    }
    Ok(outcome)
}
