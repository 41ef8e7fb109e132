//! The forbidden-pattern table checked by the verifier.
//!
//! A shipped bundle must contain none of these. The sanitizer's rule table
//! (`crate::sanitize::rules`) is the write side of the same contract.

use regex::Regex;
use std::sync::LazyLock;

/// How a forbidden pattern is matched.
#[derive(Debug)]
pub enum Matcher {
    /// Exact, case-sensitive substring.
    Literal(&'static str),
    Regex(Regex),
}

/// A named pattern that must not appear in a shipped bundle.
#[derive(Debug)]
pub struct ForbiddenPattern {
    pub name: &'static str,
    pub matcher: Matcher,
}

impl ForbiddenPattern {
    fn literal(name: &'static str, needle: &'static str) -> Self {
        Self {
            name,
            matcher: Matcher::Literal(needle),
        }
    }

    fn regex(name: &'static str, pattern: &str) -> Self {
        // Static pattern literals; a failure here is a programming error caught by the tests.
        let re = Regex::new(pattern).expect("forbidden pattern: static regex must compile");
        Self {
            name,
            matcher: Matcher::Regex(re),
        }
    }

    /// Byte offsets of every non-overlapping match, in order.
    pub fn match_offsets(&self, text: &str) -> Vec<usize> {
        match &self.matcher {
            Matcher::Literal(needle) => text.match_indices(needle).map(|(i, _)| i).collect(),
            Matcher::Regex(re) => re.find_iter(text).map(|m| m.start()).collect(),
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        match &self.matcher {
            Matcher::Literal(needle) => text.contains(needle),
            Matcher::Regex(re) => re.is_match(text),
        }
    }
}

static FORBIDDEN: LazyLock<Vec<ForbiddenPattern>> = LazyLock::new(|| {
    vec![
        ForbiddenPattern::literal("http-url", "http://"),
        ForbiddenPattern::literal("https-url", "https://"),
        ForbiddenPattern::literal("github-workspace", "GITHUB_WORKSPACE"),
        ForbiddenPattern::regex("github-com", r"(?i)github\.com"),
        ForbiddenPattern::regex("api-github-com", r"(?i)api\.github\.com"),
        ForbiddenPattern::regex("raw-githubusercontent", r"(?i)raw\.githubusercontent\.com"),
        ForbiddenPattern::regex("github-word", r"(?i)\bgithub\b"),
        ForbiddenPattern::literal("source-map", "sourceMappingURL="),
        ForbiddenPattern::regex("json-data-url", r"data:application/json(?:;base64)?"),
    ]
});

/// All forbidden patterns, in reporting order.
pub fn forbidden_patterns() -> &'static [ForbiddenPattern] {
    &FORBIDDEN
}
