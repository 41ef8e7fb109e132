//! The sanitizer's rule table.
//!
//! Rules run in order, each over the previous rule's output. The github
//! rules come after `github-workspace` so a word-bounded `GITHUB` exposed
//! by the `mangle-ascii` workspace rewrite is caught too.

use bundleguard_common::SanitizeMode;
use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::escape::js_escape;

/// What a rule writes in place of a match.
#[derive(Debug)]
pub(crate) enum Rewrite {
    /// Replace the whole match with a fixed string per mode.
    Fixed { escaped: String, mangled: &'static str },
    /// Case-aware escape of the `g` and `h` in a captured `github` token.
    Github,
}

#[derive(Debug)]
pub struct SanitizeRule {
    pub name: &'static str,
    pub(crate) re: Regex,
    pub(crate) rewrite: Rewrite,
}

impl SanitizeRule {
    fn fixed(name: &'static str, literal: &str, escaped: String, mangled: &'static str) -> Self {
        Self {
            name,
            re: compile(&regex::escape(literal)),
            rewrite: Rewrite::Fixed { escaped, mangled },
        }
    }

    fn github(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            re: compile(pattern),
            rewrite: Rewrite::Github,
        }
    }

    /// Apply this rule to `text`, returning the rewritten text and the number
    /// of replacements made.
    pub(crate) fn apply(&self, text: &str, mode: SanitizeMode) -> (String, usize) {
        let mut count = 0usize;
        let replaced = self.re.replace_all(text, |caps: &Captures<'_>| {
            count += 1;
            match &self.rewrite {
                Rewrite::Fixed { escaped, mangled } => match mode {
                    SanitizeMode::EscapeUnicode => escaped.clone(),
                    SanitizeMode::MangleAscii => (*mangled).to_string(),
                },
                Rewrite::Github => escape_github(caps),
            }
        });
        (replaced.into_owned(), count)
    }
}

fn compile(pattern: &str) -> Regex {
    // Static pattern literals; a failure here is a programming error caught by the tests.
    Regex::new(pattern).expect("sanitize: static regex pattern must compile")
}

/// Rewrite a `(g)(it)(h)(ub)(suffix)?` capture.
///
/// The leading letter is escaped as itself. The `h` is escaped as `H` or
/// `h` according to the case of the leading letter, so `GitHub` and `Github`
/// both come out as an escaped `G`, `it`, an escaped `H`, `ub`.
pub(crate) fn escape_github(caps: &Captures<'_>) -> String {
    let first = caps[1].chars().next().unwrap_or('g');
    let h = if first.is_ascii_uppercase() { 'H' } else { 'h' };
    let suffix = caps.get(5).map_or("", |m| m.as_str());
    format!(
        "{}{}{}{}{}",
        js_escape(first),
        &caps[2],
        js_escape(h),
        &caps[4],
        suffix
    )
}

static RULES: LazyLock<Vec<SanitizeRule>> = LazyLock::new(|| {
    let slash = js_escape('/');
    vec![
        SanitizeRule::fixed("http-url", "http://", format!("http:{slash}{slash}"), "hxxp://"),
        SanitizeRule::fixed(
            "https-url",
            "https://",
            format!("https:{slash}{slash}"),
            "hxxps://",
        ),
        SanitizeRule::fixed(
            "github-workspace",
            "GITHUB_WORKSPACE",
            format!("{}ITHUB_WORKSPACE", js_escape('G')),
            "GITHUB-WORKSPACE",
        ),
        SanitizeRule::github("githubusercontent", r"(?i)(g)(it)(h)(ub)(usercontent)"),
        SanitizeRule::github("github-com", r"(?i)(g)(it)(h)(ub)(\.com)"),
        SanitizeRule::github("github-word", r"(?i)\b(g)(it)(h)(ub)\b"),
        SanitizeRule::fixed(
            "source-map",
            "sourceMappingURL=",
            format!("sourceMapping{}RL=", js_escape('U')),
            "sourceMappingURL_disabled=",
        ),
        SanitizeRule::fixed(
            "json-data-url",
            "data:application/json",
            format!("data:application{slash}json"),
            "data:application/x-unparsed-json",
        ),
    ]
});

/// All sanitize rules, in application order.
pub fn sanitize_rules() -> &'static [SanitizeRule] {
    &RULES
}
