//! Inline `<style>` block extraction and in-document reformatting.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::reformat::reformat_with_indent;

static STYLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)(<style\b[^>]*>)(.*?)(</style\s*>)")
        .expect("style block: static regex must compile")
});

/// Raw CSS of every `<style>` block, in document order.
pub fn style_blocks(document: &str) -> Vec<&str> {
    STYLE_BLOCK
        .captures_iter(document)
        .filter_map(|caps| caps.get(2).map(|m| m.as_str()))
        .collect()
}

/// Reformat every non-blank `<style>` block in `document`.
///
/// Each block becomes `<style ...>`, newline, the formatted CSS, newline,
/// `</style>`. Returns the new document and the number of blocks rewritten.
pub fn format_style_blocks(document: &str, indent: &str) -> (String, usize) {
    let mut count = 0usize;
    let formatted = STYLE_BLOCK.replace_all(document, |caps: &Captures<'_>| {
        let css = &caps[2];
        if css.trim().is_empty() {
            return caps[0].to_string();
        }
        count += 1;
        format!(
            "{}\n{}\n{}",
            &caps[1],
            reformat_with_indent(css, indent),
            &caps[3]
        )
    });
    (formatted.into_owned(), count)
}
