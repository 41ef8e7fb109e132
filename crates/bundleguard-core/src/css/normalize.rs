//! Whitespace- and comment-insensitive CSS comparison form.

use regex::Regex;
use std::sync::LazyLock;

use super::reformat::is_css_whitespace;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[ \t\n\r\x0C]+").expect("normalize: static regex must compile")
});

// Runs after WHITESPACE, so any whitespace left is a single space.
static AROUND_PUNCT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r" ?([{};,>]) ?").expect("normalize: static regex must compile")
});

static AFTER_COLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r": ").expect("normalize: static regex must compile"));

/// Remove `/* ... */` comments, leaving string literals alone.
pub fn strip_comments(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    let mut chars = css.chars().peekable();
    let mut quote: Option<char> = None;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            '"' | '\'' => {
                quote = Some(c);
                out.push(c);
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for inner in chars.by_ref() {
                    if prev == '*' && inner == '/' {
                        break;
                    }
                    prev = inner;
                }
                // A comment separates tokens like whitespace does
                out.push(' ');
            }
            _ => out.push(c),
        }
    }
    out
}

/// Canonical comparison form of a stylesheet.
///
/// Strips comments, collapses whitespace, drops whitespace around
/// `{ } ; , >` and after `:`, and drops a `;` directly before `}`. The
/// space before a `:` is only dropped inside declarations and inside
/// parentheses, since in a selector `.a :hover` and `.a:hover` differ.
/// Two stylesheets that differ only in layout normalize to the same string.
pub fn normalize(css: &str) -> String {
    let stripped = strip_comments(css);
    let collapsed = WHITESPACE.replace_all(&stripped, " ");
    let tight = AROUND_PUNCT.replace_all(&collapsed, "$1");
    let tight = AFTER_COLON.replace_all(&tight, ":");
    let tight = tighten_colons(&tight);

    let mut out = tight.trim_matches(is_css_whitespace).to_string();
    while out.contains(";}") {
        out = out.replace(";}", "}");
    }
    out
}

/// Drop the space before `:` where it carries no meaning.
///
/// The text is cut into segments ending at `{`, `}` or `;`. A segment
/// ending in `{` is a selector or at-rule prelude, where only colons inside
/// parentheses (`(max-width : 600px)`) are tightened. Every other segment
/// holds declarations.
fn tighten_colons(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    let mut rest = css;

    while !rest.is_empty() {
        let end = rest.find(['{', '}', ';']).map_or(rest.len(), |i| i + 1);
        let (segment, tail) = rest.split_at(end);
        let in_prelude = segment.ends_with('{');

        let mut parens = 0usize;
        for c in segment.chars() {
            match c {
                '(' => parens += 1,
                ')' => parens = parens.saturating_sub(1),
                ':' if !in_prelude || parens > 0 => {
                    if out.ends_with(' ') {
                        out.pop();
                    }
                }
                _ => {}
            }
            out.push(c);
        }
        rest = tail;
    }
    out
}
