//! The CSS pretty-printer.
//!
//! A single left-to-right scan with one character of lookahead. Newlines
//! are only ever inserted at an unquoted, uncommented `{`, `}` or `;`.
//! `{` and `;` inside parentheses are left alone, so string contents and
//! `url(...)` payloads (data URLs included) stay on one line. A `}` always
//! closes a block and resets the parenthesis depth.

/// One indentation level unless configured otherwise.
pub const DEFAULT_INDENT: &str = "  ";

/// CSS whitespace: space, tab, line feed, carriage return, form feed.
/// Other Unicode spaces such as U+00A0 are ordinary characters.
pub(crate) fn is_css_whitespace(c: char) -> bool {
    c.is_ascii_whitespace()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    InString { quote: char, escaped: bool },
    InComment,
}

struct Reformatter<'a> {
    indent: &'a str,
    out: String,
    depth: usize,
    parens: usize,
    state: ScanState,
}

impl<'a> Reformatter<'a> {
    fn new(indent: &'a str, capacity: usize) -> Self {
        Self {
            indent,
            out: String::with_capacity(capacity + capacity / 4),
            depth: 0,
            parens: 0,
            state: ScanState::Normal,
        }
    }

    fn trim_trailing_whitespace(&mut self) {
        let len = self.out.trim_end_matches(is_css_whitespace).len();
        self.out.truncate(len);
    }

    fn push_indent(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str(self.indent);
        }
    }

    fn ends_in_whitespace(&self) -> bool {
        self.out.is_empty() || self.out.ends_with(is_css_whitespace)
    }

    /// Feed one character. `next` is the lookahead; returns true when the
    /// lookahead was consumed as part of a two-character token.
    fn step(&mut self, c: char, next: Option<char>) -> bool {
        match self.state {
            ScanState::InString { quote, escaped } => {
                self.out.push(c);
                self.state = if escaped {
                    ScanState::InString {
                        quote,
                        escaped: false,
                    }
                } else if c == '\\' {
                    ScanState::InString {
                        quote,
                        escaped: true,
                    }
                } else if c == quote {
                    ScanState::Normal
                } else {
                    self.state
                };
                false
            }
            ScanState::InComment => {
                self.out.push(c);
                if c == '*' && next == Some('/') {
                    self.out.push('/');
                    self.state = ScanState::Normal;
                    return true;
                }
                false
            }
            ScanState::Normal => self.step_normal(c, next),
        }
    }

    fn step_normal(&mut self, c: char, next: Option<char>) -> bool {
        match c {
            '/' if next == Some('*') => {
                self.out.push_str("/*");
                self.state = ScanState::InComment;
                return true;
            }
            '"' | '\'' => {
                self.out.push(c);
                self.state = ScanState::InString {
                    quote: c,
                    escaped: false,
                };
            }
            '(' => {
                self.parens += 1;
                self.out.push(c);
            }
            ')' => {
                self.parens = self.parens.saturating_sub(1);
                self.out.push(c);
            }
            '{' if self.parens == 0 => {
                self.trim_trailing_whitespace();
                self.out.push_str(" {\n");
                self.depth += 1;
                self.push_indent();
            }
            '}' => {
                // Closes the block even after an unbalanced `(`
                self.parens = 0;
                self.depth = self.depth.saturating_sub(1);
                self.trim_trailing_whitespace();
                self.out.push('\n');
                self.push_indent();
                self.out.push_str("}\n\n");
                self.push_indent();
            }
            ';' if self.parens == 0 => {
                self.trim_trailing_whitespace();
                self.out.push_str(";\n");
                self.push_indent();
            }
            c if is_css_whitespace(c) => {
                // Collapse runs, and never stack on top of inserted layout.
                if !self.ends_in_whitespace() {
                    self.out.push(' ');
                }
            }
            _ => self.out.push(c),
        }
        false
    }

    fn finish(self) -> String {
        self.out.trim_matches(is_css_whitespace).to_string()
    }
}

/// Reformat CSS with the default two-space indent.
pub fn reformat(css: &str) -> String {
    reformat_with_indent(css, DEFAULT_INDENT)
}

/// Reformat CSS into indented multi-line form.
///
/// Every `{` opens an indented block, every `;` ends its line, and every
/// `}` dedents and is followed by a blank line. Only whitespace layout
/// changes; see [`super::normalize`] for the equivalence this preserves.
pub fn reformat_with_indent(css: &str, indent: &str) -> String {
    let mut fmt = Reformatter::new(indent, css.len());
    let mut chars = css.chars().peekable();

    while let Some(c) = chars.next() {
        if fmt.step(c, chars.peek().copied()) {
            chars.next();
        }
    }

    fmt.finish()
}
