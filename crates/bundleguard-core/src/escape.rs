//! JavaScript `\uXXXX` escapes.

/// The six-character JavaScript escape for `c`: backslash, `u`, and four
/// lowercase hex digits of the code point.
///
/// Only meaningful for BMP characters, which is all the sanitizer ever
/// escapes.
pub fn js_escape(c: char) -> String {
    format!("\\u{:04x}", c as u32)
}
