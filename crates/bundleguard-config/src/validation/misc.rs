//! Validation for the smaller sections: verify and css.

use crate::schema::BundleguardConfig;

use super::helpers::validate_range;

/// Validate verifier constraints.
pub(crate) fn validate_verify(errors: &mut Vec<String>, config: &BundleguardConfig) {
    validate_range(
        errors,
        "verify.max_samples",
        config.verify.max_samples,
        1,
        100,
    );
}

/// Validate reformatter constraints.
pub(crate) fn validate_css(errors: &mut Vec<String>, config: &BundleguardConfig) {
    let indent = &config.css.indent;
    if indent.chars().count() > 8 {
        errors.push(format!(
            "css.indent is {} characters, at most 8 allowed",
            indent.chars().count()
        ));
    }
    if !indent.chars().all(|c| c == ' ' || c == '\t') {
        errors.push(format!("css.indent = {indent:?} may only contain spaces and tabs"));
    }
}
