//! Shared validation helpers used by the section validators.

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error unless `value` is a bare file name (non-empty, no separators).
pub(crate) fn validate_file_name(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{name} must not be empty"));
    } else if value.contains(['/', '\\']) || value == "." || value == ".." {
        errors.push(format!("{name} = '{value}' must be a bare file name"));
    }
}
