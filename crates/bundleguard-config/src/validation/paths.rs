use crate::schema::BundleguardConfig;

use super::helpers::validate_file_name;

/// Validate the output layout.
pub(crate) fn validate_paths(errors: &mut Vec<String>, config: &BundleguardConfig) {
    let paths = &config.paths;

    validate_file_name(errors, "paths.readable_name", &paths.readable_name);
    validate_file_name(errors, "paths.minified_name", &paths.minified_name);
    validate_file_name(errors, "paths.staging_name", &paths.staging_name);

    if paths.readable_name == paths.minified_name {
        errors.push(format!(
            "paths.readable_name and paths.minified_name are both '{}'",
            paths.readable_name
        ));
    }

    if paths.out_dir.as_os_str().is_empty() {
        errors.push("paths.out_dir must not be empty".into());
    }
    if paths.staging_dir.as_os_str().is_empty() {
        errors.push("paths.staging_dir must not be empty".into());
    }
    // Assembly removes the staging directory wholesale
    if paths.staging_encloses_out_dir() {
        errors.push(format!(
            "paths.staging_dir = '{}' must not be or contain paths.out_dir = '{}'",
            paths.staging_dir.display(),
            paths.out_dir.display()
        ));
    }
}
