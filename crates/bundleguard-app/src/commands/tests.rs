//! End-to-end tests for the subcommands against a temporary layout.

use super::*;
use bundleguard_common::{BundleguardError, PipelineError};
use std::path::Path;

const MINIFIED: &str = "<!doctype html><html><head><style>.a{color:red;background:url(data:image/png;base64,AA==)}@media (max-width:600px){.b{display:none}}</style></head>\
<body><script>const u=\"https://raw.githubusercontent.com/org/repo/main/x.json\";//# sourceMappingURL=data:application/json;base64,e30=\n</script></body></html>";

fn config_at(root: &Path) -> BundleguardConfig {
    let mut config = BundleguardConfig::default();
    config.paths = config.paths.rooted_at(root);
    config
}

fn stage(config: &BundleguardConfig, readable: Option<&str>) {
    std::fs::create_dir_all(&config.paths.out_dir).unwrap();
    std::fs::create_dir_all(&config.paths.staging_dir).unwrap();
    std::fs::write(config.paths.staging_path(), MINIFIED).unwrap();
    if let Some(text) = readable {
        std::fs::write(config.paths.readable_path(), text).unwrap();
    }
}

#[test]
fn package_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_at(dir.path());
    stage(&config, Some(MINIFIED));
    std::fs::write(config.paths.out_dir.join("bundle-stats.html"), "x").unwrap();

    dispatch(&Command::Package { minify_only: false }, &config).unwrap();

    let readable = std::fs::read_to_string(config.paths.readable_path()).unwrap();
    let minified = std::fs::read_to_string(config.paths.minified_path()).unwrap();
    assert!(readable.contains("<style>\n.a {\n  color:red;\n"));
    assert!(bundleguard_core::scan(&readable, 5).is_empty());
    assert!(bundleguard_core::scan(&minified, 5).is_empty());
    assert!(bundleguard_core::compare_styles(&readable, &minified).is_ok());
    assert!(!config.paths.out_dir.join("bundle-stats.html").exists());

    dispatch(&Command::CompareStyles, &config).unwrap();
}

#[test]
fn package_minify_only() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_at(dir.path());
    stage(&config, None);

    dispatch(&Command::Package { minify_only: true }, &config).unwrap();
    assert!(config.paths.minified_path().is_file());
    assert!(!config.paths.readable_path().exists());
}

#[test]
fn assemble_without_staging_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_at(dir.path());

    let err = dispatch(&Command::Assemble { minify_only: false }, &config).unwrap_err();
    assert!(matches!(
        err,
        BundleguardError::Pipeline(PipelineError::MissingInputFile(_))
    ));
    assert!(!config.paths.minified_path().exists());
}

#[test]
fn verify_fails_on_dirty_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_at(dir.path());
    let path = dir.path().join("dirty.html");
    std::fs::write(&path, "<a href=\"https://github.com\">x</a>").unwrap();

    let err = dispatch(
        &Command::Verify {
            json: false,
            files: vec![path.clone()],
        },
        &config,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        BundleguardError::Pipeline(PipelineError::VerificationFailed { .. })
    ));

    dispatch(
        &Command::Sanitize {
            mode: None,
            files: vec![path.clone()],
        },
        &config,
    )
    .unwrap();
    dispatch(
        &Command::Verify {
            json: true,
            files: vec![path],
        },
        &config,
    )
    .unwrap();
}

#[test]
fn verify_defaults_skip_absent_distributables() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_at(dir.path());
    std::fs::create_dir_all(&config.paths.out_dir).unwrap();

    let err = verify::verify_targets(&config, &[]).unwrap_err();
    assert!(matches!(
        err,
        BundleguardError::Pipeline(PipelineError::MissingInputFile(_))
    ));

    std::fs::write(config.paths.minified_path(), "<p>ok</p>").unwrap();
    let targets = verify::verify_targets(&config, &[]).unwrap();
    assert_eq!(targets, vec![config.paths.minified_path()]);
}

#[test]
fn sanitize_defaults_to_readable() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_at(dir.path());
    std::fs::create_dir_all(&config.paths.out_dir).unwrap();
    std::fs::write(config.paths.readable_path(), "GITHUB_WORKSPACE").unwrap();

    dispatch(
        &Command::Sanitize {
            mode: None,
            files: vec![],
        },
        &config,
    )
    .unwrap();
    // standalone mode defaults to mangle-ascii
    let text = std::fs::read_to_string(config.paths.readable_path()).unwrap();
    assert!(text.ends_with("-WORKSPACE"));
}

#[test]
fn format_css_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_at(dir.path());
    let err = dispatch(&Command::FormatCss { files: vec![] }, &config).unwrap_err();
    assert!(matches!(
        err,
        BundleguardError::Pipeline(PipelineError::MissingInputFile(_))
    ));
}

#[test]
fn init_config_writes_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bundleguard.toml");
    dispatch(&Command::InitConfig { path: path.clone() }, &config_at(dir.path())).unwrap();
    let loaded = bundleguard_config::load_config(Some(&path)).unwrap();
    assert_eq!(loaded, BundleguardConfig::default());
}
