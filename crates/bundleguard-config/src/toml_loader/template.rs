//! Default TOML config template with documentation comments.

/// Generate the default TOML config content with comments.
pub fn default_config_toml() -> String {
    r##"# bundleguard configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[paths]
# out_dir = "dist"                # readable artifact, and the final distributables
# readable_name = "index.html"
# minified_name = "index.min.html"
# staging_dir = "dist-minify"     # where the minified build lands
# staging_name = "index.html"

[sanitize]
# assemble_mode = "escape-unicode"   # escape-unicode, mangle-ascii
# standalone_mode = "mangle-ascii"

[verify]
# max_samples = 5                 # 1-100 sample offsets per pattern

[css]
# indent = "  "                   # spaces or tabs, at most 8

[logging]
# level = "info"                  # trace, debug, info, warn, error
"##
    .to_string()
}
