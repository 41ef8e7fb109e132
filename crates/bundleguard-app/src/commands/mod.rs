//! Subcommand implementations.
//!
//! Each step runs inside a span named after its tag, so every log line
//! says which pipeline stage emitted it.

mod assemble;
mod compare_styles;
mod format_css;
mod init_config;
mod package;
mod sanitize;
mod verify;

#[cfg(test)]
mod tests;

use bundleguard_common::Result;
use bundleguard_config::BundleguardConfig;
use std::path::PathBuf;
use tracing::info_span;

use crate::cli::Command;

/// Run one subcommand to completion.
pub fn dispatch(command: &Command, config: &BundleguardConfig) -> Result<()> {
    in_step(command.tag(), || match command {
        Command::Assemble { minify_only } => assemble::run(config, *minify_only),
        Command::Sanitize { mode, files } => sanitize::run(config, *mode, files),
        Command::FormatCss { files } => format_css::run(config, files),
        Command::Verify { json, files } => verify::run(config, *json, files),
        Command::CompareStyles => compare_styles::run(config),
        Command::Package { minify_only } => package::run(config, *minify_only),
        Command::InitConfig { path } => init_config::run(path),
    })
}

/// Run `f` inside the log span for step `tag`.
pub(crate) fn in_step<T>(tag: &'static str, f: impl FnOnce() -> T) -> T {
    info_span!("step", tag = %tag).in_scope(f)
}

/// Explicit file arguments, or the readable distributable when none given.
fn targets_or_readable(config: &BundleguardConfig, files: &[PathBuf]) -> Vec<PathBuf> {
    if files.is_empty() {
        vec![config.paths.readable_path()]
    } else {
        files.to_vec()
    }
}
