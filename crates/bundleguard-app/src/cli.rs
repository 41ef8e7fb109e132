use bundleguard_common::SanitizeMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// bundleguard: sanitize, format and verify single-file HTML bundles.
#[derive(Parser, Debug)]
#[command(name = "bundleguard", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log directive override (e.g. debug, bundleguard=trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Build the distributable pair from the staged minified and readable builds.
    Assemble {
        /// Only the minified artifact is required and processed.
        #[arg(long)]
        minify_only: bool,
    },

    /// Rewrite forbidden patterns in place.
    Sanitize {
        /// Replacement table (escape-unicode, mangle-ascii). Defaults to the
        /// configured standalone mode.
        #[arg(long)]
        mode: Option<SanitizeMode>,

        /// Files to sanitize. Defaults to the readable distributable.
        files: Vec<PathBuf>,
    },

    /// Pretty-print inline <style> blocks in place.
    FormatCss {
        /// Files to format. Defaults to the readable distributable.
        files: Vec<PathBuf>,
    },

    /// Fail if any forbidden pattern remains.
    Verify {
        /// Print the reports as JSON on stdout.
        #[arg(long)]
        json: bool,

        /// Files to check. Defaults to both distributables.
        files: Vec<PathBuf>,
    },

    /// Check the readable distributable's inline styles against the minified one.
    CompareStyles,

    /// Run assemble, format-css, sanitize and verify in sequence.
    Package {
        #[arg(long)]
        minify_only: bool,
    },

    /// Write a documented default config file.
    InitConfig {
        #[arg(default_value = bundleguard_config::PROJECT_CONFIG_NAME)]
        path: PathBuf,
    },
}

impl Command {
    /// Step tag used for the log span.
    pub fn tag(&self) -> &'static str {
        match self {
            Command::Assemble { .. } => "assemble",
            Command::Sanitize { .. } => "sanitize",
            Command::FormatCss { .. } => "format-css",
            Command::Verify { .. } => "verify",
            Command::CompareStyles => "compare-styles",
            Command::Package { .. } => "package",
            Command::InitConfig { .. } => "init-config",
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
