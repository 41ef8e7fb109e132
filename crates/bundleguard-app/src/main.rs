mod cli;
mod commands;

use bundleguard_config::BundleguardConfig;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use cli::Command;

const DEFAULT_DIRECTIVE: &str = "bundleguard=info";

/// `--log-level` wins, then `RUST_LOG`, then the config file's level.
fn env_filter(cli_level: Option<&str>, config: Option<&BundleguardConfig>) -> EnvFilter {
    if let Some(level) = cli_level {
        return EnvFilter::new(level);
    }
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let directive = config.map_or_else(|| DEFAULT_DIRECTIVE.to_string(), |c| c.logging.directive());
    EnvFilter::new(directive)
}

fn main() -> ExitCode {
    let args = cli::parse();

    // init-config must work even when an existing config fails to load.
    let loaded = match &args.command {
        Command::InitConfig { .. } => Ok(BundleguardConfig::default()),
        _ => bundleguard_config::load_config(args.config.as_deref()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(args.log_level.as_deref(), loaded.as_ref().ok()))
        .with_writer(std::io::stderr)
        .init();

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };
    debug!(command = args.command.tag(), "config loaded");

    match commands::dispatch(&args.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
