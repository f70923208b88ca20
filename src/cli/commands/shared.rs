//! Shared components for CLI commands
//!
//! Logging setup and layered configuration loading used by the analyze
//! command and the format listing.

use crate::cli::args::Args;
use crate::config::Config;
use crate::constants::LOG_TARGET;
use crate::Result;
use std::path::Path;
use tracing::{debug, info};

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(args: &Args) -> Result<Config> {
    let default_path = Config::default_config_path();
    load_configuration_with(args, default_path.as_deref(), |key| std::env::var(key).ok())
}

/// Same as [`load_configuration`] with the default config file location and
/// the environment supplied by the caller
pub fn load_configuration_with<F>(
    args: &Args,
    default_config: Option<&Path>,
    lookup: F,
) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    info!("Loading configuration");

    let config_file = args
        .config_file
        .as_deref()
        .or(default_config.filter(|path| path.exists()));
    match config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => info!("No config file found, using defaults and environment variables"),
    }

    let mut config = Config::load_layered(args.config_file.as_deref(), default_config)?;
    config.apply_env_overrides(lookup)?;

    let config = args.apply_to_config(config);
    config.validate()?;

    debug!("Effective configuration: {:?}", config);
    Ok(config)
}
