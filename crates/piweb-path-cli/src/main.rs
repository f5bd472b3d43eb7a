//! pipath entry point.

use anyhow::Result;
use clap::Parser;
use piweb_path_cli::{Cli, Config, commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.level.as_str().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(config = ?cli.config, "Configuration loaded");

    match commands::run(&cli.command, &config) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Command failed: {}", e);
            Err(e.into())
        }
    }
}
