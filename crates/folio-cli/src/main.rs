//! Folio CLI
//!
//! Serve the portfolio site and inspect its case studies.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use folio_cli::config_handlers::handle_config_command;
use folio_cli::{Cli, Command, FolioConfig, commands, logging};
use folio_core::ConfigManager;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();
    let verbose = cli.verbose;

    match cli.command {
        // Config subcommands must work even when the file is broken.
        Command::Config { action } => {
            logging::init(verbose, &FolioConfig::default().logging.level);
            handle_config_command(config_path, action)?;
        }
        Command::Serve { host, port } => {
            let config = setup(config_path, verbose)?;
            commands::cmd_serve(&config, host, port).await?;
        }
        Command::List { json } => {
            setup(config_path, verbose)?;
            commands::cmd_list(json)?;
        }
        Command::Show { segments, json } => {
            setup(config_path, verbose)?;
            commands::cmd_show(&segments, json)?;
        }
    }
    Ok(())
}

/// Load configuration, then start logging at the configured level.
fn setup(config_path: Option<&str>, verbose: bool) -> Result<FolioConfig> {
    let config = FolioConfig::load(config_path).context("Failed to load configuration")?;
    logging::init(verbose, &config.logging.level);
    tracing::debug!(?config, "Loaded configuration");
    Ok(config)
}
