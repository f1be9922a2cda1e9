//! jsonpaste command-line entry point.

use anyhow::Result;
use clap::Parser;
use jsonpaste_cli::cli::Cli;
use jsonpaste_cli::commands::config;
use jsonpaste_cli::runner::{execute_command, init_logging};
use jsonpaste_core::cli::OutputFormat;
use tracing::warn;

#[tokio::main]
async fn main() -> Result<std::process::ExitCode> {
    let cli = Cli::parse();

    // Logging needs the configured level, so load the config first and
    // report a broken file once the subscriber is up.
    let loaded = config::load_config();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    init_logging(cli.verbose, &config.general.log_level)?;
    if let Err(e) = &loaded {
        warn!("Ignoring configuration: {e:#}");
    }

    let output_format = match &cli.format {
        Some(format) => format
            .parse::<OutputFormat>()
            .map_err(|e| anyhow::anyhow!("{e}"))?,
        None => config.output_format()?,
    };

    let exit_code = execute_command(cli.command, &config, output_format).await?;
    Ok(exit_code.into())
}
