//! Command execution and runtime logic.
//!
//! Contains logging initialization and the command router.

use anyhow::Result;
use jsonpaste_core::cli::{ExitCode, OutputFormat};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Commands;
use crate::clipboard::SystemClipboard;
use crate::commands;
use crate::commands::config::Config;

/// Builds the log filter.
///
/// `--verbose` forces debug, then `RUST_LOG`, then the configured level.
#[must_use]
pub fn log_filter(verbose: bool, configured_level: &str) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured_level))
    }
}

/// Initializes logging infrastructure.
///
/// Logs go to stderr so stdout carries only generated code and reports.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: bool, configured_level: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(log_filter(verbose, configured_level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

/// Executes the specified CLI command.
///
/// Routes commands to their respective handlers and returns an exit code.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub async fn execute_command(
    command: Commands,
    config: &Config,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    match command {
        Commands::Paste(args) => {
            commands::paste::run(args, config, &SystemClipboard::new(), output_format).await
        }
        Commands::Languages => commands::languages::run(output_format).await,
        Commands::Check { executable } => {
            commands::check::run(executable, config, output_format).await
        }
        Commands::Config { action } => commands::config::run(action, output_format).await,
        Commands::Completions { shell } => {
            use crate::cli::Cli;
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            commands::completions::run(shell, &mut cmd).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_forces_debug() {
        assert_eq!(log_filter(true, "error").to_string(), "debug");
    }
}
