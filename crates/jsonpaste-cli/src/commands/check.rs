//! Checks that the generator executable can be found and started.
//!
//! Runs `<generator> --version` with the same resolution rules `paste` uses,
//! so a missing or broken installation is reported before any paste.

use crate::commands::config::Config;
use anyhow::{Context, Result};
use jsonpaste_core::cli::{ExitCode, OutputFormat};
use jsonpaste_core::command::INSTALL_INSTRUCTIONS;
use jsonpaste_core::{Error, ProcessGenerator};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// How long `--version` may take.
const VERSION_TIMEOUT: Duration = Duration::from_secs(15);

/// Result of a generator check.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CheckReport {
    /// Whether the generator answered
    pub ok: bool,
    /// Resolved executable path, if any
    pub executable: Option<String>,
    /// Reported version
    pub version: Option<String>,
    /// Problem description and remediation
    pub message: Option<String>,
}

/// Checks the generator and builds a report.
pub async fn check_generator(generator: &ProcessGenerator) -> CheckReport {
    match generator.version(VERSION_TIMEOUT).await {
        Ok((path, version)) => {
            info!("Generator {} reports {version}", path.display());
            CheckReport {
                ok: true,
                executable: Some(path.display().to_string()),
                version: Some(version),
                message: None,
            }
        }
        Err(e) => {
            warn!("Generator check failed: {e}");
            let message = if e.is_executable_error() {
                format!("{e}\n\n{INSTALL_INSTRUCTIONS}")
            } else {
                e.to_string()
            };
            let executable = match &e {
                Error::ExecutableNotFound { .. } => None,
                _ => generator.resolve().ok().map(|p| p.display().to_string()),
            };
            CheckReport {
                ok: false,
                executable,
                version: None,
                message: Some(message),
            }
        }
    }
}

/// Runs the check command.
///
/// Returns [`ExitCode::GENERATOR_ERROR`] when the generator is unusable.
///
/// # Errors
///
/// Returns an error if the report cannot be formatted.
pub async fn run(
    executable: Option<PathBuf>,
    config: &Config,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let executable = executable.or_else(|| config.generator.executable.as_ref().map(PathBuf::from));
    let generator = ProcessGenerator::with_executable(executable);

    let report = check_generator(&generator).await;
    let formatted = crate::formatters::format_output(&report, output_format)
        .context("failed to format check report")?;

    if report.ok {
        println!("{formatted}");
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("{formatted}");
        Ok(ExitCode::GENERATOR_ERROR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_executable_reports_install_instructions() {
        let dir = tempfile::tempdir().unwrap();
        let generator = ProcessGenerator::with_executable(Some(dir.path().join("quicktype")));

        let report = check_generator(&generator).await;
        assert!(!report.ok);
        assert!(report.version.is_none());
        let message = report.message.unwrap();
        assert!(message.contains("npm install -g quicktype"), "{message}");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_working_executable_reports_version() {
        use std::os::unix::fs::PermissionsExt;

        let _guard = crate::PROCESS_LOCK.lock().await;
        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join("quicktype");
        std::fs::write(&exe, "#!/bin/sh\necho 'quicktype version 23.1.0'\n").unwrap();
        std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755)).unwrap();

        let report = check_generator(&ProcessGenerator::with_executable(Some(exe.clone()))).await;
        assert!(report.ok, "{report:?}");
        assert_eq!(report.version.as_deref(), Some("quicktype version 23.1.0"));
        assert_eq!(report.executable, Some(exe.display().to_string()));
    }
}
