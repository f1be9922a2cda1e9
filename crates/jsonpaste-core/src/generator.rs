//! The code generator seam and its subprocess implementation.
//!
//! [`CodeGenerator`] is what the [`Dispatcher`](crate::Dispatcher) calls once
//! per run. [`ProcessGenerator`] launches the external generator; tests and
//! embedders can substitute their own implementation.

use crate::command::{self, INSTALL_INSTRUCTIONS};
use crate::outcome::{FailureKind, InvocationResult};
use crate::{Error, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Windows process creation flag that suppresses the console window.
#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Everything the generator needs for one run.
#[derive(Debug, Clone, Copy)]
pub struct Invocation<'a> {
    /// File holding the source text
    pub input: &'a Path,
    /// Lower-cased language identifier, passed through as `--lang`
    pub language: &'a str,
    /// Passed through as `--top-level`
    pub top_level: &'a str,
    /// Maximum run time
    pub timeout: Duration,
}

/// Turns an input file into generated source text.
///
/// Implementations report every outcome through [`InvocationResult`] and
/// never panic on generator misbehaviour.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use jsonpaste_core::{CodeGenerator, Invocation, InvocationResult};
/// use tokio_util::sync::CancellationToken;
///
/// #[derive(Debug)]
/// struct Fixed;
///
/// #[async_trait]
/// impl CodeGenerator for Fixed {
///     async fn generate(
///         &self,
///         invocation: &Invocation<'_>,
///         _cancel: &CancellationToken,
///     ) -> InvocationResult {
///         InvocationResult::Success(format!("type {} = unknown;", invocation.top_level))
///     }
/// }
/// ```
#[async_trait]
pub trait CodeGenerator: Send + Sync {
    /// Runs the generator once.
    async fn generate(
        &self,
        invocation: &Invocation<'_>,
        cancel: &CancellationToken,
    ) -> InvocationResult;
}

/// Launches the external generator as a child process.
///
/// The executable is resolved on every call, so installing the generator
/// while a host is running takes effect on the next paste.
#[derive(Debug, Clone, Default)]
pub struct ProcessGenerator {
    executable: Option<PathBuf>,
}

impl ProcessGenerator {
    /// Creates a generator that looks up `quicktype` on `PATH`.
    #[must_use]
    pub const fn new() -> Self {
        Self { executable: None }
    }

    /// Creates a generator for an explicit executable path.
    #[must_use]
    pub fn with_executable(executable: Option<PathBuf>) -> Self {
        Self { executable }
    }

    /// Configured executable, if any.
    #[must_use]
    pub fn executable(&self) -> Option<&Path> {
        self.executable.as_deref()
    }

    /// Resolves the executable that would be launched.
    ///
    /// # Errors
    ///
    /// Returns an executable error if nothing usable is found.
    pub fn resolve(&self) -> Result<PathBuf> {
        command::resolve_executable(self.executable.as_deref())
    }

    /// Runs `<executable> --version` and returns the trimmed output.
    ///
    /// # Errors
    ///
    /// Returns an error if the executable cannot be resolved or launched,
    /// exits non-zero, or does not answer within `timeout`.
    pub async fn version(&self, timeout: Duration) -> Result<(PathBuf, String)> {
        let executable = self.resolve()?;
        let mut cmd = base_command(&executable);
        cmd.arg("--version");

        let output = tokio::time::timeout(timeout, cmd.output())
            .await
            .map_err(|_| Error::InvalidExecutable {
                reason: format!(
                    "{} --version did not answer within {timeout:?}",
                    executable.display()
                ),
            })?
            .map_err(|e| Error::io(format!("launching {}", executable.display()), e))?;

        if !output.status.success() {
            return Err(Error::InvalidExecutable {
                reason: format!(
                    "{} --version exited with {}: {}",
                    executable.display(),
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok((executable, version))
    }
}

#[async_trait]
impl CodeGenerator for ProcessGenerator {
    async fn generate(
        &self,
        invocation: &Invocation<'_>,
        cancel: &CancellationToken,
    ) -> InvocationResult {
        let executable = match self.resolve() {
            Ok(path) => path,
            Err(e) => {
                warn!("Generator unavailable: {e}");
                return tool_not_found(&e.to_string());
            }
        };

        let mut cmd = base_command(&executable);
        cmd.args(command::generator_args(
            invocation.language,
            invocation.top_level,
            invocation.input,
        ));

        debug!(
            "Launching {} --lang {} --top-level {} {}",
            executable.display(),
            invocation.language,
            invocation.top_level,
            invocation.input.display()
        );

        let child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) => {
                warn!("Failed to launch {}: {e}", executable.display());
                return tool_not_found(&format!("Failed to launch {}: {e}", executable.display()));
            }
        };

        // Dropping the wait future drops the child, and kill_on_drop ends it.
        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                info!("Generation cancelled");
                InvocationResult::failure(FailureKind::Cancelled, "Code generation was cancelled.")
            }
            waited = tokio::time::timeout(invocation.timeout, child.wait_with_output()) => {
                match waited {
                    Err(_) => {
                        warn!("Generator timed out after {:?}", invocation.timeout);
                        InvocationResult::failure(
                            FailureKind::TimedOut,
                            format!(
                                "Code generation did not finish within {:?}.",
                                invocation.timeout
                            ),
                        )
                    }
                    Ok(Err(e)) => InvocationResult::failure(
                        FailureKind::GenerationError,
                        format!("Failed to collect generator output: {e}"),
                    ),
                    Ok(Ok(output)) => translate_output(&output),
                }
            }
        }
    }
}

fn base_command(executable: &Path) -> Command {
    let mut cmd = Command::new(executable);
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    #[cfg(windows)]
    cmd.creation_flags(CREATE_NO_WINDOW);

    cmd
}

fn translate_output(output: &Output) -> InvocationResult {
    if output.status.success() {
        debug!("Generator produced {} bytes", output.stdout.len());
        return InvocationResult::Success(String::from_utf8_lossy(&output.stdout).into_owned());
    }

    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    warn!("Generator exited with {}", output.status);
    let message = if stderr.trim().is_empty() {
        format!("quicktype exited with {} and printed no diagnostics.", output.status)
    } else {
        stderr
    };
    InvocationResult::failure(FailureKind::GenerationError, message)
}

fn tool_not_found(reason: &str) -> InvocationResult {
    InvocationResult::failure(
        FailureKind::ToolNotFound,
        format!("{reason}\n\n{INSTALL_INSTRUCTIONS}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_executable() {
        assert!(ProcessGenerator::new().executable().is_none());
        let generator = ProcessGenerator::with_executable(Some(PathBuf::from("/opt/qt")));
        assert_eq!(generator.executable(), Some(Path::new("/opt/qt")));
    }

    #[tokio::test]
    async fn test_invalid_configured_executable_is_tool_not_found() {
        let generator = ProcessGenerator::with_executable(Some(PathBuf::from("relative/qt")));
        let invocation = Invocation {
            input: Path::new("/tmp/unused.json"),
            language: "go",
            top_level: "Foo",
            timeout: Duration::from_secs(1),
        };

        let result = generator
            .generate(&invocation, &CancellationToken::new())
            .await;
        let failure = result.into_result().unwrap_err();
        assert_eq!(failure.kind, FailureKind::ToolNotFound);
        assert!(failure.message.contains("npm install -g quicktype"));
    }

    #[tokio::test]
    async fn test_version_of_invalid_executable_fails() {
        let generator = ProcessGenerator::with_executable(Some(PathBuf::from("qt")));
        let err = generator.version(Duration::from_secs(1)).await.unwrap_err();
        assert!(err.is_executable_error());
    }
}
