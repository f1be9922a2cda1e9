//! Invocation outcomes.
//!
//! Every run ends in exactly one [`InvocationResult`]: the generated text or a
//! [`Failure`] carrying a message meant to be shown to the user as-is.

use crate::cli::ExitCode;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Why an invocation did not produce code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Source text was empty after trimming.
    EmptyInput,
    /// Target language is not in the supported set.
    UnsupportedLanguage,
    /// There is nowhere to put the generated text.
    NoTarget,
    /// The generator executable could not be found or launched.
    ToolNotFound,
    /// The generator exited with a non-zero status.
    GenerationError,
    /// The generator did not finish within the timeout.
    TimedOut,
    /// The caller cancelled the invocation.
    Cancelled,
}

impl FailureKind {
    /// Stable snake-case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::UnsupportedLanguage => "unsupported_language",
            Self::NoTarget => "no_target",
            Self::ToolNotFound => "tool_not_found",
            Self::GenerationError => "generation_error",
            Self::TimedOut => "timed_out",
            Self::Cancelled => "cancelled",
        }
    }

    /// Exit code a CLI host should report for this failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonpaste_core::FailureKind;
    /// use jsonpaste_core::cli::ExitCode;
    ///
    /// assert_eq!(FailureKind::EmptyInput.exit_code(), ExitCode::INVALID_INPUT);
    /// assert_eq!(FailureKind::TimedOut.exit_code(), ExitCode::TIMEOUT);
    /// ```
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::EmptyInput | Self::UnsupportedLanguage | Self::NoTarget => {
                ExitCode::INVALID_INPUT
            }
            Self::ToolNotFound | Self::GenerationError => ExitCode::GENERATOR_ERROR,
            Self::TimedOut | Self::Cancelled => ExitCode::TIMEOUT,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed invocation: its kind and the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    /// What went wrong
    pub kind: FailureKind,
    /// Message suitable for a modal notification
    pub message: String,
}

impl Failure {
    /// Creates a failure.
    #[must_use]
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Failure {}

/// Result of one dispatcher run. Consumed once by the caller.
///
/// # Examples
///
/// ```
/// use jsonpaste_core::{FailureKind, InvocationResult};
///
/// let ok = InvocationResult::Success("interface Foo {}".to_string());
/// assert_eq!(ok.generated_text(), Some("interface Foo {}"));
///
/// let failed = InvocationResult::failure(FailureKind::GenerationError, "bad token");
/// assert_eq!(failed.failure_kind(), Some(FailureKind::GenerationError));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum InvocationResult {
    /// Generator succeeded; holds its standard output.
    Success(String),
    /// Invocation failed.
    Failure(Failure),
}

impl InvocationResult {
    /// Shorthand for a [`InvocationResult::Failure`].
    #[must_use]
    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::Failure(Failure::new(kind, message))
    }

    /// Returns `true` on success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Generated text, if successful.
    #[must_use]
    pub fn generated_text(&self) -> Option<&str> {
        match self {
            Self::Success(text) => Some(text),
            Self::Failure(_) => None,
        }
    }

    /// Failure kind, if failed.
    #[must_use]
    pub const fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure.kind),
        }
    }

    /// Converts into a standard `Result`.
    ///
    /// # Errors
    ///
    /// Returns the [`Failure`] when the invocation failed.
    pub fn into_result(self) -> Result<String, Failure> {
        match self {
            Self::Success(text) => Ok(text),
            Self::Failure(failure) => Err(failure),
        }
    }
}

impl From<Failure> for InvocationResult {
    fn from(failure: Failure) -> Self {
        Self::Failure(failure)
    }
}

/// Precondition failures detected before anything is written or launched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Source text is empty after trimming.
    #[error("The clipboard is empty. Copy some JSON first.")]
    EmptyInput,

    /// Language is not in the supported set.
    #[error("Language '{language}' is not supported. Supported languages: {supported}")]
    UnsupportedLanguage {
        /// Identifier that was rejected
        language: String,
        /// Comma separated list of accepted identifiers
        supported: String,
    },

    /// No writable destination for the generated text.
    #[error("There is no open document to insert the generated code into.")]
    NoTarget,
}

impl ValidationError {
    /// Corresponding failure kind.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::EmptyInput => FailureKind::EmptyInput,
            Self::UnsupportedLanguage { .. } => FailureKind::UnsupportedLanguage,
            Self::NoTarget => FailureKind::NoTarget,
        }
    }
}

impl From<ValidationError> for Failure {
    fn from(err: ValidationError) -> Self {
        Self::new(err.kind(), err.to_string())
    }
}

impl From<ValidationError> for InvocationResult {
    fn from(err: ValidationError) -> Self {
        Self::Failure(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_accessors() {
        let result = InvocationResult::Success("type Foo struct{}".to_string());
        assert!(result.is_success());
        assert_eq!(result.failure_kind(), None);
        assert_eq!(result.into_result().unwrap(), "type Foo struct{}");
    }

    #[test]
    fn test_failure_accessors() {
        let result = InvocationResult::failure(FailureKind::ToolNotFound, "install it");
        assert!(!result.is_success());
        assert_eq!(result.generated_text(), None);
        let failure = result.into_result().unwrap_err();
        assert_eq!(failure.kind, FailureKind::ToolNotFound);
        assert_eq!(failure.to_string(), "install it");
    }

    #[test]
    fn test_validation_error_conversion() {
        let result: InvocationResult = ValidationError::EmptyInput.into();
        assert_eq!(result.failure_kind(), Some(FailureKind::EmptyInput));

        let failure: Failure = ValidationError::UnsupportedLanguage {
            language: "rust".to_string(),
            supported: "go, java".to_string(),
        }
        .into();
        assert_eq!(failure.kind, FailureKind::UnsupportedLanguage);
        assert!(failure.message.contains("'rust'"));
        assert!(failure.message.contains("go, java"));
    }

    #[test]
    fn test_exit_codes_by_kind() {
        assert_eq!(FailureKind::NoTarget.exit_code(), ExitCode::INVALID_INPUT);
        assert_eq!(
            FailureKind::GenerationError.exit_code(),
            ExitCode::GENERATOR_ERROR
        );
        assert_eq!(FailureKind::Cancelled.exit_code(), ExitCode::TIMEOUT);
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(InvocationResult::failure(
            FailureKind::GenerationError,
            "bad token at line 3",
        ))
        .unwrap();
        assert_eq!(value["status"], "failure");
        assert_eq!(value["data"]["kind"], "generation_error");
        assert_eq!(value["data"]["message"], "bad token at line 3");

        let value = serde_json::to_value(InvocationResult::Success("x".to_string())).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["data"], "x");
    }
}
