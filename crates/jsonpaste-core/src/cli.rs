//! CLI-facing types shared by hosts of the dispatcher.
//!
//! # Examples
//!
//! ```
//! use jsonpaste_core::cli::{ExitCode, OutputFormat};
//!
//! let format = OutputFormat::Pretty;
//! assert_eq!(format.as_str(), "pretty");
//!
//! let code = ExitCode::SUCCESS;
//! assert_eq!(code.as_i32(), 0);
//! ```

use std::fmt;
use std::str::FromStr;

/// CLI output format for reports (not for generated code, which is always raw).
///
/// # Examples
///
/// ```
/// use jsonpaste_core::cli::OutputFormat;
///
/// let format: OutputFormat = "json".parse().unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// JSON output for machine parsing
    Json,
    /// Plain text output for scripts
    Text,
    /// Pretty-printed output with colors for human reading
    #[default]
    Pretty,
}

impl OutputFormat {
    /// All accepted format names.
    pub const NAMES: [&'static str; 3] = ["json", "text", "pretty"];

    /// Returns the string representation of the format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
            Self::Pretty => "pretty",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        [Self::Json, Self::Text, Self::Pretty]
            .into_iter()
            .find(|format| format.as_str() == wanted)
            .ok_or_else(|| {
                crate::Error::InvalidArgument(format!(
                    "unknown format '{s}', expected one of: {}",
                    Self::NAMES.join(", ")
                ))
            })
    }
}

/// Process exit status of the CLI.
///
/// Failure kinds map onto these through
/// [`FailureKind::exit_code`](crate::FailureKind::exit_code).
///
/// # Examples
///
/// ```
/// use jsonpaste_core::cli::ExitCode;
///
/// assert!(ExitCode::SUCCESS.is_success());
/// assert!(!ExitCode::GENERATOR_ERROR.is_success());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Code was generated and delivered.
    pub const SUCCESS: Self = Self(0);

    /// Anything not covered below, e.g. an unreadable config file.
    pub const ERROR: Self = Self(1);

    /// Empty source, unknown language or unusable target.
    pub const INVALID_INPUT: Self = Self(2);

    /// Generator missing or exited non-zero.
    pub const GENERATOR_ERROR: Self = Self(3);

    /// Generator timed out or was interrupted.
    pub const TIMEOUT: Self = Self(4);

    /// Raw process status.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }

    /// `true` for [`ExitCode::SUCCESS`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.0 == Self::SUCCESS.0
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        // Codes are 0..=4.
        Self::from(u8::try_from(code.0).unwrap_or(1))
    }
}
