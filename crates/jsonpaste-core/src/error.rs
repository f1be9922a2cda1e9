//! Error types for JSON paste infrastructure.
//!
//! These errors describe failures of the machinery around a generation
//! (configuration, I/O, executable resolution). Outcomes of a generation
//! itself are reported through [`InvocationResult`](crate::InvocationResult)
//! instead, so a caller always receives exactly one user-facing message.
//!
//! # Examples
//!
//! ```
//! use jsonpaste_core::{Error, Result};
//!
//! fn check_timeout(secs: u64) -> Result<()> {
//!     if secs == 0 {
//!         return Err(Error::ConfigError {
//!             message: "timeout must be greater than zero".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_timeout(0).unwrap_err();
//! assert!(err.is_config_error());
//! ```

use thiserror::Error;

/// Main error type for the JSON paste workspace.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    ///
    /// Raised when configuration is invalid, missing required fields,
    /// or contains contradictory settings.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// The configured generator executable failed validation.
    ///
    /// Raised for paths that are relative, missing, not a file, not
    /// executable, or span more than one line.
    #[error("Invalid generator executable: {reason}")]
    InvalidExecutable {
        /// Description of the problem
        reason: String,
    },

    /// The generator executable could not be located.
    #[error("Generator executable not found: {name}")]
    ExecutableNotFound {
        /// Name or path that was looked up
        name: String,
    },

    /// Filesystem or process I/O failed.
    #[error("I/O error while {action}")]
    Io {
        /// What was being attempted
        action: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid argument error.
    ///
    /// Raised when CLI arguments or function parameters are invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Wraps an I/O error with a description of the failed action.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonpaste_core::Error;
    ///
    /// let err = Error::io("reading clipboard", std::io::Error::other("denied"));
    /// assert!(err.is_io_error());
    /// assert_eq!(err.to_string(), "I/O error while reading clipboard");
    /// ```
    #[must_use]
    pub fn io(action: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            action: action.into(),
            source,
        }
    }

    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if the generator could not be found or is unusable.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonpaste_core::Error;
    ///
    /// let err = Error::ExecutableNotFound {
    ///     name: "quicktype".to_string(),
    /// };
    /// assert!(err.is_executable_error());
    /// ```
    #[must_use]
    pub const fn is_executable_error(&self) -> bool {
        matches!(
            self,
            Self::ExecutableNotFound { .. } | Self::InvalidExecutable { .. }
        )
    }

    /// Returns `true` if this is an I/O error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

/// Result type alias for JSON paste operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_detection() {
        let err = Error::ConfigError {
            message: "Invalid configuration".to_string(),
        };
        assert!(err.is_config_error());
        assert!(!err.is_executable_error());
    }

    #[test]
    fn test_executable_error_detection() {
        let err = Error::InvalidExecutable {
            reason: "not a file".to_string(),
        };
        assert!(err.is_executable_error());
        assert!(!err.is_io_error());
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;

        let err = Error::io("writing temp file", std::io::Error::other("disk full"));
        assert!(err.is_io_error());
        assert_eq!(err.source().unwrap().to_string(), "disk full");
    }

    #[test]
    fn test_error_display() {
        let err = Error::ExecutableNotFound {
            name: "quicktype".to_string(),
        };
        assert_eq!(err.to_string(), "Generator executable not found: quicktype");
    }
}
