//! Dispatcher configuration.
//!
//! # Examples
//!
//! ```
//! use jsonpaste_core::DispatcherConfig;
//! use std::time::Duration;
//!
//! let config = DispatcherConfig::builder()
//!     .timeout(Duration::from_secs(15))
//!     .build();
//!
//! assert_eq!(config.timeout, Duration::from_secs(15));
//! assert!(config.validate().is_ok());
//! ```

use crate::{Error, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Default generator timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Upper bound accepted for the generator timeout.
pub const MAX_TIMEOUT: Duration = Duration::from_secs(600);

/// Settings shared by every invocation of a dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatcherConfig {
    /// Absolute path of the generator. `None` looks up `quicktype` on `PATH`.
    pub executable: Option<PathBuf>,

    /// How long the generator may run before it is killed.
    /// Default: 60 seconds
    pub timeout: Duration,

    /// Directory for temporary input files. `None` uses the system temp dir.
    pub temp_dir: Option<PathBuf>,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            executable: None,
            timeout: DEFAULT_TIMEOUT,
            temp_dir: None,
        }
    }
}

impl DispatcherConfig {
    /// Creates a new configuration builder.
    #[must_use]
    pub fn builder() -> DispatcherConfigBuilder {
        DispatcherConfigBuilder::default()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the timeout is zero or above
    /// [`MAX_TIMEOUT`], or if a configured path is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonpaste_core::DispatcherConfig;
    /// use std::time::Duration;
    ///
    /// let mut config = DispatcherConfig::default();
    /// config.timeout = Duration::ZERO;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.timeout.is_zero() {
            return Err(Error::ConfigError {
                message: "generator timeout must be greater than zero".to_string(),
            });
        }

        if self.timeout > MAX_TIMEOUT {
            return Err(Error::ConfigError {
                message: format!(
                    "generator timeout cannot exceed {} seconds",
                    MAX_TIMEOUT.as_secs()
                ),
            });
        }

        if let Some(path) = &self.executable
            && path.as_os_str().is_empty()
        {
            return Err(Error::ConfigError {
                message: "generator executable path cannot be empty".to_string(),
            });
        }

        if let Some(dir) = &self.temp_dir
            && dir.as_os_str().is_empty()
        {
            return Err(Error::ConfigError {
                message: "temp directory path cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for [`DispatcherConfig`].
#[derive(Debug, Clone, Default)]
pub struct DispatcherConfigBuilder {
    config: DispatcherConfig,
}

impl DispatcherConfigBuilder {
    /// Sets an explicit generator executable.
    #[must_use]
    pub fn executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.executable = Some(path.into());
        self
    }

    /// Sets the generator timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Sets the directory for temporary input files.
    #[must_use]
    pub fn temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.temp_dir = Some(dir.into());
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> DispatcherConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DispatcherConfig::default();
        assert_eq!(config.executable, None);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.temp_dir, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_sets_fields() {
        let config = DispatcherConfig::builder()
            .executable("/opt/quicktype/bin/quicktype")
            .timeout(Duration::from_secs(5))
            .temp_dir("/var/tmp")
            .build();

        assert_eq!(
            config.executable,
            Some(PathBuf::from("/opt/quicktype/bin/quicktype"))
        );
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.temp_dir, Some(PathBuf::from("/var/tmp")));
    }

    #[test]
    fn test_validate_timeout_bounds() {
        let config = DispatcherConfig::builder().timeout(Duration::ZERO).build();
        assert!(config.validate().unwrap_err().is_config_error());

        let config = DispatcherConfig::builder()
            .timeout(MAX_TIMEOUT + Duration::from_secs(1))
            .build();
        assert!(config.validate().is_err());

        let config = DispatcherConfig::builder().timeout(MAX_TIMEOUT).build();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_paths() {
        let config = DispatcherConfig::builder().executable("").build();
        assert!(config.validate().is_err());

        let config = DispatcherConfig::builder().temp_dir("").build();
        assert!(config.validate().is_err());
    }
}
