//! Action type definitions for CLI commands.

use clap::Subcommand;

/// Configuration management actions.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Write a configuration file with default values
    Init,

    /// Show the effective configuration
    Show,

    /// Print one configuration value
    Get {
        /// Key in `section.name` form, e.g. `generator.timeout_seconds`
        key: String,
    },

    /// Change one configuration value
    Set {
        /// Key in `section.name` form, e.g. `generator.executable`
        key: String,

        /// New value (`none` clears optional values)
        value: String,
    },

    /// Print the configuration file location
    Path,
}
