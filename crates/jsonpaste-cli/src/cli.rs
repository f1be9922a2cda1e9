//! CLI argument definitions and parsing.
//!
//! Defines the command-line interface structure using clap:
//! - `Cli` - Main CLI entry point
//! - `Commands` - Available subcommands
//! - `PasteArgs` - Options of the `paste` subcommand

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::actions::ConfigAction;

/// Paste JSON as code.
///
/// Reads JSON from the clipboard (or a file, or stdin), hands it to quicktype
/// and writes the generated type definitions to stdout or a file.
#[derive(Parser, Debug)]
#[command(name = "jsonpaste")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for reports (json, text, pretty)
    ///
    /// Defaults to `general.default_format` from the configuration file.
    #[arg(long = "format", global = true)]
    pub format: Option<String>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate type definitions from JSON.
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Clipboard to stdout
    /// jsonpaste paste --lang typescript --top-level User
    ///
    /// # Infer language and name from the file being edited
    /// jsonpaste paste --name-from src/models/user_profile.ts --append \
    ///     --output src/models/user_profile.ts
    ///
    /// # Read from stdin
    /// curl -s https://api.example.com/user | jsonpaste paste -i - --lang go
    /// ```
    Paste(PasteArgs),

    /// List supported target languages and their identifiers.
    Languages,

    /// Check that the generator executable can be found and started.
    ///
    /// Resolves quicktype the same way `paste` does and prints its version,
    /// or installation instructions when it is missing.
    Check {
        /// Generator executable to check instead of the configured one
        #[arg(long, env = "JSONPASTE_EXECUTABLE")]
        executable: Option<PathBuf>,
    },

    /// Manage the configuration file.
    Config {
        /// Configuration action
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions.
    ///
    /// Generates completion scripts for various shells that can be
    /// sourced or saved to enable tab completion for this CLI.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options of the `paste` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct PasteArgs {
    /// Target language identifier (e.g. typescript, cs, go, c++)
    ///
    /// Inferred from the `--name-from` extension when omitted.
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Name of the top-level type, passed to the generator unchanged
    #[arg(short = 't', long = "top-level")]
    pub top_level: Option<String>,

    /// Document path used to infer the language and the top-level name
    #[arg(long = "name-from", value_name = "PATH")]
    pub name_from: Option<PathBuf>,

    /// Read JSON from a file, or `-` for stdin, instead of the clipboard
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write generated code to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Append to `--output` instead of replacing it
    #[arg(long, requires = "output")]
    pub append: bool,

    /// Generator timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Generator executable (default: quicktype on PATH)
    #[arg(long, env = "JSONPASTE_EXECUTABLE")]
    pub executable: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_paste_minimal() {
        let cli = Cli::parse_from(["jsonpaste", "paste", "--lang", "typescript"]);
        if let Commands::Paste(args) = cli.command {
            assert_eq!(args.lang.as_deref(), Some("typescript"));
            assert!(args.top_level.is_none());
            assert!(args.input.is_none());
            assert!(args.output.is_none());
            assert!(!args.append);
        } else {
            panic!("Expected Paste command");
        }
    }

    #[test]
    fn test_cli_parsing_paste_all_options() {
        let cli = Cli::parse_from([
            "jsonpaste",
            "paste",
            "-l",
            "go",
            "-t",
            "Order",
            "--name-from",
            "api/order.go",
            "-i",
            "-",
            "-o",
            "api/order.go",
            "--append",
            "--timeout",
            "15",
            "--executable",
            "/opt/quicktype/bin/quicktype",
        ]);
        if let Commands::Paste(args) = cli.command {
            assert_eq!(args.lang.as_deref(), Some("go"));
            assert_eq!(args.top_level.as_deref(), Some("Order"));
            assert_eq!(args.name_from, Some(PathBuf::from("api/order.go")));
            assert_eq!(args.input, Some(PathBuf::from("-")));
            assert_eq!(args.output, Some(PathBuf::from("api/order.go")));
            assert!(args.append);
            assert_eq!(args.timeout, Some(15));
            assert_eq!(
                args.executable,
                Some(PathBuf::from("/opt/quicktype/bin/quicktype"))
            );
        } else {
            panic!("Expected Paste command");
        }
    }

    #[test]
    fn test_append_requires_output() {
        let result = Cli::try_parse_from(["jsonpaste", "paste", "--append"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::parse_from(["jsonpaste", "--verbose", "languages"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_output_format_default() {
        let cli = Cli::parse_from(["jsonpaste", "languages"]);
        assert!(cli.format.is_none());
    }

    #[test]
    fn test_cli_output_format_custom() {
        let cli = Cli::parse_from(["jsonpaste", "languages", "--format", "json"]);
        assert_eq!(cli.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_cli_parsing_config_set() {
        let cli = Cli::parse_from([
            "jsonpaste",
            "config",
            "set",
            "generator.timeout_seconds",
            "30",
        ]);
        if let Commands::Config { action } = cli.command {
            assert_eq!(
                action,
                ConfigAction::Set {
                    key: "generator.timeout_seconds".to_string(),
                    value: "30".to_string(),
                }
            );
        } else {
            panic!("Expected Config command");
        }
    }

    #[test]
    fn test_cli_parsing_completions_zsh() {
        let cli = Cli::parse_from(["jsonpaste", "completions", "zsh"]);
        if let Commands::Completions { shell } = cli.command {
            assert_eq!(shell, Shell::Zsh);
        } else {
            panic!("Expected Completions command");
        }
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
