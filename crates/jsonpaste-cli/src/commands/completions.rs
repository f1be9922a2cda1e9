//! Shell completion generation command.

use anyhow::Result;
use clap::Command;
use clap_complete::{Shell, generate};
use jsonpaste_core::cli::ExitCode;
use std::io::{self, Write};
use tracing::debug;

/// Writes the completion script for `shell` to `out`.
pub fn generate_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    debug!("Generating {shell} completions");
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, out);
}

/// Runs the completions command, printing the script to stdout.
///
/// # Errors
///
/// Never fails; the `Result` keeps the command signature uniform.
pub async fn run(shell: Shell, cmd: &mut Command) -> Result<ExitCode> {
    generate_completions(shell, cmd, &mut io::stdout());
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::CommandFactory;

    fn script(shell: Shell) -> String {
        let mut out = Vec::new();
        generate_completions(shell, &mut Cli::command(), &mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_bash_completions_mention_subcommands() {
        let script = script(Shell::Bash);
        assert!(script.contains("jsonpaste"));
        assert!(script.contains("paste"));
        assert!(script.contains("languages"));
    }

    #[test]
    fn test_other_shells_generate() {
        for shell in [Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish] {
            assert!(!script(shell).is_empty(), "{shell}");
        }
    }
}
