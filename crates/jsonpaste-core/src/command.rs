//! Generator executable resolution and command-line construction.
//!
//! The generator is always launched directly, never through a shell, with
//! each argument passed as its own argv entry:
//!
//! ```text
//! <executable> --telemetry disable --lang <language> --top-level <name> <path>
//! ```
//!
//! # Examples
//!
//! ```
//! use jsonpaste_core::command::generator_args;
//! use std::path::Path;
//!
//! let args = generator_args("typescript", "Foo", Path::new("/tmp/in.json"));
//! assert_eq!(args[..4], ["--telemetry", "disable", "--lang", "typescript"]);
//! ```

use crate::{Error, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Executable name looked up on `PATH` when none is configured.
pub const DEFAULT_EXECUTABLE: &str = "quicktype";

/// Remediation shown when the generator cannot be found or launched.
pub const INSTALL_INSTRUCTIONS: &str = "quicktype is not installed or could not be started.\n\
     \n\
     Install it with npm:\n\
     \x20 npm install -g quicktype\n\
     \n\
     Or point jsonpaste at an existing binary:\n\
     \x20 jsonpaste config set generator.executable /absolute/path/to/quicktype";

/// Line breaks are never part of a real path and usually mean a pasted value
/// spilled into the config file.
const FORBIDDEN_CHARS: &[char] = &['\n', '\r'];

/// Builds the generator argument vector.
#[must_use]
pub fn generator_args(language: &str, top_level: &str, input: &Path) -> Vec<OsString> {
    vec![
        "--telemetry".into(),
        "disable".into(),
        "--lang".into(),
        language.into(),
        "--top-level".into(),
        top_level.into(),
        input.as_os_str().to_owned(),
    ]
}

/// Validates an explicitly configured executable path.
///
/// Checks, in order: non-empty, single line, absolute, exists, is a file,
/// and (on Unix) has an execute bit set. The path is launched directly, never
/// through a shell, so characters such as `(`, `&` or `$` are accepted.
///
/// # Errors
///
/// Returns [`Error::InvalidExecutable`] describing the first failed check.
///
/// # Examples
///
/// ```
/// use jsonpaste_core::command::validate_executable;
///
/// assert!(validate_executable("./quicktype").is_err());
/// assert!(validate_executable("/usr/bin/quicktype\nrm -rf /").is_err());
/// ```
pub fn validate_executable(command: &str) -> Result<()> {
    let command = command.trim();
    if command.is_empty() {
        return Err(Error::InvalidExecutable {
            reason: "executable path cannot be empty".into(),
        });
    }

    if command.contains(FORBIDDEN_CHARS) {
        return Err(Error::InvalidExecutable {
            reason: "executable path must be a single line".into(),
        });
    }

    let path = Path::new(command);
    if !path.is_absolute() {
        return Err(Error::InvalidExecutable {
            reason: format!("executable must be an absolute path, got: {command}"),
        });
    }

    if !path.exists() {
        return Err(Error::InvalidExecutable {
            reason: format!("executable does not exist: {command}"),
        });
    }

    if !path.is_file() {
        return Err(Error::InvalidExecutable {
            reason: format!("executable path is not a file: {command}"),
        });
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let metadata = std::fs::metadata(path)
            .map_err(|e| Error::io(format!("reading metadata of {command}"), e))?;
        if metadata.permissions().mode() & 0o111 == 0 {
            return Err(Error::InvalidExecutable {
                reason: format!("file is not executable: {command}"),
            });
        }
    }

    Ok(())
}

/// Resolves the generator to launch.
///
/// A configured path is validated and used as-is; otherwise
/// [`DEFAULT_EXECUTABLE`] is looked up on `PATH`.
///
/// # Errors
///
/// Returns [`Error::InvalidExecutable`] for a bad configured path and
/// [`Error::ExecutableNotFound`] when the default name is not on `PATH`.
pub fn resolve_executable(configured: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = configured {
        validate_executable(&path.to_string_lossy())?;
        return Ok(path.to_path_buf());
    }

    which::which(DEFAULT_EXECUTABLE).map_err(|e| {
        tracing::debug!("PATH lookup for {DEFAULT_EXECUTABLE} failed: {e}");
        Error::ExecutableNotFound {
            name: DEFAULT_EXECUTABLE.to_string(),
        }
    })
}
