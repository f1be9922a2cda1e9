//! Temporary input files handed to the generator.
//!
//! A [`TempArtifact`] is owned by one invocation. The generator only receives
//! its path; the file is removed when the artifact is cleaned up or dropped.

use crate::{Error, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};
use tracing::{debug, warn};

const PREFIX: &str = "jsonpaste-";
const SUFFIX: &str = ".json";

/// A uniquely named temporary file holding the source text.
#[derive(Debug)]
pub struct TempArtifact {
    file: Option<NamedTempFile>,
    path: PathBuf,
}

impl TempArtifact {
    /// Writes `text` to a fresh file in the system temp directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be created or written.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonpaste_core::TempArtifact;
    ///
    /// let artifact = TempArtifact::materialize(r#"{"a":1}"#)?;
    /// let path = artifact.path().to_path_buf();
    /// assert_eq!(std::fs::read_to_string(&path)?, r#"{"a":1}"#);
    ///
    /// artifact.cleanup();
    /// assert!(!path.exists());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn materialize(text: &str) -> Result<Self> {
        Self::materialize_in(&std::env::temp_dir(), text)
    }

    /// Writes `text` to a fresh file inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be created or written.
    pub fn materialize_in(dir: &Path, text: &str) -> Result<Self> {
        let mut file = Builder::new()
            .prefix(PREFIX)
            .suffix(SUFFIX)
            .tempfile_in(dir)
            .map_err(|e| Error::io(format!("creating temp file in {}", dir.display()), e))?;

        file.write_all(text.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| Error::io("writing source text to temp file", e))?;

        let path = file.path().to_path_buf();
        debug!("Materialized {} bytes at {}", text.len(), path.display());

        Ok(Self {
            file: Some(file),
            path,
        })
    }

    /// Path passed to the generator.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Deletes the file. Failure to delete is logged, never returned.
    pub fn cleanup(mut self) {
        self.remove();
    }

    fn remove(&mut self) {
        let Some(file) = self.file.take() else {
            return;
        };
        match file.close() {
            Ok(()) => debug!("Removed temp artifact {}", self.path.display()),
            Err(e) => warn!("Failed to remove temp artifact {}: {e}", self.path.display()),
        }
    }
}

impl Drop for TempArtifact {
    fn drop(&mut self) {
        self.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_materialize_writes_text() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = TempArtifact::materialize_in(dir.path(), "{\"name\": \"x\"}").unwrap();
        assert_eq!(
            std::fs::read_to_string(artifact.path()).unwrap(),
            "{\"name\": \"x\"}"
        );
        assert!(artifact.path().starts_with(dir.path()));
    }

    #[test]
    fn test_names_are_unique() {
        let dir = tempfile::tempdir().unwrap();
        let first = TempArtifact::materialize_in(dir.path(), "1").unwrap();
        let second = TempArtifact::materialize_in(dir.path(), "2").unwrap();
        assert_ne!(first.path(), second.path());

        let name = first.path().file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("jsonpaste-"));
        assert!(name.ends_with(".json"));
    }

    #[test]
    fn test_drop_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = TempArtifact::materialize_in(dir.path(), "[]").unwrap();
        let path = artifact.path().to_path_buf();
        drop(artifact);
        assert!(!path.exists());
    }

    #[test]
    fn test_cleanup_tolerates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = TempArtifact::materialize_in(dir.path(), "[]").unwrap();
        std::fs::remove_file(artifact.path()).unwrap();
        artifact.cleanup();
    }

    #[test]
    fn test_materialize_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = TempArtifact::materialize_in(&dir.path().join("missing"), "{}").unwrap_err();
        assert!(err.is_io_error());
    }
}
