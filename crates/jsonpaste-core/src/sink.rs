//! Destinations for generated text.
//!
//! A sink stands in for the editor's insertion point. The dispatcher checks
//! [`TextSink::is_writable`] before doing any work and only calls
//! [`TextSink::insert`] after the generator succeeded.

use crate::{Error, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Receives generated text.
pub trait TextSink: Send {
    /// Returns `true` if text can currently be inserted.
    fn is_writable(&self) -> bool;

    /// Inserts the text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be written.
    fn insert(&mut self, text: &str) -> Result<()>;
}

/// Collects inserted text in memory.
///
/// # Examples
///
/// ```
/// use jsonpaste_core::{StringSink, TextSink};
///
/// let mut sink = StringSink::default();
/// sink.insert("struct Foo;").unwrap();
/// assert_eq!(sink.contents(), "struct Foo;");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringSink {
    buffer: String,
    read_only: bool,
}

impl StringSink {
    /// A sink that reports itself as not writable.
    #[must_use]
    pub const fn read_only() -> Self {
        Self {
            buffer: String::new(),
            read_only: true,
        }
    }

    /// Everything inserted so far.
    #[must_use]
    pub fn contents(&self) -> &str {
        &self.buffer
    }
}

impl TextSink for StringSink {
    fn is_writable(&self) -> bool {
        !self.read_only
    }

    fn insert(&mut self, text: &str) -> Result<()> {
        if self.read_only {
            return Err(Error::InvalidArgument("sink is read-only".to_string()));
        }
        self.buffer.push_str(text);
        Ok(())
    }
}

/// Writes inserted text to any [`Write`] implementation, e.g. stdout.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write + Send> WriterSink<W> {
    /// Wraps a writer.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the inner writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> TextSink for WriterSink<W> {
    fn is_writable(&self) -> bool {
        true
    }

    fn insert(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_all(text.as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(|e| Error::io("writing generated code", e))
    }
}

/// Writes inserted text to a file, replacing or appending.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
    append: bool,
}

impl FileSink {
    /// Sink that replaces the file contents.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            append: false,
        }
    }

    /// Sink that appends to the end of the file.
    #[must_use]
    pub fn appending(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            append: true,
        }
    }

    /// Target path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextSink for FileSink {
    fn is_writable(&self) -> bool {
        if self.path.is_dir() {
            return false;
        }
        match std::fs::metadata(&self.path) {
            Ok(metadata) => !metadata.permissions().readonly(),
            Err(_) => self
                .path
                .parent()
                .is_some_and(|parent| parent.as_os_str().is_empty() || parent.is_dir()),
        }
    }

    fn insert(&mut self, text: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(self.append)
            .truncate(!self.append)
            .open(&self.path)
            .map_err(|e| Error::io(format!("opening {}", self.path.display()), e))?;
        file.write_all(text.as_bytes())
            .map_err(|e| Error::io(format!("writing {}", self.path.display()), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_sink_accumulates() {
        let mut sink = StringSink::default();
        assert!(sink.is_writable());
        sink.insert("a").unwrap();
        sink.insert("b").unwrap();
        assert_eq!(sink.contents(), "ab");
    }

    #[test]
    fn test_read_only_string_sink() {
        let mut sink = StringSink::read_only();
        assert!(!sink.is_writable());
        assert!(sink.insert("x").is_err());
        assert_eq!(sink.contents(), "");
    }

    #[test]
    fn test_writer_sink() {
        let mut sink = WriterSink::new(Vec::new());
        sink.insert("class Foo {}").unwrap();
        assert_eq!(sink.into_inner(), b"class Foo {}");
    }

    #[test]
    fn test_file_sink_replace_and_append() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.ts");

        let mut sink = FileSink::new(&path);
        assert!(sink.is_writable());
        sink.insert("first").unwrap();
        sink.insert("second").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");

        let mut sink = FileSink::appending(&path);
        sink.insert("\nthird").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second\nthird");
    }

    #[test]
    fn test_file_sink_not_writable_targets() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!FileSink::new(dir.path()).is_writable());
        assert!(!FileSink::new(dir.path().join("missing").join("out.go")).is_writable());

        let path = dir.path().join("locked.go");
        std::fs::write(&path, "").unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_readonly(true);
        std::fs::set_permissions(&path, perms).unwrap();
        assert!(!FileSink::new(&path).is_writable());
    }
}
