//! Invocation requests and top-level type names.
//!
//! # Examples
//!
//! ```
//! use jsonpaste_core::{InvocationRequest, TypeName};
//! use std::time::Duration;
//!
//! let request = InvocationRequest::new(r#"{"a":1}"#, "TypeScript", TypeName::new("Foo"))
//!     .with_timeout(Duration::from_secs(10));
//!
//! assert_eq!(request.target_language(), "typescript");
//! assert_eq!(request.top_level_name().as_str(), "Foo");
//! ```

use std::fmt;
use std::path::Path;
use std::time::Duration;

/// Name used when nothing usable can be derived.
pub const DEFAULT_TYPE_NAME: &str = "TopLevel";

/// Name of the top-level type the generator emits.
///
/// The dispatcher passes the name through untouched. Hosts that derive the
/// name from a file path should call [`TypeName::sanitized`] first, since file
/// stems often contain characters a target language rejects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeName(String);

impl TypeName {
    /// Wraps a name verbatim.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Uses the file stem of `path` (base name without extension).
    ///
    /// Returns the default name when the path has no stem.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonpaste_core::TypeName;
    ///
    /// assert_eq!(TypeName::from_path("src/models/user.ts").as_str(), "user");
    /// assert_eq!(TypeName::from_path("/").as_str(), "TopLevel");
    /// ```
    #[must_use]
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        path.as_ref()
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .filter(|stem| !stem.is_empty())
            .map_or_else(Self::default, Self)
    }

    /// Returns an identifier-safe variant of this name.
    ///
    /// ASCII letters, digits and `_` are kept; every other run of characters
    /// becomes a word boundary and words are joined in `PascalCase`. A leading
    /// digit gets a `_` prefix and an empty result falls back to `TopLevel`.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonpaste_core::TypeName;
    ///
    /// assert_eq!(TypeName::new("user-profile.v2").sanitized().as_str(), "UserProfileV2");
    /// assert_eq!(TypeName::new("2fa codes").sanitized().as_str(), "_2faCodes");
    /// assert_eq!(TypeName::new("---").sanitized().as_str(), "TopLevel");
    /// ```
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let mut out = String::with_capacity(self.0.len());
        for word in self
            .0
            .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .filter(|word| !word.is_empty())
        {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.push(first.to_ascii_uppercase());
                out.extend(chars);
            }
        }

        if out.is_empty() {
            return Self::default();
        }
        if out.starts_with(|c: char| c.is_ascii_digit()) {
            out.insert(0, '_');
        }
        Self(out)
    }

    /// Returns the name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TypeName {
    fn default() -> Self {
        Self(DEFAULT_TYPE_NAME.to_string())
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TypeName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One request to turn source text into type definitions.
///
/// Requests are plain values; [`Dispatcher::validate`](crate::Dispatcher::validate)
/// decides whether they can be run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    source_text: String,
    target_language: String,
    top_level_name: TypeName,
    timeout: Option<Duration>,
}

impl InvocationRequest {
    /// Creates a request. The language identifier is trimmed and lower-cased.
    #[must_use]
    pub fn new(
        source_text: impl Into<String>,
        target_language: &str,
        top_level_name: TypeName,
    ) -> Self {
        Self {
            source_text: source_text.into(),
            target_language: target_language.trim().to_lowercase(),
            top_level_name,
            timeout: None,
        }
    }

    /// Overrides the dispatcher's default timeout for this request.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Raw source text as supplied by the caller.
    #[must_use]
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// Returns `true` if the source text is empty after trimming.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.source_text.trim().is_empty()
    }

    /// Lower-cased language identifier.
    #[must_use]
    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    /// Name of the top-level type.
    #[must_use]
    pub const fn top_level_name(&self) -> &TypeName {
        &self.top_level_name
    }

    /// Per-request timeout, if one was set.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}
