//! Supported target languages.
//!
//! The generator accepts a fixed set of language spellings. Matching is a
//! case-insensitive exact lookup in [`SUPPORTED_IDENTIFIERS`]; aliases such as
//! `ts` and `typescript` are both listed rather than derived, and each one maps
//! to a single [`Language`] group.
//!
//! # Examples
//!
//! ```
//! use jsonpaste_core::Language;
//!
//! assert_eq!(Language::from_identifier("TS"), Some(Language::TypeScript));
//! assert_eq!(Language::from_identifier("rust"), None);
//! ```

use std::fmt;

/// Every language identifier the dispatcher passes through to the generator.
pub const SUPPORTED_IDENTIFIERS: &[&str] = &[
    "c++",
    "cpp",
    "cplusplus",
    "cs",
    "csharp",
    "elm",
    "go",
    "golang",
    "java",
    "objc",
    "objective-c",
    "objectivec",
    "swift",
    "typescript",
    "ts",
    "tsx",
];

/// A target language of the generator, grouping all of its spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// C++
    Cpp,
    /// C#
    CSharp,
    /// Elm
    Elm,
    /// Go
    Go,
    /// Java
    Java,
    /// Objective-C
    ObjectiveC,
    /// Swift
    Swift,
    /// TypeScript
    TypeScript,
}

impl Language {
    /// All languages, in listing order.
    pub const ALL: [Self; 8] = [
        Self::Cpp,
        Self::CSharp,
        Self::Elm,
        Self::Go,
        Self::Java,
        Self::ObjectiveC,
        Self::Swift,
        Self::TypeScript,
    ];

    /// Looks up an identifier, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        let identifier = identifier.trim().to_lowercase();
        let language = match identifier.as_str() {
            "c++" | "cpp" | "cplusplus" => Self::Cpp,
            "cs" | "csharp" => Self::CSharp,
            "elm" => Self::Elm,
            "go" | "golang" => Self::Go,
            "java" => Self::Java,
            "objc" | "objective-c" | "objectivec" => Self::ObjectiveC,
            "swift" => Self::Swift,
            "typescript" | "ts" | "tsx" => Self::TypeScript,
            _ => return None,
        };
        debug_assert!(SUPPORTED_IDENTIFIERS.contains(&identifier.as_str()));
        Some(language)
    }

    /// Returns `true` if `identifier` is in [`SUPPORTED_IDENTIFIERS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonpaste_core::Language;
    ///
    /// assert!(Language::is_supported("CSharp"));
    /// assert!(!Language::is_supported("c#"));
    /// ```
    #[must_use]
    pub fn is_supported(identifier: &str) -> bool {
        Self::from_identifier(identifier).is_some()
    }

    /// Guesses a language identifier from a file extension (with or without
    /// the leading dot).
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonpaste_core::Language;
    ///
    /// assert_eq!(Language::identifier_for_extension(".tsx"), Some("tsx"));
    /// assert_eq!(Language::identifier_for_extension("hpp"), Some("c++"));
    /// assert_eq!(Language::identifier_for_extension("rs"), None);
    /// ```
    #[must_use]
    pub fn identifier_for_extension(extension: &str) -> Option<&'static str> {
        let extension = extension.trim_start_matches('.').to_lowercase();
        let identifier = match extension.as_str() {
            "cpp" | "cc" | "cxx" | "hpp" | "hh" | "h" => "c++",
            "cs" => "cs",
            "elm" => "elm",
            "go" => "go",
            "java" => "java",
            "m" | "mm" => "objc",
            "swift" => "swift",
            "ts" => "typescript",
            "tsx" => "tsx",
            _ => return None,
        };
        Some(identifier)
    }

    /// The preferred spelling for this language.
    #[must_use]
    pub const fn canonical_identifier(&self) -> &'static str {
        match self {
            Self::Cpp => "c++",
            Self::CSharp => "csharp",
            Self::Elm => "elm",
            Self::Go => "go",
            Self::Java => "java",
            Self::ObjectiveC => "objective-c",
            Self::Swift => "swift",
            Self::TypeScript => "typescript",
        }
    }

    /// Human readable name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Cpp => "C++",
            Self::CSharp => "C#",
            Self::Elm => "Elm",
            Self::Go => "Go",
            Self::Java => "Java",
            Self::ObjectiveC => "Objective-C",
            Self::Swift => "Swift",
            Self::TypeScript => "TypeScript",
        }
    }

    /// Every accepted identifier for this language.
    pub fn identifiers(self) -> impl Iterator<Item = &'static str> {
        SUPPORTED_IDENTIFIERS
            .iter()
            .copied()
            .filter(move |id| Self::from_identifier(id) == Some(self))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_identifier_resolves() {
        for id in SUPPORTED_IDENTIFIERS {
            assert!(
                Language::from_identifier(id).is_some(),
                "identifier should resolve: {id}"
            );
        }
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(Language::from_identifier("C++"), Some(Language::Cpp));
        assert_eq!(Language::from_identifier("CSharp"), Some(Language::CSharp));
        assert_eq!(Language::from_identifier("GoLang"), Some(Language::Go));
        assert_eq!(
            Language::from_identifier(" TypeScript "),
            Some(Language::TypeScript)
        );
    }

    #[test]
    fn test_no_fuzzy_matching() {
        for id in ["c#", "type-script", "golan", "objective c", "", "rust", "json"] {
            assert!(Language::from_identifier(id).is_none(), "{id}");
        }
    }

    #[test]
    fn test_identifiers_grouped_by_language() {
        let ts: Vec<_> = Language::TypeScript.identifiers().collect();
        assert_eq!(ts, vec!["typescript", "ts", "tsx"]);

        let cpp: Vec<_> = Language::Cpp.identifiers().collect();
        assert_eq!(cpp, vec!["c++", "cpp", "cplusplus"]);

        let total: usize = Language::ALL.iter().map(|l| l.identifiers().count()).sum();
        assert_eq!(total, SUPPORTED_IDENTIFIERS.len());
    }

    #[test]
    fn test_canonical_identifier_is_supported() {
        for language in Language::ALL {
            assert_eq!(
                Language::from_identifier(language.canonical_identifier()),
                Some(language)
            );
        }
    }

    #[test]
    fn test_extension_mapping() {
        assert_eq!(Language::identifier_for_extension("cs"), Some("cs"));
        assert_eq!(Language::identifier_for_extension(".GO"), Some("go"));
        assert_eq!(Language::identifier_for_extension("m"), Some("objc"));
        assert_eq!(Language::identifier_for_extension("json"), None);
    }
}
