//! Lists the supported target languages.

use anyhow::{Context, Result};
use jsonpaste_core::Language;
use jsonpaste_core::cli::{ExitCode, OutputFormat};
use serde::Serialize;

/// One supported language and every identifier that selects it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LanguageInfo {
    /// Human readable name
    pub name: &'static str,
    /// Preferred identifier
    pub canonical: &'static str,
    /// All accepted identifiers
    pub identifiers: Vec<&'static str>,
}

impl From<Language> for LanguageInfo {
    fn from(language: Language) -> Self {
        Self {
            name: language.display_name(),
            canonical: language.canonical_identifier(),
            identifiers: language.identifiers().collect(),
        }
    }
}

/// Supported languages in listing order.
#[must_use]
pub fn language_infos() -> Vec<LanguageInfo> {
    Language::ALL.into_iter().map(LanguageInfo::from).collect()
}

/// Runs the languages command.
///
/// # Errors
///
/// Returns an error if the report cannot be formatted.
pub async fn run(output_format: OutputFormat) -> Result<ExitCode> {
    let formatted = crate::formatters::format_output(&language_infos(), output_format)
        .context("failed to format language list")?;
    println!("{formatted}");
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonpaste_core::SUPPORTED_IDENTIFIERS;

    #[test]
    fn test_every_identifier_listed_once() {
        let mut listed: Vec<&str> = language_infos()
            .into_iter()
            .flat_map(|info| info.identifiers)
            .collect();
        listed.sort_unstable();

        let mut expected = SUPPORTED_IDENTIFIERS.to_vec();
        expected.sort_unstable();
        assert_eq!(listed, expected);
    }

    #[test]
    fn test_typescript_group() {
        let info = LanguageInfo::from(Language::TypeScript);
        assert_eq!(info.name, "TypeScript");
        assert_eq!(info.canonical, "typescript");
        assert_eq!(info.identifiers, vec!["typescript", "ts", "tsx"]);
    }

    #[test]
    fn test_canonical_is_accepted() {
        for info in language_infos() {
            assert!(info.identifiers.contains(&info.canonical), "{}", info.name);
        }
    }
}
