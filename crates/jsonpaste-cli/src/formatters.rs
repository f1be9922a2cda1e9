//! Output formatters for command reports.
//!
//! Generated code is never passed through here; it goes to its sink verbatim.
//! These formatters render the structured reports (failures, language lists,
//! configuration) that commands print.

use anyhow::Result;
use colored::Colorize;
use jsonpaste_core::cli::OutputFormat;
use serde::Serialize;

/// Format data according to the specified output format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Examples
///
/// ```
/// use jsonpaste_cli::formatters::format_output;
/// use jsonpaste_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Report {
///     language: String,
/// }
///
/// let report = Report { language: "go".to_string() };
/// let output = format_output(&report, OutputFormat::Json)?;
/// assert!(output.contains("\"language\""));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Format data as JSON with 2-space indentation.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }
}

/// Plain text output formatting.
pub mod text {
    use super::{Result, Serialize};
    use serde_json::Value;

    /// Format data as `path: value` lines without colors.
    ///
    /// Nested objects are flattened with dotted paths and arrays are joined
    /// with `, `, which keeps the output easy to `grep` and `cut`.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut lines = Vec::new();
        flatten(&value, "", &mut lines);
        Ok(lines.join("\n"))
    }

    fn flatten(value: &Value, path: &str, lines: &mut Vec<String>) {
        match value {
            Value::Object(obj) => {
                for (key, val) in obj {
                    let child = if path.is_empty() {
                        key.clone()
                    } else {
                        format!("{path}.{key}")
                    };
                    flatten(val, &child, lines);
                }
            }
            Value::Array(items) if items.iter().any(|v| v.is_object()) => {
                for (i, item) in items.iter().enumerate() {
                    flatten(item, &format!("{path}[{i}]"), lines);
                }
            }
            Value::Array(items) => {
                let joined: Vec<String> = items.iter().map(scalar).collect();
                lines.push(labelled(path, &joined.join(", ")));
            }
            _ => lines.push(labelled(path, &scalar(value))),
        }
    }

    fn scalar(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }

    fn labelled(path: &str, value: &str) -> String {
        if path.is_empty() {
            value.to_string()
        } else {
            format!("{path}: {value}")
        }
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, Result, Serialize};

    /// Format data as colorized, indented output.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        Ok(format_value(&value, 0))
    }

    fn format_value(value: &serde_json::Value, indent: usize) -> String {
        use serde_json::Value;

        let pad = "  ".repeat(indent);

        match value {
            Value::Null => "-".dimmed().to_string(),
            Value::Bool(true) => "yes".green().to_string(),
            Value::Bool(false) => "no".yellow().to_string(),
            Value::Number(n) => n.to_string().cyan().to_string(),
            Value::String(s) if s.contains('\n') => {
                let body: Vec<String> = s
                    .lines()
                    .map(|line| format!("{pad}{line}"))
                    .collect();
                format!("\n{}", body.join("\n"))
            }
            Value::String(s) => s.clone(),
            Value::Array(items) if items.is_empty() => "(none)".dimmed().to_string(),
            Value::Array(items) => items
                .iter()
                .map(|item| format!("\n{pad}- {}", format_value(item, indent + 1).trim_start()))
                .collect(),
            Value::Object(obj) if obj.is_empty() => "(empty)".dimmed().to_string(),
            Value::Object(obj) => {
                let entries: Vec<String> = obj
                    .iter()
                    .map(|(key, val)| {
                        let rendered = format_value(val, indent + 1);
                        let sep = if rendered.starts_with('\n') { "" } else { " " };
                        format!("{pad}{}:{sep}{rendered}", key.blue().bold())
                    })
                    .collect();
                if indent == 0 {
                    entries.join("\n")
                } else {
                    format!("\n{}", entries.join("\n"))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Nested {
        executable: Option<String>,
        timeout_seconds: u64,
    }

    #[derive(Serialize)]
    struct Report {
        status: String,
        ok: bool,
        identifiers: Vec<String>,
        generator: Nested,
    }

    fn report() -> Report {
        Report {
            status: "failure".to_string(),
            ok: false,
            identifiers: vec!["go".to_string(), "golang".to_string()],
            generator: Nested {
                executable: None,
                timeout_seconds: 60,
            },
        }
    }

    #[test]
    fn test_json_format() {
        let output = json::format(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["status"], "failure");
        assert_eq!(value["generator"]["timeout_seconds"], 60);
    }

    #[test]
    fn test_text_format_flattens() {
        let output = text::format(&report()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines.contains(&"status: failure"));
        assert!(lines.contains(&"ok: false"));
        assert!(lines.contains(&"identifiers: go, golang"));
        assert!(lines.contains(&"generator.executable: "));
        assert!(lines.contains(&"generator.timeout_seconds: 60"));
    }

    #[test]
    fn test_text_format_scalar() {
        assert_eq!(text::format(&"hello").unwrap(), "hello");
    }

    #[test]
    fn test_pretty_format_contains_values() {
        colored::control::set_override(false);
        let output = pretty::format(&report()).unwrap();
        assert!(output.contains("status: failure"));
        assert!(output.contains("ok: no"));
        assert!(output.contains("- go"));
        assert!(output.contains("timeout_seconds: 60"));
    }

    #[test]
    fn test_pretty_format_multiline_string() {
        colored::control::set_override(false);

        #[derive(Serialize)]
        struct Message {
            message: String,
        }

        let output = pretty::format(&Message {
            message: "line one\nline two".to_string(),
        })
        .unwrap();
        assert_eq!(output, "message:\n  line one\n  line two");
    }

    #[test]
    fn test_format_output_dispatch() {
        let data = report();
        assert!(format_output(&data, OutputFormat::Json).unwrap().starts_with('{'));
        assert!(
            format_output(&data, OutputFormat::Text)
                .unwrap()
                .contains("status: failure")
        );
        assert!(format_output(&data, OutputFormat::Pretty).is_ok());
    }
}
