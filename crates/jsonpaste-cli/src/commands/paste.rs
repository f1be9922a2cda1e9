//! Paste command implementation.
//!
//! Reads JSON from the clipboard, a file or stdin, works out the target
//! language and top-level name, runs the dispatcher and delivers the generated
//! code to stdout or a file. Failures are printed to stderr as a report and
//! mapped to an exit code by their kind.

use crate::cli::PasteArgs;
use crate::clipboard::ClipboardSource;
use crate::commands::config::Config;
use anyhow::{Context, Result};
use colored::Colorize;
use jsonpaste_core::cli::{ExitCode, OutputFormat};
use jsonpaste_core::{
    Dispatcher, Failure, FailureKind, FileSink, InvocationRequest, InvocationResult, Language,
    SUPPORTED_IDENTIFIERS, TextSink, TypeName, ValidationError, WriterSink,
};
use std::path::Path;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Reads the source text.
///
/// `None` reads the clipboard, `-` reads stdin, anything else is a file path.
///
/// # Errors
///
/// Returns an error if the source cannot be read.
pub async fn read_source(input: Option<&Path>, clipboard: &dyn ClipboardSource) -> Result<String> {
    match input {
        None => clipboard
            .read_text()
            .await
            .context("failed to read the clipboard"),
        Some(path) if path.as_os_str() == "-" => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("failed to read JSON from stdin")?;
            Ok(text)
        }
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display())),
    }
}

/// The language identifier to pass to the generator.
///
/// An explicit `--lang` wins; otherwise the `--name-from` extension decides.
#[must_use]
pub fn resolve_language(args: &PasteArgs) -> Option<String> {
    if let Some(lang) = &args.lang {
        return Some(lang.clone());
    }
    let extension = args.name_from.as_deref()?.extension()?.to_str()?;
    Language::identifier_for_extension(extension).map(str::to_string)
}

/// The top-level type name.
///
/// An explicit `--top-level` is used verbatim. A name derived from
/// `--name-from` is sanitized into an identifier.
#[must_use]
pub fn resolve_top_level(args: &PasteArgs) -> TypeName {
    if let Some(name) = &args.top_level {
        return TypeName::new(name.as_str());
    }
    args.name_from
        .as_deref()
        .map_or_else(TypeName::default, |path| TypeName::from_path(path).sanitized())
}

/// Runs the dispatcher for `source`, delivering generated code to `sink`.
///
/// # Errors
///
/// Returns an error only for invalid generator settings; every pipeline
/// failure is reported through the returned [`InvocationResult`].
pub async fn paste_into(
    args: &PasteArgs,
    config: &Config,
    source: &str,
    sink: &mut dyn TextSink,
    cancel: &CancellationToken,
) -> Result<InvocationResult> {
    if source.trim().is_empty() {
        return Ok(ValidationError::EmptyInput.into());
    }
    let Some(language) = resolve_language(args) else {
        return Ok(InvocationResult::failure(
            FailureKind::UnsupportedLanguage,
            format!(
                "No target language. Pass --lang <identifier> or --name-from <file> with a known extension.\n\
                 Supported: {}",
                SUPPORTED_IDENTIFIERS.join(", ")
            ),
        ));
    };
    let top_level = resolve_top_level(args);
    debug!("Target language {language}, top-level name {top_level}");

    let mut dispatcher_config = config.to_dispatcher_config();
    if let Some(executable) = &args.executable {
        dispatcher_config.executable = Some(executable.clone());
    }
    if let Some(seconds) = args.timeout {
        dispatcher_config.timeout = Duration::from_secs(seconds);
    }
    let dispatcher = Dispatcher::new(dispatcher_config).context("invalid generator settings")?;

    let request = InvocationRequest::new(source, &language, top_level);
    Ok(dispatcher.run(&request, Some(sink), cancel).await)
}

/// Renders a failure for stderr.
///
/// # Errors
///
/// Returns an error if the report cannot be serialized.
pub fn format_failure(failure: &Failure, output_format: OutputFormat) -> Result<String> {
    match output_format {
        OutputFormat::Pretty => Ok(format!(
            "{} {}",
            format!("{}:", failure.kind).red().bold(),
            failure.message
        )),
        other => crate::formatters::format_output(failure, other),
    }
}

/// Runs the paste command.
///
/// # Errors
///
/// Returns an error if the source cannot be read or the generator settings
/// are invalid.
pub async fn run(
    args: PasteArgs,
    config: &Config,
    clipboard: &dyn ClipboardSource,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let source = read_source(args.input.as_deref(), clipboard).await?;

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    let watcher = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupted, stopping generator");
            on_interrupt.cancel();
        }
    });

    let result = match &args.output {
        Some(path) => {
            let mut sink = if args.append {
                FileSink::appending(path)
            } else {
                FileSink::new(path)
            };
            paste_into(&args, config, &source, &mut sink, &cancel).await
        }
        None => {
            let mut sink = WriterSink::new(std::io::stdout());
            paste_into(&args, config, &source, &mut sink, &cancel).await
        }
    };
    watcher.abort();

    match result? {
        InvocationResult::Success(text) => {
            if let Some(path) = &args.output {
                info!("Wrote {} bytes to {}", text.len(), path.display());
            }
            Ok(ExitCode::SUCCESS)
        }
        InvocationResult::Failure(failure) => {
            eprintln!("{}", format_failure(&failure, output_format)?);
            Ok(failure.kind.exit_code())
        }
    }
}
