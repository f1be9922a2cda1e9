//! The paste pipeline: validate, materialize, invoke, clean up, deliver.
//!
//! A [`Dispatcher`] holds no per-run state. Each [`Dispatcher::run`] call owns
//! its own temporary file, so concurrent runs on one dispatcher are safe.
//!
//! # Examples
//!
//! ```no_run
//! use jsonpaste_core::{Dispatcher, DispatcherConfig, InvocationRequest, StringSink, TypeName};
//! use tokio_util::sync::CancellationToken;
//!
//! # #[tokio::main]
//! # async fn main() -> jsonpaste_core::Result<()> {
//! let dispatcher = Dispatcher::new(DispatcherConfig::default())?;
//! let request = InvocationRequest::new(r#"{"a":1}"#, "typescript", TypeName::new("Foo"));
//! let mut sink = StringSink::default();
//!
//! let result = dispatcher
//!     .run(&request, Some(&mut sink), &CancellationToken::new())
//!     .await;
//! if result.is_success() {
//!     println!("{}", sink.contents());
//! }
//! # Ok(())
//! # }
//! ```

use crate::artifact::TempArtifact;
use crate::config::{DispatcherConfig, MAX_TIMEOUT};
use crate::generator::{CodeGenerator, Invocation, ProcessGenerator};
use crate::language::{Language, SUPPORTED_IDENTIFIERS};
use crate::outcome::{FailureKind, InvocationResult, ValidationError};
use crate::request::InvocationRequest;
use crate::sink::TextSink;
use crate::{Result, TypeName};
use std::path::Path;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Turns validated requests into exactly one generator invocation each.
#[derive(Debug, Clone)]
pub struct Dispatcher<G = ProcessGenerator> {
    generator: G,
    config: DispatcherConfig,
}

impl Dispatcher<ProcessGenerator> {
    /// Creates a dispatcher backed by the external generator process.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` is invalid.
    pub fn new(config: DispatcherConfig) -> Result<Self> {
        let generator = ProcessGenerator::with_executable(config.executable.clone());
        Self::with_generator(generator, config)
    }
}

impl<G: CodeGenerator> Dispatcher<G> {
    /// Creates a dispatcher with a custom generator.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` is invalid.
    pub fn with_generator(generator: G, config: DispatcherConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { generator, config })
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// The generator this dispatcher invokes.
    #[must_use]
    pub const fn generator(&self) -> &G {
        &self.generator
    }

    /// Checks the preconditions of a run.
    ///
    /// Checked in order: non-blank source text, supported language, and a
    /// writable target.
    ///
    /// # Errors
    ///
    /// Returns the first failed precondition.
    pub fn validate(
        &self,
        request: &InvocationRequest,
        target: Option<&dyn TextSink>,
    ) -> std::result::Result<Language, ValidationError> {
        if request.is_blank() {
            return Err(ValidationError::EmptyInput);
        }

        let Some(language) = Language::from_identifier(request.target_language()) else {
            return Err(ValidationError::UnsupportedLanguage {
                language: request.target_language().to_string(),
                supported: SUPPORTED_IDENTIFIERS.join(", "),
            });
        };

        match target {
            Some(sink) if sink.is_writable() => Ok(language),
            _ => Err(ValidationError::NoTarget),
        }
    }

    /// Writes the source text to a fresh temporary file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written.
    pub fn materialize(&self, source_text: &str) -> Result<TempArtifact> {
        match &self.config.temp_dir {
            Some(dir) => TempArtifact::materialize_in(dir, source_text),
            None => TempArtifact::materialize(source_text),
        }
    }

    /// Timeout applied to `request`.
    ///
    /// A request override is held to the same bounds as the configured
    /// timeout: zero falls back to the configured value and anything above
    /// [`MAX_TIMEOUT`] is capped.
    #[must_use]
    pub fn effective_timeout(&self, request: &InvocationRequest) -> Duration {
        match request.timeout() {
            None => self.config.timeout,
            Some(timeout) if timeout.is_zero() => {
                warn!(
                    "Ignoring zero request timeout, using {:?}",
                    self.config.timeout
                );
                self.config.timeout
            }
            Some(timeout) if timeout > MAX_TIMEOUT => {
                warn!("Request timeout {timeout:?} capped at {MAX_TIMEOUT:?}");
                MAX_TIMEOUT
            }
            Some(timeout) => timeout,
        }
    }

    /// Runs the generator on an existing input file.
    pub async fn invoke(
        &self,
        input: &Path,
        language: &str,
        top_level: &TypeName,
        timeout: Duration,
        cancel: &CancellationToken,
    ) -> InvocationResult {
        let invocation = Invocation {
            input,
            language,
            top_level: top_level.as_str(),
            timeout,
        };
        self.generator.generate(&invocation, cancel).await
    }

    /// Runs the whole pipeline and delivers successful output to `target`.
    ///
    /// Nothing is inserted unless the generator succeeded, and the temporary
    /// file is removed before the result is delivered.
    pub async fn run(
        &self,
        request: &InvocationRequest,
        target: Option<&mut dyn TextSink>,
        cancel: &CancellationToken,
    ) -> InvocationResult {
        let language = match self.validate(request, target.as_deref()) {
            Ok(language) => language,
            Err(e) => {
                info!("Request rejected: {e}");
                return e.into();
            }
        };
        debug!(
            "Dispatching {} bytes as {language} ({}) named {}",
            request.source_text().len(),
            request.target_language(),
            request.top_level_name()
        );

        let artifact = match self.materialize(request.source_text()) {
            Ok(artifact) => artifact,
            Err(e) => {
                warn!("Failed to materialize input: {e}");
                return InvocationResult::failure(
                    FailureKind::GenerationError,
                    format!("Could not write the temporary input file: {e}"),
                );
            }
        };

        let timeout = self.effective_timeout(request);
        let result = self
            .invoke(
                artifact.path(),
                request.target_language(),
                request.top_level_name(),
                timeout,
                cancel,
            )
            .await;
        artifact.cleanup();

        let text = match result {
            InvocationResult::Success(text) => text,
            failure @ InvocationResult::Failure(_) => return failure,
        };

        if let Some(sink) = target
            && let Err(e) = sink.insert(&text)
        {
            warn!("Failed to insert generated code: {e}");
            return InvocationResult::failure(
                FailureKind::NoTarget,
                format!("Failed to insert the generated code: {e}"),
            );
        }

        info!("Generated {} bytes of {language}", text.len());
        InvocationResult::Success(text)
    }
}
