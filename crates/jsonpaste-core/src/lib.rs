//! Core of the JSON paste tool: turns JSON text into type definitions by
//! delegating to an external code generator.
//!
//! # Architecture
//!
//! The core consists of:
//! - [`Dispatcher`], a stateless pipeline that validates a request, writes the
//!   source text to a [`TempArtifact`], runs a [`CodeGenerator`] once and
//!   delivers the output to a [`TextSink`]
//! - [`ProcessGenerator`], the subprocess implementation with timeout and
//!   cancellation
//! - The supported [`Language`] set and [`TypeName`] handling
//! - Outcome types ([`InvocationResult`], [`FailureKind`]) and infrastructure
//!   errors ([`Error`])

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod artifact;
mod config;
mod dispatcher;
mod error;
mod generator;
mod language;
mod outcome;
mod request;
mod sink;

pub mod cli;
pub mod command;

pub use artifact::TempArtifact;
pub use config::{DEFAULT_TIMEOUT, DispatcherConfig, DispatcherConfigBuilder, MAX_TIMEOUT};
pub use dispatcher::Dispatcher;
pub use error::{Error, Result};
pub use generator::{CodeGenerator, Invocation, ProcessGenerator};
pub use language::{Language, SUPPORTED_IDENTIFIERS};
pub use outcome::{Failure, FailureKind, InvocationResult, ValidationError};
pub use request::{DEFAULT_TYPE_NAME, InvocationRequest, TypeName};
pub use sink::{FileSink, StringSink, TextSink, WriterSink};
