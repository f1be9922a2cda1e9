//! jsonpaste CLI library.
//!
//! Hosts the dispatcher from `jsonpaste-core` on the command line: it reads
//! JSON from the clipboard, a file or stdin and writes the generated type
//! definitions to stdout or a file.
//!
//! # Examples
//!
//! ```bash
//! # Clipboard to stdout
//! jsonpaste paste --lang typescript --top-level User
//!
//! # Append to the file being edited, inferring language and name from it
//! jsonpaste paste --name-from src/order.go --output src/order.go --append
//! ```

#![allow(clippy::unused_async)]
#![allow(clippy::missing_errors_doc)]

pub mod actions;
pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod formatters;
pub mod runner;

pub use actions::ConfigAction;

/// Writing an executable while another test forks can fail with ETXTBSY, so
/// unit tests that spawn processes or write stubs hold this lock.
#[cfg(test)]
static PROCESS_LOCK: tokio::sync::Mutex<()> = tokio::sync::Mutex::const_new(());
