//! Clipboard access through the platform's command-line tools.
//!
//! - macOS: `pbpaste`
//! - Windows: `powershell Get-Clipboard -Raw`
//! - Linux/BSD: `wl-paste` on Wayland, then `xclip`, then `xsel`

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Something that can hand over the current clipboard text.
#[async_trait]
pub trait ClipboardSource: Send + Sync {
    /// Returns the clipboard text. An empty clipboard yields an empty string.
    ///
    /// # Errors
    ///
    /// Returns an error if no clipboard tool is available or it fails.
    async fn read_text(&self) -> Result<String>;
}

/// A clipboard reader program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardTool {
    /// Program name, resolved on `PATH`
    pub program: &'static str,
    /// Arguments that print the clipboard to stdout
    pub args: &'static [&'static str],
}

/// Reads the system clipboard by running the first available tool.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    tools: Vec<ClipboardTool>,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClipboard {
    /// Uses the tools appropriate for this platform.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tools: platform_tools(std::env::var_os("WAYLAND_DISPLAY").is_some()),
        }
    }

    /// Uses an explicit list of tools, tried in order.
    #[must_use]
    pub const fn with_tools(tools: Vec<ClipboardTool>) -> Self {
        Self { tools }
    }

    /// Tools that will be tried.
    #[must_use]
    pub fn tools(&self) -> &[ClipboardTool] {
        &self.tools
    }
}

#[async_trait]
impl ClipboardSource for SystemClipboard {
    async fn read_text(&self) -> Result<String> {
        for tool in &self.tools {
            if which::which(tool.program).is_err() {
                debug!("Clipboard tool {} not on PATH", tool.program);
                continue;
            }

            let output = Command::new(tool.program)
                .args(tool.args)
                .env("LANG", "en_US.UTF-8")
                .env("LC_CTYPE", "en_US.UTF-8")
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .output()
                .await
                .with_context(|| format!("failed to run {}", tool.program))?;

            if !output.status.success() {
                // xclip and wl-paste exit non-zero when the clipboard holds no text
                let stderr = String::from_utf8_lossy(&output.stderr);
                debug!("{} exited with {}: {}", tool.program, output.status, stderr.trim());
                return Ok(String::new());
            }

            debug!("Read {} bytes from {}", output.stdout.len(), tool.program);
            return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
        }

        let names: Vec<_> = self.tools.iter().map(|t| t.program).collect();
        bail!(
            "no clipboard tool found (tried: {}).\n\
             Install one of them, or pass the JSON with --input <file> or --input -",
            names.join(", ")
        )
    }
}

fn platform_tools(wayland: bool) -> Vec<ClipboardTool> {
    if cfg!(target_os = "macos") {
        return vec![ClipboardTool {
            program: "pbpaste",
            args: &[],
        }];
    }

    if cfg!(windows) {
        return vec![ClipboardTool {
            program: "powershell",
            args: &["-NoProfile", "-NonInteractive", "-Command", "Get-Clipboard -Raw"],
        }];
    }

    let mut tools = Vec::with_capacity(3);
    if wayland {
        tools.push(ClipboardTool {
            program: "wl-paste",
            args: &["--no-newline"],
        });
    }
    tools.push(ClipboardTool {
        program: "xclip",
        args: &["-selection", "clipboard", "-o"],
    });
    tools.push(ClipboardTool {
        program: "xsel",
        args: &["--clipboard", "--output"],
    });
    tools
}
