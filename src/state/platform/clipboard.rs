//! Clipboard access for share links and token addresses.
//!
//! On Linux the command-line tools `wl-copy`, `xclip` and `xsel` are tried
//! first, in that order, because their selection outlives the process. The
//! `arboard` crate is the fallback there and the only backend elsewhere.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClipboardError {
    /// No backend could be reached.
    #[error("Clipboard not available")]
    NotAvailable,
    /// A backend was reached but refused the text.
    #[error("Failed to copy: {0}")]
    CopyFailed(String),
}

/// A way of putting text on the system clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// An external program reading the text from stdin.
    Command(&'static str, &'static [&'static str]),
    /// The `arboard` crate.
    Arboard,
}

/// Backends for this platform, most preferred first.
#[must_use]
pub fn backends() -> Vec<Backend> {
    let mut backends = Vec::new();
    if cfg!(target_os = "linux") {
        backends.extend([
            Backend::Command("wl-copy", &[]),
            Backend::Command("xclip", &["-selection", "clipboard"]),
            Backend::Command("xsel", &["--clipboard", "--input"]),
        ]);
    }
    backends.push(Backend::Arboard);
    backends
}

/// Copies `text` with the first backend that accepts it.
///
/// # Errors
///
/// Returns the last backend's error when every backend fails.
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    let mut last_error = ClipboardError::NotAvailable;
    for backend in backends() {
        match backend.copy(text) {
            Ok(()) => {
                tracing::debug!(?backend, "copied to clipboard");
                return Ok(());
            }
            Err(e) => last_error = e,
        }
    }
    Err(last_error)
}

impl Backend {
    fn copy(self, text: &str) -> Result<(), ClipboardError> {
        match self {
            Self::Command(program, args) => pipe_to(program, args, text),
            Self::Arboard => {
                let mut clipboard = arboard::Clipboard::new().map_err(|e| {
                    tracing::debug!("arboard unavailable: {e}");
                    ClipboardError::NotAvailable
                })?;
                clipboard
                    .set_text(text.to_string())
                    .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
            }
        }
    }
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<(), ClipboardError> {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|_| ClipboardError::NotAvailable)?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))?;
    }

    match child.wait() {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => Err(ClipboardError::CopyFailed(format!("{program} exited with {status}"))),
        Err(e) => Err(ClipboardError::CopyFailed(e.to_string())),
    }
}
