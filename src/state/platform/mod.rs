//! Platform-specific abstractions.
//!
//! - [`clipboard`] - Clipboard access (external tools on Linux, `arboard` elsewhere)
//! - [`paths`] - Data directory and log file location

pub mod clipboard;
pub mod paths;
