//! File logging.
//!
//! The terminal belongs to the TUI while it runs, so events are written to a
//! log file through a non-blocking appender instead of stdout. The filter is
//! read from `RUST_LOG` and defaults to [`DEFAULT_FILTER`].

use std::fs::OpenOptions;
use std::path::PathBuf;

use color_eyre::{Result, eyre::eyre};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::state::platform::paths;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "daoscope=info";

/// Builds the event filter from `directives`, falling back to
/// [`DEFAULT_FILTER`].
#[must_use]
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Resolves the log file: the explicit override, else the platform data
/// directory.
///
/// # Errors
///
/// Returns an error if no override is given and the data directory cannot
/// be determined or created.
pub fn log_path(log_file: Option<PathBuf>) -> Result<PathBuf> {
    match log_file {
        Some(path) => Ok(path),
        None => paths::log_file(),
    }
}

/// Installs the global subscriber.
///
/// The returned guard flushes buffered events when dropped and must be
/// held until the program exits.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init(log_file: Option<PathBuf>) -> Result<WorkerGuard> {
    let path = log_path(log_file)?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives.as_deref()))
        .with_writer(writer)
        .try_init()
        .map_err(|e| eyre!("failed to install log subscriber: {e}"))?;

    tracing::info!(path = %path.display(), version = env!("CARGO_PKG_VERSION"), "logging started");
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::unset(None, DEFAULT_FILTER)]
    #[case::blank(Some("  "), DEFAULT_FILTER)]
    #[case::unparsable(Some("daoscope=loud"), DEFAULT_FILTER)]
    #[case::explicit(Some("daoscope=debug"), "daoscope=debug")]
    fn test_env_filter(#[case] directives: Option<&str>, #[case] expected: &str) {
        assert_eq!(env_filter(directives).to_string(), expected);
    }

    #[test]
    fn test_log_path_override_wins() {
        let path = PathBuf::from("/tmp/daoscope-test.log");
        assert_eq!(log_path(Some(path.clone())).unwrap(), path);
    }
}
