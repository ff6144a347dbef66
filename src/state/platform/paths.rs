//! Platform-specific data paths.
//!
//! | Platform | Data Dir |
//! |----------|----------|
//! | Linux | `~/.local/share/daoscope` |
//! | macOS | `~/Library/Application Support/daoscope` |
//! | Windows | `%LOCALAPPDATA%/daoscope` |
//!
//! The configuration file location is owned by
//! [`AppConfig::config_path`](crate::state::AppConfig::config_path).

use color_eyre::Result;
use std::fs;
use std::path::PathBuf;

use crate::state::config::APP_NAME;

/// Default log file name.
pub const LOG_FILE_NAME: &str = "daoscope.log";

/// Returns the local data directory, creating it if necessary.
///
/// # Errors
///
/// Returns an error if the directory cannot be determined or created.
pub fn data_dir() -> Result<PathBuf> {
    let mut path = dirs::data_local_dir()
        .ok_or_else(|| color_eyre::eyre::eyre!("Could not find data directory"))?;
    path.push(APP_NAME);
    fs::create_dir_all(&path)?;
    Ok(path)
}

/// Returns the default log file path.
///
/// # Errors
///
/// Returns an error if the data directory cannot be determined or created.
pub fn log_file() -> Result<PathBuf> {
    Ok(data_dir()?.join(LOG_FILE_NAME))
}
