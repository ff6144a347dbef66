//! Application configuration with persistence.
//!
//! This module provides the [`AppConfig`] structure for managing application
//! settings with automatic load/save to disk.
//!
//! # Configuration File Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/daoscope/config.json`
//! - macOS: `~/Library/Application Support/daoscope/config.json`
//! - Windows: `%APPDATA%/daoscope/config.json`
//!
//! # Example
//!
//! ```ignore
//! use crate::state::AppConfig;
//!
//! let mut config = AppConfig::load();
//! config.animate = false;
//! config.save()?;
//! ```

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::client::subgraph::{DEFAULT_ENS_SUBGRAPH_URL, DEFAULT_SUBGRAPH_URL};

// ============================================================================
// Constants
// ============================================================================

/// Application name used for configuration directory.
pub const APP_NAME: &str = "daoscope";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Default base URL of the public DAO pages.
pub const DEFAULT_SHARE_BASE_URL: &str = "https://instadao.org";

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration structure for persistence.
///
/// Every field has a serde default, so partial files load cleanly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// DAO factory subgraph endpoint.
    pub subgraph_url: String,
    /// ENS subgraph endpoint.
    pub ens_subgraph_url: String,
    /// Base URL used to build share links.
    pub share_base_url: String,
    /// Whether chart transitions are animated.
    pub animate: bool,
    /// Wallet address used as the session when none is given.
    pub wallet: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            subgraph_url: DEFAULT_SUBGRAPH_URL.to_string(),
            ens_subgraph_url: DEFAULT_ENS_SUBGRAPH_URL.to_string(),
            share_base_url: DEFAULT_SHARE_BASE_URL.to_string(),
            animate: true,
            wallet: None,
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration from disk.
    ///
    /// If the configuration file doesn't exist or cannot be parsed,
    /// returns the default configuration.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::info!("config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration path cannot be determined
    /// - The file cannot be read
    /// - The JSON content cannot be parsed
    pub fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        let content = fs::read_to_string(&path)?;
        Self::from_json(&content)
    }

    /// Parses configuration JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid configuration JSON.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Saves the configuration to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration path cannot be determined
    /// - The configuration cannot be serialized
    /// - The file cannot be written
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Writes the configuration as pretty JSON to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized or the
    /// file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "saved configuration");
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.subgraph_url, DEFAULT_SUBGRAPH_URL);
        assert_eq!(config.share_base_url, "https://instadao.org");
        assert!(config.animate);
        assert!(config.wallet.is_none());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = AppConfig {
            animate: false,
            wallet: Some("0xabc".to_string()),
            ..AppConfig::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[rstest]
    #[case::empty_object("{}", true, None)]
    #[case::animate_only(r#"{"animate":false}"#, false, None)]
    #[case::wallet_only(r#"{"wallet":"0xabc"}"#, true, Some("0xabc"))]
    fn test_partial_config_uses_defaults(
        #[case] json: &str,
        #[case] animate: bool,
        #[case] wallet: Option<&str>,
    ) {
        let config = AppConfig::from_json(json).unwrap();
        assert_eq!(config.animate, animate);
        assert_eq!(config.wallet.as_deref(), wallet);
        assert_eq!(config.ens_subgraph_url, DEFAULT_ENS_SUBGRAPH_URL);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(AppConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_json_format() {
        let json = serde_json::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(json.contains("subgraph_url"));
        assert!(json.contains("share_base_url"));
        assert!(json.contains("animate"));
    }

    #[test]
    fn test_save_to_writes_loadable_json() {
        let path = std::env::temp_dir().join(format!("daoscope-config-{}.json", std::process::id()));
        let config = AppConfig {
            animate: false,
            wallet: Some("0xabc".to_string()),
            ..AppConfig::default()
        };

        config.save_to(&path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert!(content.contains('\n'), "pretty JSON expected");
        assert_eq!(AppConfig::from_json(&content).unwrap(), config);
    }

    #[test]
    fn test_config_path_has_json_extension() {
        if let Ok(path) = AppConfig::config_path() {
            let extension = path.extension().and_then(|e| e.to_str());
            assert_eq!(extension, Some("json"));
        }
    }
}
