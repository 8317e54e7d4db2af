//! CLI configuration: server location and output preferences.
//!
//! Stored as TOML under the platform config directory
//! (e.g., `~/.config/parlor/config.toml`).

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable tables
    Table,
    /// Machine-readable JSON
    Json,
    /// Bare text / ids only
    Quiet,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Table
    }
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Preferred output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Whether colored output is enabled
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            format: OutputFormat::default(),
            color: true,
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the Parlor server
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Booking link used by offline extraction
    #[serde(default = "default_booking_link")]
    pub booking_link: String,

    /// Display settings
    #[serde(default)]
    pub settings: Settings,
}

fn default_server_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_booking_link() -> String {
    parlor_extractor::ExtractorConfig::default().booking_link
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_url: default_server_url(),
            booking_link: default_booking_link(),
            settings: Settings::default(),
        }
    }
}

impl Config {
    /// Path of the config file under the platform config directory.
    pub fn path() -> Result<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| CliError::Config("No config directory on this platform".to_string()))?;
        Ok(base.join("parlor").join("config.toml"))
    }

    /// Load the config file, or fail if it is missing or malformed.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Write the config file, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server_url, "http://localhost:8080");
        assert!(config.booking_link.starts_with("https://"));
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert!(config.settings.color);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.server_url, config.server_url);
        assert_eq!(parsed.settings.format, config.settings.format);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed: Config = toml::from_str("server_url = \"http://x:1\"").unwrap();
        assert_eq!(parsed.server_url, "http://x:1");
        assert_eq!(parsed.settings.format, OutputFormat::Table);
        assert!(parsed.booking_link.starts_with("https://"));
    }
}
