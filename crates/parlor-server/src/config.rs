//! Configuration file parsing for the server.
//!
//! Loads settings from TOML files including bind address, the LLM
//! provider, the lead database path, the service catalog, and the
//! booking link.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g., 8080)
    pub bind_port: u16,

    /// Booking link offered through the book-meeting call to action
    #[serde(default = "default_booking_link")]
    pub booking_link: String,

    /// Service slugs the chatbot may recommend
    #[serde(default)]
    pub services: Vec<String>,

    /// LLM provider settings
    pub llm: LlmConfig,

    /// Lead store settings
    #[serde(default)]
    pub store: StoreConfig,
}

/// LLM provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// Chat-completions API base URL
    #[serde(default = "default_llm_endpoint")]
    pub endpoint: String,

    /// Model name (e.g., "gpt-4o-mini")
    pub model: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

/// Lead store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// SQLite database path; ":memory:" for a throwaway store
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            path: "parlor.db".to_string(),
        }
    }
}

fn default_booking_link() -> String {
    parlor_extractor::ExtractorConfig::default().booking_link
}

fn default_llm_endpoint() -> String {
    parlor_llm::chat_api::DEFAULT_ENDPOINT.to_string()
}

fn default_api_key_env() -> String {
    "PARLOR_API_KEY".to_string()
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&contents)?;

        // Validate required fields
        if config.llm.model.is_empty() {
            return Err(ConfigError::MissingField("llm.model".to_string()));
        }

        Ok(config)
    }

    /// Create a default configuration for testing
    pub fn default_test_config() -> Self {
        ServerConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8080,
            booking_link: default_booking_link(),
            services: vec![
                "seo".to_string(),
                "web-dev".to_string(),
                "branding".to_string(),
            ],
            llm: LlmConfig {
                endpoint: default_llm_endpoint(),
                model: "test-model".to_string(),
                api_key_env: default_api_key_env(),
            },
            store: StoreConfig {
                path: ":memory:".to_string(),
            },
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_test_config() {
        let config = ServerConfig::default_test_config();
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.bind_port, 8080);
        assert_eq!(config.services.len(), 3);
        assert_eq!(config.store.path, ":memory:");
    }

    #[test]
    fn test_bind_addr() {
        let config = ServerConfig::default_test_config();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            bind_address = "0.0.0.0"
            bind_port = 9000
            booking_link = "https://cal.example.com/intro"
            services = ["seo", "web-dev"]

            [llm]
            endpoint = "https://api.example.com/v1"
            model = "my-model"
            api_key_env = "MY_KEY"

            [store]
            path = "/var/lib/parlor/leads.db"
        "#;

        let config: ServerConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.bind_port, 9000);
        assert_eq!(config.booking_link, "https://cal.example.com/intro");
        assert_eq!(config.services, vec!["seo", "web-dev"]);
        assert_eq!(config.llm.model, "my-model");
        assert_eq!(config.llm.api_key_env, "MY_KEY");
        assert_eq!(config.store.path, "/var/lib/parlor/leads.db");
    }

    #[test]
    fn test_parse_toml_with_defaults() {
        let toml = r#"
            bind_address = "127.0.0.1"
            bind_port = 3000

            [llm]
            model = "my-model"
        "#;

        let config: ServerConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.llm.api_key_env, "PARLOR_API_KEY");
        assert!(config.booking_link.starts_with("https://"));
        assert_eq!(config.store.path, "parlor.db");
        assert!(config.services.is_empty());
    }
}
