//! Configuration for the Action Extractor

use serde::{Deserialize, Serialize};

/// Default booking link offered to visitors who want a meeting.
pub const DEFAULT_BOOKING_LINK: &str = "https://calendly.com/parlor-agency/intro-call";

/// Configuration for the Action Extractor.
///
/// The booking link is an explicit parameter rather than process
/// environment, so the extractor stays pure and testable without any
/// environment setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// The scheduling link whose presence in a reply forces the booking
    /// call to action (and which is never shown to the visitor as prose)
    pub booking_link: String,
}

impl ExtractorConfig {
    /// Create a config with a specific booking link.
    pub fn with_booking_link(booking_link: impl Into<String>) -> Self {
        Self {
            booking_link: booking_link.into(),
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.booking_link.is_empty() && !self.booking_link.starts_with("http") {
            return Err(format!(
                "booking_link must be an http(s) URL, got '{}'",
                self.booking_link
            ));
        }
        Ok(())
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            booking_link: DEFAULT_BOOKING_LINK.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ExtractorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_link_is_valid() {
        let config = ExtractorConfig::with_booking_link("");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_non_url_link_is_rejected() {
        let config = ExtractorConfig::with_booking_link("calendly dot com");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig::with_booking_link("https://cal.example.com/intro");
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config.booking_link, parsed.booking_link);
    }
}
