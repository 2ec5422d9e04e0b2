//! Configuration for the extractor

use serde::{Deserialize, Serialize};

/// Configuration for the batch processor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Optional cap on `page_content` length (characters); longer records
    /// fail. Unset means every non-empty `page_content` is scanned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_content_length: Option<usize>,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_content_length == Some(0) {
            return Err("max_content_length must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
