//! Configuration file parsing for the server.
//!
//! Loads settings from TOML files including bind address, route path, body
//! size limit, log level and the extractor section.

use pagesplit_extractor::ExtractorConfig;
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

    /// A field holds an unusable value
    #[error("Invalid configuration field {0}: {1}")]
    InvalidField(String, String),
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g., 7071)
    pub bind_port: u16,

    /// Path of the custom skill endpoint
    #[serde(default = "default_route_path")]
    pub route_path: String,

    /// Largest accepted request body, in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Extractor settings
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

fn default_route_path() -> String {
    "/api/page_content_split_http_trigger".to_string()
}

/// Default body limit: 16 MiB
fn default_max_body_bytes() -> usize {
    16 * 1024 * 1024
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: ServerConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.route_path.starts_with('/') {
            return Err(ConfigError::InvalidField(
                "route_path".to_string(),
                "must start with '/'".to_string(),
            ));
        }
        if self.route_path == "/health" {
            return Err(ConfigError::InvalidField(
                "route_path".to_string(),
                "'/health' is reserved".to_string(),
            ));
        }
        if self.max_body_bytes == 0 {
            return Err(ConfigError::InvalidField(
                "max_body_bytes".to_string(),
                "must be greater than 0".to_string(),
            ));
        }
        self.extractor
            .validate()
            .map_err(|e| ConfigError::InvalidField("extractor".to_string(), e))
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 7071,
            route_path: default_route_path(),
            max_body_bytes: default_max_body_bytes(),
            log_level: default_log_level(),
            extractor: ExtractorConfig::default(),
        }
    }
}
