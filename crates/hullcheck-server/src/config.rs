//! Configuration file parsing for the server.
//!
//! Loads settings from an optional TOML file, then applies environment
//! overrides. Every field has a default except the Groq API key.

use hullcheck_extractor::ExtractorConfig;
use hullcheck_llm::groq::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
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

    /// A field holds an unusable value
    #[error("Invalid value for {field}: {message}")]
    InvalidValue {
        /// Offending field
        field: String,
        /// What was wrong
        message: String,
    },
}

/// Server configuration loaded from TOML
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Name reported by the root endpoint
    pub app_name: String,

    /// Version reported by the root and health endpoints
    pub app_version: String,

    /// Bind address (e.g., "0.0.0.0")
    pub host: String,

    /// Bind port
    pub port: u16,

    /// Groq API key; required
    pub groq_api_key: String,

    /// Completion model identifier
    pub ai_model: String,

    /// Sampling temperature
    pub ai_temperature: f32,

    /// Maximum output tokens
    pub ai_max_tokens: u32,

    /// Log level used when RUST_LOG is unset
    pub log_level: String,

    /// JSON array of approved vessel names
    pub valid_vessels_file: PathBuf,

    /// Completion API base URL
    pub llm_endpoint: String,

    /// Per-request timeout for the completion API, in seconds
    pub llm_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let extractor = ExtractorConfig::default();
        Self {
            app_name: "Insurance Document Validator API".to_string(),
            app_version: "1.0.0".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8000,
            groq_api_key: String::new(),
            ai_model: extractor.model,
            ai_temperature: extractor.temperature,
            ai_max_tokens: extractor.max_tokens,
            log_level: "INFO".to_string(),
            valid_vessels_file: PathBuf::from("data/valid_vessels.json"),
            llm_endpoint: DEFAULT_ENDPOINT.to_string(),
            llm_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

// The API key must never reach the logs
impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("app_name", &self.app_name)
            .field("app_version", &self.app_version)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("groq_api_key", &"<redacted>")
            .field("ai_model", &self.ai_model)
            .field("ai_temperature", &self.ai_temperature)
            .field("ai_max_tokens", &self.ai_max_tokens)
            .field("log_level", &self.log_level)
            .field("valid_vessels_file", &self.valid_vessels_file)
            .field("llm_endpoint", &self.llm_endpoint)
            .field("llm_timeout_secs", &self.llm_timeout_secs)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file
    ///
    /// Does not check for the API key, which may still arrive from the
    /// environment. Use [`ServerConfig::load`] for the full startup path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load from an optional file, apply process environment overrides and validate
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides using `lookup` to read variables
    ///
    /// Recognised variables: `GROQ_API_KEY`, `HULLCHECK_HOST`,
    /// `HULLCHECK_PORT`, `HULLCHECK_LOG_LEVEL`, `HULLCHECK_VESSELS_FILE`,
    /// `HULLCHECK_AI_MODEL`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("GROQ_API_KEY") {
            self.groq_api_key = key;
        }
        if let Some(host) = lookup("HULLCHECK_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("HULLCHECK_PORT") {
            self.port = port.trim().parse().map_err(|e| ConfigError::InvalidValue {
                field: "HULLCHECK_PORT".to_string(),
                message: format!("{}: {}", port, e),
            })?;
        }
        if let Some(level) = lookup("HULLCHECK_LOG_LEVEL") {
            self.log_level = level;
        }
        if let Some(file) = lookup("HULLCHECK_VESSELS_FILE") {
            self.valid_vessels_file = PathBuf::from(file);
        }
        if let Some(model) = lookup("HULLCHECK_AI_MODEL") {
            self.ai_model = model;
        }
        Ok(())
    }

    /// Check required fields and value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.groq_api_key.trim().is_empty() {
            return Err(ConfigError::MissingField("groq_api_key".to_string()));
        }
        self.extractor_config()
            .validate()
            .map_err(|message| ConfigError::InvalidValue {
                field: "ai".to_string(),
                message,
            })
    }

    /// Get the full bind address (host:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Extractor settings derived from the `ai_*` fields
    pub fn extractor_config(&self) -> ExtractorConfig {
        ExtractorConfig {
            model: self.ai_model.clone(),
            temperature: self.ai_temperature,
            max_tokens: self.ai_max_tokens,
        }
    }

    /// Completion API timeout
    pub fn llm_timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout_secs)
    }

    /// Default tracing filter directive, lower-cased for `EnvFilter`
    pub fn log_filter(&self) -> String {
        self.log_level.trim().to_lowercase()
    }
}
