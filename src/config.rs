//! Configuration module for loading and parsing TOML configuration files.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use wartezeiten_client::{ClientConfig, Language};

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse TOML configuration.
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Invalid configuration value.
    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Root configuration structure. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP client settings.
    pub client: ClientSection,
    /// Defaults for command arguments.
    pub defaults: DefaultsSection,
}

/// HTTP client settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClientSection {
    /// API origin. Falls back to the client's built-in default.
    pub base_url: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

/// Defaults for command arguments.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DefaultsSection {
    /// Language used when a command does not pass `--language`.
    pub language: Option<Language>,
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    /// Returns error if content cannot be parsed.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.client.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue(
                "client.timeout_secs must be positive".to_string(),
            ));
        }
        if let Some(base_url) = &self.client.base_url {
            if base_url.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "client.base_url cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Builds the client configuration, letting `base_url_override` win over the file.
    #[must_use]
    pub fn client_config(&self, base_url_override: Option<&str>) -> ClientConfig {
        let defaults = ClientConfig::default();
        ClientConfig {
            base_url: base_url_override
                .map(str::to_string)
                .or_else(|| self.client.base_url.clone())
                .unwrap_or(defaults.base_url),
            timeout: self.client.timeout_secs.map(Duration::from_secs),
        }
    }

    /// Language used when a command does not specify one.
    #[must_use]
    pub fn default_language(&self) -> Language {
        self.defaults.language.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wartezeiten_client::DEFAULT_BASE_URL;

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[client]
base_url = "https://custom.example"
timeout_secs = 15

[defaults]
language = "en"
"#;

        let config = Config::parse(toml_content).expect("should parse");
        assert_eq!(
            config.client.base_url.as_deref(),
            Some("https://custom.example")
        );
        assert_eq!(config.client.timeout_secs, Some(15));
        assert_eq!(config.default_language(), Language::En);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("").expect("should parse");

        assert!(config.client.base_url.is_none());
        assert_eq!(config.default_language(), Language::De);

        let client = config.client_config(None);
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
        assert!(client.timeout.is_none());
    }

    #[test]
    fn test_client_config_override_wins() {
        let config = Config::parse("[client]\nbase_url = \"https://from-file.example\"\n")
            .expect("should parse");

        let client = config.client_config(Some("https://from-flag.example"));
        assert_eq!(client.base_url, "https://from-flag.example");

        let client = config.client_config(None);
        assert_eq!(client.base_url, "https://from-file.example");
    }

    #[test]
    fn test_client_config_timeout() {
        let config = Config::parse("[client]\ntimeout_secs = 30\n").expect("should parse");

        let client = config.client_config(None);
        assert_eq!(client.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_validation_zero_timeout() {
        let result = Config::parse("[client]\ntimeout_secs = 0\n");
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_validation_empty_base_url() {
        let result = Config::parse("[client]\nbase_url = \"  \"\n");
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_unknown_language_rejected() {
        let result = Config::parse("[defaults]\nlanguage = \"fr\"\n");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load("/nonexistent/wartezeiten.toml");
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }
}
