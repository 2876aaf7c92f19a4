use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings. The provider API key is
/// deliberately not part of the file format; it only ever comes from the
/// environment or the command line.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Translation provider settings
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Locale passed to the speech-recognition capability
    ///
    /// Fixed per session and independent of the selected source language.
    #[serde(default = "default_recognition_locale")]
    pub recognition_locale: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation provider configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Endpoint URL of the translation API
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Host identifier sent alongside the API key
    #[serde(default = "default_host")]
    pub host: String,

    /// API key; never read from or written to the config file
    #[serde(skip)]
    pub api_key: String,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_endpoint() -> String {
    crate::providers::rapid_google::DEFAULT_ENDPOINT.to_string()
}

fn default_host() -> String {
    crate::providers::rapid_google::DEFAULT_HOST.to_string()
}

fn default_recognition_locale() -> String {
    "en-US".to_string()
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to open config file: {}", path.display()))?;

        let config: Config = serde_json::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Write the configuration to a JSON file
    ///
    /// The API key is skipped by the serializer, so saving a configured
    /// instance never leaks the credential to disk.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, content)
            .context(format!("Failed to write config to file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.provider.endpoint)
            .context(format!("Invalid provider endpoint: {}", self.provider.endpoint))?;

        if self.provider.host.trim().is_empty() {
            return Err(anyhow!("Provider host must not be empty"));
        }

        if self.recognition_locale.trim().is_empty() {
            return Err(anyhow!("Recognition locale must not be empty"));
        }

        Ok(())
    }

    /// Validate that an API key is present before any network call
    pub fn require_api_key(&self) -> Result<()> {
        if self.provider.api_key.trim().is_empty() {
            return Err(anyhow!(
                "No API key configured. Set VOXLATE_API_KEY or pass --api-key."
            ));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            provider: ProviderConfig::default(),
            recognition_locale: default_recognition_locale(),
            log_level: LogLevel::default(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            endpoint: default_endpoint(),
            host: default_host(),
            api_key: String::new(),
        }
    }
}
