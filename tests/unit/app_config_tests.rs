/*!
 * Tests for app configuration functionality
 */

use anyhow::Result;
use tempfile::TempDir;

use voxlate::app_config::{Config, LogLevel};

#[test]
fn test_defaultConfig_shouldUseGatewayDefaults() {
    let config = Config::default();

    assert_eq!(
        config.provider.endpoint,
        "https://google-translator9.p.rapidapi.com/v2"
    );
    assert_eq!(config.provider.host, "google-translator9.p.rapidapi.com");
    assert!(config.provider.api_key.is_empty());
    assert_eq!(config.recognition_locale, "en-US");
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_defaultConfig_shouldValidate() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_saveAndLoad_shouldRoundTrip() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("conf.json");

    let mut config = Config::default();
    config.recognition_locale = "fr-FR".to_string();
    config.log_level = LogLevel::Debug;
    config.save(&path)?;

    let loaded = Config::from_file(&path)?;
    assert_eq!(loaded.recognition_locale, "fr-FR");
    assert_eq!(loaded.log_level, LogLevel::Debug);

    Ok(())
}

#[test]
fn test_save_shouldNeverWriteApiKey() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("conf.json");

    let mut config = Config::default();
    config.provider.api_key = "super-secret".to_string();
    config.save(&path)?;

    let content = std::fs::read_to_string(&path)?;
    assert!(!content.contains("super-secret"));
    assert!(!content.contains("api_key"));

    let loaded = Config::from_file(&path)?;
    assert!(loaded.provider.api_key.is_empty());

    Ok(())
}

#[test]
fn test_fromFile_withMissingFile_shouldFail() {
    assert!(Config::from_file("/nonexistent/conf.json").is_err());
}

#[test]
fn test_fromFile_withPartialFile_shouldFillDefaults() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("conf.json");
    std::fs::write(&path, r#"{"log_level":"warn"}"#)?;

    let config = Config::from_file(&path)?;
    assert_eq!(config.log_level, LogLevel::Warn);
    assert_eq!(config.recognition_locale, "en-US");
    assert!(!config.provider.endpoint.is_empty());

    Ok(())
}

#[test]
fn test_validate_withInvalidEndpoint_shouldFail() {
    let mut config = Config::default();
    config.provider.endpoint = "not a url".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withEmptyHost_shouldFail() {
    let mut config = Config::default();
    config.provider.host = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withEmptyLocale_shouldFail() {
    let mut config = Config::default();
    config.recognition_locale = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_requireApiKey_shouldGateOnPresence() {
    let mut config = Config::default();
    assert!(config.require_api_key().is_err());

    config.provider.api_key = "key".to_string();
    assert!(config.require_api_key().is_ok());
}
