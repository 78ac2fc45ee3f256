/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use log::LevelFilter;
use feedlog::app_config::{Config, LogLevel};
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.product_name, "Adobe Downloader");
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withBlankProductName_shouldFail() {
    let mut config = Config::default();
    config.product_name = "   ".to_string();

    let error = config.validate().unwrap_err();
    assert!(error.to_string().contains("product name"));
}

/// Test that missing fields fall back to defaults
#[test]
fn test_config_deserialization_withPartialJson_shouldFillDefaults() -> Result<()> {
    let config: Config = serde_json::from_str(r#"{"log_level": "debug"}"#)?;

    assert_eq!(config.product_name, "Adobe Downloader");
    assert_eq!(config.log_level, LogLevel::Debug);

    Ok(())
}

/// Test saving and loading a configuration file
#[test]
fn test_config_file_withSavedConfig_shouldLoadSameValues() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("feedlog.json");

    let config = Config {
        product_name: "MyApp".to_string(),
        log_level: LogLevel::Warn,
    };
    config.save_to_file(&path)?;

    let content = std::fs::read_to_string(&path)?;
    assert!(content.contains("\"log_level\": \"warn\""));
    assert_eq!(Config::from_file(&path)?, config);

    Ok(())
}

/// Test that a missing config file yields defaults
#[test]
fn test_load_or_default_withMissingFile_shouldReturnDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = Config::load_or_default(temp_dir.path().join("absent.json"))?;

    assert_eq!(config, Config::default());

    Ok(())
}

/// Test that invalid JSON is reported with the file name
#[test]
fn test_from_file_withInvalidJson_shouldFailWithContext() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "broken.json", "{ not json")?;

    let error = Config::from_file(&path).unwrap_err();
    assert!(error.to_string().contains("broken.json"));

    Ok(())
}

/// Test the log level mapping
#[test]
fn test_log_level_toLevelFilter_shouldMapEachLevel() {
    assert_eq!(LogLevel::Error.to_level_filter(), LevelFilter::Error);
    assert_eq!(LogLevel::Warn.to_level_filter(), LevelFilter::Warn);
    assert_eq!(LogLevel::Info.to_level_filter(), LevelFilter::Info);
    assert_eq!(LogLevel::Debug.to_level_filter(), LevelFilter::Debug);
    assert_eq!(LogLevel::Trace.to_level_filter(), LevelFilter::Trace);
}
