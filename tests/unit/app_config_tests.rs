/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use log::LevelFilter;

use estcheck::app_config::{Config, LogLevel};

use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.log_level, LogLevel::Warn);
    assert!(!config.output.pretty);
    assert_eq!(config.output.indent, 2);
    assert!(!config.quiz.strict);
    assert!(config.validate().is_ok());
}

/// A missing config file falls back to defaults
#[test]
fn test_load_withMissingFile_shouldReturnDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = Config::load(temp_dir.path().join("absent.json"))?;
    assert_eq!(config, Config::default());
    Ok(())
}

/// Partial files keep defaults for absent fields
#[test]
fn test_load_withPartialFile_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "estcheck.json",
        r#"{"log_level": "debug", "output": {"pretty": true}}"#,
    )?;

    let config = Config::load(&path)?;

    assert_eq!(config.log_level, LogLevel::Debug);
    assert!(config.output.pretty);
    assert_eq!(config.output.indent, 2);
    assert!(!config.quiz.strict);
    Ok(())
}

#[test]
fn test_load_withOversizedIndent_shouldFailValidation() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "estcheck.json",
        r#"{"output": {"pretty": true, "indent": 20}}"#,
    )?;

    let error = Config::load(&path).unwrap_err();
    assert!(error.to_string().contains("indent"));
    Ok(())
}

#[test]
fn test_load_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "estcheck.json", "{ not json")?;
    assert!(Config::load(&path).is_err());
    Ok(())
}

#[test]
fn test_logLevel_shouldConvertToLevelFilter() {
    assert_eq!(LevelFilter::from(LogLevel::Error), LevelFilter::Error);
    assert_eq!(LevelFilter::from(LogLevel::Trace), LevelFilter::Trace);
    let parsed: LogLevel = serde_json::from_str("\"info\"").unwrap();
    assert_eq!(parsed, LogLevel::Info);
}
