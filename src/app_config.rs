use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, LevelFilter};
use serde::{Deserialize, Serialize};

use crate::errors::ValidatorError;

/// Application configuration module
/// This module handles loading and validating the settings of the
/// command-line front end. The linguistic tables are not configurable.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Response output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Quiz validation settings
    #[serde(default)]
    pub quiz: QuizConfig,
}

/// Output formatting settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    // @field: Pretty-print JSON responses
    #[serde(default)]
    pub pretty: bool,

    // @field: Spaces per indentation level when pretty-printing
    #[serde(default = "default_indent")]
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: default_indent(),
        }
    }
}

/// Quiz validation settings
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct QuizConfig {
    // @field: Exit with a failure status when any question is invalid
    #[serde(default)]
    pub strict: bool,
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

const MAX_INDENT: usize = 8;

fn default_indent() -> usize {
    2
}

impl Config {
    /// Load the configuration from a JSON file.
    ///
    /// A missing file yields the default configuration.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let config: Config = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> std::result::Result<(), ValidatorError> {
        if self.output.indent > MAX_INDENT {
            return Err(ValidatorError::Config(format!(
                "output indent must be at most {}, got {}",
                MAX_INDENT, self.output.indent
            )));
        }
        Ok(())
    }
}
