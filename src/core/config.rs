//! Declarative logger configuration
//!
//! A [`LoggerConfig`] can be built in code or loaded from JSON, then used to
//! construct a logger or to reconfigure an existing one in place.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::sink::Sink;
use super::timestamp::TimestampFormat;
use crate::sinks::{ConsoleSink, FileSink};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// Where lines go
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SinkConfig {
    #[default]
    Stdout,
    Stderr,
    File { path: PathBuf },
}

impl SinkConfig {
    /// Open the configured destination
    pub fn open(&self, colors: bool) -> Result<Arc<dyn Sink>> {
        let sink: Arc<dyn Sink> = match self {
            SinkConfig::Stdout => Arc::new(ConsoleSink::stdout().with_colors(colors)),
            SinkConfig::Stderr => Arc::new(ConsoleSink::stderr().with_colors(colors)),
            SinkConfig::File { path } => Arc::new(FileSink::new(path.clone())?),
        };
        Ok(sink)
    }
}

/// # Example
///
/// ```
/// use rust_leveled_logger::{LogLevel, LoggerConfig};
///
/// let config = LoggerConfig::from_json(r#"{
///     "level": "debug",
///     "prefix": "api",
///     "time_format": { "Custom": "%H:%M:%S" },
///     "sink": { "type": "stderr" }
/// }"#).unwrap();
///
/// assert_eq!(config.level, LogLevel::DEBUG);
/// assert_eq!(config.prefix.as_deref(), Some("api"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Threshold; lines more verbose than this are dropped
    pub level: LogLevel,
    /// Prefix text; a single space is appended when applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    pub time_format: TimestampFormat,
    pub sink: SinkConfig,
    /// Color console output by level
    pub colors: bool,
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.level.is_known() {
            return Err(LoggerError::InvalidLevel(self.level.value().to_string()));
        }
        self.time_format.validate()?;
        if let SinkConfig::File { path } = &self.sink {
            if path.as_os_str().is_empty() {
                return Err(LoggerError::config("sink", "file path is empty"));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn with_time_format(mut self, format: impl Into<TimestampFormat>) -> Self {
        self.time_format = format.into();
        self
    }

    #[must_use]
    pub fn with_sink(mut self, sink: SinkConfig) -> Self {
        self.sink = sink;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }
}
