//! Core logger types and traits

pub mod config;
pub mod error;
pub mod format;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod sink;
pub mod timestamp;

pub use config::{LoggerConfig, SinkConfig};
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, FATAL_EXIT_CODE};
pub use metrics::LoggerMetrics;
pub use sink::Sink;
pub use timestamp::TimestampFormat;
