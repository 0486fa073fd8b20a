//! Sink trait for log output destinations

use super::{error::Result, log_level::LogLevel};

/// Destination for formatted lines.
///
/// `line` never carries the trailing newline; the sink appends it. Sinks are
/// shared across threads and own whatever synchronization their writes need.
pub trait Sink: Send + Sync {
    fn write_line(&self, level: LogLevel, line: &str) -> Result<()>;
    fn flush(&self) -> Result<()>;
    fn name(&self) -> &str;
}
