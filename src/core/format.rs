//! Line formatting
//!
//! Every emit path renders its line through [`format_line`]:
//!
//! ```text
//! <timestamp>: [<LEVEL>] <prefix><body>
//! ```

use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use chrono::{DateTime, TimeZone};
use std::fmt::{self, Write};

/// Render one log line, without the trailing newline.
///
/// # Examples
///
/// ```
/// use rust_leveled_logger::core::format::format_line;
/// use rust_leveled_logger::{LogLevel, TimestampFormat};
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// let line = format_line(&at, &TimestampFormat::Rfc3339, LogLevel::INFO, "svc ", "ready");
/// assert_eq!(line, "2025-01-08T10:30:45Z: [INFO] svc ready");
/// ```
pub fn format_line<Tz>(
    now: &DateTime<Tz>,
    time_format: &TimestampFormat,
    level: LogLevel,
    prefix: &str,
    body: &str,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let timestamp = time_format.format(now);
    let label = level.as_str();

    let mut line =
        String::with_capacity(timestamp.len() + label.len() + prefix.len() + body.len() + 5);
    line.push_str(&timestamp);
    line.push_str(": [");
    line.push_str(label);
    line.push_str("] ");
    line.push_str(prefix);
    line.push_str(body);
    line
}

/// Join values with no separator, each through its `Display` impl
pub fn concat_values(values: &[&dyn fmt::Display]) -> String {
    let mut body = String::new();
    for value in values {
        // Writing into a String only fails if a Display impl itself errors
        let _ = write!(body, "{}", value);
    }
    body
}

/// Render `format_args!` output without panicking on a failing `Display` impl.
///
/// Whatever was written before the failure is kept, as with [`concat_values`].
pub fn format_arguments(args: fmt::Arguments<'_>) -> String {
    let mut body = String::new();
    let _ = body.write_fmt(args);
    body
}
