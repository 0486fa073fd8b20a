//! Timestamp formatting
//!
//! Layouts for the leading timestamp of every line. The default is RFC 3339
//! at seconds precision; any strftime layout can be supplied as `Custom`.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, SecondsFormat, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// Timestamp layout for log lines
///
/// # Examples
///
/// ```
/// use rust_leveled_logger::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::Rfc3339.format(&at), "2025-01-08T10:30:45Z");
/// assert_eq!(TimestampFormat::from("%Y/%m/%d").format(&at), "2025/01/08");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// RFC 3339 with seconds: `2025-01-08T10:30:45+02:00` (`Z` when UTC)
    #[default]
    Rfc3339,

    /// RFC 3339 with milliseconds: `2025-01-08T10:30:45.123+02:00`
    Rfc3339Millis,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime layout, passed through verbatim
    Custom(String),
}

impl TimestampFormat {
    /// Format a point in time according to this layout.
    ///
    /// A malformed custom layout does not panic; the layout text itself is
    /// returned instead.
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        match self {
            TimestampFormat::Rfc3339 => datetime.to_rfc3339_opts(SecondsFormat::Secs, true),
            TimestampFormat::Rfc3339Millis => {
                datetime.to_rfc3339_opts(SecondsFormat::Millis, true)
            }
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(layout) => {
                let mut out = String::with_capacity(layout.len() + 16);
                match write!(out, "{}", datetime.format(layout)) {
                    Ok(()) => out,
                    Err(_) => layout.clone(),
                }
            }
        }
    }

    /// Reject custom layouts chrono cannot render
    pub fn validate(&self) -> Result<()> {
        if let TimestampFormat::Custom(layout) = self {
            if StrftimeItems::new(layout).any(|item| matches!(item, Item::Error)) {
                return Err(LoggerError::config(
                    "time_format",
                    format!("malformed strftime layout '{}'", layout),
                ));
            }
        }
        Ok(())
    }
}

impl From<&str> for TimestampFormat {
    fn from(layout: &str) -> Self {
        TimestampFormat::Custom(layout.to_string())
    }
}

impl From<String> for TimestampFormat {
    fn from(layout: String) -> Self {
        TimestampFormat::Custom(layout)
    }
}
