//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log line, ordered by increasing verbosity.
///
/// A line at level `L` is emitted when `L.value() <= threshold.value()`.
/// Values outside the five known constants are representable on purpose:
/// they are accepted as a threshold and render as `UNKNOWN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "LevelRepr", into = "LevelRepr")]
pub struct LogLevel(u8);

impl LogLevel {
    pub const ERROR: LogLevel = LogLevel(0);
    pub const WARN: LogLevel = LogLevel(1);
    pub const INFO: LogLevel = LogLevel(2);
    pub const DEBUG: LogLevel = LogLevel(3);
    pub const TRACE: LogLevel = LogLevel(4);

    /// All known levels, most severe first
    pub const ALL: [LogLevel; 5] = [
        LogLevel::ERROR,
        LogLevel::WARN,
        LogLevel::INFO,
        LogLevel::DEBUG,
        LogLevel::TRACE,
    ];

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_known(self) -> bool {
        self.0 <= LogLevel::TRACE.0
    }

    /// Whether a line at `level` passes when `self` is the threshold
    #[inline]
    pub const fn enables(self, level: LogLevel) -> bool {
        level.0 <= self.0
    }

    pub const fn as_str(self) -> &'static str {
        match self.0 {
            0 => "ERROR",
            1 => "WARN",
            2 => "INFO",
            3 => "DEBUG",
            4 => "TRACE",
            _ => "UNKNOWN",
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(self) -> colored::Color {
        use colored::Color::*;
        match self.0 {
            0 => Red,
            1 => Yellow,
            2 => Green,
            3 => Blue,
            4 => BrightBlack,
            _ => Magenta,
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::ERROR
    }
}

impl From<u8> for LogLevel {
    fn from(value: u8) -> Self {
        LogLevel(value)
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_uppercase().as_str() {
            "ERROR" => Ok(LogLevel::ERROR),
            "WARN" | "WARNING" => Ok(LogLevel::WARN),
            "INFO" => Ok(LogLevel::INFO),
            "DEBUG" => Ok(LogLevel::DEBUG),
            "TRACE" => Ok(LogLevel::TRACE),
            _ => trimmed
                .parse::<u8>()
                .map(LogLevel)
                .map_err(|_| format!("Invalid log level: '{}'", s)),
        }
    }
}

/// Wire form: the name for known levels, the raw number otherwise
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum LevelRepr {
    Value(u8),
    Name(String),
}

impl From<LogLevel> for LevelRepr {
    fn from(level: LogLevel) -> Self {
        if level.is_known() {
            LevelRepr::Name(level.as_str().to_string())
        } else {
            LevelRepr::Value(level.0)
        }
    }
}

impl TryFrom<LevelRepr> for LogLevel {
    type Error = String;

    fn try_from(repr: LevelRepr) -> Result<Self, Self::Error> {
        match repr {
            LevelRepr::Value(v) => Ok(LogLevel(v)),
            LevelRepr::Name(name) => name.parse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_follows_verbosity() {
        assert!(LogLevel::ERROR < LogLevel::WARN);
        assert!(LogLevel::WARN < LogLevel::INFO);
        assert!(LogLevel::INFO < LogLevel::DEBUG);
        assert!(LogLevel::DEBUG < LogLevel::TRACE);
    }

    #[test]
    fn test_enables() {
        assert!(LogLevel::INFO.enables(LogLevel::ERROR));
        assert!(LogLevel::INFO.enables(LogLevel::INFO));
        assert!(!LogLevel::INFO.enables(LogLevel::DEBUG));
        assert!(LogLevel::ERROR.enables(LogLevel::ERROR));
        assert!(!LogLevel::ERROR.enables(LogLevel::WARN));
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(LogLevel::from(5).as_str(), "UNKNOWN");
        assert_eq!(LogLevel::from(200).to_string(), "UNKNOWN");
        assert!(!LogLevel::from(5).is_known());
    }

    #[test]
    fn test_default_is_error() {
        assert_eq!(LogLevel::default(), LogLevel::ERROR);
    }

    #[test]
    fn test_parse() {
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::WARN));
        assert_eq!(" Trace ".parse::<LogLevel>(), Ok(LogLevel::TRACE));
        assert_eq!("7".parse::<LogLevel>(), Ok(LogLevel::from(7)));
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_serde() {
        assert_eq!(serde_json::to_string(&LogLevel::DEBUG).unwrap(), "\"DEBUG\"");
        assert_eq!(serde_json::to_string(&LogLevel::from(9)).unwrap(), "9");

        let level: LogLevel = serde_json::from_str("\"info\"").unwrap();
        assert_eq!(level, LogLevel::INFO);
        let level: LogLevel = serde_json::from_str("3").unwrap();
        assert_eq!(level, LogLevel::DEBUG);
        assert!(serde_json::from_str::<LogLevel>("\"loud\"").is_err());
    }
}
