//! Logging macros for ergonomic message formatting.
//!
//! Each level macro takes either a logger followed by `format!`-style
//! arguments, or the format arguments alone to use the process-wide logger.
//!
//! # Examples
//!
//! ```
//! use rust_leveled_logger::prelude::*;
//! use rust_leveled_logger::{info, values};
//!
//! let logger = Logger::builder().level(LogLevel::INFO).build();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // Concatenation without a template
//! logger.info(values!["port=", port]);
//! ```

/// Build a `&[&dyn Display]` for the concatenating emitters.
#[macro_export]
macro_rules! values {
    ($($value:expr),* $(,)?) => {
        &[$(&$value as &dyn ::std::fmt::Display),*]
    };
}

/// Log a formatted message at an explicit level.
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_leveled_logger::log;
/// log!(logger, LogLevel::ERROR, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.logf($level, format_args!($($arg)+))
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::logger().tracef(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.tracef(format_args!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::logger().debugf(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(format_args!($($arg)+))
    };
}

/// Log an info-level message.
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_leveled_logger::info;
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::logger().infof(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(format_args!($($arg)+))
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::logger().warnf(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.warnf(format_args!($($arg)+))
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::logger().errorf(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(format_args!($($arg)+))
    };
}

/// Write an error line and evaluate to `Err(LoggerError::Panic { .. })`.
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// use rust_leveled_logger::log_panic;
///
/// fn parse(logger: &Logger, raw: &str) -> Result<u16> {
///     match raw.parse() {
///         Ok(port) => Ok(port),
///         Err(_) => log_panic!(logger, "bad port '{}'", raw),
///     }
/// }
///
/// let logger = Logger::builder().writer(Vec::new()).build();
/// assert!(parse(&logger, "x").unwrap_err().is_panic());
/// ```
#[macro_export]
macro_rules! log_panic {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::logger().panicf(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.panicf(format_args!($($arg)+))
    };
}

/// Write an error line and exit the process.
#[macro_export]
macro_rules! log_fatal {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::logger().fatalf(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, Logger, Result};
    use crate::sinks::MemorySink;
    use std::sync::Arc;

    fn capture() -> (Logger, MemorySink) {
        let memory = MemorySink::new();
        let logger = Logger::builder()
            .level(LogLevel::TRACE)
            .sink(Arc::new(memory.clone()))
            .build();
        (logger, memory)
    }

    #[test]
    fn test_log_macro() {
        let (logger, memory) = capture();
        log!(logger, LogLevel::WARN, "Formatted: {}", 42);
        assert!(memory.contents().ends_with("[WARN] Formatted: 42\n"));
    }

    #[test]
    fn test_level_macros() {
        let (logger, memory) = capture();
        trace!(logger, "t {}", 1);
        debug!(logger, "d {}", 2);
        info!(logger, "i {}", 3);
        warn!(logger, "w {}", 4);
        error!(logger, "e {}", 5);

        let lines = memory.lines();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].ends_with("[TRACE] t 1"));
        assert!(lines[4].ends_with("[ERROR] e 5"));
    }

    #[test]
    fn test_values_macro() {
        let (logger, memory) = capture();
        let n = 3;
        logger.info(values!["a", n, 'c']);
        assert!(memory.contents().ends_with("[INFO] a3c\n"));
    }

    #[test]
    fn test_log_panic_macro() {
        let (logger, memory) = capture();
        let result: Result<()> = log_panic!(logger, "bad {}", "input");
        let err = result.unwrap_err();
        assert_eq!(err.panic_line(), memory.lines().first().map(String::as_str));
    }
}
