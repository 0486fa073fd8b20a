//! # Rust Leveled Logger
//!
//! A small, thread-safe leveled logger that writes one timestamped line per
//! call to a configurable sink:
//!
//! ```text
//! 2025-01-08T10:30:45+02:00: [INFO] svc listening on 8080
//! ```
//!
//! ## Features
//!
//! - **Five levels**: `ERROR`, `WARN`, `INFO`, `DEBUG`, `TRACE`, filtered by a threshold
//! - **Injectable**: every `Logger` is an independent value; [`global`] offers a shared default
//! - **Typed panics**: `panic`/`panicf` return [`LoggerError::Panic`] for `?` propagation
//! - **Pluggable sinks**: console, file, any `io::Write`, or in-memory capture

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result, Sink,
        SinkConfig, TimestampFormat, FATAL_EXIT_CODE,
    };
    pub use crate::sinks::{ConsoleSink, FileSink, MemorySink, WriterSink};
}

pub use crate::core::{
    LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result, Sink,
    SinkConfig, TimestampFormat, FATAL_EXIT_CODE,
};
pub use sinks::{ConsoleSink, FileSink, MemorySink, WriterSink};
