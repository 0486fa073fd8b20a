//! Process-wide default logger
//!
//! A lazily created [`Logger`] with the standard defaults, plus free functions
//! that forward to it. Code that wants isolation (tests, libraries) should
//! construct its own `Logger` and pass it by reference instead.
//!
//! ```no_run
//! use rust_leveled_logger::{global, LogLevel};
//!
//! global::set_log_level(LogLevel::INFO);
//! global::set_prefix("api");
//! global::info(&[&"started on port ", &8080]);
//! global::warnf(format_args!("{} retries left", 2));
//! ```

use crate::core::{LogLevel, Logger, LoggerConfig, Result, Sink, TimestampFormat};
use std::fmt;
use std::io::Write;
use std::sync::{Arc, OnceLock};

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// The shared instance, created on first use
#[inline]
pub fn logger() -> &'static Logger {
    LOGGER.get_or_init(Logger::new)
}

pub fn configure(config: &LoggerConfig) -> Result<()> {
    logger().apply_config(config)
}

pub fn set_log_level(level: LogLevel) {
    logger().set_log_level(level);
}

pub fn set_prefix(prefix: &str) {
    logger().set_prefix(prefix);
}

pub fn set_time_format(format: impl Into<TimestampFormat>) {
    logger().set_time_format(format);
}

pub fn set_writer<W: Write + Send + 'static>(writer: W) -> Arc<dyn Sink> {
    logger().set_writer(writer)
}

pub fn set_sink(sink: Arc<dyn Sink>) -> Arc<dyn Sink> {
    logger().set_sink(sink)
}

pub fn flush() -> Result<()> {
    logger().flush()
}

pub fn error(values: &[&dyn fmt::Display]) {
    logger().error(values);
}

pub fn errorf(args: fmt::Arguments<'_>) {
    logger().errorf(args);
}

pub fn warn(values: &[&dyn fmt::Display]) {
    logger().warn(values);
}

pub fn warnf(args: fmt::Arguments<'_>) {
    logger().warnf(args);
}

pub fn info(values: &[&dyn fmt::Display]) {
    logger().info(values);
}

pub fn infof(args: fmt::Arguments<'_>) {
    logger().infof(args);
}

pub fn debug(values: &[&dyn fmt::Display]) {
    logger().debug(values);
}

pub fn debugf(args: fmt::Arguments<'_>) {
    logger().debugf(args);
}

pub fn trace(values: &[&dyn fmt::Display]) {
    logger().trace(values);
}

pub fn tracef(args: fmt::Arguments<'_>) {
    logger().tracef(args);
}

pub fn panic<T>(values: &[&dyn fmt::Display]) -> Result<T> {
    logger().panic(values)
}

pub fn panicf<T>(args: fmt::Arguments<'_>) -> Result<T> {
    logger().panicf(args)
}

pub fn fatal(values: &[&dyn fmt::Display]) -> ! {
    logger().fatal(values)
}

pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    logger().fatalf(args)
}
