//! Main logger implementation

use super::{
    config::LoggerConfig,
    error::{LoggerError, Result},
    format::{concat_values, format_arguments, format_line},
    log_level::LogLevel,
    metrics::LoggerMetrics,
    sink::Sink,
    timestamp::TimestampFormat,
};
use crate::sinks::{ConsoleSink, WriterSink};
use chrono::Local;
use parking_lot::RwLock;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

/// Exit status used by `fatal` and `fatalf`
pub const FATAL_EXIT_CODE: i32 = 1;

struct LoggerState {
    threshold: LogLevel,
    prefix: String,
    time_format: TimestampFormat,
    sink: Arc<dyn Sink>,
}

impl Default for LoggerState {
    fn default() -> Self {
        Self {
            threshold: LogLevel::ERROR,
            prefix: String::new(),
            time_format: TimestampFormat::Rfc3339,
            sink: Arc::new(ConsoleSink::stdout()),
        }
    }
}

/// Leveled logger writing one timestamped line per call.
///
/// Configuration lives behind a single reader/writer lock. Setters take it
/// exclusively. An emit builds its message body with no lock held, then takes
/// it shared once to check the threshold and render the line from one
/// snapshot, and releases it before writing to the sink. A slow sink never
/// blocks reconfiguration, and `Display` impls may call back into the logger.
///
/// # Example
///
/// ```
/// use rust_leveled_logger::prelude::*;
/// use std::sync::Arc;
///
/// let memory = MemorySink::new();
/// let logger = Logger::new();
/// logger.set_sink(Arc::new(memory.clone()));
/// logger.set_log_level(LogLevel::INFO);
/// logger.set_prefix("svc");
///
/// logger.info(&[&"listening on ", &8080]);
/// logger.debug(&[&"hidden"]);
///
/// assert_eq!(memory.lines().len(), 1);
/// assert!(memory.contents().contains("[INFO] svc listening on 8080"));
/// ```
pub struct Logger {
    state: RwLock<LoggerState>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Threshold `ERROR`, no prefix, RFC 3339 timestamps, stdout
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwLock::new(LoggerState::default()),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        let logger = Self::new();
        logger.apply_config(config)?;
        Ok(logger)
    }

    /// Reconfigure in place.
    ///
    /// The config is validated and its sink opened before anything changes;
    /// the new settings are then swapped in under one exclusive lock.
    pub fn apply_config(&self, config: &LoggerConfig) -> Result<()> {
        config.validate()?;
        let sink = config.sink.open(config.colors)?;

        let mut state = self.state.write();
        state.threshold = config.level;
        state.prefix = config
            .prefix
            .as_deref()
            .map(|p| format!("{} ", p))
            .unwrap_or_default();
        state.time_format = config.time_format.clone();
        state.sink = sink;
        Ok(())
    }

    pub fn set_log_level(&self, level: LogLevel) {
        self.state.write().threshold = level;
    }

    /// Store `prefix` followed by a single space.
    ///
    /// The space is appended unconditionally, even to an empty string.
    pub fn set_prefix(&self, prefix: &str) {
        let mut value = String::with_capacity(prefix.len() + 1);
        value.push_str(prefix);
        value.push(' ');
        self.state.write().prefix = value;
    }

    /// Replace the timestamp layout; a string becomes a custom strftime layout
    pub fn set_time_format(&self, format: impl Into<TimestampFormat>) {
        self.state.write().time_format = format.into();
    }

    /// Send subsequent lines to `writer`, returning the sink it replaces.
    ///
    /// The previous sink is neither flushed nor closed; it lives as long as
    /// the caller keeps the returned handle.
    pub fn set_writer<W: Write + Send + 'static>(&self, writer: W) -> Arc<dyn Sink> {
        self.set_sink(Arc::new(WriterSink::new(writer)))
    }

    /// Send subsequent lines to `sink`, returning the sink it replaces
    pub fn set_sink(&self, sink: Arc<dyn Sink>) -> Arc<dyn Sink> {
        std::mem::replace(&mut self.state.write().sink, sink)
    }

    pub fn log_level(&self) -> LogLevel {
        self.state.read().threshold
    }

    /// Stored prefix, trailing space included
    pub fn prefix(&self) -> String {
        self.state.read().prefix.clone()
    }

    pub fn time_format(&self) -> TimestampFormat {
        self.state.read().time_format.clone()
    }

    pub fn sink(&self) -> Arc<dyn Sink> {
        Arc::clone(&self.state.read().sink)
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.state.read().threshold.enables(level)
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.sink().flush()
    }

    /// Emit `values` joined with no separator, if `level` passes the threshold
    pub fn log(&self, level: LogLevel, values: &[&dyn fmt::Display]) {
        if let Some((line, sink)) = self.render(level, false, || concat_values(values)) {
            self.write(sink.as_ref(), level, &line);
        }
    }

    /// Emit a `format_args!` message, if `level` passes the threshold
    pub fn logf(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if let Some((line, sink)) = self.render(level, false, || format_arguments(args)) {
            self.write(sink.as_ref(), level, &line);
        }
    }

    #[inline]
    pub fn error(&self, values: &[&dyn fmt::Display]) {
        self.log(LogLevel::ERROR, values);
    }

    #[inline]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::ERROR, args);
    }

    #[inline]
    pub fn warn(&self, values: &[&dyn fmt::Display]) {
        self.log(LogLevel::WARN, values);
    }

    #[inline]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::WARN, args);
    }

    #[inline]
    pub fn info(&self, values: &[&dyn fmt::Display]) {
        self.log(LogLevel::INFO, values);
    }

    #[inline]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::INFO, args);
    }

    #[inline]
    pub fn debug(&self, values: &[&dyn fmt::Display]) {
        self.log(LogLevel::DEBUG, values);
    }

    #[inline]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::DEBUG, args);
    }

    #[inline]
    pub fn trace(&self, values: &[&dyn fmt::Display]) {
        self.log(LogLevel::TRACE, values);
    }

    #[inline]
    pub fn tracef(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::TRACE, args);
    }

    /// Write an `ERROR` line regardless of the threshold, then fail with
    /// [`LoggerError::Panic`] carrying that line.
    ///
    /// ```
    /// use rust_leveled_logger::prelude::*;
    ///
    /// fn load(logger: &Logger) -> Result<u32> {
    ///     logger.panic(&[&"config missing"])
    /// }
    ///
    /// let logger = Logger::builder().sink(std::sync::Arc::new(MemorySink::new())).build();
    /// let err = load(&logger).unwrap_err();
    /// assert!(err.to_string().ends_with("[ERROR] config missing"));
    /// ```
    pub fn panic<T>(&self, values: &[&dyn fmt::Display]) -> Result<T> {
        Err(LoggerError::panic(self.emit_unconditionally(|| concat_values(values))))
    }

    pub fn panicf<T>(&self, args: fmt::Arguments<'_>) -> Result<T> {
        Err(LoggerError::panic(self.emit_unconditionally(|| format_arguments(args))))
    }

    /// Write an `ERROR` line regardless of the threshold, flush the sink and
    /// exit the process with [`FATAL_EXIT_CODE`].
    pub fn fatal(&self, values: &[&dyn fmt::Display]) -> ! {
        self.emit_unconditionally(|| concat_values(values));
        self.exit_after_flush()
    }

    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.emit_unconditionally(|| format_arguments(args));
        self.exit_after_flush()
    }

    /// Build the body outside the lock, then gate and render from one
    /// configuration snapshot.
    ///
    /// `body` runs caller `Display` impls, which may themselves log or
    /// reconfigure this logger, so no guard is held while it runs. The
    /// threshold is checked again under the snapshot read.
    fn render(
        &self,
        level: LogLevel,
        force: bool,
        body: impl FnOnce() -> String,
    ) -> Option<(String, Arc<dyn Sink>)> {
        if !force && !self.is_enabled(level) {
            self.metrics.record_filtered();
            return None;
        }
        let body = body();

        let state = self.state.read();
        if !force && !state.threshold.enables(level) {
            self.metrics.record_filtered();
            return None;
        }

        let line = format_line(
            &Local::now(),
            &state.time_format,
            level,
            &state.prefix,
            &body,
        );
        Some((line, Arc::clone(&state.sink)))
    }

    fn write(&self, sink: &dyn Sink, level: LogLevel, line: &str) {
        match sink.write_line(level, line) {
            Ok(()) => {
                self.metrics.record_written();
            }
            Err(e) => {
                self.metrics.record_write_error();
                eprintln!("[LOGGER ERROR] Sink '{}' failed: {}", sink.name(), e);
            }
        }
    }

    fn emit_unconditionally(&self, body: impl FnOnce() -> String) -> String {
        let mut line = String::new();
        if let Some((rendered, sink)) = self.render(LogLevel::ERROR, true, body) {
            self.write(sink.as_ref(), LogLevel::ERROR, &rendered);
            line = rendered;
        }
        line
    }

    fn exit_after_flush(&self) -> ! {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush before exit: {}", e);
        }
        std::process::exit(FATAL_EXIT_CODE)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("Logger")
            .field("threshold", &state.threshold)
            .field("prefix", &state.prefix)
            .field("time_format", &state.time_format)
            .field("sink", &state.sink.name())
            .field("metrics", &self.metrics)
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_leveled_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .level(LogLevel::DEBUG)
///     .prefix("worker")
///     .time_format("%H:%M:%S")
///     .writer(Vec::new())
///     .build();
///
/// assert_eq!(logger.prefix(), "worker ");
/// ```
pub struct LoggerBuilder {
    level: LogLevel,
    prefix: Option<String>,
    time_format: TimestampFormat,
    sink: Option<Arc<dyn Sink>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            level: LogLevel::ERROR,
            prefix: None,
            time_format: TimestampFormat::default(),
            sink: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Same semantics as [`Logger::set_prefix`]
    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn time_format(mut self, format: impl Into<TimestampFormat>) -> Self {
        self.time_format = format.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn writer<W: Write + Send + 'static>(self, writer: W) -> Self {
        self.sink(Arc::new(WriterSink::new(writer)))
    }

    pub fn build(self) -> Logger {
        let logger = Logger::new();
        logger.set_log_level(self.level);
        if let Some(prefix) = self.prefix {
            logger.set_prefix(&prefix);
        }
        logger.set_time_format(self.time_format);
        if let Some(sink) = self.sink {
            logger.set_sink(sink);
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
