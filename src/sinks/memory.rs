//! In-memory sink

use crate::core::{LogLevel, Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Collects lines in a shared buffer.
///
/// Clones share the same buffer, so one handle can be installed on a logger
/// while another inspects what was written.
///
/// # Example
///
/// ```
/// use rust_leveled_logger::prelude::*;
/// use std::sync::Arc;
///
/// let memory = MemorySink::new();
/// let logger = Logger::builder()
///     .level(LogLevel::INFO)
///     .sink(Arc::new(memory.clone()))
///     .build();
///
/// logger.info(&[&"hello"]);
/// assert_eq!(memory.lines().len(), 1);
/// assert!(memory.contents().ends_with("[INFO] hello\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, newlines included
    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.buffer.lock().lines().map(String::from).collect()
    }

    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write_line(&self, _level: LogLevel, line: &str) -> Result<()> {
        let mut buffer = self.buffer.lock();
        buffer.push_str(line);
        buffer.push('\n');
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
