//! Logger metrics for observability
//!
//! Counters for lines written, lines filtered by the threshold, and sink
//! write failures.

use std::sync::atomic::{AtomicU64, Ordering};

/// # Example
///
/// ```
/// use rust_leveled_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_written();
/// metrics.record_filtered();
///
/// assert_eq!(metrics.lines_written(), 1);
/// assert_eq!(metrics.lines_filtered(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    lines_written: AtomicU64,
    lines_filtered: AtomicU64,
    write_errors: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            lines_written: AtomicU64::new(0),
            lines_filtered: AtomicU64::new(0),
            write_errors: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    /// Lines dropped because their level was above the threshold
    #[inline]
    pub fn lines_filtered(&self) -> u64 {
        self.lines_filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_errors(&self) -> u64 {
        self.write_errors.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.lines_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.lines_filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_error(&self) -> u64 {
        self.write_errors.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of emit attempts that failed at the sink, as a percentage
    pub fn error_rate(&self) -> f64 {
        let failed = self.write_errors() as f64;
        let total = self.lines_written() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    pub fn reset(&self) {
        self.lines_written.store(0, Ordering::Relaxed);
        self.lines_filtered.store(0, Ordering::Relaxed);
        self.write_errors.store(0, Ordering::Relaxed);
    }
}
