//! Console sink implementation

use crate::core::{LogLevel, Result, Sink};
#[cfg(feature = "console")]
use colored::Colorize;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleTarget {
    Stdout,
    Stderr,
}

/// Writes lines to stdout or stderr.
///
/// Each line goes out under the stream's own lock, so concurrent lines never
/// interleave mid-line.
pub struct ConsoleSink {
    target: ConsoleTarget,
    use_colors: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::stdout()
    }

    pub fn stdout() -> Self {
        Self {
            target: ConsoleTarget::Stdout,
            use_colors: false,
        }
    }

    pub fn stderr() -> Self {
        Self {
            target: ConsoleTarget::Stderr,
            use_colors: false,
        }
    }

    /// Color whole lines by level
    ///
    /// Only takes effect with the `console` feature enabled.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_leveled_logger::sinks::ConsoleSink;
    ///
    /// let sink = ConsoleSink::stderr().with_colors(true);
    /// ```
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn target(&self) -> ConsoleTarget {
        self.target
    }

    pub fn uses_colors(&self) -> bool {
        self.use_colors
    }

    #[cfg(feature = "console")]
    fn render(&self, level: LogLevel, line: &str) -> String {
        if self.use_colors {
            line.color(level.color_code()).to_string()
        } else {
            line.to_string()
        }
    }

    #[cfg(not(feature = "console"))]
    fn render(&self, _level: LogLevel, line: &str) -> String {
        line.to_string()
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write_line(&self, level: LogLevel, line: &str) -> Result<()> {
        let output = self.render(level, line);
        match self.target {
            ConsoleTarget::Stdout => writeln!(io::stdout().lock(), "{}", output)?,
            ConsoleTarget::Stderr => writeln!(io::stderr().lock(), "{}", output)?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        match self.target {
            ConsoleTarget::Stdout => io::stdout().flush()?,
            ConsoleTarget::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.target {
            ConsoleTarget::Stdout => "stdout",
            ConsoleTarget::Stderr => "stderr",
        }
    }
}
