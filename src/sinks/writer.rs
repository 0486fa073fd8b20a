//! Sink over an arbitrary `io::Write`

use crate::core::{LogLevel, Result, Sink};
use parking_lot::Mutex;
use std::io::Write;

/// Adapts any writer into a [`Sink`].
///
/// The writer sits behind a mutex; each line is written with a single
/// `write_all` so lines from different threads do not interleave. Nothing is
/// flushed implicitly.
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write_line(&self, _level: LogLevel, line: &str) -> Result<()> {
        let mut buf = Vec::with_capacity(line.len() + 1);
        buf.extend_from_slice(line.as_bytes());
        buf.push(b'\n');
        self.writer.lock().write_all(&buf)?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "writer"
    }
}
