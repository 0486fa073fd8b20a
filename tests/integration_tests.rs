//! Integration tests for the leveled logger
//!
//! These tests verify:
//! - Exact line layout through real sinks
//! - Threshold gating and default state
//! - Sink replacement semantics
//! - Typed panic propagation
//! - JSON configuration end to end

use rust_leveled_logger::prelude::*;
use rust_leveled_logger::{info, values};
use std::fs;
use std::io::{self, Write};
use std::sync::Arc;
use tempfile::TempDir;

/// A cloneable `io::Write` so tests can read back what `set_writer` received
#[derive(Clone, Default)]
struct SharedBuffer(Arc<parking_lot::Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().clone()).expect("utf8 output")
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Split `"<ts>: [LEVEL] rest"` into its timestamp and the remainder
fn split_line(line: &str) -> (&str, &str) {
    line.split_once(": [")
        .expect("line has a timestamp separator")
}

#[test]
fn test_line_layout_with_default_timestamp() {
    let buffer = SharedBuffer::default();
    let logger = Logger::new();
    logger.set_writer(buffer.clone());

    logger.error(&[&"disk full"]);

    let text = buffer.text();
    assert!(text.ends_with('\n'));
    let line = text.trim_end_matches('\n');
    assert!(!line.contains('\n'), "exactly one line expected");

    let (timestamp, rest) = split_line(line);
    assert_eq!(rest, "ERROR] disk full");
    chrono::DateTime::parse_from_rfc3339(timestamp).expect("RFC 3339 timestamp");
}

#[test]
fn test_default_state_only_emits_error_level() {
    let buffer = SharedBuffer::default();
    let logger = Logger::new();
    logger.set_writer(buffer.clone());

    logger.warn(&[&"w"]);
    logger.warnf(format_args!("w"));
    logger.info(&[&"i"]);
    logger.infof(format_args!("i"));
    logger.debug(&[&"d"]);
    logger.debugf(format_args!("d"));
    logger.trace(&[&"t"]);
    logger.tracef(format_args!("t"));
    assert_eq!(buffer.text(), "", "filtered lines must write zero bytes");

    logger.error(&[&"e"]);
    logger.errorf(format_args!("e{}", 2));
    let text = buffer.text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("[ERROR] e"));
    assert!(lines[1].ends_with("[ERROR] e2"));
}

#[test]
fn test_prefix_and_formatted_body() {
    let memory = MemorySink::new();
    let logger = Logger::builder()
        .level(LogLevel::INFO)
        .sink(Arc::new(memory.clone()))
        .build();
    logger.set_prefix("svc");

    logger.info(&[&"x"]);
    logger.infof(format_args!("{}-{}", 3, "ok"));
    info!(logger, "{:>4}|", 7);

    let lines = memory.lines();
    assert!(lines[0].contains("] svc x"));
    assert!(lines[1].ends_with("[INFO] svc 3-ok"));
    assert!(lines[2].ends_with("[INFO] svc    7|"));
}

#[test]
fn test_concatenation_of_mixed_values() {
    let memory = MemorySink::new();
    let logger = Logger::builder()
        .level(LogLevel::DEBUG)
        .sink(Arc::new(memory.clone()))
        .build();

    let user = String::from("ana");
    logger.debug(values!["user=", user, " attempts=", 3, " ok=", false]);
    logger.debug(&[&"a", &"b"]);

    let lines = memory.lines();
    assert!(lines[0].ends_with("[DEBUG] user=ana attempts=3 ok=false"));
    assert!(lines[1].ends_with("[DEBUG] ab"));
}

#[test]
fn test_sink_swap_round_trip() {
    let first = SharedBuffer::default();
    let second = SharedBuffer::default();
    let logger = Logger::builder().level(LogLevel::TRACE).build();

    logger.set_writer(first.clone());
    logger.info(&[&"one"]);
    logger.trace(&[&"two"]);

    logger.set_writer(second.clone());
    logger.warn(&[&"three"]);

    assert_eq!(first.text().lines().count(), 2);
    assert!(!first.text().contains("three"));
    assert_eq!(second.text().lines().count(), 1);
    assert!(second.text().contains("[WARN] three"));
}

#[test]
fn test_unknown_level_renders_unknown() {
    let memory = MemorySink::new();
    let logger = Logger::builder()
        .level(LogLevel::from(250))
        .sink(Arc::new(memory.clone()))
        .build();

    logger.log(LogLevel::from(99), &[&"mystery"]);
    logger.trace(&[&"still passes"]);

    let lines = memory.lines();
    assert!(lines[0].ends_with("[UNKNOWN] mystery"));
    assert!(lines[1].ends_with("[TRACE] still passes"));
}

#[test]
fn test_panic_payload_equals_written_line() {
    let buffer = SharedBuffer::default();
    let logger = Logger::new();
    logger.set_writer(buffer.clone());
    logger.set_prefix("job");

    let err = logger.panic::<()>(&[&"boom"]).unwrap_err();

    let text = buffer.text();
    assert_eq!(text.lines().count(), 1);
    assert_eq!(err.panic_line(), Some(text.trim_end_matches('\n')));
    assert!(text.trim_end().ends_with("[ERROR] job boom"));
}

#[test]
fn test_file_sink_via_json_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("app.log");

    let json = format!(
        r#"{{
            "level": "warn",
            "prefix": "billing",
            "time_format": {{ "Custom": "%Y" }},
            "sink": {{ "type": "file", "path": {} }}
        }}"#,
        serde_json::to_string(&log_file).expect("path to json")
    );
    let config = LoggerConfig::from_json(&json).expect("valid config");
    let logger = Logger::from_config(&config).expect("logger from config");

    logger.info(&[&"hidden"]);
    logger.warnf(format_args!("retry {} of {}", 1, 3));
    logger.flush().expect("Failed to flush");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);

    let (year, rest) = split_line(lines[0]);
    assert_eq!(year.len(), 4);
    assert!(year.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(rest, "WARN] billing retry 1 of 3");
}

#[test]
fn test_from_config_reports_unopenable_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = LoggerConfig::new().with_sink(SinkConfig::File {
        path: temp_dir.path().join("no-such-dir").join("app.log"),
    });

    let err = Logger::from_config(&config).unwrap_err();
    assert!(matches!(err, LoggerError::IoOperation { .. }));
}

#[test]
fn test_metrics_track_filtered_and_written() {
    let logger = Logger::builder().level(LogLevel::WARN).writer(io::sink()).build();

    for _ in 0..3 {
        logger.info(&[&"drop"]);
    }
    logger.warn(&[&"keep"]);
    logger.error(&[&"keep"]);

    let metrics = logger.metrics();
    assert_eq!(metrics.lines_filtered(), 3);
    assert_eq!(metrics.lines_written(), 2);
    assert_eq!(metrics.write_errors(), 0);
}
