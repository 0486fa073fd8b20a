//! Basic logger usage example
//!
//! Demonstrates threshold filtering, prefixes, time formats, sink changes and
//! typed panics.
//!
//! Run with: cargo run --example basic_usage

use rust_leveled_logger::prelude::*;
use rust_leveled_logger::{global, info, log_panic, values};
use std::sync::Arc;

fn load_port(logger: &Logger, raw: &str) -> Result<u16> {
    match raw.parse() {
        Ok(port) => Ok(port),
        Err(_) => log_panic!(logger, "invalid port '{}'", raw),
    }
}

fn main() -> Result<()> {
    println!("=== Rust Leveled Logger - Basic Usage Example ===\n");

    let logger = Logger::new();

    println!("1. Default threshold is ERROR:");
    logger.info(&[&"This is an info message (hidden)"]);
    logger.error(&[&"This is an error message"]);

    println!("\n2. Raising the threshold to TRACE with a prefix:");
    logger.set_log_level(LogLevel::TRACE);
    logger.set_prefix("demo");
    logger.trace(&[&"This is a trace message"]);
    logger.debug(values!["Concatenated: ", 1, '+', 2.5]);
    info!(logger, "Formatted: {}-{}", 3, "ok");
    logger.warnf(format_args!("Disk at {}%", 91));

    println!("\n3. Custom time format on stderr:");
    logger.set_time_format("%H:%M:%S");
    logger.set_sink(Arc::new(ConsoleSink::stderr()));
    logger.info(&[&"Now on stderr"]);

    println!("\n4. Typed panic propagated with ?:");
    if let Err(err) = load_port(&logger, "eighty") {
        println!("   caught: {}", err);
    }

    println!("\n5. Process-wide default logger:");
    global::set_log_level(LogLevel::INFO);
    global::info(&[&"Hello from the global logger"]);
    global::flush()?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
