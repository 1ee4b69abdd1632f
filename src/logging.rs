//! Tracing subscriber setup for the viewer binary.
//!
//! The terminal UI owns the screen, so interactive sessions only log when a log
//! file is given. One-shot JSON output logs to stderr, leaving stdout for the view.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Where log lines are written.
pub enum Sink<'a> {
    /// Standard error, for non-interactive runs.
    Stderr,
    /// Append to the file at this path.
    File(&'a Path),
    /// Nowhere.
    Off,
}

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over `level`; an unrecognised `level` falls back
/// to `warn`.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init(level: &str, sink: &Sink<'_>) -> std::io::Result<()> {
    let default_level = parse_level(level).unwrap_or(LevelFilter::WARN);
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    match sink {
        Sink::Stderr => {
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter);
            tracing_subscriber::registry().with(layer).init();
        }
        Sink::File(path) => {
            let file = File::options().create(true).append(true).open(path)?;
            let layer = fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter);
            tracing_subscriber::registry().with(layer).init();
        }
        Sink::Off => {}
    }

    Ok(())
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.to_lowercase().as_str() {
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        "off" => Some(LevelFilter::OFF),
        _ => None,
    }
}
