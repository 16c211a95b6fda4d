// Rust guideline compliant 2026-10-18

//! Logging setup shared by the hook binaries.
//!
//! Hooks must stay silent on success, so no subscriber is installed unless a
//! level is requested explicitly.

use crate::{Error, Result};
use std::fs::OpenOptions;
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Parses a log level name.
///
/// # Errors
///
/// Returns [`Error::InvalidLogLevel`] for anything other than
/// error, warn, info or debug.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        other => Err(Error::InvalidLogLevel(other.to_string())),
    }
}

/// Installs the global tracing subscriber.
///
/// Logs go to stderr, or as JSON lines to `log_file` when given. The returned
/// guard must be held until exit so buffered file output is flushed.
///
/// # Arguments
///
/// * `level` - Log level name, `None` leaves logging disabled
/// * `log_file` - Optional file to append logs to
///
/// # Errors
///
/// Returns an error if the level is invalid or the log file cannot be opened.
pub fn init_tracing(level: Option<&str>, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let Some(level) = level else {
        return Ok(None);
    };
    let level = parse_log_level(level)?;

    if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .json()
            .with_writer(writer)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(Some(guard));
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(None)
}

/// Installs the subscriber from `HOOKKIT_LOG` and `HOOKKIT_LOG_FILE`.
///
/// # Errors
///
/// Same as [`init_tracing`].
pub fn init_from_env() -> Result<Option<WorkerGuard>> {
    let level = std::env::var("HOOKKIT_LOG").ok();
    let log_file = std::env::var_os("HOOKKIT_LOG_FILE");
    init_tracing(level.as_deref(), log_file.as_deref().map(Path::new))
}
