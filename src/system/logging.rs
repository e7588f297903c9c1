//! Logging system initialization
//!
//! The terminal is owned by the UI, so log records go to a file. Without a
//! configured file no subscriber is installed.

use crate::config::{LogFormat, LoggingConfig};
use crate::errors::{Result, TableShuffleError};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

/// Initialize logging system based on configuration
///
/// Call once during startup, after the configuration has been loaded.
///
/// # Returns
/// * `Some(WorkerGuard)` - keep it alive for the whole program so buffered
///   records get flushed
/// * `None` - logging is disabled
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let Some(log_file) = config.file.as_deref().filter(|f| !f.trim().is_empty()) else {
        return Ok(None);
    };

    let writer: Box<dyn std::io::Write + Send + Sync> = if config.enable_rotation {
        let path = Path::new(log_file);
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let filename = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("table-shuffle.log");
        let appender = rolling::Builder::new()
            .rotation(rolling::Rotation::DAILY)
            .filename_prefix(filename.trim_end_matches(".log"))
            .filename_suffix("log")
            .max_log_files(config.max_backups as usize)
            .build(dir)
            .map_err(|e| {
                TableShuffleError::logging(format!("Failed to create rolling log appender: {}", e))
            })?;
        Box::new(appender)
    } else {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .map_err(|e| {
                TableShuffleError::logging(format!("Failed to open log file {}: {}", log_file, e))
            })?;
        Box::new(file)
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| TableShuffleError::logging(e.to_string()))?;

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(false);

    let installed = match config.format {
        LogFormat::Json => subscriber_builder.json().try_init(),
        LogFormat::Text => subscriber_builder.try_init(),
    };
    installed.map_err(|e| TableShuffleError::logging(e.to_string()))?;

    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_file_disables_logging() {
        let config = LoggingConfig {
            file: None,
            ..LoggingConfig::default()
        };
        assert!(init_logging(&config).unwrap().is_none());

        let config = LoggingConfig {
            file: Some("  ".to_string()),
            ..LoggingConfig::default()
        };
        assert!(init_logging(&config).unwrap().is_none());
    }
}
