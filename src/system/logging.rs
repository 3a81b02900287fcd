//! Logging system initialization
//!
//! Sets up the global tracing subscriber from `LoggingConfig`. Command output
//! goes to stdout, so console logs are written to stderr.

use tracing_appender::non_blocking::WorkerGuard;

use crate::config::LoggingConfig;
use crate::errors::{QuickLinkError, Result};

/// Initialize logging system based on configuration
///
/// The returned `WorkerGuard` must be kept alive for the duration of the
/// program so buffered log lines are flushed on exit.
///
/// `RUST_LOG`, when set, takes precedence over `logging.level`.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let log_file = config.file.as_deref().filter(|f| !f.is_empty());

    let writer: Box<dyn std::io::Write + Send + Sync> = match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    QuickLinkError::logging(format!("Failed to open log file {}: {}", path, e))
                })?;
            Box::new(file)
        }
        None => Box::new(std::io::stderr()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&config.level))
        .map_err(|e| {
            QuickLinkError::logging(format!("Invalid log level '{}': {}", config.level, e))
        })?;

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(log_file.is_none());

    let installed = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    installed.map_err(|e| QuickLinkError::logging(e.to_string()))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unopenable_log_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = LoggingConfig {
            file: Some(dir.path().join("missing").join("ql.log").display().to_string()),
            ..LoggingConfig::default()
        };

        let err = init_logging(&config).err().unwrap();
        assert_eq!(err.code(), "E007");
    }
}
