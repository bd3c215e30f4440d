//! Tracing subscriber setup from the logging configuration.

use anyhow::Result;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::domain::models::LoggingConfig;
use crate::infrastructure::config::ConfigError;

/// Handle keeping the log file writer alive.
///
/// Drop it only on shutdown; dropping earlier stops file output.
pub struct LoggerHandle {
    _guard: Option<WorkerGuard>,
}

impl LoggerHandle {
    /// Initialize the global subscriber from the logging configuration.
    ///
    /// Stdout gets the configured format (pretty or JSON); when `log_dir` is
    /// set, a daily-rolling JSON file layer is added.
    pub fn init(config: &LoggingConfig) -> Result<Self> {
        let default_level = parse_log_level(&config.level)?;

        let env_filter = EnvFilter::builder()
            .with_default_directive(default_level.into())
            .from_env_lossy();

        let stdout_layer = match config.format.to_lowercase().as_str() {
            "json" => tracing_subscriber::fmt::layer().json().boxed(),
            _ => tracing_subscriber::fmt::layer().boxed(),
        };

        let (file_layer, guard) = match &config.log_dir {
            Some(log_dir) => {
                let file_appender = rolling::daily(log_dir, "lookupable.log");
                let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

                let layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking_file)
                    .with_ansi(false)
                    .boxed();
                (Some(layer), Some(guard))
            }
            None => (None, None),
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(stdout_layer)
            .with(file_layer)
            .try_init()?;

        Ok(Self { _guard: guard })
    }
}

fn parse_log_level(level: &str) -> Result<Level, ConfigError> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        other => Err(ConfigError::InvalidLogLevel(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_levels() {
        assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
        assert_eq!(parse_log_level("TRACE").unwrap(), Level::TRACE);
    }

    #[test]
    fn rejects_unknown_levels() {
        assert!(matches!(
            parse_log_level("verbose"),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }
}
