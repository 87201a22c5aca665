use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::{EnvironmentProvider, SystemEnvironment};

/// Configuration for application logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub log_level: String,
    pub app_log_file: Option<PathBuf>,
    pub app_log_retention_days: usize,
}

impl LoggingConfig {
    /// Load logging configuration from the given environment
    ///
    /// * `LOG_LEVEL` - filter directive, defaults to `INFO`
    /// * `APP_LOG_FILE` - optional path of a daily-rotated log file
    /// * `APP_LOG_RETENTION_DAYS` - rotated files to keep, defaults to 7
    pub fn from_env_provider(env_provider: &dyn EnvironmentProvider) -> Self {
        let log_level = env_provider
            .get_var("LOG_LEVEL")
            .unwrap_or_else(|| "INFO".to_string());

        let app_log_file = env_provider
            .get_var("APP_LOG_FILE")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let app_log_retention_days = env_provider
            .get_var("APP_LOG_RETENTION_DAYS")
            .and_then(|v| v.parse().ok())
            .filter(|days| *days > 0)
            .unwrap_or(7);

        Self {
            log_level,
            app_log_file,
            app_log_retention_days,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize logging: {0}")]
    InitializationError(String),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("File system error: {0}")]
    FileSystemError(#[from] std::io::Error),
}

/// Initialize the tracing subscriber with console and optional file output
/// Reads configuration from environment variables automatically
pub fn init_logging() -> Result<(), LoggingError> {
    let config = LoggingConfig::from_env_provider(&SystemEnvironment);

    let env_filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| LoggingError::InvalidLogLevel(format!("{}: {}", config.log_level, e)))?;

    let console_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter.clone());

    let subscriber = tracing_subscriber::registry().with(console_layer);

    match &config.app_log_file {
        Some(log_file_path) => {
            let file_appender = build_file_appender(log_file_path, config.app_log_retention_days)?;

            let file_layer = fmt::layer()
                .with_writer(file_appender)
                .with_target(true)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_filter(env_filter);

            subscriber
                .with(file_layer)
                .try_init()
                .map_err(|e| LoggingError::InitializationError(e.to_string()))?;
        }
        None => {
            subscriber
                .try_init()
                .map_err(|e| LoggingError::InitializationError(e.to_string()))?;
        }
    }

    Ok(())
}

/// Daily-rotated appender keeping at most `retention_days` files
fn build_file_appender(path: &Path, retention_days: usize) -> Result<RollingFileAppender, LoggingError> {
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(directory)?;

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| LoggingError::InitializationError("Invalid log file path".to_string()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(file_name)
        .max_log_files(retention_days)
        .build(directory)
        .map_err(|e| LoggingError::InitializationError(e.to_string()))
}
