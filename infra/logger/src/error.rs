use std::path::PathBuf;

/// Errors raised while bootstrapping the global tracing subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("invalid logger configuration: {0}")]
    InvalidConfiguration(String),
    #[error("failed to create log directory {path}: {source}")]
    CreateDir { path: PathBuf, source: std::io::Error },
    #[error("failed to build file appender: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),
    #[error("failed to install global subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}
