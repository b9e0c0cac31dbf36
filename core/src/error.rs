use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while handing a rendered line to a [`Sink`](crate::sink::Sink).
///
/// These never reach the formatter; the logger reports them and keeps going.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Writing to the destination failed
    #[error("I/O error writing query log: {0}")]
    Io(#[from] std::io::Error),

    /// Another thread panicked while holding the writer
    #[error("query log writer lock poisoned")]
    Poisoned,
}

/// Errors raised while turning [`LogSettings`](crate::settings::LogSettings) into a logger.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configured log file could not be opened
    #[error("failed to open query log file {}: {}", .path.display(), .source)]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error returned by a [`SqlValuer`](crate::value::SqlValuer) accessor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("sql valuer error: {0}")]
pub struct ValuerError(pub String);

impl ValuerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
