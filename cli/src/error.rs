//! Error types for the CLI

use thiserror::Error;

use crate::config::ConfigError;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The configured logger could not be built
    #[error("Logger error: {0}")]
    Logger(#[from] sqlog_core::ConfigError),

    /// An argument literal could not be parsed
    #[error("Invalid argument '{literal}': {reason}")]
    InvalidArgument { literal: String, reason: String },

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),
}
