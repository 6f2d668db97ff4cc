use std::io;
use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// The configuration document could not be read or parsed.
    /// Recovered at load time by falling back to empty mappings.
    #[error("Config load error: {0}")]
    ConfigLoad(String),

    /// The history document could not be read or parsed.
    /// Recovered at load time by falling back to an empty history.
    #[error("History load error: {0}")]
    HistoryLoad(String),

    /// Any failure while classifying, composing or logging a message.
    #[error("Processing error: {0}")]
    Processing(String),

    /// The inbound request carried no usable message.
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// Represents configuration-related errors (e.g., an unparsable environment variable).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            AppError::ConfigLoad(s) => AppError::ConfigLoad(s.clone()),
            AppError::HistoryLoad(s) => AppError::HistoryLoad(s.clone()),
            AppError::Processing(s) => AppError::Processing(s.clone()),
            AppError::MissingInput(s) => AppError::MissingInput(s.clone()),
            AppError::Config(s) => AppError::Config(s.clone()),
            AppError::Io(e) => AppError::Io(io::Error::new(e.kind(), e.to_string())),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Processing(format!("JSON error: {}", err))
    }
}

impl AppError {
    /// Wraps any error raised mid-request into a `Processing` error, keeping its message.
    pub fn processing(err: impl std::fmt::Display) -> Self {
        AppError::Processing(err.to_string())
    }

    /// Human-readable message without the variant prefix, used at the HTTP boundary.
    pub fn detail(&self) -> String {
        match self {
            AppError::ConfigLoad(s)
            | AppError::HistoryLoad(s)
            | AppError::Processing(s)
            | AppError::MissingInput(s)
            | AppError::Config(s) => s.clone(),
            AppError::Io(e) => e.to_string(),
        }
    }
}
