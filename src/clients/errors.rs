use reqwest::StatusCode;
use thiserror::Error;

/// Errors that abort a publish run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Last.fm responded with status {0}")]
    FetchFailed(StatusCode),

    #[error("Last.fm deserialization error: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;
