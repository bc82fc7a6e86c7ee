//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading feature configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The override source could not be reached or returned an error.
    #[error("Override source unavailable: {0}")]
    SourceUnavailable(String),

    /// The override payload or merged tree failed to (de)serialize.
    #[error("Invalid features payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// An unknown source selector was requested.
    #[error("Unknown features source: {0}")]
    UnknownSource(String),
}
