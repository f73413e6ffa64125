//! Errors raised while loading, saving or validating [`Params`](super::params::Params).

use thiserror::Error;

/// Errors produced by the configuration layer.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing the config file failed.
    #[error("config file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The config file is not valid JSON for [`Params`](super::params::Params).
    #[error("config file is malformed: {0}")]
    Json(#[from] serde_json::Error),
    /// A parameter is outside its allowed range.
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParam {
        /// Field name as it appears in the config file.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
}

/// Result alias for configuration operations.
pub type Result<T> = std::result::Result<T, Error>;
