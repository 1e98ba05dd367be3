//! Error types for the sector network

use thiserror::Error;

/// Errors raised at the edges of the network: loading sectors and configuration.
///
/// Store and analytics operations never fail; unknown ids simply yield nothing.
#[derive(Error, Debug)]
pub enum NetworkError {
    /// HTTP transport error while fetching sectors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Sector endpoint answered with a non-success status
    #[error("Sector endpoint returned status {0}")]
    UnexpectedStatus(u16),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unknown sector tier name
    #[error("Invalid sector tier: {0}")]
    InvalidTier(String),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
