//! Error types for the HTTP client.

use thiserror::Error;

/// Errors that can occur while talking to the server.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request could not be sent or the connection failed.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success HTTP status.
    #[error("server returned HTTP {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("invalid response: {0}")]
    Decode(String),

    /// An endpoint URL could not be built.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::InvalidUrl(err.to_string())
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
