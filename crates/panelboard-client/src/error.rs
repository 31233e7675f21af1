//! Error types for the Panelboard client.

use thiserror::Error;

use panelboard_core::BackendError;

/// Errors that can occur when using the Panelboard client.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Client configuration is invalid (bad base URL, empty token).
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// HTTP request failed.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server rejected the credentials (401/403).
    #[error("Unauthorized ({status}): {message}")]
    Unauthorized {
        /// HTTP status code.
        status: u16,
        /// Error message from server.
        message: String,
    },

    /// Server returned a non-success status.
    #[error("Server error ({status}): {message}")]
    ServerError {
        /// HTTP status code.
        status: u16,
        /// Error message from server.
        message: String,
    },

    /// Server returned an invalid or unparseable response.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<ClientError> for BackendError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Unauthorized { status, message } => {
                BackendError::Unauthorized(format!("{}: {}", status, message))
            }
            ClientError::InvalidResponse(msg) => BackendError::InvalidResponse(msg),
            other => BackendError::Transport(other.to_string()),
        }
    }
}
