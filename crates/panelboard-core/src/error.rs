//! Unified error types for Panelboard Core.

use serde::Serialize;
use thiserror::Error;

use crate::modules::backend::BackendError;
use panelboard_types::{ProvisionError, ResolveError};

/// Main error type for all Panelboard core operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    /// Panel resolution failed (no destination, empty scope).
    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),

    /// Provisioning failed (upstream refusal, unknown plan).
    #[error("Provision error: {0}")]
    Provision(#[from] ProvisionError),

    /// Collaborator transport or response-shape failure.
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unclassified error with message.
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

/// Result type alias for Panelboard core operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<String> for AppError {
    fn from(s: String) -> Self {
        AppError::Unknown(s)
    }
}

impl From<&str> for AppError {
    fn from(s: &str) -> Self {
        AppError::Unknown(s.to_string())
    }
}
