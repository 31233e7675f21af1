//! Typed error definitions for Panelboard.
//!
//! This module provides a structured error hierarchy with specific error types
//! for the two fallible domains of the core. All errors are designed to be:
//!
//! - **Serializable** for API responses via serde
//! - **Displayable** for logging via Display trait
//! - **Matchable** for error handling logic via enum variants
//! - **Composable** via thiserror derive macros

mod provision;
mod resolve;

pub use provision::ProvisionError;
pub use resolve::ResolveError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type that wraps all domain-specific errors.
///
/// Use this when you need a single error type that can represent
/// any Panelboard error.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "domain", content = "error")]
pub enum TypedError {
    /// Wraps a panel-resolution error
    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),

    /// Wraps a provisioning error
    #[error("Provision error: {0}")]
    Provision(#[from] ProvisionError),
}

/// Standard Result type using TypedError.
pub type Result<T> = std::result::Result<T, TypedError>;
