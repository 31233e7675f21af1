//! Provisioning errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::PlanId;

/// Errors produced while orchestrating a provisioning action.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind")]
pub enum ProvisionError {
    /// A collaborator answered with a non-success envelope. Carries the
    /// upstream error string (or a generic fallback). Never retried
    /// automatically; the caller decides whether to try again.
    #[error("Upstream request failed: {message}")]
    UpstreamRequestFailed { message: String },

    /// The referenced plan does not exist in the catalog.
    #[error("Plan not found: {id}")]
    PlanNotFound { id: PlanId },
}
