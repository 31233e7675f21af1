//! Panel resolution errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while resolving the destination panel for a
/// provisioning action.
///
/// Both variants are fatal to the current action and are surfaced to the
/// caller without retry.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind")]
pub enum ResolveError {
    /// No source in the resolution chain (explicit input, assigned
    /// template, tenant default) yielded a usable panel id.
    #[error("No destination panel: no source in the resolution chain yielded a panel id")]
    NoDestinationPanel,

    /// The caller's access scope contains no panels at all.
    #[error("No accessible panel: caller's access scope is empty")]
    NoAccessibleResource,
}
