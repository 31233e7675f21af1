//! Usage snapshots and collaborator response envelopes.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a provisioned account on a panel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Disabled,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Disabled => "disabled",
        }
    }
}

/// Raw usage numbers for one account as reported by a panel.
///
/// Ephemeral: derived per fetch, rendered by the formatter, never
/// persisted by the core. All fields are optional because panel types
/// differ in what they report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UsageSnapshot {
    #[serde(default)]
    pub subscription_url: Option<String>,
    /// Remaining data in bytes.
    #[serde(default)]
    pub remaining: Option<u64>,
    /// Total data quota in bytes. Absent for unlimited plans.
    #[serde(default)]
    pub data_limit: Option<u64>,
    /// Remaining lifetime in seconds, when the panel reports it directly.
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Expiry as a unix epoch timestamp.
    #[serde(default)]
    pub expire: Option<i64>,
    /// Creation time as a unix epoch timestamp.
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub status: Option<AccountStatus>,
}

/// Uniform success/failure envelope returned by mutating collaborator
/// calls. A non-success envelope is an upstream "no", distinct from a
/// transport failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ActionEnvelope {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl ActionEnvelope {
    pub fn ok() -> Self {
        Self { ok: true, error: None }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self { ok: false, error: Some(error.into()) }
    }
}

/// Response of an account-creation call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CreateAccountResponse {
    pub ok: bool,
    #[serde(default)]
    pub username: Option<String>,
    /// Present when the panel type returns the link directly; absent
    /// otherwise, triggering a follow-up info lookup.
    #[serde(default)]
    pub subscription_url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
