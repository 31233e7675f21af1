//! Panel backend trait for collaborator abstraction.
//!
//! The core implements none of these operations; it defines the contract
//! and calling order. Persistence, token refresh, and retry policy are
//! owned by the implementation behind the trait.

use async_trait::async_trait;
use panelboard_types::models::{
    AccountStatus, ActionEnvelope, CreateAccountResponse, OperatorId, Panel, PanelId, Plan,
    PlanCategory, PlanId, Template, UsageSnapshot,
};

pub type BackendResult<T> = Result<T, BackendError>;

/// Collaborator-level failures. An upstream "no" answer is not an error
/// here: it rides in the returned envelope. These variants cover the
/// truly exceptional states that propagate to the UI boundary.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

#[async_trait]
pub trait PanelBackend: Send + Sync {
    /// All panels visible to the caller, in listing order.
    async fn list_panels(&self, caller: OperatorId) -> BackendResult<Vec<Panel>>;

    /// The template assigned to the caller, if any.
    async fn assigned_template(&self, caller: OperatorId) -> BackendResult<Option<Template>>;

    /// The tenant's configured default panel, if any.
    async fn default_panel(&self) -> BackendResult<Option<Panel>>;

    async fn list_plans(&self) -> BackendResult<Vec<Plan>>;

    async fn list_plan_categories(&self) -> BackendResult<Vec<PlanCategory>>;

    async fn create_account(
        &self,
        panel_id: PanelId,
        username: &str,
        plan_id: PlanId,
    ) -> BackendResult<CreateAccountResponse>;

    async fn extend_account(
        &self,
        panel_id: PanelId,
        username: &str,
        plan_id: PlanId,
    ) -> BackendResult<ActionEnvelope>;

    async fn set_account_status(
        &self,
        panel_id: PanelId,
        username: &str,
        status: AccountStatus,
    ) -> BackendResult<ActionEnvelope>;

    async fn delete_account(&self, panel_id: PanelId, username: &str)
        -> BackendResult<ActionEnvelope>;

    async fn account_info(
        &self,
        panel_id: PanelId,
        username: &str,
    ) -> BackendResult<UsageSnapshot>;
}
