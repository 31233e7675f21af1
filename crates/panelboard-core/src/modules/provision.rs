//! Provisioning orchestration: create, extend, status change, delete.
//!
//! Every action is a single attempt with no retry; failures surface in a
//! uniform `{ ok, error? }` outcome for the caller to render (and retry
//! manually). Transport failures propagate as `Err` so the UI boundary
//! can treat them as exceptional.

use std::sync::Arc;

use serde::Serialize;

use panelboard_types::error::ProvisionError;
use panelboard_types::models::{
    AccountStatus, ActionEnvelope, Operator, PanelId, PlanId,
};

use crate::error::{AppError, AppResult};
use crate::modules::backend::PanelBackend;
use crate::modules::catalog::PlanCatalog;
use crate::modules::resolver::PanelResolver;

/// Inputs of a create action. `panel` is the raw caller input (a form
/// value), resolved through the fallback chain when absent or invalid.
#[derive(Debug, Clone)]
pub struct CreateRequest {
    pub username: String,
    pub plan_id: PlanId,
    pub panel: Option<String>,
}

/// Normalized result of a create action.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CreateOutcome {
    pub ok: bool,
    pub username: String,
    pub subscription_url: Option<String>,
    pub error: Option<String>,
}

impl CreateOutcome {
    fn failed(username: String, error: String) -> Self {
        Self { ok: false, username, subscription_url: None, error: Some(error) }
    }
}

/// Normalized result of extend/status/delete actions.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ActionOutcome {
    pub ok: bool,
    pub error: Option<String>,
}

/// A priced extension, produced by [`Provisioner::extension_quote`].
///
/// This value is the explicit confirmation signal required before an
/// extension: the caller must obtain (and show) the price, then hand the
/// quote back to [`Provisioner::extend`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionQuote {
    pub username: String,
    pub panel_id: PanelId,
    pub plan_id: PlanId,
    pub price: f64,
}

/// Composes the resolver and catalog over a [`PanelBackend`] to execute
/// provisioning actions. Stateless: safe to share and to call
/// concurrently for different accounts.
pub struct Provisioner {
    backend: Arc<dyn PanelBackend>,
}

impl Provisioner {
    pub fn new(backend: Arc<dyn PanelBackend>) -> Self {
        Self { backend }
    }

    /// Create an account. Resolves the destination panel, issues the
    /// request, and derives a subscription link from the response or a
    /// single follow-up info lookup (panel types differ in whether they
    /// return the link directly).
    pub async fn create(&self, operator: &Operator, req: CreateRequest) -> AppResult<CreateOutcome> {
        let resolver = PanelResolver::new(self.backend.as_ref());
        let panel_id = match resolver.resolve(req.panel.as_deref(), operator).await {
            Ok(id) => id,
            Err(AppError::Resolve(e)) => {
                return Ok(CreateOutcome::failed(req.username, e.to_string()));
            }
            Err(e) => return Err(e),
        };

        let resp = self.backend.create_account(panel_id, &req.username, req.plan_id).await?;
        if !resp.ok {
            let message =
                resp.error.unwrap_or_else(|| "upstream request failed".to_string());
            return Ok(CreateOutcome::failed(req.username, message));
        }

        let username = resp.username.unwrap_or(req.username);
        let subscription_url = match resp.subscription_url {
            Some(url) => Some(url),
            None => match self.backend.account_info(panel_id, &username).await {
                Ok(info) => info.subscription_url,
                Err(e) => {
                    // The account exists; a missing link is not fatal.
                    tracing::warn!(panel = panel_id, "subscription link lookup failed: {}", e);
                    None
                }
            },
        };

        tracing::info!(panel = panel_id, username = %username, "account created");
        Ok(CreateOutcome { ok: true, username, subscription_url, error: None })
    }

    /// Price an extension for confirmation. Applies the operator's
    /// template price override when one exists for the plan.
    pub async fn extension_quote(
        &self,
        operator: &Operator,
        username: &str,
        panel_id: PanelId,
        plan_id: PlanId,
    ) -> AppResult<ExtensionQuote> {
        let plans = self.backend.list_plans().await?;
        let categories = self.backend.list_plan_categories().await?;
        let catalog = PlanCatalog::new(plans, categories);

        let template = match self.backend.assigned_template(operator.id).await {
            Ok(t) => t,
            Err(e) => {
                tracing::warn!("assigned template lookup failed, using list price: {}", e);
                None
            }
        };

        let price = catalog
            .price_for(plan_id, template.as_ref())
            .ok_or(ProvisionError::PlanNotFound { id: plan_id })?;

        Ok(ExtensionQuote { username: username.to_string(), panel_id, plan_id, price })
    }

    /// Issue a confirmed extension.
    pub async fn extend(&self, quote: &ExtensionQuote) -> AppResult<ActionOutcome> {
        let envelope = self
            .backend
            .extend_account(quote.panel_id, &quote.username, quote.plan_id)
            .await?;
        Ok(outcome(envelope))
    }

    /// Enable or disable an account. The panel must already be known;
    /// no resolution chain runs here.
    pub async fn set_status(
        &self,
        panel_id: PanelId,
        username: &str,
        status: AccountStatus,
    ) -> AppResult<ActionOutcome> {
        let envelope = self.backend.set_account_status(panel_id, username, status).await?;
        Ok(outcome(envelope))
    }

    /// Delete an account. No resolution chain.
    pub async fn delete(&self, panel_id: PanelId, username: &str) -> AppResult<ActionOutcome> {
        let envelope = self.backend.delete_account(panel_id, username).await?;
        Ok(outcome(envelope))
    }
}

fn outcome(envelope: ActionEnvelope) -> ActionOutcome {
    if envelope.ok {
        ActionOutcome { ok: true, error: None }
    } else {
        let message = envelope.error.unwrap_or_else(|| "upstream request failed".to_string());
        let refusal = ProvisionError::UpstreamRequestFailed { message: message.clone() };
        tracing::warn!(error = %refusal, "action refused by upstream");
        ActionOutcome { ok: false, error: Some(message) }
    }
}
