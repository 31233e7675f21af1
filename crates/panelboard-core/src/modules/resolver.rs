//! Destination panel resolution.
//!
//! Produces exactly one panel id for a provisioning request by trying
//! sources in a fixed precedence order and stopping at the first
//! success:
//!
//! 1. Explicit panel supplied by the caller (must parse as an integer).
//! 2. The panel pinned by the operator's assigned template.
//! 3. The tenant's configured default panel.
//!
//! The winning candidate then passes through access verification; a
//! substitution there is silent and final. Resolution is a single-pass,
//! synchronous decision with no retries: each source lookup runs at most
//! once per call, awaited sequentially so source 1 is never raced
//! against source 2.

use panelboard_types::error::ResolveError;
use panelboard_types::models::{Operator, OperatorId, PanelId};

use crate::error::AppResult;
use crate::modules::access;
use crate::modules::backend::PanelBackend;

pub struct PanelResolver<'a> {
    backend: &'a dyn PanelBackend,
}

impl<'a> PanelResolver<'a> {
    pub fn new(backend: &'a dyn PanelBackend) -> Self {
        Self { backend }
    }

    /// Resolve the destination panel for `operator`, honoring the
    /// fallback chain. Fails with [`ResolveError::NoDestinationPanel`]
    /// when no source yields a usable id.
    pub async fn resolve(&self, explicit: Option<&str>, operator: &Operator) -> AppResult<PanelId> {
        let candidate = match parse_explicit(explicit) {
            Some(id) => Some(id),
            None => match self.template_panel(operator.id).await {
                Some(id) => Some(id),
                None => self.tenant_default().await,
            },
        };

        let candidate = candidate.ok_or(ResolveError::NoDestinationPanel)?;
        let verified = access::verify(Some(candidate), &operator.scope)?;
        let panel_id = verified.ok_or(ResolveError::NoDestinationPanel)?;

        tracing::debug!(candidate, panel_id, operator = operator.id, "panel resolved");
        Ok(panel_id)
    }

    async fn template_panel(&self, caller: OperatorId) -> Option<PanelId> {
        match self.backend.assigned_template(caller).await {
            Ok(template) => template.map(|t| t.panel_id),
            Err(e) => {
                // Falls through to the next source; the lookup is not
                // retried within this call.
                tracing::warn!("assigned template lookup failed: {}", e);
                None
            }
        }
    }

    async fn tenant_default(&self) -> Option<PanelId> {
        match self.backend.default_panel().await {
            Ok(panel) => panel.map(|p| p.id),
            Err(e) => {
                tracing::warn!("default panel lookup failed: {}", e);
                None
            }
        }
    }
}

fn parse_explicit(explicit: Option<&str>) -> Option<PanelId> {
    explicit.and_then(|s| s.trim().parse::<PanelId>().ok())
}
