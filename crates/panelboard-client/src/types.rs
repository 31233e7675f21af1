use serde::{Deserialize, Serialize};

use panelboard_types::models::{PlanId, TemplateId};

/// Connection settings for [`crate::PanelboardClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Management API origin, e.g. `https://admin.example.net`.
    pub base_url: String,
    /// Bearer token of the authenticated operator.
    pub api_token: String,
    /// Per-request timeout. Retry policy is the caller's business.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            api_token: String::new(),
            timeout_secs: 15,
        }
    }
}

/// Wire shape of `GET /api/templates/assigned/{operator}`: the API
/// returns only the assignment reference, not the template itself.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignedTemplateRef {
    pub template_id: Option<TemplateId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateUserBody<'a> {
    pub username: &'a str,
    pub plan_id: PlanId,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtendUserBody {
    pub plan_id: PlanId,
}

#[derive(Debug, Clone, Serialize)]
pub struct SetStatusBody<'a> {
    pub status: &'a str,
}
