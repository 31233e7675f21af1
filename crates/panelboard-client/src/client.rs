use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use panelboard_core::{BackendError, BackendResult, PanelBackend};
use panelboard_types::models::{
    AccountStatus, ActionEnvelope, CreateAccountResponse, OperatorId, Panel, PanelId, Plan,
    PlanCategory, PlanId, Template, UsageSnapshot,
};

use crate::error::ClientError;
use crate::types::{AssignedTemplateRef, ClientConfig, CreateUserBody, ExtendUserBody, SetStatusBody};

/// Bearer-authenticated client for the Panelboard management API.
///
/// Implements [`PanelBackend`], so the core engine runs unchanged
/// against a live deployment. Holds no state beyond the connection pool.
pub struct PanelboardClient {
    client: Client,
    base_url: Url,
    api_token: String,
}

impl PanelboardClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClientError::Config(format!("base_url: {}", e)))?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, base_url, api_token: config.api_token })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}api/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .client
            .get(self.endpoint(path))
            .bearer_auth(&self.api_token)
            .send()
            .await?;
        Self::decode(resp).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self
            .client
            .request(method, self.endpoint(path))
            .bearer_auth(&self.api_token)
            .json(body)
            .send()
            .await?;
        Self::decode(resp).await
    }

    async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .client
            .delete(self.endpoint(path))
            .bearer_auth(&self.api_token)
            .send()
            .await?;
        Self::decode(resp).await
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
        let status = resp.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let message = resp.text().await.unwrap_or_default();
            return Err(ClientError::Unauthorized { status: status.as_u16(), message });
        }

        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ClientError::ServerError { status: status.as_u16(), message });
        }

        resp.json().await.map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl PanelBackend for PanelboardClient {
    async fn list_panels(&self, _caller: OperatorId) -> BackendResult<Vec<Panel>> {
        // The API scopes the listing by the bearer token's identity.
        Ok(self.get_json("panels").await.map_err(BackendError::from)?)
    }

    async fn assigned_template(&self, caller: OperatorId) -> BackendResult<Option<Template>> {
        let assigned: AssignedTemplateRef = self
            .get_json(&format!("templates/assigned/{}", caller))
            .await
            .map_err(BackendError::from)?;
        let Some(template_id) = assigned.template_id else {
            return Ok(None);
        };

        // The assignment endpoint returns only a reference; resolve it
        // against the template listing.
        let templates: Vec<Template> =
            self.get_json("templates").await.map_err(BackendError::from)?;
        let template = templates.into_iter().find(|t| t.id == template_id);
        if template.is_none() {
            tracing::warn!(template_id, "assigned template missing from template listing");
        }
        Ok(template)
    }

    async fn default_panel(&self) -> BackendResult<Option<Panel>> {
        let panels: Vec<Panel> = self.get_json("panels").await.map_err(BackendError::from)?;
        Ok(panels.into_iter().find(|p| p.is_default))
    }

    async fn list_plans(&self) -> BackendResult<Vec<Plan>> {
        Ok(self.get_json("plans").await.map_err(BackendError::from)?)
    }

    async fn list_plan_categories(&self) -> BackendResult<Vec<PlanCategory>> {
        Ok(self.get_json("plan-categories").await.map_err(BackendError::from)?)
    }

    async fn create_account(
        &self,
        panel_id: PanelId,
        username: &str,
        plan_id: PlanId,
    ) -> BackendResult<CreateAccountResponse> {
        let body = CreateUserBody { username, plan_id };
        Ok(self
            .send_json(reqwest::Method::POST, &format!("control/{}/users", panel_id), &body)
            .await
            .map_err(BackendError::from)?)
    }

    async fn extend_account(
        &self,
        panel_id: PanelId,
        username: &str,
        plan_id: PlanId,
    ) -> BackendResult<ActionEnvelope> {
        let body = ExtendUserBody { plan_id };
        Ok(self
            .send_json(
                reqwest::Method::POST,
                &format!("control/{}/users/{}/extend", panel_id, username),
                &body,
            )
            .await
            .map_err(BackendError::from)?)
    }

    async fn set_account_status(
        &self,
        panel_id: PanelId,
        username: &str,
        status: AccountStatus,
    ) -> BackendResult<ActionEnvelope> {
        let body = SetStatusBody { status: status.as_str() };
        Ok(self
            .send_json(
                reqwest::Method::POST,
                &format!("control/{}/users/{}/status", panel_id, username),
                &body,
            )
            .await
            .map_err(BackendError::from)?)
    }

    async fn delete_account(
        &self,
        panel_id: PanelId,
        username: &str,
    ) -> BackendResult<ActionEnvelope> {
        Ok(self
            .delete_json(&format!("control/{}/users/{}", panel_id, username))
            .await
            .map_err(BackendError::from)?)
    }

    async fn account_info(
        &self,
        panel_id: PanelId,
        username: &str,
    ) -> BackendResult<UsageSnapshot> {
        Ok(self
            .get_json(&format!("control/{}/users/{}", panel_id, username))
            .await
            .map_err(BackendError::from)?)
    }
}
