#![allow(clippy::expect_used, reason = "integration test — panics are the assertion mechanism")]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use panelboard_core::modules::backend::{BackendError, BackendResult, PanelBackend};
use panelboard_core::{CreateRequest, PanelResolver, Provisioner};
use panelboard_types::models::{
    AccessScope, AccountStatus, ActionEnvelope, CreateAccountResponse, Operator, OperatorId,
    Panel, PanelId, PanelType, Plan, PlanCategory, PlanId, PriceOverride, Template, UsageSnapshot,
};

fn panel(id: PanelId, is_default: bool) -> Panel {
    Panel {
        id,
        name: format!("panel-{}", id),
        base_url: format!("https://p{}.example.net", id),
        is_default,
        panel_type: PanelType::Marzban,
    }
}

fn plan(id: PlanId, price: f64) -> Plan {
    Plan {
        id,
        name: format!("plan-{}", id),
        price,
        category_id: None,
        is_data_unlimited: false,
        data_quota: Some(50 * 1024 * 1024 * 1024),
        is_duration_unlimited: false,
        duration: Some(30 * 86_400),
    }
}

/// Configurable in-memory collaborator with per-operation call counters.
#[derive(Default)]
struct MemoryBackend {
    panels: Vec<Panel>,
    template: Option<Template>,
    default_panel: Option<Panel>,
    plans: Vec<Plan>,
    create_response: Option<CreateAccountResponse>,
    create_transport_error: bool,
    info: Option<UsageSnapshot>,
    template_calls: AtomicUsize,
    default_calls: AtomicUsize,
    info_calls: AtomicUsize,
    created: Mutex<Vec<(PanelId, String, PlanId)>>,
    extended: Mutex<Vec<(PanelId, String, PlanId)>>,
    status_changes: Mutex<Vec<(PanelId, String, AccountStatus)>>,
    deleted: Mutex<Vec<(PanelId, String)>>,
}

#[async_trait]
impl PanelBackend for MemoryBackend {
    async fn list_panels(&self, _caller: OperatorId) -> BackendResult<Vec<Panel>> {
        Ok(self.panels.clone())
    }

    async fn assigned_template(&self, _caller: OperatorId) -> BackendResult<Option<Template>> {
        self.template_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.template.clone())
    }

    async fn default_panel(&self) -> BackendResult<Option<Panel>> {
        self.default_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.default_panel.clone())
    }

    async fn list_plans(&self) -> BackendResult<Vec<Plan>> {
        Ok(self.plans.clone())
    }

    async fn list_plan_categories(&self) -> BackendResult<Vec<PlanCategory>> {
        Ok(vec![])
    }

    async fn create_account(
        &self,
        panel_id: PanelId,
        username: &str,
        plan_id: PlanId,
    ) -> BackendResult<CreateAccountResponse> {
        if self.create_transport_error {
            return Err(BackendError::Transport("connection reset".to_string()));
        }
        self.created.lock().expect("lock").push((panel_id, username.to_string(), plan_id));
        Ok(self.create_response.clone().unwrap_or(CreateAccountResponse {
            ok: true,
            username: Some(username.to_string()),
            subscription_url: None,
            error: None,
        }))
    }

    async fn extend_account(
        &self,
        panel_id: PanelId,
        username: &str,
        plan_id: PlanId,
    ) -> BackendResult<ActionEnvelope> {
        self.extended.lock().expect("lock").push((panel_id, username.to_string(), plan_id));
        Ok(ActionEnvelope::ok())
    }

    async fn set_account_status(
        &self,
        panel_id: PanelId,
        username: &str,
        status: AccountStatus,
    ) -> BackendResult<ActionEnvelope> {
        self.status_changes.lock().expect("lock").push((panel_id, username.to_string(), status));
        Ok(ActionEnvelope::ok())
    }

    async fn delete_account(
        &self,
        panel_id: PanelId,
        username: &str,
    ) -> BackendResult<ActionEnvelope> {
        self.deleted.lock().expect("lock").push((panel_id, username.to_string()));
        Ok(ActionEnvelope::failed("user not found on panel"))
    }

    async fn account_info(
        &self,
        _panel_id: PanelId,
        _username: &str,
    ) -> BackendResult<UsageSnapshot> {
        self.info_calls.fetch_add(1, Ordering::SeqCst);
        self.info
            .clone()
            .ok_or_else(|| BackendError::InvalidResponse("no such user".to_string()))
    }
}

fn root() -> Operator {
    Operator { id: 1, scope: AccessScope::All }
}

#[tokio::test]
async fn test_create_uses_direct_subscription_link() {
    let backend = Arc::new(MemoryBackend {
        create_response: Some(CreateAccountResponse {
            ok: true,
            username: Some("alice".to_string()),
            subscription_url: Some("https://p5.example.net/sub/alice".to_string()),
            error: None,
        }),
        ..MemoryBackend::default()
    });
    let provisioner = Provisioner::new(backend.clone());

    let out = provisioner
        .create(
            &root(),
            CreateRequest {
                username: "alice".to_string(),
                plan_id: 2,
                panel: Some("5".to_string()),
            },
        )
        .await
        .expect("create");

    assert!(out.ok);
    assert_eq!(out.subscription_url.as_deref(), Some("https://p5.example.net/sub/alice"));
    // Direct link: no follow-up lookup issued.
    assert_eq!(backend.info_calls.load(Ordering::SeqCst), 0);
    assert_eq!(backend.created.lock().expect("lock")[0], (5, "alice".to_string(), 2));
}

#[tokio::test]
async fn test_create_falls_back_to_info_lookup_for_link() {
    let backend = Arc::new(MemoryBackend {
        info: Some(UsageSnapshot {
            subscription_url: Some("https://p5.example.net/sub/bob".to_string()),
            ..UsageSnapshot::default()
        }),
        ..MemoryBackend::default()
    });
    let provisioner = Provisioner::new(backend.clone());

    let out = provisioner
        .create(
            &root(),
            CreateRequest {
                username: "bob".to_string(),
                plan_id: 2,
                panel: Some("5".to_string()),
            },
        )
        .await
        .expect("create");

    assert!(out.ok);
    assert_eq!(out.subscription_url.as_deref(), Some("https://p5.example.net/sub/bob"));
    assert_eq!(backend.info_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_create_survives_failed_link_lookup() {
    // account_info errors (no `info` configured); the create still
    // reports success, just without a link.
    let backend = Arc::new(MemoryBackend::default());
    let provisioner = Provisioner::new(backend.clone());

    let out = provisioner
        .create(
            &root(),
            CreateRequest {
                username: "carol".to_string(),
                plan_id: 1,
                panel: Some("3".to_string()),
            },
        )
        .await
        .expect("create");

    assert!(out.ok);
    assert_eq!(out.subscription_url, None);
}

#[tokio::test]
async fn test_create_upstream_refusal_rides_in_envelope() {
    let backend = Arc::new(MemoryBackend {
        create_response: Some(CreateAccountResponse {
            ok: false,
            username: None,
            subscription_url: None,
            error: Some("username already exists".to_string()),
        }),
        ..MemoryBackend::default()
    });
    let provisioner = Provisioner::new(backend);

    let out = provisioner
        .create(
            &root(),
            CreateRequest {
                username: "dave".to_string(),
                plan_id: 1,
                panel: Some("3".to_string()),
            },
        )
        .await
        .expect("envelope, not Err");

    assert!(!out.ok);
    assert_eq!(out.error.as_deref(), Some("username already exists"));
}

#[tokio::test]
async fn test_create_transport_failure_propagates() {
    let backend = Arc::new(MemoryBackend {
        create_transport_error: true,
        ..MemoryBackend::default()
    });
    let provisioner = Provisioner::new(backend);

    let result = provisioner
        .create(
            &root(),
            CreateRequest {
                username: "erin".to_string(),
                plan_id: 1,
                panel: Some("3".to_string()),
            },
        )
        .await;

    assert!(result.is_err(), "transport failure must not be folded into the envelope");
}

#[tokio::test]
async fn test_create_without_destination_reports_in_envelope() {
    let backend = Arc::new(MemoryBackend::default());
    let provisioner = Provisioner::new(backend.clone());

    let out = provisioner
        .create(
            &root(),
            CreateRequest { username: "frank".to_string(), plan_id: 1, panel: None },
        )
        .await
        .expect("envelope, not Err");

    assert!(!out.ok);
    assert!(out.error.expect("error message").contains("No destination panel"));
    // No request reached the collaborator.
    assert!(backend.created.lock().expect("lock").is_empty());
}

#[tokio::test]
async fn test_precedence_each_source_tried_at_most_once() {
    let backend = Arc::new(MemoryBackend {
        template: Some(Template {
            id: 1,
            name: "assigned".to_string(),
            panel_id: 20,
            price_overrides: vec![],
        }),
        default_panel: Some(panel(30, true)),
        ..MemoryBackend::default()
    });
    let resolver = PanelResolver::new(backend.as_ref());

    // Explicit input: no collaborator lookups at all.
    assert_eq!(resolver.resolve(Some("10"), &root()).await.expect("resolve"), 10);
    assert_eq!(backend.template_calls.load(Ordering::SeqCst), 0);
    assert_eq!(backend.default_calls.load(Ordering::SeqCst), 0);

    // Template source: exactly one template lookup, default untouched.
    assert_eq!(resolver.resolve(None, &root()).await.expect("resolve"), 20);
    assert_eq!(backend.template_calls.load(Ordering::SeqCst), 1);
    assert_eq!(backend.default_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_resolution_idempotent_for_unchanged_backend() {
    let backend = Arc::new(MemoryBackend {
        default_panel: Some(panel(30, true)),
        ..MemoryBackend::default()
    });
    let resolver = PanelResolver::new(backend.as_ref());

    let first = resolver.resolve(None, &root()).await.expect("resolve");
    let second = resolver.resolve(None, &root()).await.expect("resolve");
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_quote_then_extend_applies_template_override() {
    let backend = Arc::new(MemoryBackend {
        plans: vec![plan(7, 12.0)],
        template: Some(Template {
            id: 1,
            name: "reseller".to_string(),
            panel_id: 5,
            price_overrides: vec![PriceOverride { plan_id: 7, price: 9.5 }],
        }),
        ..MemoryBackend::default()
    });
    let provisioner = Provisioner::new(backend.clone());

    let quote = provisioner
        .extension_quote(&root(), "alice", 5, 7)
        .await
        .expect("quote");
    assert_eq!(quote.price, 9.5);

    // No extension was issued while quoting.
    assert!(backend.extended.lock().expect("lock").is_empty());

    let out = provisioner.extend(&quote).await.expect("extend");
    assert!(out.ok);
    assert_eq!(backend.extended.lock().expect("lock")[0], (5, "alice".to_string(), 7));
}

#[tokio::test]
async fn test_quote_unknown_plan_fails() {
    let backend = Arc::new(MemoryBackend { plans: vec![plan(7, 12.0)], ..MemoryBackend::default() });
    let provisioner = Provisioner::new(backend);

    let result = provisioner.extension_quote(&root(), "alice", 5, 99).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_status_change_and_delete_envelopes() {
    let backend = Arc::new(MemoryBackend::default());
    let provisioner = Provisioner::new(backend.clone());

    let out = provisioner.set_status(4, "alice", AccountStatus::Disabled).await.expect("status");
    assert!(out.ok);
    assert_eq!(
        backend.status_changes.lock().expect("lock")[0],
        (4, "alice".to_string(), AccountStatus::Disabled)
    );

    // MemoryBackend answers delete with an upstream refusal.
    let out = provisioner.delete(4, "alice").await.expect("delete");
    assert!(!out.ok);
    assert_eq!(out.error.as_deref(), Some("user not found on panel"));
}

#[tokio::test]
async fn test_load_scope_materializes_visible_panels() {
    let backend = MemoryBackend {
        panels: vec![panel(7, false), panel(8, false)],
        ..MemoryBackend::default()
    };

    let scope = panelboard_core::modules::access::load_scope(&backend, 2, false)
        .await
        .expect("scope");
    assert_eq!(scope, AccessScope::Panels(vec![7, 8]));
    assert!(!scope.is_unrestricted());

    let root_scope = panelboard_core::modules::access::load_scope(&backend, 1, true)
        .await
        .expect("scope");
    assert!(root_scope.is_unrestricted());
}

#[tokio::test]
async fn test_restricted_operator_never_escapes_scope() {
    let backend = Arc::new(MemoryBackend {
        panels: vec![panel(7, false), panel(8, false)],
        default_panel: Some(panel(30, true)),
        ..MemoryBackend::default()
    });
    let resolver = PanelResolver::new(backend.as_ref());
    let operator = Operator { id: 2, scope: AccessScope::Panels(vec![7, 8]) };

    // The tenant default (30) is outside the operator's scope and gets
    // silently replaced by the first visible panel.
    assert_eq!(resolver.resolve(None, &operator).await.expect("resolve"), 7);
    // An in-scope explicit choice is kept.
    assert_eq!(resolver.resolve(Some("8"), &operator).await.expect("resolve"), 8);
}
