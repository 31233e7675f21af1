//! Operator templates.

use serde::{Deserialize, Serialize};

use super::{PanelId, PlanId, TemplateId};

/// A per-plan price override carried by a template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceOverride {
    pub plan_id: PlanId,
    pub price: f64,
}

/// A saved association of a panel (and optional price overrides)
/// assigned to an operator. An assigned template pins that operator's
/// default panel and per-plan prices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Template {
    pub id: TemplateId,
    pub name: String,
    pub panel_id: PanelId,
    #[serde(default)]
    pub price_overrides: Vec<PriceOverride>,
}

impl Template {
    /// Price override for a plan, if this template carries one.
    pub fn price_override(&self, plan_id: PlanId) -> Option<f64> {
        self.price_overrides.iter().find(|o| o.plan_id == plan_id).map(|o| o.price)
    }
}
