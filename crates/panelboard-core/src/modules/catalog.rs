//! Plan catalog: grouping for selection lists and price lookup.

use serde::Serialize;

use panelboard_types::models::{Plan, PlanCategory, PlanId, Template};

/// One selectable group of plans. `category` is `None` for the implicit
/// "uncategorized" bucket.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlanGroup {
    pub category: Option<PlanCategory>,
    pub plans: Vec<Plan>,
}

impl PlanGroup {
    pub fn label(&self) -> &str {
        self.category.as_ref().map_or("uncategorized", |c| c.name.as_str())
    }
}

/// Partition of a flat plan list for presentation and price lookup.
/// Holds nothing beyond its inputs; rebuild it per fetch.
#[derive(Debug, Clone)]
pub struct PlanCatalog {
    plans: Vec<Plan>,
    categories: Vec<PlanCategory>,
}

impl PlanCatalog {
    pub fn new(plans: Vec<Plan>, mut categories: Vec<PlanCategory>) -> Self {
        categories.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then(a.id.cmp(&b.id)));
        Self { plans, categories }
    }

    /// Ordered groups: uncategorized first (if non-empty), then
    /// categories by ascending `sort_order` (ties by id), empty groups
    /// omitted. Within a group, input order is preserved.
    pub fn grouped(&self) -> Vec<PlanGroup> {
        let mut groups = Vec::new();

        let uncategorized: Vec<Plan> =
            self.plans.iter().filter(|p| p.category_id.is_none()).cloned().collect();
        if !uncategorized.is_empty() {
            groups.push(PlanGroup { category: None, plans: uncategorized });
        }

        for category in &self.categories {
            let plans: Vec<Plan> = self
                .plans
                .iter()
                .filter(|p| p.category_id == Some(category.id))
                .cloned()
                .collect();
            if !plans.is_empty() {
                groups.push(PlanGroup { category: Some(category.clone()), plans });
            }
        }

        groups
    }

    pub fn plan(&self, id: PlanId) -> Option<&Plan> {
        self.plans.iter().find(|p| p.id == id)
    }

    /// Effective price of a plan for a caller: the assigned template's
    /// override when one exists, else the list price. `None` when the
    /// plan is unknown.
    pub fn price_for(&self, plan_id: PlanId, template: Option<&Template>) -> Option<f64> {
        let plan = self.plan(plan_id)?;
        Some(template.and_then(|t| t.price_override(plan_id)).unwrap_or(plan.price))
    }
}
