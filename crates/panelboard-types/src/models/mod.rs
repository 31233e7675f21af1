//! Domain models for Panelboard.

mod panel;
mod plan;
mod scope;
mod template;
mod usage;

pub use panel::{Panel, PanelType};
pub use plan::{Plan, PlanCategory};
pub use scope::{AccessScope, Operator};
pub use template::{PriceOverride, Template};
pub use usage::{AccountStatus, ActionEnvelope, CreateAccountResponse, UsageSnapshot};

/// Identifier of a backend panel.
pub type PanelId = i64;

/// Identifier of a pricing plan.
pub type PlanId = i64;

/// Identifier of an operator template.
pub type TemplateId = i64;

/// Identifier of a dashboard operator (the caller).
pub type OperatorId = i64;
