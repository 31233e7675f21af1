//! Caller identity and access scope.

use serde::{Deserialize, Serialize};

use super::{OperatorId, Panel, PanelId};

/// The set of panels an authenticated caller is permitted to target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "panels")]
pub enum AccessScope {
    /// Root/superuser scope: every panel is visible.
    All,
    /// Restricted operator scope: an explicit panel id list (size >= 0).
    Panels(Vec<PanelId>),
}

impl AccessScope {
    pub fn is_unrestricted(&self) -> bool {
        matches!(self, AccessScope::All)
    }

    /// Build a restricted scope from the panels visible to a caller,
    /// preserving listing order (the first entry becomes the
    /// substitution target for out-of-scope candidates).
    pub fn from_visible_panels(panels: &[Panel]) -> Self {
        AccessScope::Panels(panels.iter().map(|p| p.id).collect())
    }

    /// Whether a candidate id is inside this scope.
    pub fn contains(&self, id: PanelId) -> bool {
        match self {
            AccessScope::All => true,
            AccessScope::Panels(list) => list.contains(&id),
        }
    }
}

/// A dashboard caller: identity plus materialized access scope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Operator {
    pub id: OperatorId,
    pub scope: AccessScope,
}

impl Operator {
    pub fn root(id: OperatorId) -> Self {
        Self { id, scope: AccessScope::All }
    }

    pub fn restricted(id: OperatorId, panels: Vec<PanelId>) -> Self {
        Self { id, scope: AccessScope::Panels(panels) }
    }
}
