//! Backend panel models.

use serde::{Deserialize, Serialize};

use super::PanelId;

/// Kind of software running on a backend panel.
///
/// Marzban panels return a subscription link directly from account
/// creation; other panel types require a follow-up info lookup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PanelType {
    #[default]
    Marzban,
    Xui,
}

/// An externally hosted service instance that actually issues proxy
/// accounts. Owned and persisted by the backend collaborator; the core
/// only reads panels per resolution call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Panel {
    pub id: PanelId,
    pub name: String,
    pub base_url: String,
    /// At most one panel per tenant carries `true`; uniqueness is
    /// enforced by the collaborator that stores panels.
    #[serde(default)]
    pub is_default: bool,
    #[serde(default, rename = "type")]
    pub panel_type: PanelType,
}
