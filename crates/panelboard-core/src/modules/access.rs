//! Access scope verification.
//!
//! Guarantees a provisioning action never targets a panel outside the
//! caller's authorized scope. Substitution is silent: an out-of-scope
//! candidate becomes the first visible panel, not an error.

use panelboard_types::error::ResolveError;
use panelboard_types::models::{AccessScope, OperatorId, PanelId};

use crate::error::AppResult;
use crate::modules::backend::PanelBackend;

/// Verify a candidate panel id against a caller scope.
///
/// Unrestricted scopes pass the candidate through unchanged, even when
/// absent (the caller resolves further upstream). Restricted scopes keep
/// members, substitute the first visible panel for everything else, and
/// fail with [`ResolveError::NoAccessibleResource`] when empty.
pub fn verify(
    candidate: Option<PanelId>,
    scope: &AccessScope,
) -> Result<Option<PanelId>, ResolveError> {
    match scope {
        AccessScope::All => Ok(candidate),
        AccessScope::Panels(list) => {
            let first = *list.first().ok_or(ResolveError::NoAccessibleResource)?;
            match candidate {
                Some(id) if list.contains(&id) => Ok(Some(id)),
                Some(id) => {
                    tracing::debug!(
                        candidate = id,
                        substitute = first,
                        "panel outside caller scope, substituting first visible"
                    );
                    Ok(Some(first))
                }
                None => Ok(Some(first)),
            }
        }
    }
}

/// Materialize a caller's scope. Root callers see everything; restricted
/// callers get the panel set the listing collaborator exposes to them.
pub async fn load_scope(
    backend: &dyn PanelBackend,
    caller: OperatorId,
    unrestricted: bool,
) -> AppResult<AccessScope> {
    if unrestricted {
        return Ok(AccessScope::All);
    }
    let panels = backend.list_panels(caller).await?;
    Ok(AccessScope::from_visible_panels(&panels))
}
