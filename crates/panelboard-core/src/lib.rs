//! # Panelboard Core
//!
//! Core business logic for Panelboard: the destination/pricing resolver
//! and the usage/expiry presentation formatter behind the reseller
//! dashboard.
//!
//! ```text
//! panelboard-core/src/modules/
//! ├── format.rs     # quota/expiry display strings (pure)
//! ├── catalog.rs    # plan grouping and price lookup (pure)
//! ├── access.rs     # scope containment and substitution
//! ├── resolver.rs   # panel fallback chain
//! ├── provision.rs  # create/extend/status/delete orchestration
//! └── backend.rs    # PanelBackend collaborator contract
//! ```
//!
//! The core is stateless: every resolution or formatting call receives
//! its inputs fresh and returns without caching. Collaborator calls are
//! the only suspension points and are awaited sequentially so the
//! resolution precedence stays deterministic.

pub mod error;
pub mod modules;

// Re-export commonly used types
pub use error::{AppError, AppResult};
pub use modules::backend::{BackendError, BackendResult, PanelBackend};
pub use modules::catalog::{PlanCatalog, PlanGroup};
pub use modules::provision::{
    ActionOutcome, CreateOutcome, CreateRequest, ExtensionQuote, Provisioner,
};
pub use modules::resolver::PanelResolver;
