//! # Panelboard Types
//!
//! Core types, models, and error definitions for Panelboard.
//!
//! This crate provides the foundational type system for the Panelboard ecosystem:
//!
//! - **`error`** - Typed error hierarchy for resolution and provisioning
//! - **`models`** - Domain models (Panel, Plan, Template, AccessScope, usage)
//!
//! ## Architecture Role
//!
//! `panelboard-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!          panelboard-types (this crate)
//!                  │
//!                  ▼
//!          panelboard-core
//!                  │
//!                  ▼
//!          panelboard-client
//! ```
//!
//! All types are designed to be:
//! - **Serializable** via serde for API/IPC
//! - **Clone** for cheap sharing across async boundaries
//! - **PartialEq** for testing and comparison

pub mod error;
pub mod models;

// Re-export error types for convenience
pub use error::{ProvisionError, ResolveError, Result, TypedError};

// Re-export core model types
pub use models::{
    AccessScope, AccountStatus, ActionEnvelope, CreateAccountResponse, Operator, OperatorId,
    Panel, PanelId, PanelType, Plan, PlanCategory, PlanId, PriceOverride, Template, TemplateId,
    UsageSnapshot,
};
