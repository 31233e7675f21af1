//! Core modules: collaborator contract, pure formatters, and the
//! resolution/orchestration engine.

pub mod access;
pub mod backend;
pub mod catalog;
pub mod format;
pub mod provision;
pub mod resolver;
