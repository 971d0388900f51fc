//! Core data model definitions shared across Warden crates.
#![allow(missing_docs)]

pub mod api;
pub mod ids;
pub mod rbac;
pub mod user;

// Intentionally curated re-exports for downstream consumers.
pub use api::ApiResponse;
pub use ids::UserId;
pub use rbac::{Actor, permissions, roles};
pub use user::{User, UserDraft};
