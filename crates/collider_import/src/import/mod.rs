//! Collider inference for imported models
//!
//! Nodes whose mesh name or own name starts with a reserved prefix are
//! turned into colliders on their parent and then removed:
//!
//! | Prefix | Collider |
//! |--------|----------|
//! | `ubx_` | box from rotated mesh bounds |
//! | `ucp_` | capsule from rotated mesh bounds |
//! | `usp_` | sphere fitted on the node, copied to the parent |
//! | `ucx_` | convex mesh, vertices rebased into parent space |
//! | `umc_` | concave mesh, vertices rebased into parent space |
//!
//! # Module Organization
//!
//! - [`convention`] - Prefix detection and classification
//! - [`shapes`] - Rotated bounds, box and capsule derivation
//! - [`rebase`] - Child-to-parent mesh re-expression
//! - [`copy`] - Fit-on-child, copy-to-parent collider transfer
//! - [`walker`] - Post-order traversal
//! - [`worklist`] - Deferred node removal
//! - [`pipeline`] - The pass tying it together

pub mod convention;
pub mod copy;
pub mod error;
pub mod pipeline;
pub mod rebase;
pub mod shapes;
pub mod walker;
pub mod worklist;

#[cfg(test)]
mod tests;

pub use convention::{classify, ConventionTag};
pub use error::ImportError;
pub use pipeline::{ColliderImporter, GeneratedCollider, ImportReport};
pub use worklist::{SweepSummary, Worklist};
