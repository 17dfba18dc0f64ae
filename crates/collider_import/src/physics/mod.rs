//! Physics collider shapes
//!
//! Provides the collider variants the importer attaches to nodes and the
//! auto-fit a physics host applies when a collider is added to a node that
//! already has a mesh.

pub mod collider;
pub mod fitting;

pub use collider::{Axis, Collider, ColliderKind};
pub use fitting::{fit_collider, longest_axis};
