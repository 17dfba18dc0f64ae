//! Box and capsule shapes derived from a node's mesh bounds

use crate::foundation::collections::NodeId;
use crate::physics::{longest_axis, Collider};
use crate::scene::{Bounds, SceneHierarchy};
use super::convention::ConventionTag;
use super::error::ImportError;

/// Mesh bounds of `node` turned by the node's local rotation about its
/// local position
///
/// The pivot is the node's parent-relative position and rotation, not its
/// world transform, so the result matches the world-frame variant only
/// when the parent is untranslated or the node is unrotated.
///
/// Both center and extents are rotated, so the result is only a snug box
/// for rotations that map axes onto axes. Other rotations give a larger,
/// still axis-aligned box whose extents may even turn negative.
pub fn rotated_bounds(scene: &SceneHierarchy, node: NodeId, tag: ConventionTag) -> Result<Bounds, ImportError> {
    let transform = &scene.node(node)?.transform;
    let (_, mesh) = scene.node_mesh(node).ok_or_else(|| ImportError::MissingMesh {
        node: scene.node(node).map(|n| n.name.clone()).unwrap_or_default(),
        tag,
    })?;

    let bounds = mesh.bounds();
    let rotation = transform.rotation;
    let position = transform.position;

    let center = rotation * (bounds.center - position) + position;
    let extents = rotation * (bounds.extents - bounds.center) + center;
    Ok(Bounds::new(center, extents))
}

/// Box collider taking center and size straight from the bounds
pub fn box_from_bounds(bounds: &Bounds) -> Collider {
    Collider::Box {
        center: bounds.center,
        size: bounds.size(),
    }
}

/// Capsule along the longest bounds axis, radius from the shortest
pub fn capsule_from_bounds(bounds: &Bounds) -> Collider {
    let size = bounds.size().abs();
    let direction = longest_axis(size);

    Collider::Capsule {
        center: bounds.center,
        direction,
        height: size[direction.index()],
        radius: size.min(),
    }
}
