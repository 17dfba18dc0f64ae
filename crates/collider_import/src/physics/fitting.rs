//! Auto-fit of new colliders to a node's mesh
//!
//! Mirrors what a physics host does when a collider component is added to
//! a node: parameters are derived from the mesh's local bounds, or fall back
//! to unit-sized defaults when the node has no mesh.

use crate::foundation::collections::MeshId;
use crate::foundation::math::Vec3;
use crate::scene::Mesh;
use super::collider::{Axis, Collider, ColliderKind};

/// Axis with the largest component; ties go to the earlier axis
pub fn longest_axis(values: Vec3) -> Axis {
    let longest = values.x.max(values.y).max(values.z);
    if longest == values.x {
        Axis::X
    } else if longest == values.y {
        Axis::Y
    } else {
        Axis::Z
    }
}

/// Build a collider of `kind` fitted to `mesh` (node-local space)
pub fn fit_collider(kind: ColliderKind, mesh: Option<(MeshId, &Mesh)>) -> Collider {
    let Some((mesh_id, mesh)) = mesh else {
        return default_collider(kind);
    };

    let bounds = mesh.bounds();
    match kind {
        ColliderKind::Box => Collider::Box {
            center: bounds.center,
            size: bounds.size(),
        },
        ColliderKind::Sphere => Collider::Sphere {
            center: bounds.center,
            radius: bounds.extents.max(),
        },
        ColliderKind::Capsule => {
            let direction = longest_axis(bounds.extents);
            let radius = (0..3)
                .filter(|&i| i != direction.index())
                .map(|i| bounds.extents[i])
                .fold(0.0f32, f32::max);
            Collider::Capsule {
                center: bounds.center,
                direction,
                height: bounds.size()[direction.index()],
                radius,
            }
        }
        ColliderKind::ConvexMesh => Collider::ConvexMesh {
            mesh: Some(mesh_id),
            convex: false,
        },
        ColliderKind::ConcaveMesh => Collider::ConcaveMesh {
            mesh: Some(mesh_id),
        },
    }
}

fn default_collider(kind: ColliderKind) -> Collider {
    match kind {
        ColliderKind::Box => Collider::Box {
            center: Vec3::zeros(),
            size: Vec3::new(1.0, 1.0, 1.0),
        },
        ColliderKind::Sphere => Collider::Sphere {
            center: Vec3::zeros(),
            radius: 0.5,
        },
        ColliderKind::Capsule => Collider::Capsule {
            center: Vec3::zeros(),
            direction: Axis::Y,
            height: 2.0,
            radius: 0.5,
        },
        ColliderKind::ConvexMesh => Collider::ConvexMesh {
            mesh: None,
            convex: false,
        },
        ColliderKind::ConcaveMesh => Collider::ConcaveMesh { mesh: None },
    }
}
