//! Generic collider transfer from a child node onto its parent
//!
//! The collider is first fitted on the child, exactly as a physics host
//! would fit a freshly added component, then copied field for field onto
//! the parent with its center offset re-expressed in parent space.

use crate::foundation::collections::{MeshId, NodeId};
use crate::foundation::math::rotation_dot;
use crate::physics::{fit_collider, Collider, ColliderKind};
use crate::scene::{SceneError, SceneHierarchy};

/// Result of copying a fitted collider to the parent
#[derive(Debug, Clone, PartialEq)]
pub struct CopiedCollider {
    /// Collider expressed in the parent's local space, not yet attached
    pub collider: Collider,
    /// The node's rotation differs enough from the model root that the
    /// copy is only approximate
    pub rotation_mismatch: bool,
}

/// Fit a `kind` collider on `node` using `mesh`, attach it there, and
/// return the parent-space copy
///
/// The rotation guard compares the node's world rotation with the model
/// root's: when `1 - |dot|` exceeds `rotation_threshold` a warning is
/// logged and the copy still goes ahead.
pub fn copy_collider(
    scene: &mut SceneHierarchy,
    model_root: NodeId,
    node: NodeId,
    kind: ColliderKind,
    mesh: Option<MeshId>,
    rotation_threshold: f32,
) -> Result<CopiedCollider, SceneError> {
    let name = scene.node(node)?.name.clone();
    let parent = scene
        .parent(node)
        .ok_or_else(|| SceneError::MissingParent(name.clone()))?;

    let dot = rotation_dot(&scene.world_rotation(model_root)?, &scene.world_rotation(node)?);
    let rotation_mismatch = 1.0 - dot.abs() > rotation_threshold;
    if rotation_mismatch {
        log::warn!(
            "Collision node '{}' is rotated relative to the model root; the {:?} collider copied to its parent may not line up",
            name,
            kind
        );
    }

    let fitted = fit_collider(kind, mesh.and_then(|id| scene.mesh(id).map(|m| (id, m))));
    let child_to_world = scene.world_matrix(node)?;
    let world_to_parent = scene.inverse_world_matrix(parent)?;
    let collider = fitted.reframed(&child_to_world, &world_to_parent);

    scene.attach_collider(node, fitted)?;

    Ok(CopiedCollider {
        collider,
        rotation_mismatch,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ROTATION_WARNING_THRESHOLD;
    use crate::foundation::math::{Transform, Vec3};
    use crate::scene::Mesh;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    fn sphere_scene(child_transform: Transform) -> (SceneHierarchy, NodeId, NodeId, NodeId) {
        let mut scene = SceneHierarchy::new();
        let root = scene.add_root("Model", Transform::identity());
        let parent = scene
            .add_child(root, "Ball", Transform::from_position(Vec3::new(0.0, 0.0, 5.0)))
            .unwrap();
        let child = scene.add_child(parent, "usp_Ball", child_transform).unwrap();
        let mesh = scene.add_mesh(Mesh::new(
            "usp_Ball",
            vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 2.0, 2.0)],
        ));
        scene.set_mesh(child, mesh).unwrap();
        (scene, root, parent, child)
    }

    #[test]
    fn test_sphere_center_reframed_into_parent() {
        let (mut scene, root, _, child) = sphere_scene(Transform::from_position(Vec3::new(1.0, 0.0, 0.0)));
        let mesh = scene.node(child).unwrap().mesh;

        let copied = copy_collider(
            &mut scene,
            root,
            child,
            ColliderKind::Sphere,
            mesh,
            DEFAULT_ROTATION_WARNING_THRESHOLD,
        )
        .unwrap();

        assert!(!copied.rotation_mismatch);
        match copied.collider {
            Collider::Sphere { center, radius } => {
                // Fitted at (1,1,1) in child space, child sits at (1,0,0) in parent space
                assert_relative_eq!(center, Vec3::new(2.0, 1.0, 1.0), epsilon = 1e-5);
                assert_eq!(radius, 1.0);
            }
            other => panic!("unexpected shape {:?}", other),
        }

        // The fitted original stays on the child
        assert_eq!(scene.node(child).unwrap().colliders.len(), 1);
    }

    #[test]
    fn test_rotated_child_flags_mismatch_but_copies() {
        let (mut scene, root, _, child) =
            sphere_scene(Transform::identity().with_rotation_axis_angle(Vec3::y(), PI / 2.0));
        let mesh = scene.node(child).unwrap().mesh;

        let copied = copy_collider(
            &mut scene,
            root,
            child,
            ColliderKind::Sphere,
            mesh,
            DEFAULT_ROTATION_WARNING_THRESHOLD,
        )
        .unwrap();

        assert!(copied.rotation_mismatch);
        assert_eq!(copied.collider.kind(), ColliderKind::Sphere);
    }

    #[test]
    fn test_small_rotation_under_threshold() {
        // 20 degrees: 1 - cos(10 degrees) is about 0.015
        let (mut scene, root, _, child) =
            sphere_scene(Transform::identity().with_rotation_axis_angle(Vec3::x(), 20f32.to_radians()));

        let copied = copy_collider(&mut scene, root, child, ColliderKind::Sphere, None, 0.1).unwrap();
        assert!(!copied.rotation_mismatch);
    }

    #[test]
    fn test_mesh_collider_copies_verbatim() {
        let (mut scene, root, _, child) = sphere_scene(Transform::identity());
        let mesh = scene.node(child).unwrap().mesh;

        let copied = copy_collider(&mut scene, root, child, ColliderKind::ConcaveMesh, mesh, 0.1).unwrap();
        assert_eq!(copied.collider, Collider::ConcaveMesh { mesh });
    }
}
