//! Re-expressing a child's mesh in its parent's local space
//!
//! A collider moved from a child onto its parent loses the child's
//! transform, so its mesh has to carry that transform baked in.

use crate::foundation::collections::{MeshId, NodeId};
use crate::scene::{SceneError, SceneHierarchy};

/// Bake `node`'s transform into a copy of its mesh, expressed in the
/// parent's local space
///
/// Each vertex goes child-local -> world -> parent-local. The result is
/// stored as a new mesh and its handle returned; the original mesh is left
/// untouched for any other node that shares it. Returns `Ok(None)` when the
/// node has no mesh.
pub fn rebase_mesh(scene: &mut SceneHierarchy, node: NodeId) -> Result<Option<MeshId>, SceneError> {
    let Some((_, mesh)) = scene.node_mesh(node) else {
        log::debug!("'{}' has no mesh to rebase", scene.node(node)?.name);
        return Ok(None);
    };

    let parent = scene
        .parent(node)
        .ok_or_else(|| SceneError::MissingParent(scene.node(node).map(|n| n.name.clone()).unwrap_or_default()))?;

    let child_to_parent = scene.inverse_world_matrix(parent)? * scene.world_matrix(node)?;
    let rebased = mesh.transformed(&child_to_parent);
    log::trace!("Rebased {} vertices of '{}' into parent space", rebased.vertex_count(), rebased.name);

    Ok(Some(scene.add_mesh(rebased)))
}
