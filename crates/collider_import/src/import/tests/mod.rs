//! Whole-pass tests over small authored models

mod scene_round_trip;

use crate::foundation::collections::NodeId;
use crate::foundation::math::{Transform, Vec3};
use crate::scene::{Mesh, SceneHierarchy};

/// Eight corners of an axis-aligned box
pub(super) fn box_corners(center: Vec3, half: Vec3) -> Vec<Vec3> {
    let mut corners = Vec::with_capacity(8);
    for x in [-1.0, 1.0] {
        for y in [-1.0, 1.0] {
            for z in [-1.0, 1.0] {
                corners.push(center + half.component_mul(&Vec3::new(x, y, z)));
            }
        }
    }
    corners
}

/// Add a child carrying its own mesh
pub(super) fn add_mesh_node(
    scene: &mut SceneHierarchy,
    parent: NodeId,
    node_name: &str,
    mesh_name: &str,
    transform: Transform,
    vertices: Vec<Vec3>,
) -> NodeId {
    let node = scene.add_child(parent, node_name, transform).unwrap();
    let mesh = scene.add_mesh(Mesh::new(mesh_name, vertices));
    scene.set_mesh(node, mesh).unwrap();
    node
}
