//! Serializable scene files
//!
//! A [`SceneDescription`] is a plain tree of nodes with embedded meshes and
//! colliders, loaded from and saved to RON or TOML through [`Config`].
//! Meshes are embedded per node, so sharing between nodes is not preserved
//! across a save/load cycle.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::foundation::collections::{MeshId, NodeId};
use crate::foundation::math::{Quat, Quaternion, Transform, Vec3};
use crate::physics::{Axis, Collider};
use super::hierarchy::{SceneError, SceneHierarchy};
use super::mesh::Mesh;

/// A whole scene file: one tree per imported model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Top-level nodes
    #[serde(default)]
    pub roots: Vec<NodeDescription>,
}

impl Config for SceneDescription {}

/// One node and its subtree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeDescription {
    /// Node name
    pub name: String,
    /// Transform relative to the parent
    #[serde(default)]
    pub transform: TransformDescription,
    /// Associated mesh
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mesh: Option<MeshDescription>,
    /// Colliders owned by the node
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colliders: Vec<ColliderDescription>,
    /// Child nodes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeDescription>,
}

/// Position, rotation quaternion `[x, y, z, w]`, and scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformDescription {
    /// Position relative to the parent
    #[serde(default)]
    pub position: [f32; 3],
    /// Rotation as `[x, y, z, w]`; normalized on load
    #[serde(default = "identity_rotation")]
    pub rotation: [f32; 4],
    /// Scale factors
    #[serde(default = "unit_scale")]
    pub scale: [f32; 3],
}

fn identity_rotation() -> [f32; 4] {
    [0.0, 0.0, 0.0, 1.0]
}

fn unit_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

impl Default for TransformDescription {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            rotation: identity_rotation(),
            scale: unit_scale(),
        }
    }
}

impl TransformDescription {
    /// Transform for the node named `node`
    ///
    /// The rotation is normalized; a zero-length or non-finite quaternion is
    /// rejected.
    pub fn to_transform(&self, node: &str) -> Result<Transform, SceneError> {
        let [x, y, z, w] = self.rotation;
        let rotation = Quat::try_new(Quaternion::new(w, x, y, z), f32::EPSILON)
            .filter(|rotation| rotation.coords.iter().all(|c| c.is_finite()))
            .ok_or_else(|| SceneError::InvalidRotation(node.to_string()))?;

        Ok(Transform::new(
            Vec3::from(self.position),
            rotation,
            Vec3::from(self.scale),
        ))
    }
}

impl From<&Transform> for TransformDescription {
    fn from(transform: &Transform) -> Self {
        let q = transform.rotation.quaternion();
        Self {
            position: transform.position.into(),
            rotation: [q.i, q.j, q.k, q.w],
            scale: transform.scale.into(),
        }
    }
}

/// Named vertex list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshDescription {
    /// Mesh name
    pub name: String,
    /// Vertex positions in the owning node's space
    #[serde(default)]
    pub vertices: Vec<[f32; 3]>,
}

impl From<&MeshDescription> for Mesh {
    fn from(desc: &MeshDescription) -> Self {
        Mesh::new(desc.name.clone(), desc.vertices.iter().copied().map(Vec3::from).collect())
    }
}

impl From<&Mesh> for MeshDescription {
    fn from(mesh: &Mesh) -> Self {
        Self {
            name: mesh.name.clone(),
            vertices: mesh.vertices.iter().map(|v| (*v).into()).collect(),
        }
    }
}

/// Collider as written in a scene file; mesh shapes embed their mesh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum ColliderDescription {
    /// Box collider
    Box {
        /// Center offset
        center: [f32; 3],
        /// Full size
        size: [f32; 3],
    },
    /// Capsule collider
    Capsule {
        /// Center offset
        center: [f32; 3],
        /// Long axis
        direction: Axis,
        /// Length along the axis
        height: f32,
        /// Cap radius
        radius: f32,
    },
    /// Sphere collider
    Sphere {
        /// Center offset
        center: [f32; 3],
        /// Radius
        radius: f32,
    },
    /// Convex mesh collider
    ConvexMesh {
        /// Backing mesh
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mesh: Option<MeshDescription>,
        /// Convex flag
        convex: bool,
    },
    /// Concave mesh collider
    ConcaveMesh {
        /// Backing mesh
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mesh: Option<MeshDescription>,
    },
}

impl SceneHierarchy {
    /// Build a hierarchy from a scene description
    pub fn from_description(desc: &SceneDescription) -> Result<Self, SceneError> {
        let mut scene = Self::new();
        for root in &desc.roots {
            let id = scene.add_root(root.name.clone(), root.transform.to_transform(&root.name)?);
            scene.fill_node(id, root)?;
        }
        Ok(scene)
    }

    /// Load a scene file (`.ron` or `.toml`) into a new hierarchy
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, SceneError> {
        Self::from_description(&SceneDescription::load_from_file(path)?)
    }

    /// Write the live hierarchy to a scene file (`.ron` or `.toml`)
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<(), SceneError> {
        self.to_description()?.save_to_file(path)?;
        Ok(())
    }

    fn fill_node(&mut self, id: NodeId, desc: &NodeDescription) -> Result<(), SceneError> {
        if let Some(mesh) = &desc.mesh {
            let mesh_id = self.add_mesh(Mesh::from(mesh));
            self.set_mesh(id, mesh_id)?;
        }

        for collider in &desc.colliders {
            let collider = self.collider_from_description(collider);
            self.attach_collider(id, collider)?;
        }

        for child in &desc.children {
            let transform = child.transform.to_transform(&child.name)?;
            let child_id = self.add_child(id, child.name.clone(), transform)?;
            self.fill_node(child_id, child)?;
        }
        Ok(())
    }

    fn collider_from_description(&mut self, desc: &ColliderDescription) -> Collider {
        let mut embed = |mesh: &Option<MeshDescription>| -> Option<MeshId> {
            mesh.as_ref().map(|mesh| self.add_mesh(Mesh::from(mesh)))
        };

        match desc {
            ColliderDescription::Box { center, size } => Collider::Box {
                center: Vec3::from(*center),
                size: Vec3::from(*size),
            },
            ColliderDescription::Capsule { center, direction, height, radius } => Collider::Capsule {
                center: Vec3::from(*center),
                direction: *direction,
                height: *height,
                radius: *radius,
            },
            ColliderDescription::Sphere { center, radius } => Collider::Sphere {
                center: Vec3::from(*center),
                radius: *radius,
            },
            ColliderDescription::ConvexMesh { mesh, convex } => Collider::ConvexMesh {
                mesh: embed(mesh),
                convex: *convex,
            },
            ColliderDescription::ConcaveMesh { mesh } => Collider::ConcaveMesh { mesh: embed(mesh) },
        }
    }

    /// Snapshot the live hierarchy as a scene description
    pub fn to_description(&self) -> Result<SceneDescription, SceneError> {
        let roots = self
            .roots()
            .iter()
            .map(|&root| self.describe_node(root))
            .collect::<Result<_, _>>()?;
        Ok(SceneDescription { roots })
    }

    fn describe_node(&self, id: NodeId) -> Result<NodeDescription, SceneError> {
        let node = self.node(id)?;
        let describe_mesh = |mesh: Option<MeshId>| mesh.and_then(|id| self.mesh(id)).map(MeshDescription::from);

        let colliders = node
            .colliders
            .iter()
            .map(|collider| match collider {
                Collider::Box { center, size } => ColliderDescription::Box {
                    center: (*center).into(),
                    size: (*size).into(),
                },
                Collider::Capsule { center, direction, height, radius } => ColliderDescription::Capsule {
                    center: (*center).into(),
                    direction: *direction,
                    height: *height,
                    radius: *radius,
                },
                Collider::Sphere { center, radius } => ColliderDescription::Sphere {
                    center: (*center).into(),
                    radius: *radius,
                },
                Collider::ConvexMesh { mesh, convex } => ColliderDescription::ConvexMesh {
                    mesh: describe_mesh(*mesh),
                    convex: *convex,
                },
                Collider::ConcaveMesh { mesh } => ColliderDescription::ConcaveMesh {
                    mesh: describe_mesh(*mesh),
                },
            })
            .collect();

        let children = node
            .children()
            .iter()
            .map(|&child| self.describe_node(child))
            .collect::<Result<_, _>>()?;

        Ok(NodeDescription {
            name: node.name.clone(),
            transform: TransformDescription::from(&node.transform),
            mesh: describe_mesh(node.mesh),
            colliders,
            children,
        })
    }
}
