//! Node/mesh arena for one imported model

use std::collections::HashSet;

use thiserror::Error;

use crate::config::ConfigError;
use crate::foundation::collections::{MeshId, MeshMap, NodeId, NodeMap};
use crate::foundation::math::{Mat4, Quat, Transform};
use crate::physics::Collider;
use super::mesh::Mesh;

/// Scene errors
#[derive(Error, Debug)]
pub enum SceneError {
    /// Handle does not refer to a live node
    #[error("Node {0:?} is not in the hierarchy")]
    NodeNotFound(NodeId),

    /// A node that needs a parent has none
    #[error("Node '{0}' has no parent")]
    MissingParent(String),

    /// A world matrix could not be inverted (zero scale somewhere up the chain)
    #[error("Transform of node '{0}' is not invertible")]
    DegenerateTransform(String),

    /// A rotation read from a scene file has no direction (zero length or non-finite)
    #[error("Rotation of node '{0}' is not a valid quaternion")]
    InvalidRotation(String),

    /// Scene file could not be read or written
    #[error("Scene file error: {0}")]
    File(#[from] ConfigError),
}

/// A point in the scene hierarchy
#[derive(Debug, Clone)]
pub struct Node {
    /// Node name as authored in the source model
    pub name: String,
    /// Transform relative to the parent
    pub transform: Transform,
    /// Associated mesh, if any
    pub mesh: Option<MeshId>,
    /// Colliders owned by this node, in its local space
    pub colliders: Vec<Collider>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(name: impl Into<String>, transform: Transform, parent: Option<NodeId>) -> Self {
        Self {
            name: name.into(),
            transform,
            mesh: None,
            colliders: Vec::new(),
            parent,
            children: Vec::new(),
        }
    }

    /// Parent node, `None` for a root
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child nodes in authoring order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Arena holding the nodes and meshes of imported models
///
/// Handles stay valid to test after removal: a destroyed node simply stops
/// resolving, which is what the deferred sweep relies on.
#[derive(Debug, Default)]
pub struct SceneHierarchy {
    nodes: NodeMap<Node>,
    meshes: MeshMap<Mesh>,
    roots: Vec<NodeId>,
}

impl SceneHierarchy {
    /// Create an empty hierarchy
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level node (one per imported model)
    pub fn add_root(&mut self, name: impl Into<String>, transform: Transform) -> NodeId {
        let id = self.nodes.insert(Node::new(name, transform, None));
        self.roots.push(id);
        id
    }

    /// Add a node under `parent`
    pub fn add_child(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        transform: Transform,
    ) -> Result<NodeId, SceneError> {
        if !self.nodes.contains_key(parent) {
            return Err(SceneError::NodeNotFound(parent));
        }
        let id = self.nodes.insert(Node::new(name, transform, Some(parent)));
        self.nodes[parent].children.push(id);
        Ok(id)
    }

    /// Store a mesh and return its handle
    pub fn add_mesh(&mut self, mesh: Mesh) -> MeshId {
        self.meshes.insert(mesh)
    }

    /// Associate a mesh with a node
    pub fn set_mesh(&mut self, node: NodeId, mesh: MeshId) -> Result<(), SceneError> {
        self.node_mut(node)?.mesh = Some(mesh);
        Ok(())
    }

    /// Node by handle
    pub fn node(&self, id: NodeId) -> Result<&Node, SceneError> {
        self.nodes.get(id).ok_or(SceneError::NodeNotFound(id))
    }

    /// Mutable node by handle
    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, SceneError> {
        self.nodes.get_mut(id).ok_or(SceneError::NodeNotFound(id))
    }

    /// Whether the handle still refers to a live node
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Mesh by handle
    pub fn mesh(&self, id: MeshId) -> Option<&Mesh> {
        self.meshes.get(id)
    }

    /// Mesh associated with a node, with its handle
    pub fn node_mesh(&self, id: NodeId) -> Option<(MeshId, &Mesh)> {
        let mesh_id = self.nodes.get(id)?.mesh?;
        self.meshes.get(mesh_id).map(|mesh| (mesh_id, mesh))
    }

    /// Parent of a node; `None` for roots and removed nodes
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|node| node.parent)
    }

    /// Children of a node; empty for removed nodes
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id).map(|node| node.children.as_slice()).unwrap_or_default()
    }

    /// Top-level nodes
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Number of live nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of stored meshes
    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// First live node with the given name
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|(_, node)| node.name == name)
            .map(|(id, _)| id)
    }

    /// Node-local to world matrix, composed up the parent chain
    pub fn world_matrix(&self, id: NodeId) -> Result<Mat4, SceneError> {
        let mut matrix = Mat4::identity();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.node(node_id)?;
            matrix = node.transform.to_matrix() * matrix;
            current = node.parent;
        }
        Ok(matrix)
    }

    /// World to node-local matrix
    pub fn inverse_world_matrix(&self, id: NodeId) -> Result<Mat4, SceneError> {
        let name = &self.node(id)?.name;
        self.world_matrix(id)?
            .try_inverse()
            .ok_or_else(|| SceneError::DegenerateTransform(name.clone()))
    }

    /// World rotation of a node
    pub fn world_rotation(&self, id: NodeId) -> Result<Quat, SceneError> {
        let mut rotation = Quat::identity();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.node(node_id)?;
            rotation = node.transform.rotation * rotation;
            current = node.parent;
        }
        Ok(rotation)
    }

    /// Attach a collider to a node, returning its index on that node
    pub fn attach_collider(&mut self, id: NodeId, collider: Collider) -> Result<usize, SceneError> {
        let colliders = &mut self.node_mut(id)?.colliders;
        colliders.push(collider);
        Ok(colliders.len() - 1)
    }

    /// Remove a node and its whole subtree
    ///
    /// Returns the number of nodes removed; zero when the handle no longer
    /// resolves. Meshes are left in place, see [`Self::prune_orphan_meshes`].
    pub fn destroy_node(&mut self, id: NodeId) -> usize {
        let Some(parent) = self.nodes.get(id).map(Node::parent) else {
            return 0;
        };

        match parent {
            Some(parent) => {
                if let Some(parent) = self.nodes.get_mut(parent) {
                    parent.children.retain(|&child| child != id);
                }
            }
            None => self.roots.retain(|&root| root != id),
        }

        let mut removed = 0;
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes.remove(next) {
                stack.extend(node.children);
                removed += 1;
            }
        }
        removed
    }

    /// Discard meshes no live node or collider refers to
    pub fn prune_orphan_meshes(&mut self) -> usize {
        let referenced: HashSet<MeshId> = self
            .nodes
            .values()
            .flat_map(|node| node.mesh.into_iter().chain(node.colliders.iter().filter_map(Collider::mesh)))
            .collect();

        let before = self.meshes.len();
        self.meshes.retain(|id, _| referenced.contains(&id));
        before - self.meshes.len()
    }
}
