//! Arena handles for scene storage
//!
//! Nodes and meshes live in slot maps so that a handle stays safe to test
//! after the value behind it has been removed.

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Handle to a node stored in a [`SceneHierarchy`](crate::scene::SceneHierarchy)
    pub struct NodeId;

    /// Handle to a mesh stored in a [`SceneHierarchy`](crate::scene::SceneHierarchy)
    pub struct MeshId;
}

/// Node storage keyed by [`NodeId`]
pub type NodeMap<T> = SlotMap<NodeId, T>;

/// Mesh storage keyed by [`MeshId`]
pub type MeshMap<T> = SlotMap<MeshId, T>;
