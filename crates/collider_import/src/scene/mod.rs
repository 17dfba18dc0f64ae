//! Scene hierarchy storage
//!
//! Holds an imported model as an arena of nodes and meshes. Nodes refer to
//! each other and to meshes by handle, so a pass can remove nodes without
//! invalidating anything it still holds.
//!
//! ## Organization
//!
//! - [`hierarchy`] - The node/mesh arena and its transform queries
//! - [`mesh`] - Vertex buffers with derived local bounds
//! - [`bounds`] - Center/extents bounding boxes
//! - [`description`] - Serializable scene files (RON / TOML)

pub mod bounds;
pub mod description;
pub mod hierarchy;
pub mod mesh;

pub use bounds::Bounds;
pub use description::{
    ColliderDescription, MeshDescription, NodeDescription, SceneDescription, TransformDescription,
};
pub use hierarchy::{Node, SceneError, SceneHierarchy};
pub use mesh::Mesh;
