//! Mesh vertex buffers

use crate::foundation::math::{transform_point, Mat4, Vec3};
use super::bounds::Bounds;

/// A named vertex buffer in its owning node's local space
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Mesh name as authored in the source model
    pub name: String,
    /// Vertex positions in the owning node's local space
    pub vertices: Vec<Vec3>,
}

impl Mesh {
    /// Create a mesh from a name and vertex positions
    pub fn new(name: impl Into<String>, vertices: Vec<Vec3>) -> Self {
        Self {
            name: name.into(),
            vertices,
        }
    }

    /// Axis-aligned bounds of the vertices in local space
    pub fn bounds(&self) -> Bounds {
        Bounds::from_points(&self.vertices)
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Copy of this mesh with every vertex mapped through `matrix`
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        Self {
            name: self.name.clone(),
            vertices: self.vertices.iter().map(|v| transform_point(matrix, *v)).collect(),
        }
    }
}
