//! Collider shapes attached to scene nodes
//!
//! Every shape is stored in the local space of the node that owns it.
//! Moving a shape to another node goes through [`Collider::reframed`].

use serde::{Deserialize, Serialize};

use crate::foundation::collections::MeshId;
use crate::foundation::math::{transform_point, Mat4, Vec3};

/// Local axis a capsule extends along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Local X (index 0)
    X,
    /// Local Y (index 1)
    Y,
    /// Local Z (index 2)
    Z,
}

impl Axis {
    /// Component index of this axis
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

/// Shape category without parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ColliderKind {
    /// Oriented-with-node box
    Box,
    /// Capsule along one local axis
    Capsule,
    /// Sphere
    Sphere,
    /// Convex hull of a mesh
    ConvexMesh,
    /// Triangle mesh used as-is
    ConcaveMesh,
}

impl ColliderKind {
    /// All kinds in declaration order
    pub const ALL: [Self; 5] = [
        Self::Box,
        Self::Capsule,
        Self::Sphere,
        Self::ConvexMesh,
        Self::ConcaveMesh,
    ];
}

/// A physics shape owned by a node, in that node's local space
#[derive(Debug, Clone, PartialEq)]
pub enum Collider {
    /// Box with a local center offset and full size
    Box {
        /// Center offset in node space
        center: Vec3,
        /// Full size along each local axis
        size: Vec3,
    },
    /// Capsule along one local axis
    Capsule {
        /// Center offset in node space
        center: Vec3,
        /// Long axis
        direction: Axis,
        /// Total length along `direction`
        height: f32,
        /// Cap radius
        radius: f32,
    },
    /// Sphere
    Sphere {
        /// Center offset in node space
        center: Vec3,
        /// Radius
        radius: f32,
    },
    /// Mesh collider flagged for convex hull generation
    ConvexMesh {
        /// Backing mesh (referenced, not owned)
        mesh: Option<MeshId>,
        /// Convex hull generation flag
        convex: bool,
    },
    /// Mesh collider using the triangles directly
    ConcaveMesh {
        /// Backing mesh (referenced, not owned)
        mesh: Option<MeshId>,
    },
}

impl Collider {
    /// Shape category
    pub fn kind(&self) -> ColliderKind {
        match self {
            Self::Box { .. } => ColliderKind::Box,
            Self::Capsule { .. } => ColliderKind::Capsule,
            Self::Sphere { .. } => ColliderKind::Sphere,
            Self::ConvexMesh { .. } => ColliderKind::ConvexMesh,
            Self::ConcaveMesh { .. } => ColliderKind::ConcaveMesh,
        }
    }

    /// Center offset for shapes that carry one
    pub fn center(&self) -> Option<Vec3> {
        match self {
            Self::Box { center, .. } | Self::Capsule { center, .. } | Self::Sphere { center, .. } => {
                Some(*center)
            }
            Self::ConvexMesh { .. } | Self::ConcaveMesh { .. } => None,
        }
    }

    /// Copy with the center offset replaced; shapes without one are
    /// returned unchanged
    #[must_use]
    pub fn with_center(mut self, new_center: Vec3) -> Self {
        match &mut self {
            Self::Box { center, .. } | Self::Capsule { center, .. } | Self::Sphere { center, .. } => {
                *center = new_center;
            }
            Self::ConvexMesh { .. } | Self::ConcaveMesh { .. } => {}
        }
        self
    }

    /// Backing mesh for mesh shapes
    pub fn mesh(&self) -> Option<MeshId> {
        match self {
            Self::ConvexMesh { mesh, .. } | Self::ConcaveMesh { mesh } => *mesh,
            _ => None,
        }
    }

    /// Field-for-field copy re-expressed for another node
    ///
    /// `from` maps the current owner's local space to world space and
    /// `to_inverse` maps world space into the new owner's local space. Only
    /// the center offset is converted; sizes, radii and axes are copied as
    /// they are, so any rotation or scale between the two nodes is not
    /// accounted for.
    #[must_use]
    pub fn reframed(&self, from: &Mat4, to_inverse: &Mat4) -> Self {
        match self.center() {
            Some(center) => {
                let world_center = transform_point(from, center);
                self.clone().with_center(transform_point(to_inverse, world_center))
            }
            None => self.clone(),
        }
    }
}
