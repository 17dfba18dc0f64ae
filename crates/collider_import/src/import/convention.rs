//! Collision naming conventions
//!
//! A node becomes a collider when its mesh name, or failing that its own
//! name, starts with one of the reserved tags followed by an underscore.
//! Matching ignores case.

use std::fmt;

use crate::foundation::collections::NodeId;
use crate::physics::ColliderKind;
use crate::scene::SceneHierarchy;

/// Reserved collision prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConventionTag {
    /// `ubx_` - box
    Ubx,
    /// `ucp_` - capsule
    Ucp,
    /// `usp_` - sphere
    Usp,
    /// `ucx_` - convex mesh
    Ucx,
    /// `umc_` - concave mesh
    Umc,
}

impl ConventionTag {
    /// Tags in the order they are tested; the first match wins
    pub const PRIORITY: [Self; 5] = [Self::Ubx, Self::Ucp, Self::Usp, Self::Ucx, Self::Umc];

    /// Three-letter tag without the delimiter
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Ubx => "ubx",
            Self::Ucp => "ucp",
            Self::Usp => "usp",
            Self::Ucx => "ucx",
            Self::Umc => "umc",
        }
    }

    /// Collider shape this tag produces
    pub fn collider_kind(self) -> ColliderKind {
        match self {
            Self::Ubx => ColliderKind::Box,
            Self::Ucp => ColliderKind::Capsule,
            Self::Usp => ColliderKind::Sphere,
            Self::Ucx => ColliderKind::ConvexMesh,
            Self::Umc => ColliderKind::ConcaveMesh,
        }
    }

    /// Case-insensitive `<tag>_` prefix test
    pub fn matches_name(self, name: &str) -> bool {
        let lowercase = name.to_lowercase();
        lowercase
            .strip_prefix(self.prefix())
            .is_some_and(|rest| rest.starts_with('_'))
    }
}

impl fmt::Display for ConventionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_", self.prefix())
    }
}

/// Whether `node` follows `tag`: mesh name first, then node name
pub fn follows_convention(scene: &SceneHierarchy, node: NodeId, tag: ConventionTag) -> bool {
    let mesh_match = scene
        .node_mesh(node)
        .is_some_and(|(_, mesh)| tag.matches_name(&mesh.name));

    mesh_match
        || scene
            .node(node)
            .is_ok_and(|node| tag.matches_name(&node.name))
}

/// Classify a node against every tag in priority order
pub fn classify(scene: &SceneHierarchy, node: NodeId) -> Option<ConventionTag> {
    ConventionTag::PRIORITY
        .into_iter()
        .find(|&tag| follows_convention(scene, node, tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{Transform, Vec3};
    use crate::scene::Mesh;

    fn scene_with_child(name: &str, mesh_name: Option<&str>) -> (SceneHierarchy, NodeId) {
        let mut scene = SceneHierarchy::new();
        let root = scene.add_root("Model", Transform::identity());
        let child = scene.add_child(root, name, Transform::identity()).unwrap();
        if let Some(mesh_name) = mesh_name {
            let mesh = scene.add_mesh(Mesh::new(mesh_name, vec![Vec3::zeros()]));
            scene.set_mesh(child, mesh).unwrap();
        }
        (scene, child)
    }

    #[test]
    fn test_node_name_without_mesh() {
        let (scene, node) = scene_with_child("UBX_Wheel", None);
        assert_eq!(classify(&scene, node), Some(ConventionTag::Ubx));
    }

    #[test]
    fn test_mesh_name_takes_precedence() {
        let (scene, node) = scene_with_child("Prop01", Some("ucx_hull"));
        assert_eq!(classify(&scene, node), Some(ConventionTag::Ucx));
    }

    #[test]
    fn test_falls_back_to_node_name_when_mesh_does_not_match() {
        let (scene, node) = scene_with_child("umc_Floor", Some("Floor_LOD0"));
        assert_eq!(classify(&scene, node), Some(ConventionTag::Umc));
    }

    #[test]
    fn test_priority_when_mesh_and_node_disagree() {
        // Box is tested first and matches on the node name even though the mesh says sphere
        let (scene, node) = scene_with_child("ubx_Thing", Some("usp_Thing"));
        assert_eq!(classify(&scene, node), Some(ConventionTag::Ubx));
    }

    #[test]
    fn test_delimiter_is_required() {
        assert!(!ConventionTag::Ubx.matches_name("ubxWheel"));
        assert!(!ConventionTag::Ubx.matches_name("ubx"));
        assert!(!ConventionTag::Ubx.matches_name("my_ubx_Wheel"));
        assert!(ConventionTag::Ubx.matches_name("Ubx_"));
        assert!(ConventionTag::Ucp.matches_name("UCP_Pole.001"));
    }

    #[test]
    fn test_no_match() {
        let (scene, node) = scene_with_child("Body", Some("Body_Mesh"));
        assert_eq!(classify(&scene, node), None);
    }

    #[test]
    fn test_tags_map_one_to_one_onto_kinds() {
        let kinds: Vec<_> = ConventionTag::PRIORITY.iter().map(|t| t.collider_kind()).collect();
        assert_eq!(kinds, ColliderKind::ALL.to_vec());
        assert_eq!(ConventionTag::Usp.to_string(), "usp_");
    }
}
