//! The collider import pass
//!
//! One call per imported model: walk the hierarchy children-first, turn
//! every node that follows a collision naming convention into a collider on
//! its parent, then remove the consumed nodes in one sweep.

use crate::config::ImportPreferences;
use crate::foundation::collections::{MeshId, NodeId};
use crate::physics::{Collider, ColliderKind};
use crate::scene::{SceneError, SceneHierarchy};
use super::convention::{classify, ConventionTag};
use super::copy::copy_collider;
use super::error::ImportError;
use super::rebase::rebase_mesh;
use super::shapes::{box_from_bounds, capsule_from_bounds, rotated_bounds};
use super::walker::walk_post_order;
use super::worklist::Worklist;

/// One collider produced by the pass
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedCollider {
    /// Node the collider was attached to
    pub parent: NodeId,
    /// Name of the consumed source node
    pub source: String,
    /// Convention the source node matched
    pub tag: ConventionTag,
}

/// Summary of one import pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportReport {
    /// Colliders attached to surviving nodes, in processing order
    pub generated: Vec<GeneratedCollider>,
    /// Consumed nodes removed by the final sweep
    pub nodes_removed: usize,
    /// Consumed nodes already gone at sweep time
    pub nodes_skipped: usize,
    /// Meshes re-expressed in parent space for mesh colliders
    pub meshes_rebased: usize,
    /// Meshes discarded once their owners were removed
    pub meshes_discarded: usize,
    /// Collider copies flagged by the rotation guard
    pub rotation_warnings: usize,
}

impl ImportReport {
    /// Number of generated colliders of one kind
    pub fn count(&self, kind: ColliderKind) -> usize {
        self.generated
            .iter()
            .filter(|generated| generated.tag.collider_kind() == kind)
            .count()
    }

    /// Whether the pass changed nothing
    pub fn is_empty(&self) -> bool {
        self.generated.is_empty() && self.nodes_removed == 0
    }
}

/// Runs the collider import pass with injected preferences
#[derive(Debug, Clone, Default)]
pub struct ColliderImporter {
    preferences: ImportPreferences,
}

impl ColliderImporter {
    /// Create an importer using the given preferences
    pub fn new(preferences: ImportPreferences) -> Self {
        Self { preferences }
    }

    /// Process one imported model rooted at `root`
    ///
    /// With collider generation disabled the hierarchy is left exactly as
    /// it was. An error means the model's import failed part way; colliders
    /// generated before the failure stay attached and nothing is swept.
    pub fn process_model(&self, scene: &mut SceneHierarchy, root: NodeId) -> Result<ImportReport, ImportError> {
        if !self.preferences.generate_colliders {
            log::debug!("Collider generation disabled, leaving model untouched");
            return Ok(ImportReport::default());
        }
        if !scene.contains(root) {
            return Err(SceneError::NodeNotFound(root).into());
        }

        let mut report = ImportReport::default();
        let mut worklist = Worklist::new();

        walk_post_order(scene, root, |scene, node| {
            let Some(tag) = classify(scene, node) else {
                return Ok(());
            };
            self.generate_collider(scene, root, node, tag, &mut report)?;
            worklist.push(node);
            Ok::<(), ImportError>(())
        })?;

        if worklist.is_empty() {
            log::debug!("No collision nodes under '{}'", scene.node(root)?.name);
            return Ok(report);
        }
        log::debug!("Removing {} consumed node(s)", worklist.len());

        let sweep = worklist.sweep(scene);
        report.nodes_removed = sweep.removed;
        report.nodes_skipped = sweep.skipped;
        report.meshes_discarded = sweep.meshes_discarded;

        log::info!(
            "Generated {} collider(s) for '{}', removed {} node(s)",
            report.generated.len(),
            scene.node(root)?.name,
            report.nodes_removed
        );
        Ok(report)
    }

    /// Process every top-level model in the hierarchy
    pub fn process_scene(&self, scene: &mut SceneHierarchy) -> Result<Vec<ImportReport>, ImportError> {
        let roots = scene.roots().to_vec();
        roots
            .into_iter()
            .map(|root| self.process_model(scene, root))
            .collect()
    }

    fn generate_collider(
        &self,
        scene: &mut SceneHierarchy,
        root: NodeId,
        node: NodeId,
        tag: ConventionTag,
        report: &mut ImportReport,
    ) -> Result<(), ImportError> {
        let source = scene.node(node)?.name.clone();
        let parent = scene
            .parent(node)
            .ok_or_else(|| SceneError::MissingParent(source.clone()))?;
        log::debug!("'{}' matched {}", source, tag);

        let collider = match tag {
            ConventionTag::Ubx => box_from_bounds(&rotated_bounds(scene, node, tag)?),
            ConventionTag::Ucp => capsule_from_bounds(&rotated_bounds(scene, node, tag)?),
            ConventionTag::Usp => {
                let mesh = scene.node(node)?.mesh;
                self.copy_to_parent(scene, root, node, ColliderKind::Sphere, mesh, report)?
            }
            ConventionTag::Ucx => {
                let mesh = self.rebase(scene, node, report)?;
                match self.copy_to_parent(scene, root, node, ColliderKind::ConvexMesh, mesh, report)? {
                    Collider::ConvexMesh { mesh, .. } => Collider::ConvexMesh { mesh, convex: true },
                    other => other,
                }
            }
            ConventionTag::Umc => {
                let mesh = self.rebase(scene, node, report)?;
                self.copy_to_parent(scene, root, node, ColliderKind::ConcaveMesh, mesh, report)?
            }
        };

        scene.attach_collider(parent, collider)?;
        report.generated.push(GeneratedCollider { parent, source, tag });
        Ok(())
    }

    fn rebase(
        &self,
        scene: &mut SceneHierarchy,
        node: NodeId,
        report: &mut ImportReport,
    ) -> Result<Option<MeshId>, ImportError> {
        let rebased = rebase_mesh(scene, node)?;
        if rebased.is_some() {
            report.meshes_rebased += 1;
        }
        Ok(rebased)
    }

    fn copy_to_parent(
        &self,
        scene: &mut SceneHierarchy,
        root: NodeId,
        node: NodeId,
        kind: ColliderKind,
        mesh: Option<MeshId>,
        report: &mut ImportReport,
    ) -> Result<Collider, ImportError> {
        let copied = copy_collider(
            scene,
            root,
            node,
            kind,
            mesh,
            self.preferences.rotation_warning_threshold,
        )?;
        if copied.rotation_mismatch {
            report.rotation_warnings += 1;
        }
        Ok(copied.collider)
    }
}
