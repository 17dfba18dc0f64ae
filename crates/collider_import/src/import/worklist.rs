//! Deferred removal of consumed nodes

use crate::foundation::collections::NodeId;
use crate::scene::SceneHierarchy;

/// Nodes queued for removal, in the order they were consumed
#[derive(Debug, Clone, Default)]
pub struct Worklist {
    nodes: Vec<NodeId>,
}

/// What a sweep did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepSummary {
    /// Queued nodes removed by the sweep (subtree members not counted)
    pub removed: usize,
    /// Queued nodes already gone when their turn came
    pub skipped: usize,
    /// Meshes discarded because nothing referenced them anymore
    pub meshes_discarded: usize,
}

impl Worklist {
    /// Create an empty worklist
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a node; returns `false` if it was already queued
    pub fn push(&mut self, node: NodeId) -> bool {
        if self.nodes.contains(&node) {
            return false;
        }
        self.nodes.push(node);
        true
    }

    /// Number of queued nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether nothing is queued
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remove every queued node, most recently queued first
    ///
    /// Nodes that no longer resolve (removed with an ancestor earlier in the
    /// sweep) are skipped. Meshes left without any owner are discarded at
    /// the end.
    pub fn sweep(self, scene: &mut SceneHierarchy) -> SweepSummary {
        let mut summary = SweepSummary::default();

        for &node in self.nodes.iter().rev() {
            if scene.destroy_node(node) > 0 {
                summary.removed += 1;
            } else {
                log::debug!("Skipping removal of {:?}: already gone", node);
                summary.skipped += 1;
            }
        }

        summary.meshes_discarded = scene.prune_orphan_meshes();
        summary
    }
}
