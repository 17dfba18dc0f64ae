//! Import errors

use thiserror::Error;

use crate::scene::SceneError;
use super::convention::ConventionTag;

/// Errors that abort the import of one model
///
/// Expected irregularities (no naming match, a mesh missing before a
/// rebase, a rotation mismatch, a node already gone at sweep time) are
/// logged and never surface here.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Hierarchy lookup or transform failure
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// A bounds-derived shape was requested for a node without a mesh
    #[error("Node '{node}' uses the {tag} convention but has no mesh to size it from")]
    MissingMesh {
        /// Offending node name
        node: String,
        /// Convention the node matched
        tag: ConventionTag,
    },
}
