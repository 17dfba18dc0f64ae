//! Children-before-parent traversal of an imported model

use crate::foundation::collections::NodeId;
use crate::scene::SceneHierarchy;

/// Visit every node below `root` in post-order, skipping `root` itself
///
/// The visitor may add colliders and meshes but must not remove nodes;
/// removal is deferred until the walk completes. A visitor error stops the
/// walk and is returned.
pub fn walk_post_order<E, F>(scene: &mut SceneHierarchy, root: NodeId, mut visit: F) -> Result<(), E>
where
    F: FnMut(&mut SceneHierarchy, NodeId) -> Result<(), E>,
{
    let children = scene.children(root).to_vec();
    for child in children {
        visit_subtree(scene, child, &mut visit)?;
    }
    Ok(())
}

fn visit_subtree<E, F>(scene: &mut SceneHierarchy, node: NodeId, visit: &mut F) -> Result<(), E>
where
    F: FnMut(&mut SceneHierarchy, NodeId) -> Result<(), E>,
{
    let children = scene.children(node).to_vec();
    for child in children {
        visit_subtree(scene, child, visit)?;
    }
    visit(scene, node)
}
