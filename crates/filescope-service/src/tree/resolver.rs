//! Reconstruct absolute paths from tree node positions.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use filescope_core::error::AppError;
use filescope_core::result::AppResult;
use filescope_core::types::NodeId;
use filescope_entity::node::TreeNode;

/// Walks parent links from a node up to the root and joins the labels.
///
/// Borrowed from a [`LazyTree`](super::LazyTree) via
/// [`LazyTree::resolver`](super::LazyTree::resolver); it never mutates nodes.
#[derive(Debug, Clone, Copy)]
pub struct PathResolver<'a> {
    nodes: &'a HashMap<NodeId, TreeNode>,
    root_path: &'a Path,
}

impl<'a> PathResolver<'a> {
    pub(crate) fn new(nodes: &'a HashMap<NodeId, TreeNode>, root_path: &'a Path) -> Self {
        Self { nodes, root_path }
    }

    /// Resolve `id` to an absolute path under the selected root.
    ///
    /// Fails with `BrokenReference` when the node or one of its ancestors is
    /// not in the tree, typically a handle kept across a root change.
    pub fn resolve(&self, id: NodeId) -> AppResult<PathBuf> {
        let mut current = self
            .nodes
            .get(&id)
            .ok_or_else(|| AppError::broken_reference(format!("Node {id} is not in the tree")))?;

        let mut labels = Vec::new();
        while let Some(parent_id) = current.parent_id {
            labels.push(current.label.as_str());
            current = self.nodes.get(&parent_id).ok_or_else(|| {
                AppError::broken_reference(format!(
                    "Ancestor {parent_id} of node {id} is not in the tree"
                ))
            })?;
        }

        let mut path = self.root_path.to_path_buf();
        path.extend(labels.iter().rev());
        Ok(path)
    }
}
