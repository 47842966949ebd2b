//! Tree node model.

use serde::{Deserialize, Serialize};

use filescope_core::types::NodeId;

/// A directory in the lazily materialized tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Node identifier.
    pub id: NodeId,
    /// Directory name, or the full root path for the root node.
    pub label: String,
    /// Parent node; `None` for the root.
    pub parent_id: Option<NodeId>,
    /// Whether this node's children have been listed.
    pub children_loaded: bool,
}

impl TreeNode {
    /// Create the root node for `root_path`.
    pub fn root(root_path: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(),
            label: root_path.into(),
            parent_id: None,
            children_loaded: false,
        }
    }

    /// Create an unexpanded child of `parent`.
    pub fn child(parent: NodeId, label: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(),
            label: label.into(),
            parent_id: Some(parent),
            children_loaded: false,
        }
    }

    /// Whether this is a root node.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
