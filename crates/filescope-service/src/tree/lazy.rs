//! Directory tree that lists a directory only when its node is expanded.
//!
//! Nodes live in an arena keyed by [`NodeId`]; each node keeps a back
//! reference to its parent, used only for path resolution. A node starts
//! with `children_loaded = false`, which tells a client it may be expanded
//! without paying for a listing up front.

use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use filescope_core::config::browser::BrowserConfig;
use filescope_core::error::AppError;
use filescope_core::result::AppResult;
use filescope_core::traits::FileSystem;
use filescope_core::types::NodeId;
use filescope_entity::node::TreeNode;
use filescope_entity::outcome::Skipped;

use super::resolver::PathResolver;

/// Result of expanding one node.
#[derive(Debug, Clone, Serialize)]
pub struct ExpandReport {
    /// The expanded node.
    pub node: NodeId,
    /// Its resolved path.
    pub path: PathBuf,
    /// True when the node had already been expanded and nothing changed.
    pub already_loaded: bool,
    /// Newly created child nodes, in order.
    pub added: Vec<NodeId>,
    /// Listing failures that were swallowed.
    pub skipped: Vec<Skipped>,
}

/// In-memory mirror of a directory hierarchy, materialized on demand.
#[derive(Debug)]
pub struct LazyTree {
    /// Filesystem provider.
    fs: Arc<dyn FileSystem>,
    /// Browsing settings.
    config: BrowserConfig,
    /// The currently selected root path.
    root_path: PathBuf,
    /// The root node, once a root has been selected.
    root: Option<NodeId>,
    /// Node arena.
    nodes: HashMap<NodeId, TreeNode>,
    /// Ordered child ids per expanded node.
    children: HashMap<NodeId, Vec<NodeId>>,
}

impl LazyTree {
    /// Creates an empty tree with no root selected.
    pub fn new(fs: Arc<dyn FileSystem>, config: BrowserConfig) -> Self {
        Self {
            fs,
            config,
            root_path: PathBuf::new(),
            root: None,
            nodes: HashMap::new(),
            children: HashMap::new(),
        }
    }

    /// Discards every node and starts over with an unexpanded root.
    pub fn set_root(&mut self, root_path: impl Into<PathBuf>) -> NodeId {
        let root_path = root_path.into();
        self.nodes.clear();
        self.children.clear();

        let root = TreeNode::root(root_path.to_string_lossy());
        let id = root.id;
        self.nodes.insert(id, root);
        self.root = Some(id);
        debug!(root = %root_path.display(), node = %id, "Selected tree root");
        self.root_path = root_path;
        id
    }

    /// The root node id, if a root has been selected.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// The currently selected root path.
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Look up a node.
    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(&id)
    }

    /// Number of materialized nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no root has been selected.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Path resolver over the current nodes.
    pub fn resolver(&self) -> PathResolver<'_> {
        PathResolver::new(&self.nodes, &self.root_path)
    }

    /// Resolve a node to its absolute path.
    pub fn resolve(&self, id: NodeId) -> AppResult<PathBuf> {
        self.resolver().resolve(id)
    }

    /// Materialized children of `id`, in order. Empty until expanded.
    pub fn children(&self, id: NodeId) -> AppResult<Vec<&TreeNode>> {
        if !self.nodes.contains_key(&id) {
            return Err(AppError::broken_reference(format!(
                "Node {id} is not in the tree"
            )));
        }
        Ok(self
            .children
            .get(&id)
            .map(|ids| ids.iter().filter_map(|c| self.nodes.get(c)).collect())
            .unwrap_or_default())
    }

    /// List the directory behind `id` and add one child per subdirectory.
    ///
    /// Expanding an already expanded node changes nothing. A directory that
    /// cannot be listed is still marked expanded, with no children and the
    /// failure recorded in [`ExpandReport::skipped`].
    pub fn expand(&mut self, id: NodeId) -> AppResult<ExpandReport> {
        let node = self
            .nodes
            .get(&id)
            .ok_or_else(|| AppError::broken_reference(format!("Node {id} is not in the tree")))?;
        let already_loaded = node.children_loaded;
        let path = self.resolve(id)?;

        let mut report = ExpandReport {
            node: id,
            path,
            already_loaded,
            added: Vec::new(),
            skipped: Vec::new(),
        };
        if already_loaded {
            return Ok(report);
        }

        let mut labels = Vec::new();
        match self.fs.read_dir(&report.path) {
            Ok(entries) => {
                for entry in entries {
                    match entry {
                        Ok(entry) if entry.is_dir => labels.push(entry.name),
                        Ok(_) => {}
                        Err(e) => {
                            debug!(path = %report.path.display(), error = %e, "Skipping unreadable entry");
                            report.skipped.push(Skipped::new(&report.path, &e));
                        }
                    }
                }
            }
            Err(e) => {
                warn!(path = %report.path.display(), error = %e, "Failed to list directory, leaving it empty");
                report.skipped.push(Skipped::new(&report.path, &e));
            }
        }

        if self.config.sort_children {
            labels.sort();
        }

        for label in labels {
            let child = TreeNode::child(id, label);
            report.added.push(child.id);
            self.nodes.insert(child.id, child);
        }
        self.children.insert(id, report.added.clone());
        if let Some(node) = self.nodes.get_mut(&id) {
            node.children_loaded = true;
        }

        debug!(
            path = %report.path.display(),
            children = report.added.len(),
            skipped = report.skipped.len(),
            "Expanded node"
        );
        Ok(report)
    }

    /// Eagerly expand `depth` levels starting at `id`, breadth first.
    ///
    /// `depth` is capped by `max_prefetch_depth`; a depth of 1 expands only
    /// `id` itself. Returns how many nodes were newly expanded.
    pub fn expand_to_depth(&mut self, id: NodeId, depth: usize) -> AppResult<usize> {
        let levels = depth.min(self.config.max_prefetch_depth);
        let mut expanded = 0;
        let mut frontier = VecDeque::from([id]);

        for _ in 0..levels {
            let mut next = VecDeque::new();
            while let Some(current) = frontier.pop_front() {
                let report = self.expand(current)?;
                if !report.already_loaded {
                    expanded += 1;
                }
                if let Some(ids) = self.children.get(&current) {
                    next.extend(ids.iter().copied());
                }
            }
            if next.is_empty() {
                break;
            }
            frontier = next;
        }

        Ok(expanded)
    }
}
