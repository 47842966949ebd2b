//! Directory tree browsing configuration.

use serde::{Deserialize, Serialize};

/// Settings for the lazily materialized directory tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Upper bound on eager pre-expansion, in levels below the expanded node.
    ///
    /// Only applies to `expand_to_depth`; expanding one node at a time is
    /// never capped.
    #[serde(default = "default_max_prefetch_depth")]
    pub max_prefetch_depth: usize,
    /// Sort materialized children by label.
    #[serde(default = "default_true")]
    pub sort_children: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            max_prefetch_depth: default_max_prefetch_depth(),
            sort_children: default_true(),
        }
    }
}

fn default_max_prefetch_depth() -> usize {
    5
}

fn default_true() -> bool {
    true
}
