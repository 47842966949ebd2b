//! Drive capacity model.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use filescope_core::traits::DiskSpace;
use filescope_core::types::format_size;

/// Capacity of the device holding a root path. Never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveInfo {
    /// The queried root.
    pub root_path: PathBuf,
    /// Total capacity in bytes.
    pub total_bytes: u64,
    /// Used bytes (`total - free on device`).
    pub used_bytes: u64,
    /// Bytes available to the caller.
    pub free_bytes: u64,
}

impl DriveInfo {
    /// Build from raw capacity figures.
    pub fn from_space(root_path: impl Into<PathBuf>, space: DiskSpace) -> Self {
        Self {
            root_path: root_path.into(),
            total_bytes: space.total_bytes,
            used_bytes: space.total_bytes.saturating_sub(space.free_bytes),
            free_bytes: space.available_bytes,
        }
    }

    /// One-line summary, e.g. `Total: 1.00 TB, Used: 512.00 GB, Free: 512.00 GB`.
    pub fn summary(&self) -> String {
        format!(
            "Total: {}, Used: {}, Free: {}",
            format_size(self.total_bytes),
            format_size(self.used_bytes),
            format_size(self.free_bytes)
        )
    }
}
