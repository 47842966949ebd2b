//! Drive enumeration.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use filescope_core::result::AppResult;
use filescope_core::traits::FileSystem;
use filescope_entity::drive::DriveInfo;

/// Lists browsable roots and reports their capacity.
#[derive(Debug, Clone)]
pub struct DriveService {
    /// Filesystem provider.
    fs: Arc<dyn FileSystem>,
}

impl DriveService {
    /// Creates a new drive service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Candidate roots: every mounted drive letter on Windows, `/` elsewhere.
    pub fn list_roots(&self) -> Vec<PathBuf> {
        if cfg!(windows) {
            (b'A'..=b'Z')
                .map(|letter| PathBuf::from(format!("{}:\\", letter as char)))
                .filter(|root| self.fs.exists(root))
                .collect()
        } else {
            vec![PathBuf::from("/")]
        }
    }

    /// Query the capacity of the device holding `root`. Never cached.
    pub fn drive_info(&self, root: &Path) -> AppResult<DriveInfo> {
        let space = self.fs.capacity(root)?;
        let info = DriveInfo::from_space(root, space);
        debug!(root = %root.display(), summary = %info.summary(), "Queried drive");
        Ok(info)
    }
}
