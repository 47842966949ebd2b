//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use filescope_core::config::AppConfig;
use filescope_core::traits::FileSystem;
use filescope_service::{DriveService, FileCatalog, FileOps, LazyTree, MetadataInspector, SearchEngine};
use filescope_storage::LocalFileSystem;

/// A scratch directory tree plus every service wired to the local provider.
pub struct TestApp {
    /// Keeps the directory alive for the duration of the test.
    pub dir: TempDir,
    /// Application config
    pub config: AppConfig,
    /// Shared provider
    pub fs: Arc<dyn FileSystem>,
}

impl TestApp {
    /// Create an empty scratch tree.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
            config: AppConfig::default(),
            fs: Arc::new(LocalFileSystem::new()),
        }
    }

    /// Root of the scratch tree.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of `rel` inside the tree.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Create a directory (and its parents).
    pub fn mkdir(&self, rel: &str) -> &Self {
        fs::create_dir_all(self.path(rel)).expect("Failed to create dir");
        self
    }

    /// Create a file of `size` zero bytes, creating parents as needed.
    pub fn touch(&self, rel: &str, size: usize) -> &Self {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent");
        }
        fs::write(&path, vec![0u8; size]).expect("Failed to write file");
        self
    }

    pub fn tree(&self) -> LazyTree {
        LazyTree::new(Arc::clone(&self.fs), self.config.browser.clone())
    }

    pub fn catalog(&self) -> FileCatalog {
        FileCatalog::new(Arc::clone(&self.fs))
    }

    pub fn inspector(&self) -> MetadataInspector {
        MetadataInspector::new(Arc::clone(&self.fs))
    }

    pub fn search(&self) -> SearchEngine {
        SearchEngine::new(Arc::clone(&self.fs), self.config.search.clone())
    }

    pub fn ops(&self) -> FileOps {
        FileOps::new(Arc::clone(&self.fs))
    }

    pub fn drives(&self) -> DriveService {
        DriveService::new(Arc::clone(&self.fs))
    }
}
