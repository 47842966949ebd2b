//! Build [`FileEntry`] records from raw stat data.

use std::path::Path;
use std::sync::Arc;

use filescope_core::result::AppResult;
use filescope_core::traits::FileSystem;
use filescope_entity::file::{FileEntry, FileKindSet};

/// Reads size, timestamps and kind of a single path.
#[derive(Debug, Clone)]
pub struct MetadataInspector {
    /// Filesystem provider.
    fs: Arc<dyn FileSystem>,
}

impl MetadataInspector {
    /// Creates a new metadata inspector.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Inspect `path`.
    ///
    /// A file removed since it was listed yields `NotFound`; that window is
    /// expected and callers just drop the entry.
    pub fn inspect(&self, path: &Path) -> AppResult<FileEntry> {
        let stat = self.fs.stat(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(FileEntry {
            name,
            size_bytes: stat.size_bytes,
            created_at: stat.created_at,
            modified_at: stat.modified_at,
            kind: FileKindSet::from_mode(stat.mode),
        })
    }
}
