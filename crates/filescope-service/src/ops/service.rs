//! Delete, rename and extension change.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use filescope_core::result::AppResult;
use filescope_core::traits::FileSystem;

/// Performs one filesystem mutation per call.
///
/// Every failure is reported as `AccessDenied`, `NotFound` or `Io`; nothing
/// is retried and there is no overwrite protection on rename.
#[derive(Debug, Clone)]
pub struct FileOps {
    /// Filesystem provider.
    fs: Arc<dyn FileSystem>,
}

impl FileOps {
    /// Creates a new file operations service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Delete the file at `path`.
    pub fn delete(&self, path: &Path) -> AppResult<()> {
        self.fs.remove_file(path).inspect_err(|e| {
            warn!(path = %path.display(), error = %e, "Delete failed");
        })?;
        info!(path = %path.display(), "File deleted");
        Ok(())
    }

    /// Move `old` to `new`, replacing `new` if the platform allows it.
    pub fn rename(&self, old: &Path, new: &Path) -> AppResult<()> {
        self.fs.rename(old, new).inspect_err(|e| {
            warn!(from = %old.display(), to = %new.display(), error = %e, "Rename failed");
        })?;
        info!(from = %old.display(), to = %new.display(), "File renamed");
        Ok(())
    }

    /// Change a file's extension. Only the name changes, never the content.
    pub fn change_extension(&self, old: &Path, new: &Path) -> AppResult<()> {
        self.rename(old, new)
    }

    /// `path` with its extension replaced by `ext`.
    ///
    /// A leading dot on `ext` is ignored; an empty `ext` drops the extension.
    pub fn with_extension(path: &Path, ext: &str) -> PathBuf {
        path.with_extension(ext.trim_start_matches('.'))
    }
}
