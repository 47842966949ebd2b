//! File catalog: the non-directory entries of one directory.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use filescope_core::result::AppResult;
use filescope_core::traits::FileSystem;
use filescope_entity::file::{FileListing, FolderSummary};

/// Lists files of a single directory and derives their extensions.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    /// Filesystem provider.
    fs: Arc<dyn FileSystem>,
}

impl FileCatalog {
    /// Creates a new file catalog.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// List the non-directory entries of `dir`, sorted by name.
    ///
    /// A directory that cannot be opened fails with `AccessDenied`,
    /// `NotFound` or `Io`; callers show an empty catalog in that case.
    /// Individual unreadable entries are counted in [`FileListing::skipped`].
    pub fn list_files(&self, dir: &Path) -> AppResult<FileListing> {
        let entries = self.fs.read_dir(dir)?;

        let mut names = Vec::new();
        let mut skipped = 0;
        for entry in entries {
            match entry {
                Ok(entry) if !entry.is_dir => names.push(entry.name),
                Ok(_) => {}
                Err(e) => {
                    debug!(dir = %dir.display(), error = %e, "Skipping unreadable entry");
                    skipped += 1;
                }
            }
        }

        Ok(FileListing::from_names(names, skipped))
    }

    /// Re-list `dir` keeping names that end with `ext`.
    ///
    /// This is a plain suffix test: `"txt"` keeps `report.txt` and also
    /// `report_txt`. An empty `ext` keeps every file.
    pub fn filter_by_extension(&self, dir: &Path, ext: &str) -> AppResult<Vec<String>> {
        let listing = self.list_files(dir)?;
        Ok(listing
            .names
            .into_iter()
            .filter(|name| name.ends_with(ext))
            .collect())
    }

    /// Count the files of `dir` and add up their sizes.
    ///
    /// Files that vanish between listing and stat are left out.
    pub fn summary(&self, dir: &Path) -> AppResult<FolderSummary> {
        let listing = self.list_files(dir)?;

        let mut summary = FolderSummary::default();
        for name in &listing.names {
            let path = dir.join(name);
            match self.fs.stat(&path) {
                Ok(stat) => {
                    summary.file_count += 1;
                    summary.total_bytes += stat.size_bytes;
                }
                Err(e) => debug!(path = %path.display(), error = %e, "Skipping file in summary"),
            }
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryFileSystem;
    use filescope_core::error::ErrorKind;

    fn catalog() -> FileCatalog {
        let fs = MemoryFileSystem::new();
        fs.dir("/d")
            .file("/d/report.txt", 100)
            .file("/d/report_txt", 20)
            .file("/d/photo.png", 3)
            .file("/d/Makefile", 1)
            .dir("/d/sub.txt")
            .broken("/d/lost")
            .denied("/locked");
        FileCatalog::new(Arc::new(fs))
    }

    #[test]
    fn test_list_files_excludes_directories() {
        let listing = catalog().list_files(Path::new("/d")).unwrap();
        assert_eq!(
            listing.names,
            vec!["Makefile", "photo.png", "report.txt", "report_txt"]
        );
        assert_eq!(listing.skipped, 1);

        let exts: Vec<&str> = listing.extensions.iter().map(String::as_str).collect();
        assert_eq!(exts, vec!["png", "txt"]);
    }

    #[test]
    fn test_filter_is_plain_suffix_match() {
        let names = catalog()
            .filter_by_extension(Path::new("/d"), "txt")
            .unwrap();
        assert_eq!(names, vec!["report.txt", "report_txt"]);
    }

    #[test]
    fn test_filter_with_empty_extension_keeps_all() {
        let names = catalog().filter_by_extension(Path::new("/d"), "").unwrap();
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_denied_directory_reports_access_denied() {
        let err = catalog().list_files(Path::new("/locked")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::AccessDenied);
    }

    #[test]
    fn test_summary_adds_sizes() {
        let summary = catalog().summary(Path::new("/d")).unwrap();
        assert_eq!(summary.file_count, 4);
        assert_eq!(summary.total_bytes, 124);
    }
}
