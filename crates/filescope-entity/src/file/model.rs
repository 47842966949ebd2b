//! File entry and listing models.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::kind::FileKindSet;

/// Metadata for a single file, derived on demand from the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// File name (including extension).
    pub name: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub modified_at: DateTime<Utc>,
    /// Kind classification from the raw mode bits.
    pub kind: FileKindSet,
}

impl FileEntry {
    /// Get the extension (text after the last `.`), if non-empty.
    pub fn extension(&self) -> Option<&str> {
        extension_of(&self.name)
    }
}

/// Return the substring after the last `.` of `name`, if non-empty.
///
/// A leading dot counts: `.bashrc` has extension `bashrc`.
pub fn extension_of(name: &str) -> Option<&str> {
    name.rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
}

/// The files of one directory plus the distinct extensions present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileListing {
    /// File names, sorted.
    pub names: Vec<String>,
    /// Distinct non-empty extensions.
    pub extensions: BTreeSet<String>,
    /// Entries that could not be read and were left out.
    pub skipped: usize,
}

impl FileListing {
    /// Build a listing from file names.
    pub fn from_names(mut names: Vec<String>, skipped: usize) -> Self {
        names.sort();
        let extensions = names
            .iter()
            .filter_map(|n| extension_of(n))
            .map(str::to_string)
            .collect();
        Self {
            names,
            extensions,
            skipped,
        }
    }

    /// Whether the directory contained no files.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// File count and total size of one directory (not recursive).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderSummary {
    /// Number of files.
    pub file_count: u64,
    /// Sum of file sizes in bytes.
    pub total_bytes: u64,
}
