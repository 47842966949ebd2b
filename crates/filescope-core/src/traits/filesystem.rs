//! Filesystem provider trait consumed by the browsing and search services.

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::result::AppResult;

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListedEntry {
    /// Entry name (not a full path).
    pub name: String,
    /// Whether the entry is a directory, following symlinks.
    pub is_dir: bool,
    /// Whether the entry is a regular file, following symlinks.
    pub is_file: bool,
    /// Whether the entry itself is a symbolic link.
    pub is_symlink: bool,
}

/// Stat-like record for a single path.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RawStat {
    /// Size in bytes.
    pub size_bytes: u64,
    /// Creation time (birth time where the platform reports one).
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub modified_at: DateTime<Utc>,
    /// Raw POSIX-style mode bits (file type and permissions).
    pub mode: u32,
}

/// Capacity figures for the device holding a root path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DiskSpace {
    /// Total capacity in bytes.
    pub total_bytes: u64,
    /// Free bytes on the device, including blocks reserved for the superuser.
    pub free_bytes: u64,
    /// Bytes available to the calling user.
    pub available_bytes: u64,
}

/// Trait for the filesystem collaborator.
///
/// Every call acquires and releases its own handles. Failures are mapped to
/// [`crate::ErrorKind::NotFound`], [`crate::ErrorKind::AccessDenied`] or
/// [`crate::ErrorKind::Io`].
pub trait FileSystem: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local").
    fn provider_type(&self) -> &str;

    /// List a directory.
    ///
    /// The outer error reports that the directory itself could not be opened;
    /// inner errors belong to individual entries and may be skipped.
    fn read_dir(&self, path: &Path) -> AppResult<Vec<AppResult<ListedEntry>>>;

    /// Stat a path, following symlinks.
    fn stat(&self, path: &Path) -> AppResult<RawStat>;

    /// Check whether a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> AppResult<()>;

    /// Rename (move) a path.
    fn rename(&self, from: &Path, to: &Path) -> AppResult<()>;

    /// Query capacity of the device holding `root`.
    fn capacity(&self, root: &Path) -> AppResult<DiskSpace>;
}
