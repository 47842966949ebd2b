//! Local filesystem provider.

use std::fs::{self, Metadata};
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use tracing::debug;

use filescope_core::error::AppError;
use filescope_core::result::AppResult;
use filescope_core::traits::filesystem::{DiskSpace, FileSystem, ListedEntry, RawStat};

/// Filesystem provider backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    /// Create a new local provider.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFileSystem {
    fn provider_type(&self) -> &str {
        "local"
    }

    fn read_dir(&self, path: &Path) -> AppResult<Vec<AppResult<ListedEntry>>> {
        let dir = fs::read_dir(path)
            .map_err(|e| AppError::from_io(e, format!("Failed to list {}", path.display())))?;

        let entries = dir
            .map(|entry| {
                let entry = entry.map_err(|e| {
                    AppError::from_io(e, format!("Failed to read entry in {}", path.display()))
                })?;
                let entry_path = entry.path();
                let file_type = entry.file_type().map_err(|e| {
                    AppError::from_io(e, format!("Failed to stat {}", entry_path.display()))
                })?;

                let is_symlink = file_type.is_symlink();
                // Symlinks report the kind of their target; dangling ones are neither.
                let (is_dir, is_file) = if is_symlink {
                    fs::metadata(&entry_path)
                        .map(|m| (m.is_dir(), m.is_file()))
                        .unwrap_or((false, false))
                } else {
                    (file_type.is_dir(), file_type.is_file())
                };

                Ok(ListedEntry {
                    name: entry.file_name().to_string_lossy().into_owned(),
                    is_dir,
                    is_file,
                    is_symlink,
                })
            })
            .collect::<Vec<_>>();

        debug!(path = %path.display(), entries = entries.len(), "Listed directory");
        Ok(entries)
    }

    fn stat(&self, path: &Path) -> AppResult<RawStat> {
        let meta = fs::metadata(path)
            .map_err(|e| AppError::from_io(e, format!("Failed to stat {}", path.display())))?;

        let modified_at = meta
            .modified()
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(|_| DateTime::<Utc>::from(SystemTime::UNIX_EPOCH));

        Ok(RawStat {
            size_bytes: meta.len(),
            created_at: created_at(&meta).unwrap_or(modified_at),
            modified_at,
            mode: mode_bits(&meta),
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.try_exists().unwrap_or(false)
    }

    fn remove_file(&self, path: &Path) -> AppResult<()> {
        fs::remove_file(path)
            .map_err(|e| AppError::from_io(e, format!("Failed to delete {}", path.display())))
    }

    fn rename(&self, from: &Path, to: &Path) -> AppResult<()> {
        fs::rename(from, to).map_err(|e| {
            AppError::from_io(
                e,
                format!("Failed to rename {} -> {}", from.display(), to.display()),
            )
        })
    }

    fn capacity(&self, root: &Path) -> AppResult<DiskSpace> {
        let context = || format!("Failed to query capacity of {}", root.display());
        Ok(DiskSpace {
            total_bytes: fs2::total_space(root).map_err(|e| AppError::from_io(e, context()))?,
            free_bytes: fs2::free_space(root).map_err(|e| AppError::from_io(e, context()))?,
            available_bytes: fs2::available_space(root)
                .map_err(|e| AppError::from_io(e, context()))?,
        })
    }
}

/// Birth time where supported, else the inode change time on Unix.
fn created_at(meta: &Metadata) -> Option<DateTime<Utc>> {
    if let Ok(created) = meta.created() {
        return Some(DateTime::<Utc>::from(created));
    }
    change_time(meta)
}

#[cfg(unix)]
fn change_time(meta: &Metadata) -> Option<DateTime<Utc>> {
    use std::os::unix::fs::MetadataExt;
    DateTime::from_timestamp(meta.ctime(), meta.ctime_nsec() as u32)
}

#[cfg(not(unix))]
fn change_time(_meta: &Metadata) -> Option<DateTime<Utc>> {
    None
}

#[cfg(unix)]
fn mode_bits(meta: &Metadata) -> u32 {
    use std::os::unix::fs::MetadataExt;
    meta.mode()
}

/// Synthesize POSIX type bits where the platform has none.
#[cfg(not(unix))]
fn mode_bits(meta: &Metadata) -> u32 {
    let file_type = meta.file_type();
    let type_bits = if file_type.is_symlink() {
        0o120000
    } else if file_type.is_dir() {
        0o040000
    } else if file_type.is_file() {
        0o100000
    } else {
        0
    };
    let perm_bits = if meta.permissions().readonly() { 0o444 } else { 0o644 };
    type_bits | perm_bits
}
