//! In-memory filesystem for unit tests that need failures a real temp
//! directory cannot produce reliably (permission denials when running as
//! root, unreadable directory entries).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use filescope_core::error::AppError;
use filescope_core::result::AppResult;
use filescope_core::traits::filesystem::{DiskSpace, FileSystem, ListedEntry, RawStat};

#[derive(Debug, Clone)]
enum MemNode {
    Dir,
    /// A directory whose listing is refused.
    Denied,
    File {
        size: u64,
        created_at: DateTime<Utc>,
        locked: bool,
    },
    /// Shows up in its parent's listing as an unreadable entry.
    Broken,
}

#[derive(Debug, Default)]
pub(crate) struct MemoryFileSystem {
    nodes: Mutex<BTreeMap<PathBuf, MemNode>>,
}

impl MemoryFileSystem {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn insert(&self, path: impl AsRef<Path>, node: MemNode) -> &Self {
        self.nodes
            .lock()
            .unwrap()
            .insert(path.as_ref().to_path_buf(), node);
        self
    }

    pub(crate) fn dir(&self, path: impl AsRef<Path>) -> &Self {
        self.insert(path, MemNode::Dir)
    }

    pub(crate) fn denied(&self, path: impl AsRef<Path>) -> &Self {
        self.insert(path, MemNode::Denied)
    }

    pub(crate) fn broken(&self, path: impl AsRef<Path>) -> &Self {
        self.insert(path, MemNode::Broken)
    }

    pub(crate) fn file(&self, path: impl AsRef<Path>, size: u64) -> &Self {
        self.file_created(path, size, Utc::now())
    }

    pub(crate) fn file_created(
        &self,
        path: impl AsRef<Path>,
        size: u64,
        created_at: DateTime<Utc>,
    ) -> &Self {
        self.insert(
            path,
            MemNode::File {
                size,
                created_at,
                locked: false,
            },
        )
    }

    pub(crate) fn locked_file(&self, path: impl AsRef<Path>, size: u64) -> &Self {
        self.insert(
            path,
            MemNode::File {
                size,
                created_at: Utc::now(),
                locked: true,
            },
        )
    }

    fn get(&self, path: &Path) -> Option<MemNode> {
        self.nodes.lock().unwrap().get(path).cloned()
    }
}

fn not_found(path: &Path) -> AppError {
    AppError::not_found(format!("{}: file not found", path.display()))
}

fn denied(path: &Path) -> AppError {
    AppError::access_denied(format!("{}: permission denied", path.display()))
}

impl FileSystem for MemoryFileSystem {
    fn provider_type(&self) -> &str {
        "memory"
    }

    fn read_dir(&self, path: &Path) -> AppResult<Vec<AppResult<ListedEntry>>> {
        match self.get(path) {
            None | Some(MemNode::Broken) => return Err(not_found(path)),
            Some(MemNode::Denied) => return Err(denied(path)),
            Some(MemNode::File { .. }) => {
                return Err(AppError::io(format!("{}: not a directory", path.display())));
            }
            Some(MemNode::Dir) => {}
        }

        let nodes = self.nodes.lock().unwrap();
        Ok(nodes
            .iter()
            .filter(|(p, _)| p.parent() == Some(path))
            .map(|(p, node)| {
                let name = p
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                match node {
                    MemNode::Broken => Err(AppError::io(format!(
                        "{}: input/output error",
                        p.display()
                    ))),
                    MemNode::Dir | MemNode::Denied => Ok(ListedEntry {
                        name,
                        is_dir: true,
                        is_file: false,
                        is_symlink: false,
                    }),
                    MemNode::File { .. } => Ok(ListedEntry {
                        name,
                        is_dir: false,
                        is_file: true,
                        is_symlink: false,
                    }),
                }
            })
            .collect())
    }

    fn stat(&self, path: &Path) -> AppResult<RawStat> {
        match self.get(path) {
            Some(MemNode::File {
                size, created_at, ..
            }) => Ok(RawStat {
                size_bytes: size,
                created_at,
                modified_at: created_at,
                mode: 0o100644,
            }),
            Some(MemNode::Dir) | Some(MemNode::Denied) => Ok(RawStat {
                size_bytes: 0,
                created_at: Utc::now(),
                modified_at: Utc::now(),
                mode: 0o040755,
            }),
            None | Some(MemNode::Broken) => Err(not_found(path)),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        self.get(path).is_some()
    }

    fn remove_file(&self, path: &Path) -> AppResult<()> {
        let mut nodes = self.nodes.lock().unwrap();
        match nodes.get(path) {
            None => Err(not_found(path)),
            Some(MemNode::File { locked: true, .. }) => Err(denied(path)),
            Some(MemNode::File { .. }) => {
                nodes.remove(path);
                Ok(())
            }
            Some(_) => Err(AppError::io(format!("{}: is a directory", path.display()))),
        }
    }

    fn rename(&self, from: &Path, to: &Path) -> AppResult<()> {
        let mut nodes = self.nodes.lock().unwrap();
        match nodes.get(from) {
            None => Err(not_found(from)),
            Some(MemNode::File { locked: true, .. }) => Err(denied(from)),
            Some(_) => {
                let node = nodes.remove(from).unwrap();
                nodes.insert(to.to_path_buf(), node);
                Ok(())
            }
        }
    }

    fn capacity(&self, root: &Path) -> AppResult<DiskSpace> {
        if !self.exists(root) {
            return Err(not_found(root));
        }
        Ok(DiskSpace {
            total_bytes: 1000,
            free_bytes: 400,
            available_bytes: 300,
        })
    }
}
