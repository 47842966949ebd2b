//! Portable file-type classification from raw mode bits.
//!
//! Each kind is tested independently as `mode & mask != 0`, so one mode can
//! carry several kinds at once: a regular file (`0o100644`) also tests
//! positive for the socket and symlink masks, which share the `0o100000`
//! bit. That overlap is kept as-is.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single file-type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    /// Regular file.
    Regular,
    /// Directory.
    Directory,
    /// Character device.
    CharDevice,
    /// Block device.
    BlockDevice,
    /// Named pipe.
    Fifo,
    /// Unix domain socket.
    Socket,
    /// Symbolic link.
    Symlink,
    /// No mask matched.
    Unknown,
}

impl FileKind {
    /// Kinds in test order, paired with their mode masks.
    const MASKS: [(FileKind, u32); 7] = [
        (FileKind::Regular, 0o100000),
        (FileKind::Directory, 0o040000),
        (FileKind::CharDevice, 0o020000),
        (FileKind::BlockDevice, 0o060000),
        (FileKind::Fifo, 0o010000),
        (FileKind::Socket, 0o140000),
        (FileKind::Symlink, 0o120000),
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Regular => "regular file",
            Self::Directory => "directory",
            Self::CharDevice => "character device",
            Self::BlockDevice => "block device",
            Self::Fifo => "FIFO",
            Self::Socket => "socket",
            Self::Symlink => "symbolic link",
            Self::Unknown => "unknown",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Self::Regular => 1,
            Self::Directory => 1 << 1,
            Self::CharDevice => 1 << 2,
            Self::BlockDevice => 1 << 3,
            Self::Fifo => 1 << 4,
            Self::Socket => 1 << 5,
            Self::Symlink => 1 << 6,
            Self::Unknown => 0,
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The set of kinds a mode tests positive for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "Vec<FileKind>", from = "Vec<FileKind>")]
pub struct FileKindSet(u8);

impl FileKindSet {
    /// Classify raw mode bits.
    pub fn from_mode(mode: u32) -> Self {
        let bits = FileKind::MASKS
            .iter()
            .filter(|(_, mask)| mode & mask != 0)
            .fold(0u8, |acc, (kind, _)| acc | kind.bit());
        Self(bits)
    }

    /// Whether `kind` is present. `Unknown` is present only in the empty set.
    pub fn contains(self, kind: FileKind) -> bool {
        match kind {
            FileKind::Unknown => self.0 == 0,
            other => self.0 & other.bit() != 0,
        }
    }

    /// Kinds in test order; `[Unknown]` when nothing matched.
    pub fn kinds(self) -> Vec<FileKind> {
        if self.0 == 0 {
            return vec![FileKind::Unknown];
        }
        FileKind::MASKS
            .iter()
            .map(|(kind, _)| *kind)
            .filter(|kind| self.contains(*kind))
            .collect()
    }

    /// Comma-separated labels, e.g. `"regular file, socket, symbolic link"`.
    pub fn labels(self) -> String {
        self.kinds()
            .iter()
            .map(|k| k.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for FileKindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.labels())
    }
}

impl From<FileKindSet> for Vec<FileKind> {
    fn from(set: FileKindSet) -> Self {
        set.kinds()
    }
}

impl From<Vec<FileKind>> for FileKindSet {
    fn from(kinds: Vec<FileKind>) -> Self {
        Self(kinds.into_iter().fold(0u8, |acc, k| acc | k.bit()))
    }
}
