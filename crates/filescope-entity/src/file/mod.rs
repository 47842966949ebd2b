//! File domain entities.

pub mod kind;
pub mod model;

pub use kind::{FileKind, FileKindSet};
pub use model::{FileEntry, FileListing, FolderSummary, extension_of};
