//! # filescope-service
//!
//! Service layer for FileScope. Each service implements one use case of the
//! browser on top of a [`FileSystem`](filescope_core::traits::FileSystem)
//! provider: the lazily materialized directory tree, the per-directory file
//! catalog, metadata inspection, recursive search, and file mutations.
//!
//! Services follow constructor injection: the provider is handed in as an
//! `Arc<dyn FileSystem>` at construction time.

pub mod catalog;
pub mod drive;
pub mod metadata;
pub mod ops;
pub mod search;
pub mod tree;

#[cfg(test)]
pub(crate) mod testing;

pub use catalog::FileCatalog;
pub use drive::DriveService;
pub use metadata::MetadataInspector;
pub use ops::FileOps;
pub use search::{CriteriaMatcher, SearchEngine, SearchHandle, SearchWalk};
pub use tree::{ExpandReport, LazyTree, PathResolver};
