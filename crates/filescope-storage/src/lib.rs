//! # filescope-storage
//!
//! Filesystem provider implementations for FileScope.

pub mod providers;

pub use providers::LocalFileSystem;
