//! Filesystem provider implementations.

pub mod local;

pub use local::LocalFileSystem;
