//! Core traits defined in `filescope-core` and implemented by other crates.

pub mod filesystem;

pub use filesystem::{DiskSpace, FileSystem, ListedEntry, RawStat};
