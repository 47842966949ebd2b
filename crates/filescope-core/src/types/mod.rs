//! Core type definitions used across the FileScope workspace.

pub mod id;
pub mod size;

pub use id::*;
pub use size::format_size;
