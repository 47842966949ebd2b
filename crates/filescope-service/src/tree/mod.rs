//! Lazily materialized directory tree and node path resolution.

pub mod lazy;
pub mod resolver;

pub use lazy::{ExpandReport, LazyTree};
pub use resolver::PathResolver;
