//! Recursive multi-criteria file search.

pub mod engine;
pub mod matcher;
pub mod walk;

pub use engine::{SearchEngine, SearchHandle};
pub use matcher::CriteriaMatcher;
pub use walk::SearchWalk;
