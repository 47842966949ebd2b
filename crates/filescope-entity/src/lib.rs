//! # filescope-entity
//!
//! Domain value objects for FileScope. Tree nodes, file entries, drive
//! capacity, search criteria, and per-entry skip outcomes. All entities
//! derive `Debug`, `Clone`, `Serialize` and `Deserialize`.

pub mod drive;
pub mod file;
pub mod node;
pub mod outcome;
pub mod search;

pub use drive::DriveInfo;
pub use file::{FileEntry, FileKind, FileKindSet, FileListing, FolderSummary};
pub use node::TreeNode;
pub use outcome::{Outcome, Skipped};
pub use search::{Criterion, SearchCriteria};
