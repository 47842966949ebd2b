//! Directory tree node entities.

pub mod model;

pub use model::TreeNode;
