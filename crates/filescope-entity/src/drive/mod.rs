//! Drive (filesystem root) entities.

pub mod model;

pub use model::DriveInfo;
