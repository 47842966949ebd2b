//! Per-file metadata inspection.

pub mod inspector;

pub use inspector::MetadataInspector;
