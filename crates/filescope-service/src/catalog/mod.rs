//! Per-directory file listings.

pub mod service;

pub use service::FileCatalog;
