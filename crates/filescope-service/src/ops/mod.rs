//! Single-step file mutations.

pub mod service;

pub use service::FileOps;
