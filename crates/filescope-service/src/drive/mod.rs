//! Root enumeration and drive capacity.

pub mod service;

pub use service::DriveService;
