//! # filescope-core
//!
//! Core crate for FileScope. Contains the filesystem provider trait,
//! configuration schemas, typed identifiers, size formatting, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other FileScope crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
