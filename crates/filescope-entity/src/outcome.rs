//! Per-entry results for traversals that skip failures instead of aborting.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use filescope_core::error::{AppError, ErrorKind};

/// Why an entry was left out of a listing or search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skipped {
    /// The path that could not be read.
    pub path: PathBuf,
    /// Error category.
    pub kind: ErrorKind,
    /// Human-readable cause.
    pub reason: String,
}

impl Skipped {
    /// Record `err` against `path`.
    pub fn new(path: impl Into<PathBuf>, err: &AppError) -> Self {
        Self {
            path: path.into(),
            kind: err.kind,
            reason: err.message.clone(),
        }
    }
}

/// Either a loaded value or the reason it was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome<T> {
    /// The entry was read successfully.
    Loaded(T),
    /// The entry was skipped.
    Skipped(Skipped),
}

impl<T> Outcome<T> {
    /// Return the loaded value, discarding skip reasons.
    pub fn loaded(self) -> Option<T> {
        match self {
            Self::Loaded(value) => Some(value),
            Self::Skipped(_) => None,
        }
    }

    /// Return the skip reason, if any.
    pub fn skipped(&self) -> Option<&Skipped> {
        match self {
            Self::Loaded(_) => None,
            Self::Skipped(skip) => Some(skip),
        }
    }
}
