//! Unified application error types for FileScope.
//!
//! Every crate maps its failures into [`AppError`] so that filesystem
//! errors, tree inconsistencies and configuration problems all travel
//! through the `?` operator with a single type.

use std::fmt;
use std::io;

use thiserror::Error;

/// Top-level error kind categorization used across the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The path does not exist (or vanished between listing and use).
    NotFound,
    /// The operating system refused access to the path.
    AccessDenied,
    /// A tree node id does not refer to a live node.
    BrokenReference,
    /// A search criterion could not be parsed.
    InvalidCriteria,
    /// Any other operating-system I/O failure.
    Io,
    /// A configuration error occurred.
    Configuration,
    /// An internal error occurred (worker panics, closed channels).
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::AccessDenied => write!(f, "ACCESS_DENIED"),
            Self::BrokenReference => write!(f, "BROKEN_REFERENCE"),
            Self::InvalidCriteria => write!(f, "INVALID_CRITERIA"),
            Self::Io => write!(f, "IO_FAILURE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

impl From<io::ErrorKind> for ErrorKind {
    fn from(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::AccessDenied,
            _ => Self::Io,
        }
    }
}

/// The unified application error used throughout FileScope.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Wrap an I/O error, classifying it by its [`io::ErrorKind`].
    ///
    /// `context` describes the attempted operation, e.g. `"Failed to delete /tmp/a"`.
    pub fn from_io(err: io::Error, context: impl Into<String>) -> Self {
        let kind = ErrorKind::from(err.kind());
        let context = context.into();
        let message = match kind {
            ErrorKind::NotFound => format!("{context}: file not found"),
            ErrorKind::AccessDenied => format!("{context}: permission denied"),
            _ => format!("{context}: {err}"),
        };
        Self::with_source(kind, message, err)
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create an access-denied error.
    pub fn access_denied(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AccessDenied, message)
    }

    /// Create a broken-reference error.
    pub fn broken_reference(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BrokenReference, message)
    }

    /// Create an invalid-criteria error.
    pub fn invalid_criteria(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidCriteria, message)
    }

    /// Create a generic I/O failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Whether this error is of the given kind.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        Self::from_io(err, "I/O error")
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Internal,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
