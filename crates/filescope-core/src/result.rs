//! Convenience result type alias for FileScope.

use crate::error::AppError;

/// A specialized `Result` type for FileScope operations.
pub type AppResult<T> = Result<T, AppError>;
