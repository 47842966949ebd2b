//! Conjunctive search criteria.
//!
//! Raw user input is parsed once into [`Criterion`] values. An empty field
//! is a wildcard; a field that fails to parse is kept as
//! [`Criterion::Invalid`] and makes the whole search match nothing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use filescope_core::error::AppError;

/// Date format accepted for the creation-date criterion.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One optional search condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "value")]
pub enum Criterion<T> {
    /// No constraint.
    Any,
    /// The value must equal this.
    Exact(T),
    /// The raw input could not be parsed; nothing matches.
    Invalid(String),
}

impl<T> Default for Criterion<T> {
    fn default() -> Self {
        Self::Any
    }
}

impl<T> Criterion<T> {
    /// Parse optional raw input. Blank input yields [`Criterion::Any`].
    ///
    /// Non-blank input reaches `parse` untouched; trimming is up to it.
    pub fn parse<E>(raw: Option<&str>, parse: impl FnOnce(&str) -> Result<T, E>) -> Self {
        match raw.filter(|s| !s.trim().is_empty()) {
            None => Self::Any,
            Some(s) => match parse(s) {
                Ok(value) => Self::Exact(value),
                Err(_) => Self::Invalid(s.to_string()),
            },
        }
    }

    /// Whether this criterion is unconstrained.
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Whether this criterion failed to parse.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// The expected value, if one was given.
    pub fn exact(&self) -> Option<&T> {
        match self {
            Self::Exact(value) => Some(value),
            _ => None,
        }
    }
}

/// All conditions a file must satisfy to be reported by a search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Glob on the file's basename (`*`, `?`, `[...]`).
    pub name_pattern: Criterion<String>,
    /// Exact size in bytes.
    pub exact_size: Criterion<u64>,
    /// Calendar date (local time) of the file's creation.
    pub created_on: Criterion<NaiveDate>,
}

impl SearchCriteria {
    /// Criteria that match every file.
    pub fn any() -> Self {
        Self::default()
    }

    /// Parse raw user input. `None` or blank strings are wildcards.
    ///
    /// Size and date are trimmed; the name pattern is kept verbatim since
    /// spaces are legal in file names.
    pub fn parse(name: Option<&str>, size: Option<&str>, created_on: Option<&str>) -> Self {
        Self {
            name_pattern: Criterion::parse(name, |s| Ok::<_, ()>(s.to_string())),
            exact_size: Criterion::parse(size, |s| s.trim().parse::<u64>()),
            created_on: Criterion::parse(created_on, |s| {
                NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            }),
        }
    }

    /// Require the basename to match `pattern`.
    pub fn with_name(mut self, pattern: impl Into<String>) -> Self {
        self.name_pattern = Criterion::Exact(pattern.into());
        self
    }

    /// Require an exact size.
    pub fn with_size(mut self, bytes: u64) -> Self {
        self.exact_size = Criterion::Exact(bytes);
        self
    }

    /// Require a creation date.
    pub fn with_created_on(mut self, date: NaiveDate) -> Self {
        self.created_on = Criterion::Exact(date);
        self
    }

    /// Whether any condition needs file metadata (size or date).
    pub fn needs_stat(&self) -> bool {
        !self.exact_size.is_any() || !self.created_on.is_any()
    }

    /// Report the first unparsable size or date.
    ///
    /// Searching never raises this; it lets a front end warn the user that
    /// the search will come back empty. Name patterns are only checked when
    /// compiled for matching.
    pub fn validate(&self) -> Result<(), AppError> {
        if let Criterion::Invalid(raw) = &self.exact_size {
            return Err(AppError::invalid_criteria(format!(
                "Size must be a whole number of bytes, got '{raw}'"
            )));
        }
        if let Criterion::Invalid(raw) = &self.created_on {
            return Err(AppError::invalid_criteria(format!(
                "Date must be YYYY-MM-DD, got '{raw}'"
            )));
        }
        Ok(())
    }
}
