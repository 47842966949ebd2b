//! Evaluate [`SearchCriteria`] against a single file.

use std::path::Path;

use chrono::{Local, NaiveDate};
use globset::{GlobBuilder, GlobMatcher};
use tracing::debug;

use filescope_core::result::AppResult;
use filescope_core::traits::FileSystem;
use filescope_entity::search::{Criterion, SearchCriteria};

/// Name condition after glob compilation.
#[derive(Debug, Clone)]
enum NameRule {
    Any,
    Glob(GlobMatcher),
    Reject,
}

/// Compiled form of [`SearchCriteria`].
///
/// Conditions are checked cheapest first: the basename glob needs no I/O,
/// size and creation date share a single stat that is skipped when neither
/// is constrained.
#[derive(Debug, Clone)]
pub struct CriteriaMatcher {
    name: NameRule,
    size: Criterion<u64>,
    created_on: Criterion<NaiveDate>,
    needs_stat: bool,
}

impl CriteriaMatcher {
    /// Compile `criteria`. A glob that does not compile matches nothing.
    ///
    /// Only `*`, `?` and `[...]` are special in name patterns; braces and
    /// an unclosed `[` match themselves.
    pub fn compile(criteria: &SearchCriteria) -> Self {
        let name = match &criteria.name_pattern {
            Criterion::Any => NameRule::Any,
            Criterion::Invalid(_) => NameRule::Reject,
            Criterion::Exact(pattern) => match GlobBuilder::new(&escape_literals(pattern))
                .literal_separator(false)
                .backslash_escape(false)
                .case_insensitive(cfg!(windows))
                .build()
            {
                Ok(glob) => NameRule::Glob(glob.compile_matcher()),
                Err(e) => {
                    debug!(pattern = %pattern, error = %e, "Name pattern does not compile");
                    NameRule::Reject
                }
            },
        };

        Self {
            name,
            size: criteria.exact_size.clone(),
            created_on: criteria.created_on.clone(),
            needs_stat: criteria.needs_stat(),
        }
    }

    /// Whether no file can ever match.
    pub fn is_unsatisfiable(&self) -> bool {
        matches!(self.name, NameRule::Reject) || self.size.is_invalid() || self.created_on.is_invalid()
    }

    /// Whether the basename alone passes the name condition.
    pub fn matches_name(&self, name: &str) -> bool {
        match &self.name {
            NameRule::Any => true,
            NameRule::Glob(glob) => glob.is_match(name),
            NameRule::Reject => false,
        }
    }

    /// Evaluate every condition for the file at `path` with basename `name`.
    ///
    /// Fails only when the file must be stat'ed and that fails.
    pub fn matches(&self, fs: &dyn FileSystem, path: &Path, name: &str) -> AppResult<bool> {
        if self.is_unsatisfiable() || !self.matches_name(name) {
            return Ok(false);
        }
        if !self.needs_stat {
            return Ok(true);
        }

        let stat = fs.stat(path)?;
        if let Some(expected) = self.size.exact() {
            if stat.size_bytes != *expected {
                return Ok(false);
            }
        }
        if let Some(expected) = self.created_on.exact() {
            let created_on = stat.created_at.with_timezone(&Local).date_naive();
            if created_on != *expected {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Rewrite `pattern` so that `globset` reads braces and unclosed classes
/// literally.
fn escape_literals(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len());
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            c @ ('{' | '}') => {
                out.push('[');
                out.push(c);
                out.push(']');
                i += 1;
            }
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    out.extend(&chars[i..=end]);
                    i = end + 1;
                }
                None => {
                    out.push_str("[[]");
                    i += 1;
                }
            },
            c => {
                out.push(c);
                i += 1;
            }
        }
    }
    out
}

/// Index of the `]` closing the class opened at `start`. A `]` right after
/// the opening `[` (or `[!`) belongs to the class.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start + 1;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    chars[j..].iter().position(|&c| c == ']').map(|p| j + p)
}
