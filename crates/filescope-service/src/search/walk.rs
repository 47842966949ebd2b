//! Lazy depth-first walk over a subtree, yielding matching files.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use filescope_core::traits::FileSystem;
use filescope_entity::outcome::{Outcome, Skipped};

use super::matcher::CriteriaMatcher;

/// Work queued from the most recently listed directory.
#[derive(Debug)]
enum Pending {
    Candidate { path: PathBuf, name: String },
    Skip(Skipped),
}

/// Iterator over the files of a subtree that satisfy a [`CriteriaMatcher`].
///
/// Directories are listed one at a time as the iterator is advanced; only a
/// stack of directory paths waiting to be listed is kept between calls.
/// Within a directory, files are checked in name order before any
/// subdirectory is entered. Symlinked directories are not followed, so a
/// file is never yielded twice.
///
/// Listing and stat failures come out as [`Outcome::Skipped`] and the walk
/// carries on.
#[derive(Debug)]
pub struct SearchWalk {
    fs: Arc<dyn FileSystem>,
    matcher: CriteriaMatcher,
    dirs: Vec<PathBuf>,
    pending: VecDeque<Pending>,
}

impl SearchWalk {
    /// Start a walk at `root`. Nothing is read until the first `next()`.
    pub fn new(fs: Arc<dyn FileSystem>, matcher: CriteriaMatcher, root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let dirs = if matcher.is_unsatisfiable() {
            debug!(root = %root.display(), "Search criteria can never match");
            Vec::new()
        } else {
            vec![root]
        };
        Self {
            fs,
            matcher,
            dirs,
            pending: VecDeque::new(),
        }
    }

    /// Only the matching paths, dropping skip reasons.
    pub fn matches(self) -> impl Iterator<Item = PathBuf> {
        self.filter_map(Outcome::loaded)
    }

    fn visit(&mut self, dir: &Path) {
        let entries = match self.fs.read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "Skipping unreadable directory");
                self.pending.push_back(Pending::Skip(Skipped::new(dir, &e)));
                return;
            }
        };

        let mut files = Vec::new();
        let mut subdirs = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) if entry.is_dir && !entry.is_symlink => subdirs.push(entry.name),
                Ok(entry) if entry.is_file => files.push(entry.name),
                Ok(_) => {}
                Err(e) => self.pending.push_back(Pending::Skip(Skipped::new(dir, &e))),
            }
        }
        files.sort();
        subdirs.sort();

        self.pending
            .extend(files.into_iter().map(|name| Pending::Candidate {
                path: dir.join(&name),
                name,
            }));
        // Reversed so the first name is popped first.
        self.dirs
            .extend(subdirs.into_iter().rev().map(|name| dir.join(name)));
    }
}

impl Iterator for SearchWalk {
    type Item = Outcome<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.pending.pop_front() {
                Some(Pending::Skip(skip)) => return Some(Outcome::Skipped(skip)),
                Some(Pending::Candidate { path, name }) => {
                    match self.matcher.matches(self.fs.as_ref(), &path, &name) {
                        Ok(true) => return Some(Outcome::Loaded(path)),
                        Ok(false) => continue,
                        Err(e) => return Some(Outcome::Skipped(Skipped::new(path, &e))),
                    }
                }
                None => {}
            }

            let dir = self.dirs.pop()?;
            self.visit(&dir);
        }
    }
}
