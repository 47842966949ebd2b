//! Search service: synchronous walks and background workers.

use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::Stream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use filescope_core::config::search::SearchConfig;
use filescope_core::error::{AppError, ErrorKind};
use filescope_core::result::AppResult;
use filescope_core::traits::FileSystem;
use filescope_entity::outcome::{Outcome, Skipped};
use filescope_entity::search::SearchCriteria;

use super::matcher::CriteriaMatcher;
use super::walk::SearchWalk;

/// Recursive multi-criteria file search.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    /// Filesystem provider.
    fs: Arc<dyn FileSystem>,
    /// Search settings.
    config: SearchConfig,
}

impl SearchEngine {
    /// Creates a new search engine.
    pub fn new(fs: Arc<dyn FileSystem>, config: SearchConfig) -> Self {
        Self { fs, config }
    }

    /// Walk the subtree under `root`, lazily yielding matches and skips.
    pub fn search(&self, root: impl Into<PathBuf>, criteria: &SearchCriteria) -> SearchWalk {
        let root = root.into();
        debug!(root = %root.display(), ?criteria, "Starting search");
        SearchWalk::new(
            Arc::clone(&self.fs),
            CriteriaMatcher::compile(criteria),
            root,
        )
    }

    /// Test a single file with basename `name` against `criteria`.
    pub fn matches(&self, path: &Path, name: &str, criteria: &SearchCriteria) -> Outcome<bool> {
        match CriteriaMatcher::compile(criteria).matches(self.fs.as_ref(), path, name) {
            Ok(matched) => Outcome::Loaded(matched),
            Err(e) => Outcome::Skipped(Skipped::new(path, &e)),
        }
    }

    /// Run the search on a blocking worker and stream matches back.
    ///
    /// Must be called from within a Tokio runtime. Dropping the returned
    /// handle stops the worker at its next send.
    pub fn spawn(&self, root: impl Into<PathBuf>, criteria: &SearchCriteria) -> SearchHandle {
        let root = root.into();
        let walk = self.search(root.clone(), criteria);
        let (tx, rx) = mpsc::channel(self.config.channel_capacity.max(1));

        let task = tokio::task::spawn_blocking(move || {
            let mut sent = 0usize;
            for outcome in walk {
                match outcome {
                    Outcome::Loaded(path) => {
                        if tx.blocking_send(path).is_err() {
                            debug!(root = %root.display(), "Search receiver dropped, stopping");
                            break;
                        }
                        sent += 1;
                    }
                    Outcome::Skipped(skip) => {
                        debug!(path = %skip.path.display(), reason = %skip.reason, "Skipped during search");
                    }
                }
            }
            info!(root = %root.display(), matches = sent, "Background search finished");
            sent
        });

        SearchHandle { rx, task }
    }
}

/// Receiving end of a background search started by [`SearchEngine::spawn`].
#[derive(Debug)]
pub struct SearchHandle {
    rx: mpsc::Receiver<PathBuf>,
    task: JoinHandle<usize>,
}

impl SearchHandle {
    /// Next match, or `None` once the walk is exhausted.
    pub async fn next(&mut self) -> Option<PathBuf> {
        self.rx.recv().await
    }

    /// Stop receiving and wait for the worker.
    ///
    /// Returns how many matches the worker delivered.
    pub async fn finish(self) -> AppResult<usize> {
        let Self { rx, task } = self;
        drop(rx);
        task.await
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Search worker failed", e))
    }
}

impl Stream for SearchHandle {
    type Item = PathBuf;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}
