//! Recursive search command.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use filescope_core::config::AppConfig;
use filescope_core::error::AppError;
use filescope_core::traits::FileSystem;
use filescope_entity::{Outcome, SearchCriteria};
use filescope_service::{CriteriaMatcher, SearchEngine};

/// Arguments for `search`
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Directory to search under
    pub root: PathBuf,
    /// Basename glob, e.g. `*.txt` or `report-??.[ct]sv`
    #[arg(short, long)]
    pub name: Option<String>,
    /// Exact size in bytes
    #[arg(short, long)]
    pub size: Option<String>,
    /// Creation date, `YYYY-MM-DD`
    #[arg(long)]
    pub created: Option<String>,
    /// Run on a background worker and print matches as they arrive
    #[arg(short, long)]
    pub background: bool,
}

/// Search result row
#[derive(Debug, Serialize, Tabled)]
struct MatchRow {
    /// Matching path
    path: String,
}

/// Execute `search <root>`
pub async fn execute(
    args: &SearchArgs,
    fs: Arc<dyn FileSystem>,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let criteria = SearchCriteria::parse(
        args.name.as_deref(),
        args.size.as_deref(),
        args.created.as_deref(),
    );
    if let Err(e) = criteria.validate() {
        output::print_warning(&format!("{}; nothing can match", e.message));
    } else if CriteriaMatcher::compile(&criteria).is_unsatisfiable() {
        output::print_warning("Name pattern does not compile; nothing can match");
    }

    let engine = SearchEngine::new(fs, config.search.clone());

    if args.background {
        let mut handle = engine.spawn(&args.root, &criteria);
        let mut found = Vec::new();
        while let Some(path) = handle.next().await {
            match format {
                OutputFormat::Table => println!("{}", path.display()),
                OutputFormat::Json => found.push(path),
            }
        }
        let delivered = handle.finish().await?;
        if format == OutputFormat::Json {
            output::print_json(&found);
        }
        tracing::info!(matches = delivered, "Search complete");
        return Ok(());
    }

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for outcome in engine.search(&args.root, &criteria) {
        match outcome {
            Outcome::Loaded(path) => rows.push(MatchRow {
                path: path.display().to_string(),
            }),
            Outcome::Skipped(skip) => {
                tracing::debug!(path = %skip.path.display(), kind = %skip.kind, "Skipped");
                skipped += 1;
            }
        }
    }

    output::print_list(&rows, format);
    if skipped > 0 {
        output::print_warning(&format!("{skipped} paths could not be read"));
    }
    Ok(())
}
