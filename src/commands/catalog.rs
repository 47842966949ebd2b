//! File listing and metadata commands.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use filescope_core::error::AppError;
use filescope_core::traits::FileSystem;
use filescope_core::types::format_size;
use filescope_entity::file::extension_of;
use filescope_service::{FileCatalog, MetadataInspector};

/// Arguments for `ls`
#[derive(Debug, Args)]
pub struct LsArgs {
    /// Directory to list
    pub dir: PathBuf,
    /// Keep only names ending with this suffix
    #[arg(short, long)]
    pub ext: Option<String>,
}

/// Arguments for `info`
#[derive(Debug, Args)]
pub struct InfoArgs {
    /// File to inspect
    pub file: PathBuf,
}

/// Arguments for `summary`
#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// Directory to summarize
    pub dir: PathBuf,
}

/// File display row
#[derive(Debug, Serialize, Tabled)]
struct FileRow {
    /// File name
    name: String,
    /// Extension
    extension: String,
}

impl FileRow {
    fn new(name: String) -> Self {
        let extension = extension_of(&name).unwrap_or_default().to_string();
        Self { name, extension }
    }
}

/// Execute `ls <dir>`
pub async fn ls(args: &LsArgs, fs: Arc<dyn FileSystem>, format: OutputFormat) -> Result<(), AppError> {
    let catalog = FileCatalog::new(fs);

    if let Some(ext) = &args.ext {
        let names = catalog.filter_by_extension(&args.dir, ext)?;
        let rows: Vec<FileRow> = names.into_iter().map(FileRow::new).collect();
        output::print_list(&rows, format);
        return Ok(());
    }

    let listing = catalog.list_files(&args.dir)?;
    match format {
        OutputFormat::Table => {
            let extensions: Vec<&str> = listing.extensions.iter().map(String::as_str).collect();
            let rows: Vec<FileRow> = listing.names.into_iter().map(FileRow::new).collect();
            output::print_list(&rows, format);
            if !extensions.is_empty() {
                output::print_kv("Extensions", &extensions.join(", "));
            }
        }
        OutputFormat::Json => output::print_json(&listing),
    }
    if listing.skipped > 0 {
        output::print_warning(&format!("{} unreadable entries skipped", listing.skipped));
    }
    Ok(())
}

/// Execute `info <file>`
pub async fn info(args: &InfoArgs, fs: Arc<dyn FileSystem>, format: OutputFormat) -> Result<(), AppError> {
    let entry = MetadataInspector::new(fs).inspect(&args.file)?;
    match format {
        OutputFormat::Table => {
            output::print_kv("Name", &entry.name);
            output::print_kv(
                "Size",
                &format!("{} ({} bytes)", format_size(entry.size_bytes), entry.size_bytes),
            );
            output::print_kv("Created", &entry.created_at.to_rfc3339());
            output::print_kv("Modified", &entry.modified_at.to_rfc3339());
            output::print_kv("Kind", &entry.kind.labels());
        }
        OutputFormat::Json => output::print_json(&entry),
    }
    Ok(())
}

/// Execute `summary <dir>`
pub async fn summary(
    args: &SummaryArgs,
    fs: Arc<dyn FileSystem>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let summary = FileCatalog::new(fs).summary(&args.dir)?;
    match format {
        OutputFormat::Table => {
            output::print_kv("Directory", &args.dir.display().to_string());
            output::print_kv("Files", &summary.file_count.to_string());
            output::print_kv("Total size", &format_size(summary.total_bytes));
        }
        OutputFormat::Json => output::print_json(&summary),
    }
    Ok(())
}
