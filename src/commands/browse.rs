//! Drive and directory tree commands.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use filescope_core::config::AppConfig;
use filescope_core::error::AppError;
use filescope_core::traits::FileSystem;
use filescope_core::types::{NodeId, format_size};
use filescope_entity::DriveInfo;
use filescope_service::{DriveService, LazyTree};

/// Arguments for `drive`
#[derive(Debug, Args)]
pub struct DriveArgs {
    /// Root path, e.g. `/` or `C:\`
    pub root: PathBuf,
}

/// Arguments for `tree`
#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Directory to browse from
    pub root: PathBuf,
    /// Levels to expand below the root
    #[arg(short, long, default_value_t = 1)]
    pub depth: usize,
}

/// Drive display row
#[derive(Debug, Serialize, Tabled)]
struct DriveRow {
    /// Root path
    root: String,
    /// Total capacity
    total: String,
    /// Used space
    used: String,
    /// Space available to the caller
    free: String,
}

impl From<&DriveInfo> for DriveRow {
    fn from(info: &DriveInfo) -> Self {
        Self {
            root: info.root_path.display().to_string(),
            total: format_size(info.total_bytes),
            used: format_size(info.used_bytes),
            free: format_size(info.free_bytes),
        }
    }
}

/// A materialized subtree, as printed
#[derive(Debug, Serialize)]
struct TreeView {
    label: String,
    path: PathBuf,
    children_loaded: bool,
    children: Vec<TreeView>,
}

/// Execute `drives`
pub async fn drives(fs: Arc<dyn FileSystem>, format: OutputFormat) -> Result<(), AppError> {
    let service = DriveService::new(fs);
    let mut rows = Vec::new();
    for root in service.list_roots() {
        match service.drive_info(&root) {
            Ok(info) => rows.push(DriveRow::from(&info)),
            Err(e) => output::print_warning(&format!("{}: {}", root.display(), e.message)),
        }
    }
    output::print_list(&rows, format);
    Ok(())
}

/// Execute `drive <root>`
pub async fn drive(
    args: &DriveArgs,
    fs: Arc<dyn FileSystem>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let info = DriveService::new(fs).drive_info(&args.root)?;
    match format {
        OutputFormat::Table => {
            println!("{}", info.root_path.display());
            println!("  {}", info.summary());
        }
        OutputFormat::Json => output::print_json(&info),
    }
    Ok(())
}

/// Execute `tree <root>`
pub async fn tree(
    args: &TreeArgs,
    fs: Arc<dyn FileSystem>,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    if args.depth > config.browser.max_prefetch_depth {
        output::print_warning(&format!(
            "Depth capped at {} (browser.max_prefetch_depth)",
            config.browser.max_prefetch_depth
        ));
    }

    let mut tree = LazyTree::new(fs, config.browser.clone());
    let root = tree.set_root(&args.root);
    let expanded = tree.expand_to_depth(root, args.depth)?;
    tracing::debug!(expanded, nodes = tree.len(), "Tree materialized");

    let view = build_view(&tree, root)?;
    match format {
        OutputFormat::Table => print_view(&view, 0),
        OutputFormat::Json => output::print_json(&view),
    }
    Ok(())
}

fn build_view(tree: &LazyTree, id: NodeId) -> Result<TreeView, AppError> {
    let node = tree
        .node(id)
        .ok_or_else(|| AppError::broken_reference(format!("Node {id} is not in the tree")))?;
    let children = tree
        .children(id)?
        .iter()
        .map(|child| build_view(tree, child.id))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TreeView {
        label: node.label.clone(),
        path: tree.resolve(id)?,
        children_loaded: node.children_loaded,
        children,
    })
}

fn print_view(view: &TreeView, level: usize) {
    let marker = if view.children_loaded || level == 0 { "" } else { " …" };
    println!("{}{}/{}", "  ".repeat(level), view.label.trim_end_matches('/'), marker);
    for child in &view.children {
        print_view(child, level + 1);
    }
}
