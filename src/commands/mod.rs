//! CLI command definitions and dispatch.

pub mod browse;
pub mod catalog;
pub mod config;
pub mod ops;
pub mod search;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use filescope_core::config::AppConfig;
use filescope_core::error::AppError;
use filescope_core::traits::FileSystem;
use filescope_storage::LocalFileSystem;

/// FileScope: browse directories, inspect files and search a subtree
#[derive(Debug, Parser)]
#[command(name = "filescope", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (optional)
    #[arg(short, long, default_value = "filescope.toml")]
    pub config: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List browsable roots
    Drives,
    /// Show capacity of the drive holding a root
    Drive(browse::DriveArgs),
    /// Print the directory tree under a root
    Tree(browse::TreeArgs),
    /// List the files of a directory
    Ls(catalog::LsArgs),
    /// Show metadata of a single file
    Info(catalog::InfoArgs),
    /// Count files of a directory and add up their sizes
    Summary(catalog::SummaryArgs),
    /// Search a subtree by name, size and creation date
    Search(search::SearchArgs),
    /// Delete a file
    Rm(ops::RmArgs),
    /// Rename or move a file
    Mv(ops::MvArgs),
    /// Change the extension of a file
    Chext(ops::ChextArgs),
    /// Show the effective configuration
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        let fs = provider();
        match &self.command {
            Commands::Drives => browse::drives(fs, self.format).await,
            Commands::Drive(args) => browse::drive(args, fs, self.format).await,
            Commands::Tree(args) => browse::tree(args, fs, config, self.format).await,
            Commands::Ls(args) => catalog::ls(args, fs, self.format).await,
            Commands::Info(args) => catalog::info(args, fs, self.format).await,
            Commands::Summary(args) => catalog::summary(args, fs, self.format).await,
            Commands::Search(args) => search::execute(args, fs, config, self.format).await,
            Commands::Rm(args) => ops::rm(args, fs).await,
            Commands::Mv(args) => ops::mv(args, fs).await,
            Commands::Chext(args) => ops::chext(args, fs).await,
            Commands::Config => config::execute(config, &self.config, self.format).await,
        }
    }
}

/// Helper: the filesystem provider every command runs against
fn provider() -> Arc<dyn FileSystem> {
    Arc::new(LocalFileSystem::new())
}

/// Helper: ask before a destructive step unless `assume_yes` is set
pub fn confirm(prompt: &str, assume_yes: bool) -> Result<bool, AppError> {
    if assume_yes {
        return Ok(true);
    }
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))
}
