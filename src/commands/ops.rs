//! File mutation commands.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;

use crate::output;
use filescope_core::error::AppError;
use filescope_core::traits::FileSystem;
use filescope_service::FileOps;

/// Arguments for `rm`
#[derive(Debug, Args)]
pub struct RmArgs {
    /// File to delete
    pub file: PathBuf,
    /// Skip confirmation
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for `mv`
#[derive(Debug, Args)]
pub struct MvArgs {
    /// Current path
    pub old: PathBuf,
    /// New path
    pub new: PathBuf,
    /// Overwrite an existing target without asking
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for `chext`
#[derive(Debug, Args)]
pub struct ChextArgs {
    /// File to change
    pub file: PathBuf,
    /// New extension, with or without the leading dot; empty removes it
    pub ext: String,
    /// Overwrite an existing target without asking
    #[arg(short, long)]
    pub yes: bool,
}

/// Execute `rm <file>`
pub async fn rm(args: &RmArgs, fs: Arc<dyn FileSystem>) -> Result<(), AppError> {
    let prompt = format!("Delete {}?", args.file.display());
    if !super::confirm(&prompt, args.yes)? {
        println!("Cancelled.");
        return Ok(());
    }

    FileOps::new(fs).delete(&args.file)?;
    output::print_success(&format!("Deleted {}", args.file.display()));
    Ok(())
}

/// Execute `mv <old> <new>`
pub async fn mv(args: &MvArgs, fs: Arc<dyn FileSystem>) -> Result<(), AppError> {
    if !confirm_overwrite(fs.as_ref(), &args.new, args.yes)? {
        println!("Cancelled.");
        return Ok(());
    }

    FileOps::new(fs).rename(&args.old, &args.new)?;
    output::print_success(&format!(
        "Renamed {} -> {}",
        args.old.display(),
        args.new.display()
    ));
    Ok(())
}

/// Execute `chext <file> <ext>`
pub async fn chext(args: &ChextArgs, fs: Arc<dyn FileSystem>) -> Result<(), AppError> {
    let new = FileOps::with_extension(&args.file, &args.ext);
    if new == args.file {
        output::print_warning("Extension unchanged");
        return Ok(());
    }
    if !confirm_overwrite(fs.as_ref(), &new, args.yes)? {
        println!("Cancelled.");
        return Ok(());
    }

    FileOps::new(fs).change_extension(&args.file, &new)?;
    output::print_success(&format!("Renamed to {}", new.display()));
    Ok(())
}

/// Renames replace silently, so ask first when the target is taken.
fn confirm_overwrite(
    fs: &dyn FileSystem,
    target: &std::path::Path,
    assume_yes: bool,
) -> Result<bool, AppError> {
    if !fs.exists(target) {
        return Ok(true);
    }
    super::confirm(
        &format!("{} already exists. Overwrite?", target.display()),
        assume_yes,
    )
}
